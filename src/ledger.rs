//! File-backed record of implemented recommendations.
//!
//! The engine never marks recommendations as implemented. This ledger keeps
//! that state between runs and merges it into freshly generated
//! recommendations before they are summarized.

use crate::analyzer::cost_optimize::{Recommendation, RecommendationKind};
use crate::error::LedgerError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default ledger file name, relative to the working directory.
pub const DEFAULT_LEDGER_FILE: &str = ".cloudopt-ledger.json";

/// One implemented recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub resource_id: u64,
    pub recommendation_type: RecommendationKind,
    pub implemented_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct LedgerFile {
    #[serde(default)]
    entries: Vec<LedgerEntry>,
}

/// Implementation ledger bound to a file on disk.
#[derive(Debug)]
pub struct ImplementationLedger {
    path: PathBuf,
    entries: Vec<LedgerEntry>,
}

impl ImplementationLedger {
    /// Open a ledger, starting empty if the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        let path = path.into();
        if !path.exists() {
            log::debug!("Ledger {} not found, starting empty", path.display());
            return Ok(Self {
                path,
                entries: Vec::new(),
            });
        }

        let content = fs::read_to_string(&path).map_err(|source| LedgerError::Access {
            path: path.clone(),
            source,
        })?;
        let file: LedgerFile =
            serde_json::from_str(&content).map_err(|e| LedgerError::Corrupt {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            path,
            entries: file.entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Find the entry for a resource and recommendation kind.
    pub fn find(&self, resource_id: u64, kind: RecommendationKind) -> Option<&LedgerEntry> {
        self.entries
            .iter()
            .find(|e| e.resource_id == resource_id && e.recommendation_type == kind)
    }

    /// Record a recommendation as implemented.
    ///
    /// Returns `false` if it was already recorded; the original timestamp is kept.
    pub fn record(&mut self, recommendation: &Recommendation, at: DateTime<Utc>) -> bool {
        if self
            .find(recommendation.resource_id, recommendation.kind)
            .is_some()
        {
            return false;
        }

        self.entries.push(LedgerEntry {
            resource_id: recommendation.resource_id,
            recommendation_type: recommendation.kind,
            implemented_at: at,
        });
        true
    }

    /// Mark recommendations that appear in the ledger as implemented.
    ///
    /// Returns the number of recommendations updated.
    pub fn apply(&self, recommendations: &mut [Recommendation]) -> usize {
        let mut applied = 0;
        for rec in recommendations.iter_mut() {
            if let Some(entry) = self.find(rec.resource_id, rec.kind) {
                rec.implemented = true;
                rec.implemented_at = Some(entry.implemented_at);
                applied += 1;
            }
        }
        applied
    }

    /// Write the ledger back to its file.
    pub fn save(&self) -> Result<(), LedgerError> {
        let access = |source: std::io::Error| LedgerError::Access {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(access)?;
        }

        let file = LedgerFile {
            entries: self.entries.clone(),
        };
        let content = serde_json::to_string_pretty(&file).map_err(|e| LedgerError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        fs::write(&self.path, content).map_err(access)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::cost_optimize::RuleCode;
    use tempfile::TempDir;

    fn recommendation(resource_id: u64, kind: RecommendationKind) -> Recommendation {
        Recommendation {
            resource_id,
            resource_name: "r".to_string(),
            rule_code: RuleCode::new("COST-OPT-001"),
            kind,
            current_config: String::new(),
            suggested_config: String::new(),
            potential_saving: 10.0,
            confidence: 0.7,
            reason: String::new(),
            implemented: false,
            implemented_at: None,
        }
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let ledger = ImplementationLedger::open(dir.path().join("ledger.json")).unwrap();
        assert!(ledger.entries().is_empty());
    }

    #[test]
    fn test_record_save_and_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state").join("ledger.json");
        let at = Utc::now();

        let mut ledger = ImplementationLedger::open(&path).unwrap();
        assert!(ledger.record(&recommendation(1, RecommendationKind::Downsize), at));
        assert!(!ledger.record(&recommendation(1, RecommendationKind::Downsize), Utc::now()));
        ledger.save().unwrap();

        let reopened = ImplementationLedger::open(&path).unwrap();
        assert_eq!(reopened.entries().len(), 1);
        assert_eq!(
            reopened
                .find(1, RecommendationKind::Downsize)
                .unwrap()
                .implemented_at,
            at
        );
        assert!(reopened.find(1, RecommendationKind::Shrink).is_none());
    }

    #[test]
    fn test_apply_marks_matching_recommendations() {
        let dir = TempDir::new().unwrap();
        let mut ledger = ImplementationLedger::open(dir.path().join("ledger.json")).unwrap();
        ledger.record(&recommendation(2, RecommendationKind::Shrink), Utc::now());

        let mut recs = vec![
            recommendation(1, RecommendationKind::Downsize),
            recommendation(2, RecommendationKind::Shrink),
        ];
        assert_eq!(ledger.apply(&mut recs), 1);
        assert!(!recs[0].implemented);
        assert!(recs[1].implemented);
        assert!(recs[1].implemented_at.is_some());
    }

    #[test]
    fn test_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            ImplementationLedger::open(&path),
            Err(LedgerError::Corrupt { .. })
        ));
    }
}
