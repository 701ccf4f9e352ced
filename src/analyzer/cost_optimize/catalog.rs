//! Instance downsizing catalog.
//!
//! Maps known instance types to the next cheaper tier. Types missing from the
//! table get a generic placeholder instead of an error.

/// Suggested type when the current type is not in the catalog.
pub const FALLBACK_INSTANCE_TYPE: &str = "smaller-instance";

/// Known downsizing paths as `(current, suggested)` pairs.
const DOWNSIZING_TABLE: &[(&str, &str)] = &[
    ("t3.xlarge", "t3.large"),
    ("m5.xlarge", "m5.large"),
    ("m5.large", "t3.medium"),
    ("Standard_D2s_v3", "Standard_B2s"),
    ("n1-standard-2", "n1-standard-1"),
];

/// Suggest a smaller instance type for the given type label.
pub fn suggest_smaller_instance(current: Option<&str>) -> &'static str {
    current
        .and_then(|current| {
            DOWNSIZING_TABLE
                .iter()
                .find(|(from, _)| *from == current)
                .map(|(_, to)| *to)
        })
        .unwrap_or(FALLBACK_INSTANCE_TYPE)
}
