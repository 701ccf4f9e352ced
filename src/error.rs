use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for cloudopt.
#[derive(Error, Debug)]
pub enum CloudOptError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Inventory error: {0}")]
    Inventory(#[from] InventoryError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Resource not found: {id}")]
    ResourceNotFound { id: u64 },

    #[error("No recommendation for resource {id}")]
    NoRecommendation { id: u64 },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    ParsingFailed(String),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Errors raised while loading a resource inventory.
#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Failed to read inventory {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse inventory {path}: {reason}")]
    ParseFailed { path: PathBuf, reason: String },

    #[error("Resource {id} has invalid {field}: {reason}")]
    InvalidResource {
        id: u64,
        field: &'static str,
        reason: String,
    },

    #[error("Duplicate resource id {0}")]
    DuplicateId(u64),
}

/// Errors raised by the implementation ledger.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Failed to access ledger {path}: {source}")]
    Access {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Ledger {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, CloudOptError>;
