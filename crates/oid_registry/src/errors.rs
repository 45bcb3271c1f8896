//! Error types for the OID registry
//!
//! Registration and lookups never fail. These errors only come from
//! decoding data sets and configuration supplied as text.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OidRegistryError {
    #[error("Data set has an empty set name")]
    EmptySetName,

    #[error("Unknown builtin data set: {name}")]
    UnknownBuiltin { name: String },

    #[error("Data set decoding error: {0}")]
    DataSetDecode(#[from] serde_json::Error),

    #[error("Configuration decoding error: {0}")]
    ConfigDecode(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, OidRegistryError>;
