//! Errors raised while building or loading a template catalog

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse catalog TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A descriptor violates one of the catalog invariants
    #[error("invalid template '{template}': {reason}")]
    Invalid { template: String, reason: String },
}
