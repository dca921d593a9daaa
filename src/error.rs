use thiserror::Error;

/// Errors that can occur while parsing, validating, or serializing a
/// workflow document.
#[derive(Error, Debug, Clone)]
pub enum DocumentError {
    #[error("Failed to parse workflow document JSON: {0}")]
    JsonParseError(String),

    #[error("Node key '{key}' is used by more than one node")]
    DuplicateNodeKey { key: String },

    #[error("Duplicate connection from '{from}' port '{from_port}' to '{to}' port '{to_port}'")]
    DuplicateConnection {
        from: String,
        from_port: String,
        to: String,
        to_port: String,
    },

    #[error("Failed to serialize workflow document: {0}")]
    SerializeError(String),
}

/// Errors that can occur while loading an integration catalog.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Failed to parse integration catalog JSON: {0}")]
    JsonParseError(String),
}
