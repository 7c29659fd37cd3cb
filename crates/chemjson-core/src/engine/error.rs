use thiserror::Error;

/// Errors raised at the chemistry-engine boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The format name is not recognized by the backend.
    #[error("Format '{format}' is not supported by the chemistry backend")]
    UnsupportedFormat { format: String },

    /// The backend cannot perform the requested operation.
    #[error("Operation '{operation}' is not supported by the chemistry backend")]
    UnsupportedOperation { operation: &'static str },

    /// The structure handed to the backend is internally inconsistent.
    #[error("Invalid structure: {0}")]
    InvalidStructure(String),

    /// The backend failed for a reason of its own.
    #[error("Chemistry backend error: {0}")]
    Backend(String),
}
