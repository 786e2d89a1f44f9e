//! Error types for text codecs.

use thiserror::Error;

/// Errors from parsing or serializing document text.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("JSON codec error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "yaml")]
    #[error("YAML codec error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// No codec is registered for the file extension
    #[error("Unknown document format '{extension}'")]
    UnknownFormat { extension: String },
}

impl CodecError {
    /// Check if this error came from malformed or unrepresentable text
    pub fn is_syntax_error(&self) -> bool {
        match self {
            CodecError::Json(_) => true,
            #[cfg(feature = "yaml")]
            CodecError::Yaml(_) => true,
            CodecError::UnknownFormat { .. } => false,
        }
    }
}

// Conversion from CodecError to the main Error type
impl From<CodecError> for crate::Error {
    fn from(err: CodecError) -> Self {
        crate::Error::Codec(err)
    }
}
