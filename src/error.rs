use thiserror::Error;

/// Main error type for the Portrait-Compositor library
#[derive(Error, Debug)]
pub enum CompositorError {
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Batch error: {0}")]
    Batch(#[from] BatchError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

/// Errors raised while turning one source image into a portrait canvas
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to decode image {path}: {reason}")]
    DecodeFailed { path: String, reason: String },

    #[error("Image has unusable dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("JPEG encoding failed for {path}: {reason}")]
    EncodingFailed { path: String, reason: String },
}

/// Errors raised by the directory-level driver
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Failed to read directory {path}: {reason}")]
    ScanFailed { path: String, reason: String },

    #[error("Conversion task for {path} did not complete: {reason}")]
    TaskFailed { path: String, reason: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using CompositorError
pub type Result<T> = std::result::Result<T, CompositorError>;

impl CompositorError {
    /// Create a generic error with a custom message
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into())
    }

    /// Check if this error might go away if the same file were converted again
    pub fn is_recoverable(&self) -> bool {
        match self {
            // IO errors might be temporary
            Self::Io(_) => true,
            // A blocking task that was cancelled or panicked says nothing about the file
            Self::Batch(BatchError::TaskFailed { .. }) => true,
            // Writing the output can fail on a full disk
            Self::Render(RenderError::EncodingFailed { .. }) => true,
            // Bad pixels stay bad
            _ => false,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Render(RenderError::DecodeFailed { path, .. }) => {
                format!("Could not read image '{}'. Please check the file is a valid JPEG.", path)
            }
            Self::Render(RenderError::InvalidDimensions { width, height }) => {
                format!("Image is {}x{} pixels and cannot be scaled.", width, height)
            }
            Self::Batch(BatchError::ScanFailed { path, .. }) => {
                format!("Could not list directory '{}'. No files were processed.", path)
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_failure_is_permanent() {
        let err: CompositorError = RenderError::DecodeFailed {
            path: "a.jpg".to_string(),
            reason: "bad marker".to_string(),
        }
        .into();

        assert!(!err.is_recoverable());
        assert!(err.user_message().contains("a.jpg"));
    }

    #[test]
    fn test_io_errors_are_recoverable() {
        let err: CompositorError =
            std::io::Error::new(std::io::ErrorKind::Interrupted, "interrupted").into();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_scan_failure_message_names_directory() {
        let err: CompositorError = BatchError::ScanFailed {
            path: "/missing".to_string(),
            reason: "No such file or directory".to_string(),
        }
        .into();

        assert_eq!(
            err.user_message(),
            "Could not list directory '/missing'. No files were processed."
        );
    }

    #[test]
    fn test_generic_falls_back_to_display() {
        let err = CompositorError::generic("something odd");
        assert_eq!(err.user_message(), "Generic error: something odd");
    }
}
