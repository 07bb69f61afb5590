//! Error types for the hyphen-normalizer library.
//!
//! Every failure in the scan/normalize/write pipeline is fatal for the run, so
//! the taxonomy is small: enumeration, decoding, write-back, configuration and
//! generic I/O. Each variant keeps the path it concerns and the underlying
//! source error.

use std::io;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use thiserror::Error;

/// Main result type for normalizer operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;

/// Error type for all normalizer operations.
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// I/O errors not tied to a more specific stage
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The root could not be walked (missing, inaccessible, unreadable subdirectory)
    #[error("Failed to enumerate files under {}: {message}", .root.display())]
    Enumeration {
        /// Root directory being scanned
        root: PathBuf,
        /// Error description
        message: String,
        /// Underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A matched file is not valid UTF-8
    #[error("Failed to decode {} as UTF-8: {source}", .path.display())]
    Decode {
        /// File that failed to decode
        path: PathBuf,
        /// Underlying decoding error
        #[source]
        source: FromUtf8Error,
    },

    /// Writing the temporary file or replacing the original failed
    #[error("Failed to write {}: {message}", .path.display())]
    Write {
        /// File being replaced
        path: PathBuf,
        /// Error description
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Invalid configuration
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },
}

impl NormalizeError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new enumeration error wrapping an underlying failure
    pub fn enumeration<E>(root: &Path, message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Enumeration {
            root: root.to_path_buf(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new decode error for a file
    pub fn decode(path: &Path, source: FromUtf8Error) -> Self {
        Self::Decode {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a new write error for a file
    pub fn write(path: &Path, message: impl Into<String>, source: io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Path the error concerns, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Enumeration { root, .. } => Some(root.as_path()),
            Self::Decode { path, .. } | Self::Write { path, .. } => Some(path.as_path()),
            Self::Io { .. } | Self::Config { .. } => None,
        }
    }

    /// Prefix the message with additional context
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        match &mut self {
            Self::Io { message, .. }
            | Self::Enumeration { message, .. }
            | Self::Write { message, .. }
            | Self::Config { message, .. } => {
                *message = format!("{}: {message}", context.into());
            }
            Self::Decode { .. } => {}
        }
        self
    }
}

impl From<io::Error> for NormalizeError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

/// Result extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Add static context to an error result
    fn context(self, msg: &'static str) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<NormalizeError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: NormalizeError = e.into();
            err.with_context(f())
        })
    }

    fn context(self, msg: &'static str) -> Result<T> {
        self.map_err(|e| {
            let err: NormalizeError = e.into();
            err.with_context(msg)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_field_error() {
        let err = NormalizeError::config_field("Extension must not be empty", "extension");

        if let NormalizeError::Config { message, field } = err {
            assert_eq!(message, "Extension must not be empty");
            assert_eq!(field, Some("extension".to_string()));
        } else {
            panic!("Expected Config error");
        }
    }

    #[test]
    fn test_decode_error_names_path() {
        let utf8_err = String::from_utf8(vec![0x66, 0xff, 0x6f]).unwrap_err();
        let err = NormalizeError::decode(Path::new("sections/intro.tex"), utf8_err);

        let display = err.to_string();
        assert!(display.contains("sections/intro.tex"));
        assert!(display.contains("UTF-8"));
        assert_eq!(err.path(), Some(Path::new("sections/intro.tex")));
    }

    #[test]
    fn test_write_error_keeps_source_kind() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let err = NormalizeError::write(Path::new("a.tex"), "rename failed", io_err);

        if let NormalizeError::Write { source, message, .. } = &err {
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            assert_eq!(message, "rename failed");
        } else {
            panic!("Expected Write error");
        }
    }

    #[test]
    fn test_enumeration_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "No such file or directory");
        let err = NormalizeError::enumeration(Path::new("missing"), "root does not exist", io_err);

        let display = err.to_string();
        assert!(display.contains("missing"));
        assert!(display.contains("root does not exist"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err: NormalizeError = io_err.into();

        assert!(matches!(err, NormalizeError::Io { .. }));
        assert_eq!(err.path(), None);
    }

    #[test]
    fn test_result_ext_with_context() {
        let result: std::result::Result<i32, io::Error> = Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Bad input",
        ));

        let err = result
            .with_context(|| "Reading metadata".to_string())
            .unwrap_err();
        if let NormalizeError::Io { message, .. } = err {
            assert!(message.starts_with("Reading metadata: "));
        } else {
            panic!("Expected Io error");
        }
    }
}
