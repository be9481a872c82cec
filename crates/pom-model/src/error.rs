//! Errors produced while reading and decoding pom.xml documents.

use thiserror::Error;

/// Failure to produce a [`Project`](crate::Project).
///
/// There are exactly two kinds: the input could not be read, or its content
/// is not a well-formed POM document. Decoding never yields a partial model.
#[derive(Error, Debug)]
pub enum PomError {
    #[error("Failed to parse pom.xml: {message}")]
    ParseError { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PomError>;

impl PomError {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }

    /// Returns true if the input could not be opened or read.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Returns true if the input was read but is not a well-formed POM.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::ParseError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PomError::parse("unexpected end of file");
        assert_eq!(
            err.to_string(),
            "Failed to parse pom.xml: unexpected end of file"
        );
        assert!(err.is_malformed());
        assert!(!err.is_io());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::from(std::io::ErrorKind::NotFound);
        let err: PomError = io_err.into();
        assert!(matches!(err, PomError::Io(_)));
        assert!(err.is_io());
        assert!(!err.is_malformed());
        assert!(err.to_string().starts_with("I/O error:"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PomError>();
    }
}
