//! Result and error types for coverage extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for extraction operations
pub type SummaryResult<T> = Result<T, SummaryError>;

/// Errors that can occur while loading a JaCoCo report
#[derive(Debug, Error)]
pub enum SummaryError {
    /// The report path does not reference an existing file
    #[error("JaCoCo XML file not found at {}", path.display())]
    MissingFile {
        /// Path that was requested
        path: PathBuf,
    },

    /// Reading the report failed for a reason other than absence
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The report is not well-formed XML
    #[error("Malformed coverage report: {0}")]
    MalformedDocument(#[from] roxmltree::Error),

    /// A counter carries a `missed` or `covered` value that is not a count
    #[error("Malformed coverage report: counter {kind} has invalid {attribute}=\"{value}\"")]
    InvalidCounter {
        /// Counter type attribute
        kind: String,
        /// Name of the offending attribute
        attribute: &'static str,
        /// Raw attribute value
        value: String,
    },
}

impl SummaryError {
    /// Create a missing file error
    #[must_use]
    pub fn missing_file(path: impl Into<PathBuf>) -> Self {
        Self::MissingFile { path: path.into() }
    }

    /// True for errors caused by document content rather than the filesystem
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedDocument(_) | Self::InvalidCounter { .. })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_message() {
        let err = SummaryError::missing_file("target/site/jacoco/jacoco.xml");
        assert_eq!(
            err.to_string(),
            "JaCoCo XML file not found at target/site/jacoco/jacoco.xml"
        );
        assert!(!err.is_malformed());
    }

    #[test]
    fn test_malformed_from_roxmltree() {
        let xml_err = roxmltree::Document::parse("<report>").unwrap_err();
        let err: SummaryError = xml_err.into();
        assert!(err.to_string().starts_with("Malformed coverage report"));
        assert!(err.is_malformed());
    }

    #[test]
    fn test_invalid_counter_message() {
        let err = SummaryError::InvalidCounter {
            kind: "LINE".to_string(),
            attribute: "missed",
            value: "-3".to_string(),
        };
        assert!(err.to_string().contains("LINE"));
        assert!(err.to_string().contains("missed=\"-3\""));
        assert!(err.is_malformed());
    }
}
