//! Error types for the question conversion pipeline.
//!
//! Every variant is fatal: the binary reports it and exits. Irregular rows
//! (short rows, unmatched answer pairs, empty fields) never produce an error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting a question table into game data.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input file could not be read (missing, unreadable, is a directory).
    #[error("Failed to read input file '{}': {source}", .path.display())]
    ReadInput {
        /// Path that was requested
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The delimited text could not be parsed (invalid UTF-8, reader failure).
    #[error("Failed to parse delimited text at line {line}: {source}")]
    Parse {
        /// 1-based input line where the failure was detected (0 if unknown)
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// A field breaks the double-quote rules of the delimited format.
    #[error("Malformed quoting at line {line}, column {column}: {source}")]
    MalformedQuote {
        /// 1-based input line where the bad byte sits
        line: u64,
        /// 1-based byte column within that line
        column: u64,
        #[source]
        source: QuoteError,
    },

    /// The game data could not be encoded as JSON.
    #[error("Failed to encode game data as JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output file could not be written.
    #[error("Failed to write output file '{}': {source}", .path.display())]
    WriteOutput {
        /// Path that was requested
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The ways a field can break the quoting rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// A `"` inside a field that does not start with a quote
    #[error("bare \" in non-quoted field")]
    BareQuote,
    /// Text after the closing quote of a quoted field
    #[error("extraneous or missing \" in quoted field")]
    ExtraneousQuote,
    /// A quoted field still open at the end of the input
    #[error("quoted field is never closed")]
    Unterminated,
}

impl ConvertError {
    /// Build a parse error, pulling the line number out of the csv position when available.
    pub fn parse(source: csv::Error) -> Self {
        let line = source.position().map(|p| p.line()).unwrap_or(0);
        ConvertError::Parse { line, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_read_input_display() {
        let err = ConvertError::ReadInput {
            path: PathBuf::from("questions.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read input file 'questions.csv': file not found"
        );
    }

    #[test]
    fn test_write_output_display() {
        let err = ConvertError::WriteOutput {
            path: PathBuf::from("/readonly/gamedata.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
        };
        assert!(err.to_string().contains("/readonly/gamedata.json"));
        assert!(err.to_string().contains("access denied"));
    }

    #[test]
    fn test_io_error_source() {
        let err = ConvertError::ReadInput {
            path: PathBuf::from("missing.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn test_malformed_quote_display() {
        let err = ConvertError::MalformedQuote {
            line: 3,
            column: 5,
            source: QuoteError::BareQuote,
        };
        assert_eq!(
            err.to_string(),
            "Malformed quoting at line 3, column 5: bare \" in non-quoted field"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<u8>("not json").unwrap_err();
        let err: ConvertError = json_err.into();
        assert!(matches!(err, ConvertError::Serialize(_)));
        assert!(err.to_string().starts_with("Failed to encode game data as JSON"));
    }
}
