use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Unrecoverable failure while reading or writing a document.
///
/// Recoverable problems (malformed scalars, unknown keys, indentation
/// anomalies) are not errors: they are accumulated as warnings on the
/// reader and the surrounding value is left unchanged. An `Error` means
/// the rest of the file cannot be trusted and loading should stop.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid UTF-8 sequence on line {line}")]
    InvalidUtf8 { line: usize },

    #[error("Expected a date and time instead of '{value}' on line {line}")]
    ExpectedDateTime { value: String, line: usize },

    #[error("Expected (x,y) instead of '{value}' on line {line}")]
    ExpectedVector { value: String, line: usize },

    #[error("Unrecognized value '{value}', expected a value like '{expected}' on line {line}")]
    UnrecognizedValue {
        value: String,
        expected: &'static str,
        line: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_error_messages_carry_line_numbers() {
        let err = Error::InvalidUtf8 { line: 12 };
        assert_eq!(err.to_string(), "Invalid UTF-8 sequence on line 12");

        let err = Error::ExpectedVector {
            value: "oops".into(),
            line: 3,
        };
        assert_eq!(err.to_string(), "Expected (x,y) instead of 'oops' on line 3");
    }
}
