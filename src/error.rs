//! Error types for the hillvig library.

use thiserror::Error;

/// Errors produced while building or running the cipher pipeline.
///
/// All key validation failures surface at construction time. Once a cipher
/// exists, encryption is total and decryption can only fail on a malformed
/// block length.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Key matrix is empty, not square, or not of order 2 or 3.
    #[error("key matrix must be a 2x2 or 3x3 square matrix, got {rows} rows with lengths {row_lengths:?}")]
    InvalidKeyShape {
        rows: usize,
        row_lengths: Vec<usize>,
    },

    /// Determinant mod 26 shares a factor with 26.
    #[error("key matrix is not invertible modulo 26 (determinant mod 26 = {determinant})")]
    SingularKey { determinant: i64 },

    /// Substitution key has no alphabetic characters.
    #[error("substitution key must contain at least one letter A-Z")]
    EmptyKey,

    /// No modular inverse exists for a value that passed the coprimality check.
    #[error("no modular inverse of {value} modulo {modulus}")]
    NoModularInverse { value: i64, modulus: i64 },

    /// Textual key matrix is not a nested list of integers.
    #[error("invalid key matrix format, expected a nested integer list such as [[3, 3], [2, 5]]: {0}")]
    MalformedKey(String),

    /// Ciphertext letter count is not a multiple of the matrix order.
    #[error("ciphertext has {length} letters, which is not a multiple of the block size {order}")]
    MalformedBlockLength { length: usize, order: usize },

    /// Pipeline configuration could not be read or parsed.
    #[error("invalid pipeline configuration: {0}")]
    Config(String),
}

/// Errors produced by the caption label stores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptionError {
    /// Reading or writing the backing file failed.
    #[error("label store I/O error: {0}")]
    Io(String),

    /// The backing file does not hold a valid label document.
    #[error("label store format error: {0}")]
    Format(String),
}

impl From<std::io::Error> for CaptionError {
    fn from(err: std::io::Error) -> Self {
        CaptionError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CaptionError {
    fn from(err: serde_json::Error) -> Self {
        CaptionError::Format(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_key_shape() {
        let err = CipherError::InvalidKeyShape {
            rows: 2,
            row_lengths: vec![2, 3],
        };
        assert_eq!(
            format!("{}", err),
            "key matrix must be a 2x2 or 3x3 square matrix, got 2 rows with lengths [2, 3]"
        );
    }

    #[test]
    fn test_display_singular_key() {
        let err = CipherError::SingularKey { determinant: 0 };
        assert_eq!(
            format!("{}", err),
            "key matrix is not invertible modulo 26 (determinant mod 26 = 0)"
        );
    }

    #[test]
    fn test_display_empty_key() {
        assert_eq!(
            format!("{}", CipherError::EmptyKey),
            "substitution key must contain at least one letter A-Z"
        );
    }

    #[test]
    fn test_display_malformed_block_length() {
        let err = CipherError::MalformedBlockLength {
            length: 5,
            order: 2,
        };
        assert_eq!(
            format!("{}", err),
            "ciphertext has 5 letters, which is not a multiple of the block size 2"
        );
    }

    #[test]
    fn test_display_malformed_key_names_format() {
        let err = CipherError::MalformedKey("expected value".to_string());
        assert!(format!("{}", err).contains("[[3, 3], [2, 5]]"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CipherError::EmptyKey, CipherError::EmptyKey);
        assert_ne!(
            CipherError::EmptyKey,
            CipherError::SingularKey { determinant: 13 }
        );
    }

    #[test]
    fn test_caption_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(CaptionError::from(io), CaptionError::Io("gone".to_string()));
    }
}
