//! MatrixCipher: Hill block cipher over the A-Z alphabet.
//!
//! Text is normalized, padded with filler to a whole number of blocks, and
//! each block (a column vector of alphabet positions) is multiplied by the key
//! matrix modulo 26. Decryption multiplies by the precomputed inverse.

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::error::CipherError;
use crate::key_matrix::KeyMatrix;
use crate::utils::alphabet;

/// What decryption does with a trailing block shorter than the matrix order.
///
/// Ciphertext produced by [`MatrixCipher::encrypt`] never has one, so a short
/// block means the ciphertext was truncated or altered in transit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingBlock {
    /// Fail with [`CipherError::MalformedBlockLength`].
    #[default]
    Reject,
    /// Fill the short block with `A` (value 0) and decrypt it as a full block.
    /// Output length is rounded up to a multiple of the order.
    ZeroPad,
}

/// Hill cipher with a validated key matrix and its modular inverse.
///
/// Key material is fixed at construction; encryption and decryption take
/// `&self` and never mutate the cipher.
///
/// # Examples
///
/// ```
/// use hillvig::MatrixCipher;
///
/// let cipher = MatrixCipher::from_rows(&[[3, 3], [2, 5]]).unwrap();
/// assert_eq!(cipher.encrypt("help"), "HIAT");
/// assert_eq!(cipher.decrypt("HIAT").unwrap(), "HELP");
/// ```
#[derive(Debug, Clone)]
pub struct MatrixCipher {
    key: KeyMatrix,
    inverse: KeyMatrix,
    trailing_block: TrailingBlock,
}

impl MatrixCipher {
    /// Creates a cipher from a key matrix, deriving its inverse modulo 26.
    ///
    /// # Errors
    /// Returns [`CipherError::SingularKey`] if the key is not invertible
    /// modulo 26.
    pub fn new(key: KeyMatrix) -> Result<Self, CipherError> {
        let inverse = key.inverse().inspect_err(|e| warn!("rejected key matrix: {}", e))?;
        debug!("matrix cipher ready: order {}", key.order());
        Ok(MatrixCipher {
            key,
            inverse,
            trailing_block: TrailingBlock::default(),
        })
    }

    /// Creates a cipher directly from matrix rows.
    ///
    /// # Errors
    /// - [`CipherError::InvalidKeyShape`] if the rows are not a 2x2 or 3x3
    ///   square.
    /// - [`CipherError::SingularKey`] if the key is not invertible modulo 26.
    ///
    /// ```
    /// use hillvig::{CipherError, MatrixCipher};
    ///
    /// let result = MatrixCipher::from_rows(&[[1, 1], [1, 1]]);
    /// assert_eq!(result.unwrap_err(), CipherError::SingularKey { determinant: 0 });
    /// ```
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, CipherError> {
        Self::new(KeyMatrix::from_rows(rows)?)
    }

    /// Sets the policy for short trailing blocks on decryption.
    pub fn with_trailing_block(mut self, policy: TrailingBlock) -> Self {
        self.trailing_block = policy;
        self
    }

    /// Block size in letters.
    pub fn order(&self) -> usize {
        self.key.order()
    }

    /// The (reduced) key matrix.
    pub fn key(&self) -> &KeyMatrix {
        &self.key
    }

    /// The inverse key matrix used for decryption.
    pub fn inverse(&self) -> &KeyMatrix {
        &self.inverse
    }

    pub fn trailing_block(&self) -> TrailingBlock {
        self.trailing_block
    }

    /// Returns the text `decrypt(encrypt(text))` yields: uppercase letters
    /// only, right-padded with `X` to a multiple of the order.
    pub fn canonical_form(&self, text: &str) -> String {
        alphabet::pad_with_filler(text, self.order())
    }

    /// Encrypts `text`. Non-letters are dropped and the last block is padded
    /// with `X`.
    pub fn encrypt(&self, text: &str) -> String {
        let values = alphabet::to_numbers(&self.canonical_form(text));
        trace!("hill encrypt: {} letters", values.len());
        alphabet::to_text(&Self::transform(&self.key, &values))
    }

    /// Decrypts `ciphertext`. Non-letters are dropped; no padding is removed.
    ///
    /// # Errors
    /// Returns [`CipherError::MalformedBlockLength`] if the letter count is not
    /// a multiple of the order and the policy is [`TrailingBlock::Reject`].
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        let mut values = alphabet::to_numbers(ciphertext);
        let n = self.order();
        let remainder = values.len() % n;
        if remainder != 0 {
            match self.trailing_block {
                TrailingBlock::Reject => {
                    return Err(CipherError::MalformedBlockLength {
                        length: values.len(),
                        order: n,
                    });
                }
                TrailingBlock::ZeroPad => {
                    debug!("zero-padding trailing block of {} letters", remainder);
                    values.resize(values.len() + n - remainder, 0);
                }
            }
        }
        trace!("hill decrypt: {} letters", values.len());
        Ok(alphabet::to_text(&Self::transform(&self.inverse, &values)))
    }

    /// Runs every full block of `values` through `matrix`.
    fn transform(matrix: &KeyMatrix, values: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(values.len());
        for block in values.chunks_exact(matrix.order()) {
            matrix.apply(block, &mut out);
        }
        out
    }
}
