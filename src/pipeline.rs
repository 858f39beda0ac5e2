//! CipherPipeline: Hill block stage followed by Vigenère stream stage.
//!
//! Encryption runs the matrix cipher first and feeds its output to the
//! substitution cipher; decryption undoes the stages in reverse order.

use log::debug;

use crate::error::CipherError;
use crate::key_matrix::KeyMatrix;
use crate::matrix_cipher::{MatrixCipher, TrailingBlock};
use crate::poly_substitution::PolySubstitutionCipher;
use crate::utils::alphabet;

/// Two-stage classical cipher over the A-Z alphabet.
///
/// # Architecture
///
/// ```text
/// plaintext ─ normalize + pad ─> MatrixCipher ─> PolySubstitutionCipher ─> ciphertext
/// ciphertext ─> PolySubstitutionCipher⁻¹ ─> MatrixCipher⁻¹ ─> canonical plaintext
/// ```
///
/// Both keys are validated on construction, so a pipeline either exists in a
/// fully usable state or not at all.
///
/// # Examples
///
/// ```
/// use hillvig::CipherPipeline;
///
/// let pipeline = CipherPipeline::from_literal("[[3, 3], [2, 5]]", "SECRET").unwrap();
/// let ciphertext = pipeline.encrypt("HELLO WORLD");
/// assert_eq!(ciphertext, "ZMQQIBHNSC");
/// assert_eq!(pipeline.decrypt(&ciphertext).unwrap(), "HELLOWORLD");
/// ```
#[derive(Debug, Clone)]
pub struct CipherPipeline {
    matrix: MatrixCipher,
    substitution: PolySubstitutionCipher,
}

impl CipherPipeline {
    /// Builds a pipeline from a key matrix and a substitution key.
    ///
    /// # Errors
    /// Propagates [`CipherError::SingularKey`] from the matrix stage and
    /// [`CipherError::EmptyKey`] from the substitution stage unchanged.
    pub fn new(matrix_key: KeyMatrix, substitution_key: &str) -> Result<Self, CipherError> {
        let matrix = MatrixCipher::new(matrix_key)?;
        let substitution = PolySubstitutionCipher::new(substitution_key)?;
        debug!(
            "cipher pipeline ready: block size {}, substitution period {}",
            matrix.order(),
            substitution.key_len()
        );
        Ok(CipherPipeline {
            matrix,
            substitution,
        })
    }

    /// Builds a pipeline from the textual matrix form, e.g. `[[3, 3], [2, 5]]`.
    ///
    /// # Errors
    /// - [`CipherError::MalformedKey`] if `matrix_literal` is not a nested
    ///   integer list.
    /// - Any error of [`new`](Self::new).
    ///
    /// ```
    /// use hillvig::{CipherError, CipherPipeline};
    ///
    /// let err = CipherPipeline::from_literal("[[3, 3], [2, 5]]", "123").unwrap_err();
    /// assert_eq!(err, CipherError::EmptyKey);
    /// ```
    pub fn from_literal(matrix_literal: &str, substitution_key: &str) -> Result<Self, CipherError> {
        Self::new(matrix_literal.parse()?, substitution_key)
    }

    /// Sets the matrix stage's policy for short trailing blocks on decryption.
    pub fn with_trailing_block(mut self, policy: TrailingBlock) -> Self {
        self.matrix = self.matrix.with_trailing_block(policy);
        self
    }

    pub fn matrix_cipher(&self) -> &MatrixCipher {
        &self.matrix
    }

    pub fn substitution_cipher(&self) -> &PolySubstitutionCipher {
        &self.substitution
    }

    /// Block size of the matrix stage.
    pub fn block_size(&self) -> usize {
        self.matrix.order()
    }

    /// Encrypts `plaintext`. Always succeeds.
    pub fn encrypt(&self, plaintext: &str) -> String {
        self.substitution.encrypt(&self.matrix.encrypt(plaintext))
    }

    /// Decrypts `ciphertext` back to the canonical form of the plaintext.
    ///
    /// # Errors
    /// Returns [`CipherError::MalformedBlockLength`] if the letter count is not
    /// a multiple of the block size and the policy is
    /// [`TrailingBlock::Reject`].
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        self.matrix.decrypt(&self.substitution.decrypt(ciphertext))
    }

    /// Normalized and padded form of `plaintext`, which is what a round trip
    /// through this pipeline returns.
    pub fn canonical_form(&self, plaintext: &str) -> String {
        self.matrix.canonical_form(plaintext)
    }

    /// Checks that `decrypted` is the round trip of `plaintext`.
    ///
    /// Compares against the exact padded form, so originals ending in `X`
    /// compare correctly.
    ///
    /// ```
    /// use hillvig::CipherPipeline;
    ///
    /// let pipeline = CipherPipeline::from_literal("[[3, 3], [2, 5]]", "KEY").unwrap();
    /// let decrypted = pipeline.decrypt(&pipeline.encrypt("a box")).unwrap();
    /// assert_eq!(decrypted, "ABOX");
    /// assert!(pipeline.verify("a box", &decrypted));
    /// ```
    pub fn verify(&self, plaintext: &str, decrypted: &str) -> bool {
        alphabet::normalize(decrypted) == self.canonical_form(plaintext)
    }
}
