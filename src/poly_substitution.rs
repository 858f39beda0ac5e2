//! PolySubstitutionCipher: Vigenère stream substitution over A-Z.
//!
//! The i-th letter of the normalized text is shifted by the i-th key offset,
//! cycling through the key. No padding is involved, so the cipher is an exact
//! bijection on normalized text.

use log::{debug, trace};

use crate::error::CipherError;
use crate::utils::alphabet::{self, ALPHABET_LEN};

/// Vigenère cipher with cached per-position key offsets.
///
/// # Examples
///
/// ```
/// use hillvig::PolySubstitutionCipher;
///
/// let cipher = PolySubstitutionCipher::new("lemon").unwrap();
/// assert_eq!(cipher.encrypt("attack at dawn"), "LXFOPVEFRNHR");
/// assert_eq!(cipher.decrypt("LXFOPVEFRNHR"), "ATTACKATDAWN");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolySubstitutionCipher {
    offsets: Vec<u8>,
}

impl PolySubstitutionCipher {
    /// Creates a cipher from `key`, keeping only its letters.
    ///
    /// # Errors
    /// Returns [`CipherError::EmptyKey`] if `key` has no letters A-Z.
    ///
    /// ```
    /// use hillvig::{CipherError, PolySubstitutionCipher};
    ///
    /// assert_eq!(PolySubstitutionCipher::new("123"), Err(CipherError::EmptyKey));
    /// ```
    pub fn new(key: &str) -> Result<Self, CipherError> {
        let offsets = alphabet::to_numbers(key);
        if offsets.is_empty() {
            return Err(CipherError::EmptyKey);
        }
        debug!("substitution cipher ready: key length {}", offsets.len());
        Ok(PolySubstitutionCipher { offsets })
    }

    /// The normalized key.
    pub fn key(&self) -> String {
        alphabet::to_text(&self.offsets)
    }

    /// Number of letters in the normalized key (the substitution period).
    pub fn key_len(&self) -> usize {
        self.offsets.len()
    }

    /// Encrypts `text`: `c[i] = (p[i] + k[i mod len]) mod 26`.
    pub fn encrypt(&self, text: &str) -> String {
        trace!("vigenere encrypt: {} chars", text.len());
        self.shift(text, |value, offset| value + offset)
    }

    /// Decrypts `ciphertext`: `p[i] = (c[i] - k[i mod len] + 26) mod 26`.
    pub fn decrypt(&self, ciphertext: &str) -> String {
        trace!("vigenere decrypt: {} chars", ciphertext.len());
        self.shift(ciphertext, |value, offset| value + ALPHABET_LEN - offset)
    }

    fn shift(&self, text: &str, op: impl Fn(u8, u8) -> u8) -> String {
        let shifted: Vec<u8> = alphabet::to_numbers(text)
            .into_iter()
            .zip(self.offsets.iter().cycle())
            .map(|(value, &offset)| op(value, offset) % ALPHABET_LEN)
            .collect();
        alphabet::to_text(&shifted)
    }
}
