//! hillvig: two-stage classical cipher pipeline over the A-Z alphabet.
//!
//! Text is first encrypted with a Hill block cipher (invertible 2x2 or 3x3
//! matrix modulo 26) and the result is then encrypted with a Vigenère
//! polyalphabetic substitution. Decryption runs the stages in reverse.
//!
//! These are teaching-grade classical ciphers: they hide text from casual
//! inspection (for example a caption stored in image metadata) and offer no
//! protection against a known-plaintext attack.
//!
//! # Architecture
//!
//! ```text
//! utils::alphabet / utils::modular   (A-Z <-> 0..25, arithmetic mod 26)
//!     ↓
//! KeyMatrix   (validated 2x2/3x3 key, integer adjugate, modular inverse)
//!     ↓
//! MatrixCipher (Hill blocks)   PolySubstitutionCipher (Vigenère stream)
//!     ↘                       ↙
//!          CipherPipeline
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a caption:
//!
//! ```
//! use hillvig::CipherPipeline;
//!
//! let pipeline = CipherPipeline::from_literal("[[3, 3], [2, 5]]", "SECRET").unwrap();
//!
//! let ciphertext = pipeline.encrypt("Hi, 2024!");
//! assert_eq!(ciphertext, "LG");
//!
//! let plaintext = pipeline.decrypt(&ciphertext).unwrap();
//! assert_eq!(plaintext, "HI");
//! ```
//!
//! Round trips return the normalized, padded plaintext:
//!
//! ```
//! use hillvig::CipherPipeline;
//!
//! let pipeline = CipherPipeline::from_literal(
//!     "[[6, 24, 1], [13, 16, 10], [20, 17, 15]]",
//!     "SECRET",
//! )
//! .unwrap();
//!
//! let decrypted = pipeline.decrypt(&pipeline.encrypt("Hello, World")).unwrap();
//! assert_eq!(decrypted, "HELLOWORLDXX");
//! assert!(pipeline.verify("Hello, World", &decrypted));
//! ```

#![deny(clippy::all)]

pub mod caption;
pub mod config;
pub mod error;
pub mod utils;

mod key_matrix;
mod matrix_cipher;
mod pipeline;
mod poly_substitution;

pub use config::PipelineConfig;
pub use error::{CaptionError, CipherError};
pub use key_matrix::KeyMatrix;
pub use matrix_cipher::{MatrixCipher, TrailingBlock};
pub use pipeline::CipherPipeline;
pub use poly_substitution::PolySubstitutionCipher;
