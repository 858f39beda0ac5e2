//! Pipeline configuration loaded from JSON.
//!
//! ```json
//! {
//!   "matrix_key": [[3, 3], [2, 5]],
//!   "substitution_key": "SECRET",
//!   "trailing_block": "reject"
//! }
//! ```
//!
//! `trailing_block` is optional and defaults to `"reject"`.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::CipherError;
use crate::key_matrix::KeyMatrix;
use crate::matrix_cipher::TrailingBlock;
use crate::pipeline::CipherPipeline;

/// Key material and decrypt policy for one [`CipherPipeline`].
///
/// The matrix shape is validated while deserializing; invertibility and the
/// substitution key are validated by [`build`](Self::build).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub matrix_key: KeyMatrix,
    pub substitution_key: String,
    #[serde(default)]
    pub trailing_block: TrailingBlock,
}

impl PipelineConfig {
    /// Parses a configuration document.
    ///
    /// # Errors
    /// Returns [`CipherError::Config`] if `json` is not a valid configuration,
    /// including a badly shaped `matrix_key`.
    pub fn from_json_str(json: &str) -> Result<Self, CipherError> {
        serde_json::from_str(json).map_err(|e| CipherError::Config(e.to_string()))
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    /// Returns [`CipherError::Config`] if the file cannot be read or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CipherError> {
        let path = path.as_ref();
        debug!("loading pipeline configuration from {}", path.display());
        let json = fs::read_to_string(path)
            .map_err(|e| CipherError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    /// Builds the configured pipeline.
    ///
    /// # Errors
    /// Propagates key validation errors from [`CipherPipeline::new`].
    pub fn build(&self) -> Result<CipherPipeline, CipherError> {
        Ok(
            CipherPipeline::new(self.matrix_key.clone(), &self.substitution_key)?
                .with_trailing_block(self.trailing_block),
        )
    }
}
