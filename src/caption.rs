//! Caption generation from user labels with a learned label vocabulary.
//!
//! The vocabulary lives behind the [`LabelStore`] trait so callers choose the
//! persistence: [`MemoryLabelStore`] for tests and short-lived sessions,
//! [`JsonFileLabelStore`] for a vocabulary that survives restarts.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::CaptionError;

/// Caption returned when no labels were given.
pub const NO_LABELS_CAPTION: &str = "No labels provided";

/// Caption returned when every label was blank.
pub const NO_VALID_LABELS_CAPTION: &str = "No valid labels provided";

/// Maximum number of entries returned by [`CaptionGenerator::suggestions`].
pub const MAX_SUGGESTIONS: usize = 10;

/// Persistence for the learned label vocabulary.
pub trait LabelStore {
    /// Loads the stored vocabulary.
    fn load(&mut self) -> Result<BTreeSet<String>, CaptionError>;

    /// Replaces the stored vocabulary with `labels`.
    fn save(&mut self, labels: &BTreeSet<String>) -> Result<(), CaptionError>;
}

/// Label store kept in memory only.
#[derive(Debug, Default, Clone)]
pub struct MemoryLabelStore {
    labels: BTreeSet<String>,
}

impl MemoryLabelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `labels`.
    pub fn with_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MemoryLabelStore {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn labels(&self) -> &BTreeSet<String> {
        &self.labels
    }
}

impl LabelStore for MemoryLabelStore {
    fn load(&mut self) -> Result<BTreeSet<String>, CaptionError> {
        Ok(self.labels.clone())
    }

    fn save(&mut self, labels: &BTreeSet<String>) -> Result<(), CaptionError> {
        self.labels = labels.clone();
        Ok(())
    }
}

/// On-disk layout: `{"labels": ["cat", "dog"]}`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct LabelDocument {
    #[serde(default)]
    labels: BTreeSet<String>,
}

/// Label store backed by a JSON file.
///
/// A missing file loads as an empty vocabulary. Parent directories are
/// created on save.
#[derive(Debug, Clone)]
pub struct JsonFileLabelStore {
    path: PathBuf,
}

impl JsonFileLabelStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileLabelStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LabelStore for JsonFileLabelStore {
    fn load(&mut self) -> Result<BTreeSet<String>, CaptionError> {
        if !self.path.exists() {
            return Ok(BTreeSet::new());
        }
        let json = fs::read_to_string(&self.path)?;
        let document: LabelDocument = serde_json::from_str(&json)?;
        Ok(document.labels)
    }

    fn save(&mut self, labels: &BTreeSet<String>) -> Result<(), CaptionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let document = LabelDocument {
            labels: labels.clone(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&document)?)?;
        debug!("saved {} labels to {}", labels.len(), self.path.display());
        Ok(())
    }
}

/// Builds English captions from labels and learns every label it sees.
///
/// # Examples
///
/// ```
/// use hillvig::caption::{CaptionGenerator, MemoryLabelStore};
///
/// let mut generator = CaptionGenerator::new(MemoryLabelStore::new());
/// let caption = generator.generate_caption(&["cat", "dog", "ball"]).unwrap();
/// assert_eq!(caption, "A cat, dog, and ball");
/// assert_eq!(generator.suggestions("d"), vec!["dog"]);
/// ```
#[derive(Debug)]
pub struct CaptionGenerator<S: LabelStore> {
    store: S,
    vocabulary: BTreeSet<String>,
}

impl<S: LabelStore> CaptionGenerator<S> {
    /// Creates a generator and loads the vocabulary from `store`.
    ///
    /// A store that fails to load is treated as empty; the failure is logged
    /// and the next save overwrites it.
    pub fn new(mut store: S) -> Self {
        let vocabulary = store.load().unwrap_or_else(|e| {
            warn!("starting with an empty label vocabulary: {}", e);
            BTreeSet::new()
        });
        CaptionGenerator { store, vocabulary }
    }

    /// Splits a comma-separated label list, dropping blank entries.
    ///
    /// ```
    /// use hillvig::caption::{CaptionGenerator, MemoryLabelStore};
    ///
    /// let labels = CaptionGenerator::<MemoryLabelStore>::split_labels(" cat, ,dog ,");
    /// assert_eq!(labels, vec!["cat", "dog"]);
    /// ```
    pub fn split_labels(input: &str) -> Vec<String> {
        input
            .split(',')
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Builds a caption and learns the labels used.
    ///
    /// # Errors
    /// Returns the store's error if the updated vocabulary cannot be saved.
    pub fn generate_caption<L: AsRef<str>>(&mut self, labels: &[L]) -> Result<String, CaptionError> {
        if labels.is_empty() {
            return Ok(NO_LABELS_CAPTION.to_string());
        }
        let clean: Vec<&str> = labels
            .iter()
            .map(|label| label.as_ref().trim())
            .filter(|label| !label.is_empty())
            .collect();

        let caption = match clean.as_slice() {
            [] => return Ok(NO_VALID_LABELS_CAPTION.to_string()),
            [only] => format!("A {}", only),
            [first, second] => format!("A {} and {}", first, second),
            [init @ .., last] => format!("A {}, and {}", init.join(", "), last),
        };

        self.add_labels(&clean)?;
        Ok(caption)
    }

    /// Adds labels (trimmed, lowercased) to the vocabulary and saves it.
    ///
    /// # Errors
    /// Returns the store's error if saving fails.
    pub fn add_labels<L: AsRef<str>>(&mut self, labels: &[L]) -> Result<(), CaptionError> {
        for label in labels {
            let label = label.as_ref().trim();
            if !label.is_empty() {
                self.vocabulary.insert(label.to_lowercase());
            }
        }
        self.store.save(&self.vocabulary)
    }

    /// Returns up to [`MAX_SUGGESTIONS`] learned labels starting with
    /// `prefix` (case-insensitive), in alphabetical order.
    pub fn suggestions(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        self.vocabulary
            .iter()
            .filter(|label| label.starts_with(&prefix))
            .take(MAX_SUGGESTIONS)
            .cloned()
            .collect()
    }

    pub fn vocabulary(&self) -> &BTreeSet<String> {
        &self.vocabulary
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStore;

    impl LabelStore for FailingStore {
        fn load(&mut self) -> Result<BTreeSet<String>, CaptionError> {
            Err(CaptionError::Format("corrupt".to_string()))
        }

        fn save(&mut self, _labels: &BTreeSet<String>) -> Result<(), CaptionError> {
            Err(CaptionError::Io("read-only".to_string()))
        }
    }

    fn generator() -> CaptionGenerator<MemoryLabelStore> {
        CaptionGenerator::new(MemoryLabelStore::new())
    }

    #[test]
    fn test_caption_formats() {
        let mut g = generator();
        let none: [&str; 0] = [];
        assert_eq!(g.generate_caption(&none).unwrap(), NO_LABELS_CAPTION);
        assert_eq!(g.generate_caption(&["  ", ""]).unwrap(), NO_VALID_LABELS_CAPTION);
        assert_eq!(g.generate_caption(&["cat"]).unwrap(), "A cat");
        assert_eq!(g.generate_caption(&["cat", "dog"]).unwrap(), "A cat and dog");
        assert_eq!(
            g.generate_caption(&[" cat", "dog ", "ball", "tree"]).unwrap(),
            "A cat, dog, ball, and tree"
        );
    }

    #[test]
    fn test_generate_learns_lowercased_labels() {
        let mut g = generator();
        g.generate_caption(&["Sunset", "Beach"]).unwrap();
        assert!(g.vocabulary().contains("sunset"));
        assert!(g.store().labels().contains("beach"));
    }

    #[test]
    fn test_suggestions_prefix_and_limit() {
        let labels: Vec<String> = (0..15).map(|i| format!("tree{:02}", i)).collect();
        let mut g = CaptionGenerator::new(MemoryLabelStore::with_labels(["cat", "car"]));
        g.add_labels(&labels).unwrap();
        assert_eq!(g.suggestions("CA"), vec!["car", "cat"]);
        let trees = g.suggestions("tree");
        assert_eq!(trees.len(), MAX_SUGGESTIONS);
        assert_eq!(trees[0], "tree00");
        assert_eq!(g.suggestions("").len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_split_labels() {
        assert_eq!(
            CaptionGenerator::<MemoryLabelStore>::split_labels("a, b ,, c"),
            vec!["a", "b", "c"]
        );
        assert!(CaptionGenerator::<MemoryLabelStore>::split_labels(" , ").is_empty());
    }

    #[test]
    fn test_load_failure_starts_empty_and_save_failure_propagates() {
        let mut g = CaptionGenerator::new(FailingStore);
        assert!(g.vocabulary().is_empty());
        assert_eq!(
            g.generate_caption(&["cat"]),
            Err(CaptionError::Io("read-only".to_string()))
        );
    }

    #[test]
    fn test_json_store_persists_across_generators() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("labels.json");

        let mut first = CaptionGenerator::new(JsonFileLabelStore::new(&path));
        assert!(first.vocabulary().is_empty());
        first.generate_caption(&["Mountain", "lake"]).unwrap();

        let second = CaptionGenerator::new(JsonFileLabelStore::new(&path));
        assert_eq!(second.suggestions(""), vec!["lake", "mountain"]);
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"labels\""));
    }

    #[test]
    fn test_json_store_reports_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.json");
        fs::write(&path, "not json").unwrap();
        let mut store = JsonFileLabelStore::new(&path);
        assert!(matches!(store.load(), Err(CaptionError::Format(_))));
        assert!(CaptionGenerator::new(store).vocabulary().is_empty());
    }
}
