use std::{collections::HashMap, path::Path};

use derive_new::new;
use log::warn;
use tokio::io;

use crate::utils::{classes, files};

/// A label vocabulary, mapping class indexes to names and back
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocab {
    itos: Vec<String>,
    stoi: HashMap<String, usize>,
}

impl Vocab {
    /// Create a vocabulary from class names in index order
    pub fn new(itos: Vec<String>) -> Self {
        let stoi = classes::index_by_name(&itos);

        if stoi.len() != itos.len() {
            warn!(
                "Label vocabulary has {} duplicate names, lookups by name use the last index",
                itos.len() - stoi.len()
            );
        }

        Self { itos, stoi }
    }

    /// Load a vocabulary from a file with one class name per line
    pub async fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let lines = files::read_lines(path).await?;

        Ok(Self::new(classes::clean_labels(lines)))
    }

    /// The index-to-string table
    pub fn itos(&self) -> &[String] {
        &self.itos
    }

    /// Look up the class name at the given index
    pub fn lookup_token(&self, index: usize) -> Option<&str> {
        self.itos.get(index).map(String::as_str)
    }

    /// Look up the index of the given class name
    pub fn lookup_index(&self, name: &str) -> Option<usize> {
        self.stoi.get(name).copied()
    }

    /// The number of classes
    pub fn len(&self) -> usize {
        self.itos.len()
    }

    /// Whether the vocabulary has no classes
    pub fn is_empty(&self) -> bool {
        self.itos.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Vocab {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Metadata for one prediction target, used to decode output indexes into names
#[derive(Clone, Debug, PartialEq, Eq, new)]
pub struct TargetMeta {
    /// The target's label vocabulary
    pub vocab: Vocab,
}

impl TargetMeta {
    /// Load target metadata from a label file
    pub async fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::new(Vocab::load(path).await?))
    }
}

/// Target metadata for joint intent/slot tasks
#[derive(Clone, Debug, PartialEq, Eq, new)]
pub struct JointTargetMeta {
    /// The document-level (intent) target
    pub doc: TargetMeta,

    /// The word-level (slot) target
    pub word: TargetMeta,
}
