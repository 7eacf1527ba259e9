use derive_new::new;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A `(start, end)` span of a token in its source text
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct TokenRange(pub usize, pub usize);

impl From<(usize, usize)> for TokenRange {
    fn from((start, end): (usize, usize)) -> Self {
        Self(start, end)
    }
}

/// A document-level prediction
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, new)]
pub struct DocPrediction {
    /// The top-scoring class name
    pub prediction: String,

    /// The score of every class, keyed by class name in vocabulary order
    pub score: IndexMap<String, f32>,
}

/// A token-level prediction
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, new)]
pub struct WordPrediction {
    /// The top-scoring class name for the token
    pub prediction: String,

    /// The score of every class, keyed by class name in vocabulary order
    pub score: IndexMap<String, f32>,

    /// The token's span in the source text
    pub token_range: TokenRange,
}

/// A joint intent/slot prediction for one utterance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, new)]
pub struct JointPrediction {
    /// The utterance intent
    pub intent: DocPrediction,

    /// One slot prediction per token
    pub slot: Vec<WordPrediction>,
}
