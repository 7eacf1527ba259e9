use burn::tensor::backend::Backend;
use derive_new::new;

/// Prediction record types
pub mod record;

/// Document-level formatting
pub mod doc;

/// Token-level formatting
pub mod word;

pub use record::{DocPrediction, JointPrediction, TokenRange, WordPrediction};

/// Per-example inputs that model outputs are aligned against
#[derive(Clone, Debug, Default, PartialEq, Eq, new)]
pub struct Context {
    /// The token spans of each example, in token order
    pub token_ranges: Vec<Vec<TokenRange>>,
}

/// Turns raw model outputs into human-readable prediction records.
///
/// Every shape check runs before the iterator is returned, so a successful call always yields
/// one record per input example.
pub trait FormatPrediction<B: Backend> {
    /// Predicted class indexes
    type Predictions;

    /// Per-class scores
    type Scores;

    /// Target metadata used to name the classes
    type Meta;

    /// The record produced per example
    type Record;

    /// Format a batch of predictions
    fn format_prediction<'a>(
        predictions: Self::Predictions,
        scores: Self::Scores,
        context: &'a Context,
        target_meta: &'a Self::Meta,
    ) -> Result<impl Iterator<Item = Self::Record> + 'a, FormatError>;
}

/// Formatting Error
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Two inputs disagree on the number of examples
    #[error("{field} has {actual} examples, expected {expected}")]
    LengthMismatch {
        /// The input that disagrees
        field: &'static str,
        /// The number of predictions
        expected: usize,
        /// The number found in `field`
        actual: usize,
    },

    /// Scores and predictions disagree on the number of token positions
    #[error("{field} has {actual} token positions, expected {expected}")]
    SequenceMismatch {
        /// The input that disagrees
        field: &'static str,
        /// The number of predicted positions
        expected: usize,
        /// The number found in `field`
        actual: usize,
    },

    /// The score width differs from the vocabulary size
    #[error("scores have {actual} classes but the target vocabulary has {expected}")]
    ClassCountMismatch {
        /// The vocabulary size
        expected: usize,
        /// The score width
        actual: usize,
    },

    /// A predicted index has no name in the vocabulary
    #[error("predicted class {index} is outside the target vocabulary of {size} classes")]
    UnknownClass {
        /// The predicted index
        index: i64,
        /// The vocabulary size
        size: usize,
    },

    /// An example has more tokens than predicted positions
    #[error("example {example} has {tokens} tokens but only {positions} predicted positions")]
    TokenOverflow {
        /// The example index within the batch
        example: usize,
        /// The number of token ranges
        tokens: usize,
        /// The number of predicted positions
        positions: usize,
    },
}
