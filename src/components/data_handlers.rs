//! Data handler configurations. Each handler reads a set of columns from tab-separated
//! files and batches them for its task.

use serde::{Deserialize, Serialize};

/// Column names understood by the data handlers
pub mod columns {
    /// Document label
    pub const DOC_LABEL: &str = "doc_label";
    /// Word (slot) labels
    pub const WORD_LABEL: &str = "word_label";
    /// Raw text
    pub const TEXT: &str = "text";
    /// Gazetteer features
    pub const DICT_FEAT: &str = "dict_feat";
    /// Per-example document loss weight
    pub const DOC_WEIGHT: &str = "doc_weight";
    /// Per-example word loss weight
    pub const WORD_WEIGHT: &str = "word_weight";
    /// A sequence of utterances
    pub const UTTERANCE: &str = "utterance";
    /// First text of a pair
    pub const TEXT1: &str = "text1";
    /// Second text of a pair
    pub const TEXT2: &str = "text2";
    /// Ranking query
    pub const QUERY: &str = "query";
    /// Preferred response
    pub const POS_RESPONSE: &str = "pos_response";
    /// Dispreferred response
    pub const NEG_RESPONSE: &str = "neg_response";
    /// Bracketed seqlogical parse
    pub const SEQLOGICAL: &str = "seqlogical";
    /// Soft target probabilities from a teacher model
    pub const TARGET_PROBS: &str = "target_probs";
    /// Teacher model logits
    pub const TARGET_LOGITS: &str = "target_logits";
    /// Class labels of the teacher model's outputs
    pub const TARGET_LABELS: &str = "target_labels";

    /// Document classification
    pub const DOC_CLASSIFICATION: &[&str] = &[DOC_LABEL, TEXT];
    /// Joint intent/slot and word tagging
    pub const JOINT_MODEL: &[&str] = &[DOC_LABEL, WORD_LABEL, TEXT, DICT_FEAT, DOC_WEIGHT, WORD_WEIGHT];
    /// Contextual intent/slot
    pub const CONTEXTUAL_INTENT_SLOT: &[&str] =
        &[DOC_LABEL, WORD_LABEL, TEXT, DICT_FEAT, UTTERANCE, DOC_WEIGHT, WORD_WEIGHT];
    /// Sequence-of-utterances models
    pub const SEQ_MODEL: &[&str] = &[DOC_LABEL, UTTERANCE];
    /// Language models
    pub const LANGUAGE_MODEL: &[&str] = &[UTTERANCE];
    /// Pair classification
    pub const PAIR_CLASSIFICATION: &[&str] = &[DOC_LABEL, TEXT1, TEXT2];
    /// Query/document pairwise ranking
    pub const QUERY_DOCUMENT: &[&str] = &[QUERY, POS_RESPONSE, NEG_RESPONSE];
    /// Compositional semantic parsing
    pub const COMPOSITIONAL: &[&str] = &[DOC_LABEL, TEXT, SEQLOGICAL];
    /// Knowledge-distillation document classification
    pub const KD_DOC_CLASSIFICATION: &[&str] =
        &[DOC_LABEL, TEXT, TARGET_PROBS, TARGET_LOGITS, TARGET_LABELS];

    /// Owned column list for config defaults
    pub fn to_vec(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }
}

/// Where data is read from and how it is batched
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct DataSourceConfig {
    /// Training data file
    #[config(default = "\"train.tsv\".to_string()")]
    pub train_path: String,

    /// Evaluation data file
    #[config(default = "\"eval.tsv\".to_string()")]
    pub eval_path: String,

    /// Test data file
    #[config(default = "\"test.tsv\".to_string()")]
    pub test_path: String,

    /// Training batch size
    #[config(default = 128)]
    pub train_batch_size: usize,

    /// Evaluation batch size
    #[config(default = 128)]
    pub eval_batch_size: usize,

    /// Test batch size
    #[config(default = 128)]
    pub test_batch_size: usize,

    /// Shuffle training examples each epoch
    #[config(default = true)]
    pub shuffle: bool,

    /// Sort examples by length within a batch
    #[config(default = true)]
    pub sort_within_batch: bool,

    /// Truncate token sequences to this length
    pub max_seq_len: Option<usize>,
}

/// Document classification data
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct DocClassificationDataHandlerConfig {
    /// Data source
    #[config(default = "DataSourceConfig::new()")]
    pub source: DataSourceConfig,

    /// Columns read from the data files, in order
    #[config(default = "columns::to_vec(columns::DOC_CLASSIFICATION)")]
    pub columns_to_read: Vec<String>,
}

/// Joint intent/slot and word tagging data
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct JointModelDataHandlerConfig {
    /// Data source
    #[config(default = "DataSourceConfig::new()")]
    pub source: DataSourceConfig,

    /// Columns read from the data files, in order
    #[config(default = "columns::to_vec(columns::JOINT_MODEL)")]
    pub columns_to_read: Vec<String>,
}

/// Contextual intent/slot data
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct ContextualIntentSlotModelDataHandlerConfig {
    /// Data source
    #[config(default = "DataSourceConfig::new()")]
    pub source: DataSourceConfig,

    /// Columns read from the data files, in order
    #[config(default = "columns::to_vec(columns::CONTEXTUAL_INTENT_SLOT)")]
    pub columns_to_read: Vec<String>,
}

/// Sequence-of-utterances data
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct SeqModelDataHandlerConfig {
    /// Data source
    #[config(default = "DataSourceConfig::new()")]
    pub source: DataSourceConfig,

    /// Columns read from the data files, in order
    #[config(default = "columns::to_vec(columns::SEQ_MODEL)")]
    pub columns_to_read: Vec<String>,
}

/// Sentence-level language model data
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct LanguageModelDataHandlerConfig {
    /// Data source
    #[config(default = "DataSourceConfig::new()")]
    pub source: DataSourceConfig,

    /// Columns read from the data files, in order
    #[config(default = "columns::to_vec(columns::LANGUAGE_MODEL)")]
    pub columns_to_read: Vec<String>,

    /// Wrap each sentence in begin/end of sentence tokens
    #[config(default = true)]
    pub append_bos_eos: bool,
}

/// Language model data split into fixed-length backpropagation-through-time windows
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct BpttLanguageModelDataHandlerConfig {
    /// Data source
    #[config(default = "DataSourceConfig::new()")]
    pub source: DataSourceConfig,

    /// Columns read from the data files, in order
    #[config(default = "columns::to_vec(columns::LANGUAGE_MODEL)")]
    pub columns_to_read: Vec<String>,

    /// Window length in tokens
    #[config(default = 35)]
    pub bptt_len: usize,
}

/// The data handler shapes a language model task accepts
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageModelDataHandler {
    /// Sentence-level batches
    Sentence(LanguageModelDataHandlerConfig),

    /// Fixed-length windows over the token stream
    Bptt(BpttLanguageModelDataHandlerConfig),
}

impl LanguageModelDataHandler {
    /// The data source, whichever shape is active
    pub fn source(&self) -> &DataSourceConfig {
        match self {
            LanguageModelDataHandler::Sentence(config) => &config.source,
            LanguageModelDataHandler::Bptt(config) => &config.source,
        }
    }
}

/// Text pair classification data
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct PairClassificationDataHandlerConfig {
    /// Data source
    #[config(default = "DataSourceConfig::new()")]
    pub source: DataSourceConfig,

    /// Columns read from the data files, in order
    #[config(default = "columns::to_vec(columns::PAIR_CLASSIFICATION)")]
    pub columns_to_read: Vec<String>,
}

/// Query/document pairwise ranking data
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct QueryDocumentPairwiseRankingDataHandlerConfig {
    /// Data source
    #[config(default = "DataSourceConfig::new()")]
    pub source: DataSourceConfig,

    /// Columns read from the data files, in order
    #[config(default = "columns::to_vec(columns::QUERY_DOCUMENT)")]
    pub columns_to_read: Vec<String>,
}

/// Compositional (seqlogical) semantic parsing data
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct CompositionalDataHandlerConfig {
    /// Data source
    #[config(default = "DataSourceConfig::new()")]
    pub source: DataSourceConfig,

    /// Columns read from the data files, in order
    #[config(default = "columns::to_vec(columns::COMPOSITIONAL)")]
    pub columns_to_read: Vec<String>,
}

/// Document classification data with soft targets from a teacher model
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct KdDocClassificationDataHandlerConfig {
    /// Data source
    #[config(default = "DataSourceConfig::new()")]
    pub source: DataSourceConfig,

    /// Columns read from the data files, in order
    #[config(default = "columns::to_vec(columns::KD_DOC_CLASSIFICATION)")]
    pub columns_to_read: Vec<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_source_defaults() {
        let source = DataSourceConfig::new();

        assert_eq!(source.train_path, "train.tsv");
        assert_eq!(source.eval_path, "eval.tsv");
        assert_eq!(source.test_path, "test.tsv");
        assert_eq!(source.train_batch_size, 128);
        assert!(source.shuffle);
        assert_eq!(source.max_seq_len, None);
    }

    #[test]
    fn test_default_columns() {
        assert_eq!(
            DocClassificationDataHandlerConfig::new().columns_to_read,
            vec!["doc_label", "text"]
        );
        assert_eq!(
            QueryDocumentPairwiseRankingDataHandlerConfig::new().columns_to_read,
            vec!["query", "pos_response", "neg_response"]
        );
    }

    #[test]
    fn test_language_model_handler_source() {
        let handler = LanguageModelDataHandler::Bptt(
            BpttLanguageModelDataHandlerConfig::new()
                .with_source(DataSourceConfig::new().with_train_batch_size(16)),
        );

        assert_eq!(handler.source().train_batch_size, 16);
    }
}
