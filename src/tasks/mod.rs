use crate::prediction::FormatError;

/// The task config sum type and top-level run config
pub mod config;

/// Document classification
pub mod doc_classification;

/// Word tagging
pub mod word_tagging;

/// Joint intent/slot
pub mod joint_text;

/// Contextual intent/slot
pub mod contextual_intent_slot;

/// Language modeling
pub mod language_model;

/// Text pair classification
pub mod pair_classification;

/// Query/document pairwise ranking
pub mod query_document_ranking;

/// Utterance sequence classification
pub mod seq_nn;

/// Compositional semantic parsing
pub mod semantic_parsing;

/// Knowledge-distillation document classification
pub mod kd_doc_classification;

/// Model ensembles
pub mod ensemble;

pub use config::{RunConfig, TaskConfig};
pub use contextual_intent_slot::ContextualIntentSlotTaskConfig;
pub use doc_classification::DocClassificationTaskConfig;
pub use ensemble::EnsembleTaskConfig;
pub use joint_text::JointTextTaskConfig;
pub use kd_doc_classification::KdDocClassificationTaskConfig;
pub use language_model::LmTaskConfig;
pub use pair_classification::PairClassificationTaskConfig;
pub use query_document_ranking::QueryDocumentPairwiseRankingTaskConfig;
pub use semantic_parsing::SemanticParsingTaskConfig;
pub use seq_nn::SeqNnTaskConfig;
pub use word_tagging::WordTaggingTaskConfig;

/// Task Error
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TaskError {
    /// A config has the wrong shape or breaks a structural constraint
    #[error("invalid task config: {0}")]
    InvalidConfig(String),

    /// An ensemble sub-model index past the end of the ensemble
    #[error("model {model_id} is out of range for an ensemble of {num_models} models")]
    ModelOutOfRange {
        /// The requested sub-model
        model_id: usize,
        /// The ensemble size
        num_models: usize,
    },

    /// A data partition that doesn't exist
    #[error("rank {rank} is out of range for a world size of {world_size}")]
    InvalidPartition {
        /// The requested partition
        rank: usize,
        /// The number of partitions
        world_size: usize,
    },

    /// Model outputs that can't be formatted
    #[error(transparent)]
    Format(#[from] FormatError),
}
