use std::{collections::HashMap, fmt::Display};

use lazy_static::lazy_static;

/// The unique string token that identifies document classification
pub static DOC_CLASSIFICATION: &str = "doc_classification";

/// Word tagging
pub static WORD_TAGGING: &str = "word_tagging";

/// Joint intent/slot
pub static JOINT_TEXT: &str = "joint_text";

/// Contextual intent/slot
pub static CONTEXTUAL_INTENT_SLOT: &str = "contextual_intent_slot";

/// Language modeling
pub static LANGUAGE_MODEL: &str = "language_model";

/// Pair classification
pub static PAIR_CLASSIFICATION: &str = "pair_classification";

/// Query/document pairwise ranking
pub static QUERY_DOCUMENT_PAIRWISE_RANKING: &str = "query_document_pairwise_ranking";

/// Utterance sequence classification
pub static SEQ_NN: &str = "seq_nn";

/// Semantic parsing
pub static SEMANTIC_PARSING: &str = "semantic_parsing";

/// Knowledge-distillation document classification
pub static KD_DOC_CLASSIFICATION: &str = "kd_doc_classification";

/// Ensembles
pub static ENSEMBLE: &str = "ensemble";

/// Every task, in listing order
pub static TASKS: &[TaskName; 11] = &[
    TaskName::DocClassification,
    TaskName::WordTagging,
    TaskName::JointText,
    TaskName::ContextualIntentSlot,
    TaskName::LanguageModel,
    TaskName::PairClassification,
    TaskName::QueryDocumentPairwiseRanking,
    TaskName::SeqNn,
    TaskName::SemanticParsing,
    TaskName::KdDocClassification,
    TaskName::Ensemble,
];

lazy_static! {
    /// Tasks indexed by their string token
    pub static ref TASKS_BY_NAME: HashMap<&'static str, TaskName> =
        TASKS.iter().map(|task| (task.as_str(), *task)).collect();
}

/// Available Tasks
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TaskName {
    /// Document Classification
    DocClassification,
    /// Word Tagging
    WordTagging,
    /// Joint Intent/Slot
    JointText,
    /// Contextual Intent/Slot
    ContextualIntentSlot,
    /// Language Modeling
    LanguageModel,
    /// Pair Classification
    PairClassification,
    /// Query/Document Pairwise Ranking
    QueryDocumentPairwiseRanking,
    /// Utterance Sequence Classification
    SeqNn,
    /// Semantic Parsing
    SemanticParsing,
    /// Knowledge-Distillation Document Classification
    KdDocClassification,
    /// Ensemble
    Ensemble,
}

impl TaskName {
    /// Iterate over every task
    pub fn all() -> impl Iterator<Item = TaskName> {
        TASKS.iter().copied()
    }

    /// The string token for this task
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskName::DocClassification => DOC_CLASSIFICATION,
            TaskName::WordTagging => WORD_TAGGING,
            TaskName::JointText => JOINT_TEXT,
            TaskName::ContextualIntentSlot => CONTEXTUAL_INTENT_SLOT,
            TaskName::LanguageModel => LANGUAGE_MODEL,
            TaskName::PairClassification => PAIR_CLASSIFICATION,
            TaskName::QueryDocumentPairwiseRanking => QUERY_DOCUMENT_PAIRWISE_RANKING,
            TaskName::SeqNn => SEQ_NN,
            TaskName::SemanticParsing => SEMANTIC_PARSING,
            TaskName::KdDocClassification => KD_DOC_CLASSIFICATION,
            TaskName::Ensemble => ENSEMBLE,
        }
    }

    /// Whether the task config has fields that must be supplied, so it has no default
    pub fn has_required_fields(&self) -> bool {
        matches!(
            self,
            TaskName::JointText | TaskName::ContextualIntentSlot | TaskName::Ensemble
        )
    }
}

impl TryFrom<&str> for TaskName {
    type Error = TaskNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        TASKS_BY_NAME
            .get(value.to_lowercase().as_str())
            .copied()
            .ok_or_else(|| TaskNameError::Unknown(value.to_string()))
    }
}

impl Display for TaskName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task Name Error
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TaskNameError {
    /// No task found for the given string
    #[error("no task found for {0}")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_names_round_trip() {
        for task in TaskName::all() {
            assert_eq!(TaskName::try_from(task.to_string().as_str()), Ok(task));
        }

        assert_eq!(TASKS_BY_NAME.len(), TASKS.len());
    }

    #[test]
    fn test_names_are_case_insensitive() {
        assert_eq!(
            TaskName::try_from("Joint_Text"),
            Ok(TaskName::JointText)
        );
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            TaskName::try_from("translation"),
            Err(TaskNameError::Unknown("translation".to_string()))
        );
    }

    #[test]
    fn test_required_fields() {
        let required: Vec<_> = TaskName::all()
            .filter(TaskName::has_required_fields)
            .collect();

        assert_eq!(
            required,
            vec![
                TaskName::JointText,
                TaskName::ContextualIntentSlot,
                TaskName::Ensemble
            ]
        );
    }
}
