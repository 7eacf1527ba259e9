use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Document-level label configuration, one class per example
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct DocLabelConfig {
    /// The name of the exported score output
    #[config(default = "\"doc_scores\".to_string()")]
    pub export_output_name: String,

    /// Per-class loss weights, keyed by class name
    #[config(default = "BTreeMap::new()")]
    pub label_weights: BTreeMap<String, f64>,

    /// Read soft target probabilities alongside the hard label (knowledge distillation)
    #[config(default = false)]
    pub target_prob: bool,
}

/// Word-level label configuration, one class per token
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct WordLabelConfig {
    /// The name of the exported score output
    #[config(default = "\"word_scores\".to_string()")]
    pub export_output_name: String,

    /// Expand slot labels into B-/I- prefixed tags
    #[config(default = false)]
    pub use_bio_labels: bool,
}

/// Any single label target a task may train against
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetConfig {
    /// A document-level target
    Doc(DocLabelConfig),

    /// A word-level target
    Word(WordLabelConfig),
}

impl TargetConfig {
    /// The name of the exported score output for this target
    pub fn export_output_name(&self) -> &str {
        match self {
            TargetConfig::Doc(config) => &config.export_output_name,
            TargetConfig::Word(config) => &config.export_output_name,
        }
    }
}

impl From<DocLabelConfig> for TargetConfig {
    fn from(config: DocLabelConfig) -> Self {
        TargetConfig::Doc(config)
    }
}

impl From<WordLabelConfig> for TargetConfig {
    fn from(config: WordLabelConfig) -> Self {
        TargetConfig::Word(config)
    }
}

/// The doc + word target pair used by intent/slot tasks
pub fn intent_slot_targets() -> Vec<TargetConfig> {
    vec![DocLabelConfig::new().into(), WordLabelConfig::new().into()]
}
