use serde::{Deserialize, Serialize};

/// Where metric reporters write per-example test output unless configured otherwise
pub const DEFAULT_OUTPUT_PATH: &str = "/tmp/test_out.txt";

/// The metric used to select the best classification model
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMetric {
    /// Accuracy
    Accuracy,
    /// Area under the ROC curve for `target_label`
    RocAuc,
    /// Macro-averaged F1
    MacroF1,
    /// F1 of `target_label`
    LabelF1,
}

/// Document classification metrics
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct ClassificationMetricReporterConfig {
    /// Test output file
    #[config(default = "DEFAULT_OUTPUT_PATH.to_string()")]
    pub output_path: String,

    /// Metric used for model selection
    #[config(default = "ClassificationMetric::Accuracy")]
    pub model_select_metric: ClassificationMetric,

    /// Label used by the per-label selection metrics
    pub target_label: Option<String>,

    /// Input columns echoed into the test output
    #[config(default = "vec![\"text\".to_string()]")]
    pub text_column_names: Vec<String>,
}

/// Joint intent/slot metrics
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct IntentSlotMetricReporterConfig {
    /// Test output file
    #[config(default = "DEFAULT_OUTPUT_PATH.to_string()")]
    pub output_path: String,
}

/// Word tagging metrics
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct WordTaggingMetricReporterConfig {
    /// Test output file
    #[config(default = "DEFAULT_OUTPUT_PATH.to_string()")]
    pub output_path: String,
}

/// Language model perplexity
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct LanguageModelMetricReporterConfig {
    /// Test output file
    #[config(default = "DEFAULT_OUTPUT_PATH.to_string()")]
    pub output_path: String,
}

/// Pairwise ranking accuracy
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct PairwiseRankingMetricReporterConfig {
    /// Test output file
    #[config(default = "DEFAULT_OUTPUT_PATH.to_string()")]
    pub output_path: String,
}

/// Frame and bracketing metrics for compositional parses
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct CompositionalMetricReporterConfig {
    /// Test output file
    #[config(default = "DEFAULT_OUTPUT_PATH.to_string()")]
    pub output_path: String,
}

/// The metric reporter shapes an ensemble task accepts
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnsembleMetricReporterConfig {
    /// For document classification ensembles
    Classification(ClassificationMetricReporterConfig),

    /// For intent/slot ensembles
    IntentSlot(IntentSlotMetricReporterConfig),
}

impl EnsembleMetricReporterConfig {
    /// The test output file, whichever shape is active
    pub fn output_path(&self) -> &str {
        match self {
            EnsembleMetricReporterConfig::Classification(config) => &config.output_path,
            EnsembleMetricReporterConfig::IntentSlot(config) => &config.output_path,
        }
    }
}
