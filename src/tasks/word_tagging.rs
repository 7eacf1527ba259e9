use burn::tensor::{backend::Backend, Int, Tensor};

use crate::{
    components::{
        data_handlers::JointModelDataHandlerConfig,
        metric_reporters::WordTaggingMetricReporterConfig, models::WordTaggingModelConfig,
        FeatureConfig, OptimizerConfig, SchedulerConfig, TrainerConfig,
    },
    labels::{TargetMeta, WordLabelConfig},
    prediction::{word, Context, FormatError, FormatPrediction, WordPrediction},
};

/// Word tagging: one class per token
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct WordTaggingTaskConfig {
    /// Model
    #[config(default = "WordTaggingModelConfig::new()")]
    pub model: WordTaggingModelConfig,

    /// Trainer
    #[config(default = "TrainerConfig::new()")]
    pub trainer: TrainerConfig,

    /// Model inputs
    #[config(default = "FeatureConfig::new()")]
    pub features: FeatureConfig,

    /// The word label
    #[config(default = "WordLabelConfig::new()")]
    pub labels: WordLabelConfig,

    /// Data handler
    #[config(default = "JointModelDataHandlerConfig::new()")]
    pub data_handler: JointModelDataHandlerConfig,

    /// Metric reporter
    #[config(default = "WordTaggingMetricReporterConfig::new()")]
    pub metric_reporter: WordTaggingMetricReporterConfig,

    /// Optimizer
    #[config(default = "OptimizerConfig::new()")]
    pub optimizer: OptimizerConfig,

    /// Learning rate scheduler
    #[config(default = "SchedulerConfig::new()")]
    pub scheduler: SchedulerConfig,
}

impl<B: Backend> FormatPrediction<B> for WordTaggingTaskConfig {
    type Predictions = Tensor<B, 2, Int>;
    type Scores = Tensor<B, 3>;
    type Meta = TargetMeta;
    type Record = Vec<WordPrediction>;

    fn format_prediction<'a>(
        predictions: Self::Predictions,
        scores: Self::Scores,
        context: &'a Context,
        target_meta: &'a Self::Meta,
    ) -> Result<impl Iterator<Item = Self::Record> + 'a, FormatError> {
        word::format(predictions, scores, &context.token_ranges, target_meta)
    }
}
