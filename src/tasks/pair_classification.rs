use crate::{
    components::{
        data_handlers::PairClassificationDataHandlerConfig, features::PairFeatureConfig,
        metric_reporters::ClassificationMetricReporterConfig,
        models::PairClassificationModelConfig, OptimizerConfig, SchedulerConfig, TrainerConfig,
    },
    labels::DocLabelConfig,
};

/// Classify a pair of texts, such as entailment or paraphrase
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct PairClassificationTaskConfig {
    /// Model inputs for both texts
    #[config(default = "PairFeatureConfig::new()")]
    pub features: PairFeatureConfig,

    /// Model
    #[config(default = "PairClassificationModelConfig::new()")]
    pub model: PairClassificationModelConfig,

    /// Data handler
    #[config(default = "PairClassificationDataHandlerConfig::new()")]
    pub data_handler: PairClassificationDataHandlerConfig,

    /// Trainer
    #[config(default = "TrainerConfig::new()")]
    pub trainer: TrainerConfig,

    /// The pair label
    #[config(default = "DocLabelConfig::new()")]
    pub labels: DocLabelConfig,

    /// Metric reporter
    #[config(default = "ClassificationMetricReporterConfig::new()")]
    pub metric_reporter: ClassificationMetricReporterConfig,

    /// Optimizer
    #[config(default = "OptimizerConfig::new()")]
    pub optimizer: OptimizerConfig,

    /// Learning rate scheduler
    #[config(default = "SchedulerConfig::new()")]
    pub scheduler: SchedulerConfig,
}
