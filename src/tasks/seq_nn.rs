use crate::{
    components::{
        data_handlers::SeqModelDataHandlerConfig,
        metric_reporters::ClassificationMetricReporterConfig, models::SeqNnModelConfig,
        FeatureConfig, OptimizerConfig, SchedulerConfig, TrainerConfig,
    },
    labels::DocLabelConfig,
};

/// Classify a sequence of utterances as a whole
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct SeqNnTaskConfig {
    /// Model
    #[config(default = "SeqNnModelConfig::new()")]
    pub model: SeqNnModelConfig,

    /// Trainer
    #[config(default = "TrainerConfig::new()")]
    pub trainer: TrainerConfig,

    /// Model inputs
    #[config(default = "FeatureConfig::new()")]
    pub features: FeatureConfig,

    /// The sequence label
    #[config(default = "DocLabelConfig::new()")]
    pub labels: DocLabelConfig,

    /// Data handler
    #[config(default = "SeqModelDataHandlerConfig::new()")]
    pub data_handler: SeqModelDataHandlerConfig,

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
