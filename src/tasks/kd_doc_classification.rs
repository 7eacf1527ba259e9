use crate::{
    components::{
        data_handlers::KdDocClassificationDataHandlerConfig,
        metric_reporters::ClassificationMetricReporterConfig, models::DocModelConfig,
        FeatureConfig, OptimizerConfig, SchedulerConfig, TrainerConfig,
    },
    labels::DocLabelConfig,
};

/// Document classification distilled from a teacher model's soft targets
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct KdDocClassificationTaskConfig {
    /// Model
    #[config(default = "DocModelConfig::new()")]
    pub model: DocModelConfig,

    /// Trainer
    #[config(default = "TrainerConfig::new()")]
    pub trainer: TrainerConfig,

    /// Model inputs
    #[config(default = "FeatureConfig::new()")]
    pub features: FeatureConfig,

    /// The document label, read together with the teacher's class probabilities
    #[config(default = "DocLabelConfig::new().with_target_prob(true)")]
    pub labels: DocLabelConfig,

    /// Data handler
    #[config(default = "KdDocClassificationDataHandlerConfig::new()")]
    pub data_handler: KdDocClassificationDataHandlerConfig,

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
