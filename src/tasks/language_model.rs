use crate::{
    components::{
        data_handlers::{LanguageModelDataHandler, LanguageModelDataHandlerConfig},
        metric_reporters::LanguageModelMetricReporterConfig,
        models::LmLstmConfig,
        FeatureConfig, OptimizerConfig, SchedulerConfig, TrainerConfig,
    },
    labels::WordLabelConfig,
};

/// Language modeling: predict the next token
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct LmTaskConfig {
    /// Data handler, sentence-level or windowed
    #[config(default = "LanguageModelDataHandler::Sentence(LanguageModelDataHandlerConfig::new())")]
    pub data_handler: LanguageModelDataHandler,

    /// Model
    #[config(default = "LmLstmConfig::new()")]
    pub model: LmLstmConfig,

    /// Trainer
    #[config(default = "TrainerConfig::new()")]
    pub trainer: TrainerConfig,

    /// Model inputs
    #[config(default = "FeatureConfig::new()")]
    pub features: FeatureConfig,

    /// The targets are the inputs shifted by one token, so no label is needed
    pub labels: Option<WordLabelConfig>,

    /// Metric reporter
    #[config(default = "LanguageModelMetricReporterConfig::new()")]
    pub metric_reporter: LanguageModelMetricReporterConfig,

    /// Optimizer
    #[config(default = "OptimizerConfig::new()")]
    pub optimizer: OptimizerConfig,

    /// Learning rate scheduler
    #[config(default = "SchedulerConfig::new()")]
    pub scheduler: SchedulerConfig,
}
