use crate::{
    components::{
        data_handlers::CompositionalDataHandlerConfig,
        metric_reporters::CompositionalMetricReporterConfig, models::RnngParserConfig,
        FeatureConfig, HogwildTrainerConfig, OptimizerConfig, SchedulerConfig,
    },
    labels::WordLabelConfig,
};

use super::TaskError;

/// Compositional semantic parsing into nested intent/slot trees
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct SemanticParsingTaskConfig {
    /// Model
    #[config(default = "RnngParserConfig::new()")]
    pub model: RnngParserConfig,

    /// Trainer
    #[config(default = "HogwildTrainerConfig::new()")]
    pub trainer: HogwildTrainerConfig,

    /// Model inputs
    #[config(default = "FeatureConfig::new()")]
    pub features: FeatureConfig,

    /// Data handler
    #[config(default = "CompositionalDataHandlerConfig::new()")]
    pub data_handler: CompositionalDataHandlerConfig,

    /// The parser reads its targets from the seqlogical column, so no label is needed
    pub labels: Option<WordLabelConfig>,

    /// Metric reporter
    #[config(default = "CompositionalMetricReporterConfig::new()")]
    pub metric_reporter: CompositionalMetricReporterConfig,

    /// Optimizer
    #[config(default = "OptimizerConfig::new()")]
    pub optimizer: OptimizerConfig,

    /// Learning rate scheduler
    #[config(default = "SchedulerConfig::new()")]
    pub scheduler: SchedulerConfig,
}

impl SemanticParsingTaskConfig {
    /// Check what the types can't
    pub fn validate(&self) -> Result<(), TaskError> {
        if self.trainer.num_workers == 0 {
            return Err(TaskError::InvalidConfig(
                "semantic_parsing needs at least one hogwild worker".to_string(),
            ));
        }

        Ok(())
    }
}
