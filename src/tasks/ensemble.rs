use crate::{
    components::{
        data_handlers::JointModelDataHandlerConfig,
        metric_reporters::{ClassificationMetricReporterConfig, EnsembleMetricReporterConfig},
        models::{BaggingDocEnsembleConfig, DocModelConfig, EnsembleModelConfig},
        EnsembleTrainerConfig, FeatureConfig, OptimizerConfig, SchedulerConfig,
    },
    labels::{intent_slot_targets, TargetConfig},
};

use super::TaskError;

/// An ensemble of models trained one at a time on the same data
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct EnsembleTaskConfig {
    /// The ensemble and its sub-models
    pub model: EnsembleModelConfig,

    /// The label targets shared by every sub-model
    pub labels: Vec<TargetConfig>,

    /// Trainer
    #[config(default = "EnsembleTrainerConfig::new()")]
    pub trainer: EnsembleTrainerConfig,

    /// Metric reporter, matching the ensemble shape
    #[config(
        default = "EnsembleMetricReporterConfig::Classification(ClassificationMetricReporterConfig::new())"
    )]
    pub metric_reporter: EnsembleMetricReporterConfig,

    /// Data handler
    #[config(default = "JointModelDataHandlerConfig::new()")]
    pub data_handler: JointModelDataHandlerConfig,

    /// Model inputs
    #[config(default = "FeatureConfig::new()")]
    pub features: FeatureConfig,

    /// Optimizer, shared across sub-model training runs
    #[config(default = "OptimizerConfig::new()")]
    pub optimizer: OptimizerConfig,

    /// Learning rate scheduler, shared across sub-model training runs
    #[config(default = "SchedulerConfig::new()")]
    pub scheduler: SchedulerConfig,
}

impl EnsembleTaskConfig {
    /// A single-model document ensemble over doc + word targets
    pub fn example_config() -> Self {
        Self::new(
            BaggingDocEnsembleConfig::new(vec![DocModelConfig::new()]).into(),
            intent_slot_targets(),
        )
    }

    /// Check what the types can't
    pub fn validate(&self) -> Result<(), TaskError> {
        if self.model.num_models() == 0 {
            return Err(TaskError::InvalidConfig(
                "ensemble needs at least one sub-model".to_string(),
            ));
        }

        if self.labels.is_empty() {
            return Err(TaskError::InvalidConfig(
                "ensemble needs at least one label target".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::components::{
        metric_reporters::IntentSlotMetricReporterConfig,
        models::{BaggingIntentSlotEnsembleConfig, JointModelConfig},
        TrainerConfig,
    };

    use super::*;

    #[test]
    fn test_example_config() {
        let config = EnsembleTaskConfig::example_config();

        assert_eq!(config.model.num_models(), 1);
        assert!(matches!(config.model, EnsembleModelConfig::BaggingDoc(_)));
        assert_eq!(config.labels, intent_slot_targets());
        assert_eq!(config.trainer, EnsembleTrainerConfig::new());
        assert_eq!(config.trainer.real_trainer, TrainerConfig::new());
        assert_eq!(
            config.metric_reporter,
            EnsembleMetricReporterConfig::Classification(ClassificationMetricReporterConfig::new())
        );
        assert_eq!(config.data_handler, JointModelDataHandlerConfig::new());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_intent_slot_ensemble() {
        let config = EnsembleTaskConfig::new(
            BaggingIntentSlotEnsembleConfig::new(vec![JointModelConfig::new(); 3]).into(),
            intent_slot_targets(),
        )
        .with_metric_reporter(EnsembleMetricReporterConfig::IntentSlot(
            IntentSlotMetricReporterConfig::new(),
        ));

        assert_eq!(config.model.num_models(), 3);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_empty_ensemble_is_invalid() {
        let config = EnsembleTaskConfig::new(
            BaggingDocEnsembleConfig::new(vec![]).into(),
            intent_slot_targets(),
        );

        assert_eq!(
            config.validate(),
            Err(TaskError::InvalidConfig(
                "ensemble needs at least one sub-model".to_string()
            ))
        );
    }

    #[test]
    fn test_missing_labels_are_invalid() {
        let config = EnsembleTaskConfig::new(
            BaggingDocEnsembleConfig::new(vec![DocModelConfig::new()]).into(),
            vec![],
        );

        assert!(matches!(
            config.validate(),
            Err(TaskError::InvalidConfig(_))
        ));
    }
}
