use burn::tensor::backend::Backend;

use crate::{
    components::{
        data_handlers::ContextualIntentSlotModelDataHandlerConfig,
        features::ContextualFeatureConfig, metric_reporters::IntentSlotMetricReporterConfig,
        models::ContextualIntentSlotModelConfig, OptimizerConfig, SchedulerConfig, TrainerConfig,
    },
    labels::{intent_slot_targets, TargetConfig},
    prediction::{Context, FormatError, FormatPrediction},
};

use super::{JointTextTaskConfig, TaskError};

/// Intent/slot prediction for an utterance given the conversation before it
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct ContextualIntentSlotTaskConfig {
    /// The intent and slot targets
    pub labels: Vec<TargetConfig>,

    /// Model inputs
    #[config(default = "ContextualFeatureConfig::new()")]
    pub features: ContextualFeatureConfig,

    /// Model
    #[config(default = "ContextualIntentSlotModelConfig::new()")]
    pub model: ContextualIntentSlotModelConfig,

    /// Trainer
    #[config(default = "TrainerConfig::new()")]
    pub trainer: TrainerConfig,

    /// Data handler
    #[config(default = "ContextualIntentSlotModelDataHandlerConfig::new()")]
    pub data_handler: ContextualIntentSlotModelDataHandlerConfig,

    /// Metric reporter
    #[config(default = "IntentSlotMetricReporterConfig::new()")]
    pub metric_reporter: IntentSlotMetricReporterConfig,

    /// Optimizer
    #[config(default = "OptimizerConfig::new()")]
    pub optimizer: OptimizerConfig,

    /// Learning rate scheduler
    #[config(default = "SchedulerConfig::new()")]
    pub scheduler: SchedulerConfig,
}

impl ContextualIntentSlotTaskConfig {
    /// A doc + word label configuration
    pub fn example_config() -> Self {
        Self::new(intent_slot_targets())
    }

    /// Check what the types can't
    pub fn validate(&self) -> Result<(), TaskError> {
        if self.labels.is_empty() {
            return Err(TaskError::InvalidConfig(
                "contextual_intent_slot needs at least one label target".to_string(),
            ));
        }

        Ok(())
    }
}

/// Outputs have the same shape as the joint model's
impl<B: Backend> FormatPrediction<B> for ContextualIntentSlotTaskConfig {
    type Predictions = <JointTextTaskConfig as FormatPrediction<B>>::Predictions;
    type Scores = <JointTextTaskConfig as FormatPrediction<B>>::Scores;
    type Meta = <JointTextTaskConfig as FormatPrediction<B>>::Meta;
    type Record = <JointTextTaskConfig as FormatPrediction<B>>::Record;

    fn format_prediction<'a>(
        predictions: Self::Predictions,
        scores: Self::Scores,
        context: &'a Context,
        target_meta: &'a Self::Meta,
    ) -> Result<impl Iterator<Item = Self::Record> + 'a, FormatError> {
        <JointTextTaskConfig as FormatPrediction<B>>::format_prediction(
            predictions,
            scores,
            context,
            target_meta,
        )
    }
}
