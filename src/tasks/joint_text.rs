use burn::tensor::{backend::Backend, Int, Tensor};

use crate::{
    components::{
        data_handlers::JointModelDataHandlerConfig,
        metric_reporters::IntentSlotMetricReporterConfig, models::JointModelConfig,
        FeatureConfig, OptimizerConfig, SchedulerConfig, TrainerConfig,
    },
    labels::{intent_slot_targets, JointTargetMeta, TargetConfig},
    prediction::{Context, FormatError, FormatPrediction, JointPrediction},
};

use super::{DocClassificationTaskConfig, TaskError, WordTaggingTaskConfig};

/// Joint intent classification and slot filling
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct JointTextTaskConfig {
    /// The intent and slot targets
    pub labels: Vec<TargetConfig>,

    /// Model
    #[config(default = "JointModelConfig::new()")]
    pub model: JointModelConfig,

    /// Trainer
    #[config(default = "TrainerConfig::new()")]
    pub trainer: TrainerConfig,

    /// Model inputs
    #[config(default = "FeatureConfig::new()")]
    pub features: FeatureConfig,

    /// Data handler
    #[config(default = "JointModelDataHandlerConfig::new()")]
    pub data_handler: JointModelDataHandlerConfig,

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

impl JointTextTaskConfig {
    /// A doc + word label configuration
    pub fn example_config() -> Self {
        Self::new(intent_slot_targets())
    }

    /// Check what the types can't
    pub fn validate(&self) -> Result<(), TaskError> {
        if self.labels.is_empty() {
            return Err(TaskError::InvalidConfig(
                "joint_text needs at least one label target".to_string(),
            ));
        }

        Ok(())
    }
}

impl<B: Backend> FormatPrediction<B> for JointTextTaskConfig {
    type Predictions = (Tensor<B, 1, Int>, Tensor<B, 2, Int>);
    type Scores = (Tensor<B, 2>, Tensor<B, 3>);
    type Meta = JointTargetMeta;
    type Record = JointPrediction;

    fn format_prediction<'a>(
        predictions: Self::Predictions,
        scores: Self::Scores,
        context: &'a Context,
        target_meta: &'a Self::Meta,
    ) -> Result<impl Iterator<Item = Self::Record> + 'a, FormatError> {
        let (doc_preds, word_preds) = predictions;
        let (doc_scores, word_scores) = scores;

        let [doc_count] = doc_preds.dims();
        let [word_count, _] = word_preds.dims();

        if word_count != doc_count {
            return Err(FormatError::LengthMismatch {
                field: "word predictions",
                expected: doc_count,
                actual: word_count,
            });
        }

        let intents = <DocClassificationTaskConfig as FormatPrediction<B>>::format_prediction(
            doc_preds,
            doc_scores,
            context,
            &target_meta.doc,
        )?;
        let slots = <WordTaggingTaskConfig as FormatPrediction<B>>::format_prediction(
            word_preds,
            word_scores,
            context,
            &target_meta.word,
        )?;

        Ok(intents
            .zip(slots)
            .map(|(intent, slot)| JointPrediction::new(intent, slot)))
    }
}
