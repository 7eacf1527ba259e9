use burn::tensor::{backend::Backend, Int, Tensor};

use crate::{
    components::{
        data_handlers::DocClassificationDataHandlerConfig,
        metric_reporters::ClassificationMetricReporterConfig, models::DocModelConfig,
        FeatureConfig, OptimizerConfig, SchedulerConfig, TrainerConfig,
    },
    labels::{DocLabelConfig, TargetMeta},
    prediction::{doc, Context, DocPrediction, FormatError, FormatPrediction},
};

/// Document classification: one class per document
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct DocClassificationTaskConfig {
    /// Model
    #[config(default = "DocModelConfig::new()")]
    pub model: DocModelConfig,

    /// Trainer
    #[config(default = "TrainerConfig::new()")]
    pub trainer: TrainerConfig,

    /// Model inputs
    #[config(default = "FeatureConfig::new()")]
    pub features: FeatureConfig,

    /// The document label
    #[config(default = "DocLabelConfig::new()")]
    pub labels: DocLabelConfig,

    /// Data handler
    #[config(default = "DocClassificationDataHandlerConfig::new()")]
    pub data_handler: DocClassificationDataHandlerConfig,

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

impl<B: Backend> FormatPrediction<B> for DocClassificationTaskConfig {
    type Predictions = Tensor<B, 1, Int>;
    type Scores = Tensor<B, 2>;
    type Meta = TargetMeta;
    type Record = DocPrediction;

    fn format_prediction<'a>(
        predictions: Self::Predictions,
        scores: Self::Scores,
        _context: &'a Context,
        target_meta: &'a Self::Meta,
    ) -> Result<impl Iterator<Item = Self::Record> + 'a, FormatError> {
        doc::format(predictions, scores, target_meta)
    }
}

#[cfg(test)]
mod tests {
    use burn::backend::NdArray;
    use pretty_assertions::assert_eq;

    use crate::{components::models::DocRepresentation, labels::Vocab};

    use super::*;

    #[test]
    fn test_defaults() {
        let config = DocClassificationTaskConfig::new();

        assert_eq!(config.model, DocModelConfig::new());
        assert_eq!(config.trainer, TrainerConfig::new());
        assert_eq!(config.labels, DocLabelConfig::new());
        assert_eq!(config.data_handler, DocClassificationDataHandlerConfig::new());
        assert_eq!(
            config.metric_reporter,
            ClassificationMetricReporterConfig::new()
        );
        assert_eq!(config.model.representation, DocRepresentation::BiLstmDocAttention);
    }

    #[test]
    fn test_overrides_keep_other_defaults() {
        let config = DocClassificationTaskConfig::new()
            .with_trainer(TrainerConfig::new().with_epochs(3))
            .with_model(DocModelConfig::new().with_representation(DocRepresentation::DocNn));

        assert_eq!(config.trainer.epochs, 3);
        assert_eq!(config.model.representation, DocRepresentation::DocNn);
        assert_eq!(config.labels, DocLabelConfig::new());
    }

    #[test]
    fn test_format_prediction() {
        let device = Default::default();
        let meta = TargetMeta::new(["POS", "NEG"].into_iter().collect::<Vocab>());

        let predictions = Tensor::<NdArray, 1, Int>::from_ints([0], &device);
        let scores = Tensor::<NdArray, 2>::from_floats([[0.9, 0.1]], &device);

        let records: Vec<_> =
            <DocClassificationTaskConfig as FormatPrediction<NdArray>>::format_prediction(
                predictions,
                scores,
                &Context::default(),
                &meta,
            )
            .unwrap()
            .collect();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].prediction, "POS");
        assert_eq!(records[0].score["POS"], 0.9);
        assert_eq!(records[0].score["NEG"], 0.1);
    }
}
