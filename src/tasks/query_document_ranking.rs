use crate::{
    components::{
        data_handlers::QueryDocumentPairwiseRankingDataHandlerConfig,
        features::QueryDocumentFeatureConfig,
        metric_reporters::PairwiseRankingMetricReporterConfig,
        models::QueryDocumentPairwiseRankingModelConfig, OptimizerConfig, SchedulerConfig,
        TrainerConfig,
    },
    labels::DocLabelConfig,
};

/// Rank a preferred response above a dispreferred one for the same query
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct QueryDocumentPairwiseRankingTaskConfig {
    /// Model inputs for the query and both responses
    #[config(default = "QueryDocumentFeatureConfig::new()")]
    pub features: QueryDocumentFeatureConfig,

    /// Model
    #[config(default = "QueryDocumentPairwiseRankingModelConfig::new()")]
    pub model: QueryDocumentPairwiseRankingModelConfig,

    /// Data handler
    #[config(default = "QueryDocumentPairwiseRankingDataHandlerConfig::new()")]
    pub data_handler: QueryDocumentPairwiseRankingDataHandlerConfig,

    /// Trainer
    #[config(default = "TrainerConfig::new()")]
    pub trainer: TrainerConfig,

    /// Ranking is learned from the response order, so no label is needed
    pub labels: Option<DocLabelConfig>,

    /// Metric reporter
    #[config(default = "PairwiseRankingMetricReporterConfig::new()")]
    pub metric_reporter: PairwiseRankingMetricReporterConfig,

    /// Optimizer
    #[config(default = "OptimizerConfig::new()")]
    pub optimizer: OptimizerConfig,

    /// Learning rate scheduler
    #[config(default = "SchedulerConfig::new()")]
    pub scheduler: SchedulerConfig,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = QueryDocumentPairwiseRankingTaskConfig::new();

        assert_eq!(config.labels, None);
        assert_eq!(config.model, QueryDocumentPairwiseRankingModelConfig::new());
        assert_eq!(
            config.metric_reporter,
            PairwiseRankingMetricReporterConfig::new()
        );
        assert_eq!(config.features.query, config.features.pos_response);
    }
}
