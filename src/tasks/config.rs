use std::path::Path;

use burn::config::Config as _;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    cli::tasks::TaskName,
    labels::{TargetConfig, TargetMeta},
};

use super::{
    ContextualIntentSlotTaskConfig, DocClassificationTaskConfig, EnsembleTaskConfig,
    JointTextTaskConfig, KdDocClassificationTaskConfig, LmTaskConfig,
    PairClassificationTaskConfig, QueryDocumentPairwiseRankingTaskConfig,
    SemanticParsingTaskConfig, SeqNnTaskConfig, TaskError, WordTaggingTaskConfig,
};

/// Any task's configuration, tagged with the task name
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskConfig {
    /// Document classification
    DocClassification(DocClassificationTaskConfig),
    /// Word tagging
    WordTagging(WordTaggingTaskConfig),
    /// Joint intent/slot
    JointText(JointTextTaskConfig),
    /// Contextual intent/slot
    ContextualIntentSlot(ContextualIntentSlotTaskConfig),
    /// Language modeling
    LanguageModel(LmTaskConfig),
    /// Text pair classification
    PairClassification(PairClassificationTaskConfig),
    /// Query/document pairwise ranking
    QueryDocumentPairwiseRanking(QueryDocumentPairwiseRankingTaskConfig),
    /// Utterance sequence classification
    SeqNn(SeqNnTaskConfig),
    /// Compositional semantic parsing
    SemanticParsing(SemanticParsingTaskConfig),
    /// Knowledge-distillation document classification
    KdDocClassification(KdDocClassificationTaskConfig),
    /// Model ensembles
    Ensemble(EnsembleTaskConfig),
}

impl burn::config::Config for TaskConfig {}

impl TaskConfig {
    /// The name that identifies this task
    pub fn name(&self) -> TaskName {
        match self {
            TaskConfig::DocClassification(_) => TaskName::DocClassification,
            TaskConfig::WordTagging(_) => TaskName::WordTagging,
            TaskConfig::JointText(_) => TaskName::JointText,
            TaskConfig::ContextualIntentSlot(_) => TaskName::ContextualIntentSlot,
            TaskConfig::LanguageModel(_) => TaskName::LanguageModel,
            TaskConfig::PairClassification(_) => TaskName::PairClassification,
            TaskConfig::QueryDocumentPairwiseRanking(_) => TaskName::QueryDocumentPairwiseRanking,
            TaskConfig::SeqNn(_) => TaskName::SeqNn,
            TaskConfig::SemanticParsing(_) => TaskName::SemanticParsing,
            TaskConfig::KdDocClassification(_) => TaskName::KdDocClassification,
            TaskConfig::Ensemble(_) => TaskName::Ensemble,
        }
    }

    /// The task's default config, or `None` when the task has fields without a safe default
    pub fn default_for(name: TaskName) -> Option<Self> {
        (!name.has_required_fields()).then(|| Self::example_for(name))
    }

    /// A complete, valid config for the task, filling required fields with typical choices
    pub fn example_for(name: TaskName) -> Self {
        match name {
            TaskName::DocClassification => DocClassificationTaskConfig::new().into(),
            TaskName::WordTagging => WordTaggingTaskConfig::new().into(),
            TaskName::JointText => JointTextTaskConfig::example_config().into(),
            TaskName::ContextualIntentSlot => {
                ContextualIntentSlotTaskConfig::example_config().into()
            }
            TaskName::LanguageModel => LmTaskConfig::new().into(),
            TaskName::PairClassification => PairClassificationTaskConfig::new().into(),
            TaskName::QueryDocumentPairwiseRanking => {
                QueryDocumentPairwiseRankingTaskConfig::new().into()
            }
            TaskName::SeqNn => SeqNnTaskConfig::new().into(),
            TaskName::SemanticParsing => SemanticParsingTaskConfig::new().into(),
            TaskName::KdDocClassification => KdDocClassificationTaskConfig::new().into(),
            TaskName::Ensemble => EnsembleTaskConfig::example_config().into(),
        }
    }

    /// The label targets, normalized into an ordered list
    pub fn labels(&self) -> Vec<TargetConfig> {
        match self {
            TaskConfig::DocClassification(config) => vec![config.labels.clone().into()],
            TaskConfig::WordTagging(config) => vec![config.labels.clone().into()],
            TaskConfig::JointText(config) => config.labels.clone(),
            TaskConfig::ContextualIntentSlot(config) => config.labels.clone(),
            TaskConfig::LanguageModel(config) => {
                config.labels.iter().cloned().map(Into::into).collect()
            }
            TaskConfig::PairClassification(config) => vec![config.labels.clone().into()],
            TaskConfig::QueryDocumentPairwiseRanking(config) => {
                config.labels.iter().cloned().map(Into::into).collect()
            }
            TaskConfig::SeqNn(config) => vec![config.labels.clone().into()],
            TaskConfig::SemanticParsing(config) => {
                config.labels.iter().cloned().map(Into::into).collect()
            }
            TaskConfig::KdDocClassification(config) => vec![config.labels.clone().into()],
            TaskConfig::Ensemble(config) => config.labels.clone(),
        }
    }

    /// Check the constraints the types can't express
    pub fn validate(&self) -> Result<(), TaskError> {
        debug!("Validating {} task config", self.name());

        match self {
            TaskConfig::JointText(config) => config.validate(),
            TaskConfig::ContextualIntentSlot(config) => config.validate(),
            TaskConfig::SemanticParsing(config) => config.validate(),
            TaskConfig::Ensemble(config) => config.validate(),
            _ => Ok(()),
        }
    }

    /// Parse a task config from JSON, reporting shape errors as invalid configs
    pub fn from_json(json: &str) -> Result<Self, TaskError> {
        serde_json::from_str(json).map_err(|e| TaskError::InvalidConfig(e.to_string()))
    }
}

macro_rules! task_config_from {
    ($($variant:ident($config:ty)),* $(,)?) => {
        $(
            impl From<$config> for TaskConfig {
                fn from(config: $config) -> Self {
                    TaskConfig::$variant(config)
                }
            }
        )*
    };
}

task_config_from!(
    DocClassification(DocClassificationTaskConfig),
    WordTagging(WordTaggingTaskConfig),
    JointText(JointTextTaskConfig),
    ContextualIntentSlot(ContextualIntentSlotTaskConfig),
    LanguageModel(LmTaskConfig),
    PairClassification(PairClassificationTaskConfig),
    QueryDocumentPairwiseRanking(QueryDocumentPairwiseRankingTaskConfig),
    SeqNn(SeqNnTaskConfig),
    SemanticParsing(SemanticParsingTaskConfig),
    KdDocClassification(KdDocClassificationTaskConfig),
    Ensemble(EnsembleTaskConfig),
);

/// Top-level settings for one training or evaluation run
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct RunConfig {
    /// The task to run
    pub task: TaskConfig,

    /// Train on a GPU when one is present
    #[config(default = true)]
    pub use_cuda_if_available: bool,

    /// Number of data-parallel workers
    #[config(default = 1)]
    pub distributed_world_size: usize,

    /// Where the trained model is written
    #[config(default = "\"/tmp/model.pt\".to_string()")]
    pub save_snapshot_path: String,

    /// Resume from this snapshot
    pub load_snapshot_path: Option<String>,

    /// Where test predictions are written
    #[config(default = "\"/tmp/test_out.txt\".to_string()")]
    pub test_out_path: String,

    /// Where debug information is written
    #[config(default = "\"/tmp/model.debug\".to_string()")]
    pub debug_path: String,
}

impl RunConfig {
    /// Load and validate a run config from a JSON file
    pub fn load_validated(path: impl AsRef<Path>) -> Result<Self, TaskError> {
        let path = path.as_ref();

        let config = Self::load(path).map_err(|e| {
            TaskError::InvalidConfig(format!("unable to load {}: {}", path.display(), e))
        })?;

        config.validate()?;

        info!(
            "Loaded {} run config from {}",
            config.task.name(),
            path.display()
        );

        Ok(config)
    }

    /// Load target metadata from one label file per label target, in target order
    pub async fn load_target_meta<P: AsRef<Path>>(
        &self,
        paths: &[P],
    ) -> Result<Vec<TargetMeta>, TaskError> {
        let targets = self.task.labels();

        if paths.len() != targets.len() {
            return Err(TaskError::InvalidConfig(format!(
                "{} has {} label targets but {} label files were given",
                self.task.name(),
                targets.len(),
                paths.len()
            )));
        }

        let mut metas = Vec::with_capacity(paths.len());

        for (target, path) in targets.iter().zip(paths) {
            let path = path.as_ref();

            let meta = TargetMeta::load(path).await.map_err(|e| {
                TaskError::InvalidConfig(format!("unable to load {}: {}", path.display(), e))
            })?;

            if meta.vocab.is_empty() {
                return Err(TaskError::InvalidConfig(format!(
                    "{} has no labels",
                    path.display()
                )));
            }

            debug!(
                "Loaded {} labels for {} from {}",
                meta.vocab.len(),
                target.export_output_name(),
                path.display()
            );

            metas.push(meta);
        }

        Ok(metas)
    }

    /// Check the constraints the types can't express
    pub fn validate(&self) -> Result<(), TaskError> {
        if self.distributed_world_size == 0 {
            return Err(TaskError::InvalidConfig(
                "distributed_world_size must be at least 1".to_string(),
            ));
        }

        self.task.validate()
    }
}
