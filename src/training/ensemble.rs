use derive_new::new;
use log::info;

use crate::tasks::{RunConfig, TaskError};

use super::{task::check_partition, DataHandler, Trainer};

/// An ordered collection of independently trained sub-models
#[derive(Debug, Clone, PartialEq, new)]
pub struct Ensemble<M> {
    /// The sub-models, addressed by index
    pub models: Vec<M>,
}

impl<M> Ensemble<M> {
    /// The number of sub-models
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the ensemble has no sub-models
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl<M> FromIterator<M> for Ensemble<M> {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A task whose model is an ensemble. Sub-models share the data handler, trainer, metric
/// reporter, optimizer and scheduler, and are trained one at a time.
#[derive(new)]
pub struct EnsembleTask<H, T: Trainer> {
    /// Data handler
    pub data_handler: H,

    /// The ensemble
    pub model: Ensemble<T::Model>,

    /// Trainer
    pub trainer: T,

    /// Metric reporter
    pub metric_reporter: T::MetricReporter,

    /// Optimizer
    pub optimizer: T::Optimizer,

    /// Learning rate scheduler
    pub lr_scheduler: T::LrScheduler,
}

impl<H, T> EnsembleTask<H, T>
where
    H: DataHandler,
    T: Trainer<Batch = H::Batch>,
{
    /// Train the sub-model at `model_id`, leaving its siblings untouched
    pub fn train_single_model(
        &mut self,
        run_config: &RunConfig,
        model_id: usize,
        rank: usize,
        world_size: usize,
    ) -> anyhow::Result<T::Output> {
        let num_models = self.model.len();

        let model = self
            .model
            .models
            .get_mut(model_id)
            .ok_or(TaskError::ModelOutOfRange {
                model_id,
                num_models,
            })?;

        check_partition(rank, world_size)?;

        info!(
            "Training ensemble model {} of {} on partition {} of {}",
            model_id + 1,
            num_models,
            rank,
            world_size
        );

        let train_iter = self.data_handler.get_train_iter(rank, world_size)?;
        let eval_iter = self.data_handler.get_eval_iter()?;

        self.trainer.train_single_model(
            train_iter,
            eval_iter,
            model,
            &self.metric_reporter,
            run_config,
            &mut self.optimizer,
            &mut self.lr_scheduler,
        )
    }

    /// Train every sub-model in order, stopping at the first failure
    pub fn train(
        &mut self,
        run_config: &RunConfig,
        rank: usize,
        world_size: usize,
    ) -> anyhow::Result<Vec<T::Output>> {
        (0..self.model.len())
            .map(|model_id| self.train_single_model(run_config, model_id, rank, world_size))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        components::models::{BaggingDocEnsembleConfig, DocModelConfig},
        labels::intent_slot_targets,
        tasks::EnsembleTaskConfig,
        training::testing::{FakeHandler, FakeTrainer},
    };

    use super::*;

    fn ensemble_task(num_models: usize) -> EnsembleTask<FakeHandler, FakeTrainer> {
        EnsembleTask::new(
            FakeHandler::new(vec![0, 1, 2, 3]),
            (0..num_models).map(|_| vec![]).collect(),
            FakeTrainer::new(),
            (),
            0,
            0,
        )
    }

    fn run_config() -> RunConfig {
        RunConfig::new(
            EnsembleTaskConfig::new(
                BaggingDocEnsembleConfig::new(vec![DocModelConfig::new(); 3]).into(),
                intent_slot_targets(),
            )
            .into(),
        )
    }

    #[test]
    fn test_train_single_model() -> anyhow::Result<()> {
        let mut task = ensemble_task(3);

        let output = task.train_single_model(&run_config(), 1, 0, 1)?;

        assert_eq!(output, 4);
        assert_eq!(task.model.models, vec![vec![], vec![0, 1, 2, 3], vec![]]);
        assert_eq!(task.trainer.calls(), 1);
        assert_eq!(task.data_handler.calls(), vec!["train 0/1", "eval"]);

        Ok(())
    }

    #[test]
    fn test_rank_and_world_size_are_forwarded() -> anyhow::Result<()> {
        let mut task = ensemble_task(2);

        task.train_single_model(&run_config(), 0, 1, 2)?;

        assert_eq!(task.model.models[0], vec![1, 3]);
        assert_eq!(task.data_handler.calls(), vec!["train 1/2", "eval"]);

        Ok(())
    }

    #[test]
    fn test_model_out_of_range() {
        let mut task = ensemble_task(3);

        let err = task
            .train_single_model(&run_config(), 5, 0, 1)
            .expect_err("model 5 doesn't exist");

        assert_eq!(
            err.downcast_ref::<TaskError>(),
            Some(&TaskError::ModelOutOfRange {
                model_id: 5,
                num_models: 3
            })
        );
        assert_eq!(task.trainer.calls(), 0);
        assert!(task.data_handler.calls().is_empty());
        assert!(task.model.models.iter().all(Vec::is_empty));
    }

    #[test]
    fn test_empty_ensemble() {
        let mut task = ensemble_task(0);

        let err = task
            .train_single_model(&run_config(), 0, 0, 1)
            .expect_err("no models to train");

        assert_eq!(
            err.downcast_ref::<TaskError>(),
            Some(&TaskError::ModelOutOfRange {
                model_id: 0,
                num_models: 0
            })
        );
        assert_eq!(task.train(&run_config(), 0, 1).ok(), Some(vec![]));
    }

    #[test]
    fn test_invalid_partition() {
        let mut task = ensemble_task(2);

        let err = task
            .train_single_model(&run_config(), 0, 2, 2)
            .expect_err("rank 2 doesn't exist");

        assert_eq!(
            err.downcast_ref::<TaskError>(),
            Some(&TaskError::InvalidPartition {
                rank: 2,
                world_size: 2
            })
        );
        assert_eq!(task.trainer.calls(), 0);
    }

    #[test]
    fn test_train_all_models() -> anyhow::Result<()> {
        let mut task = ensemble_task(3);

        let outputs = task.train(&run_config(), 0, 1)?;

        assert_eq!(outputs, vec![4, 4, 4]);
        assert_eq!(task.trainer.calls(), 3);
        assert_eq!(task.optimizer, 12);
        assert_eq!(task.lr_scheduler, 3);
        assert!(task
            .model
            .models
            .iter()
            .all(|model| model == &vec![0, 1, 2, 3]));

        Ok(())
    }

    #[test]
    fn test_train_stops_at_the_first_failure() {
        let mut task = EnsembleTask::new(
            FakeHandler::new(vec![0, 1]),
            Ensemble::new(vec![vec![], vec![]]),
            FakeTrainer::failing(),
            (),
            0,
            0,
        );

        assert!(task.train(&run_config(), 0, 1).is_err());
        assert_eq!(task.trainer.calls(), 1);
    }
}
