use derive_new::new;
use log::info;

use crate::tasks::{RunConfig, TaskError};

use super::{DataHandler, Trainer};

/// A runnable task: one model together with the collaborators that train and evaluate it
#[derive(new)]
pub struct Task<H, T: Trainer> {
    /// Data handler
    pub data_handler: H,

    /// Model
    pub model: T::Model,

    /// Trainer
    pub trainer: T,

    /// Metric reporter
    pub metric_reporter: T::MetricReporter,

    /// Optimizer
    pub optimizer: T::Optimizer,

    /// Learning rate scheduler
    pub lr_scheduler: T::LrScheduler,
}

impl<H, T> Task<H, T>
where
    H: DataHandler,
    T: Trainer<Batch = H::Batch>,
{
    /// Train the model on the `rank` partition of the training data
    pub fn train(
        &mut self,
        run_config: &RunConfig,
        rank: usize,
        world_size: usize,
    ) -> anyhow::Result<T::Output> {
        check_partition(rank, world_size)?;

        info!("Training on partition {} of {}", rank, world_size);

        let train_iter = self.data_handler.get_train_iter(rank, world_size)?;
        let eval_iter = self.data_handler.get_eval_iter()?;

        self.trainer.train_single_model(
            train_iter,
            eval_iter,
            &mut self.model,
            &self.metric_reporter,
            run_config,
            &mut self.optimizer,
            &mut self.lr_scheduler,
        )
    }

    /// Evaluate the model on the test data
    pub fn test(&self) -> anyhow::Result<T::Output> {
        let test_iter = self.data_handler.get_test_iter()?;

        self.trainer
            .test(test_iter, &self.model, &self.metric_reporter)
    }
}

/// Reject partitions that don't exist
pub(crate) fn check_partition(rank: usize, world_size: usize) -> Result<(), TaskError> {
    if world_size == 0 || rank >= world_size {
        return Err(TaskError::InvalidPartition { rank, world_size });
    }

    Ok(())
}
