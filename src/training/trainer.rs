use crate::tasks::RunConfig;

/// Runs the training loop for one model at a time
pub trait Trainer {
    /// The batch type the trainer consumes
    type Batch;

    /// The model being trained
    type Model;

    /// Collects and reports metrics
    type MetricReporter;

    /// The optimizer
    type Optimizer;

    /// The learning rate scheduler
    type LrScheduler;

    /// Whatever the trainer reports when done, usually the best metric
    type Output;

    /// Train one model, evaluating as it goes
    #[allow(clippy::too_many_arguments)]
    fn train_single_model<I, E>(
        &self,
        train_iter: I,
        eval_iter: E,
        model: &mut Self::Model,
        metric_reporter: &Self::MetricReporter,
        run_config: &RunConfig,
        optimizer: &mut Self::Optimizer,
        lr_scheduler: &mut Self::LrScheduler,
    ) -> anyhow::Result<Self::Output>
    where
        I: Iterator<Item = Self::Batch>,
        E: Iterator<Item = Self::Batch>;

    /// Evaluate a trained model
    fn test<I>(
        &self,
        test_iter: I,
        model: &Self::Model,
        metric_reporter: &Self::MetricReporter,
    ) -> anyhow::Result<Self::Output>
    where
        I: Iterator<Item = Self::Batch>;
}
