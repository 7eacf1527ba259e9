/// The standard single-process trainer
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct TrainerConfig {
    /// Number of epochs
    #[config(default = 10)]
    pub epochs: usize,

    /// Stop after this many epochs without improvement, 0 to disable
    #[config(default = 0)]
    pub early_stop_after: usize,

    /// Clip gradients to this norm
    pub max_clip_norm: Option<f32>,

    /// Compute metrics on the training set as well as the eval set
    #[config(default = true)]
    pub report_train_metrics: bool,
}

/// Trains each sub-model of an ensemble in turn with an inner trainer
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct EnsembleTrainerConfig {
    /// The trainer used for every sub-model
    #[config(default = "TrainerConfig::new()")]
    pub real_trainer: TrainerConfig,
}

/// Lock-free multi-worker trainer sharing one set of parameters
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct HogwildTrainerConfig {
    /// The trainer run by each worker
    #[config(default = "TrainerConfig::new()")]
    pub real_trainer: TrainerConfig,

    /// Number of worker processes
    #[config(default = 1)]
    pub num_workers: usize,
}
