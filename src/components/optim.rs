use burn::LearningRate;
use serde::{Deserialize, Serialize};

/// Optimizer algorithms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizerKind {
    /// Adam
    Adam,
    /// Stochastic gradient descent
    Sgd,
}

/// Optimizer settings shared by every task
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct OptimizerConfig {
    /// Algorithm
    #[config(default = "OptimizerKind::Adam")]
    pub kind: OptimizerKind,

    /// Initial learning rate
    #[config(default = 0.001)]
    pub lr: LearningRate,

    /// L2 penalty
    #[config(default = 0.0)]
    pub weight_decay: f64,

    /// Momentum, SGD only
    #[config(default = 0.0)]
    pub momentum: f64,
}

/// Learning rate schedules
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulerKind {
    /// Constant learning rate
    Constant,
    /// Decay by `gamma` every `step_size` epochs
    StepLr,
    /// Decay by `gamma` after `patience` epochs without improvement
    ReduceLrOnPlateau,
    /// Cosine annealing over `t_max` steps down to `eta_min`
    CosineAnnealingLr,
    /// Decay by `gamma` every epoch
    ExponentialLr,
}

/// Learning rate scheduler settings shared by every task
#[derive(burn::config::Config, Debug, PartialEq)]
pub struct SchedulerConfig {
    /// Schedule
    #[config(default = "SchedulerKind::Constant")]
    pub kind: SchedulerKind,

    /// Epochs between decays for `StepLr`
    #[config(default = 30)]
    pub step_size: usize,

    /// Decay factor
    #[config(default = 0.1)]
    pub gamma: f64,

    /// Epochs without improvement for `ReduceLrOnPlateau`
    #[config(default = 5)]
    pub patience: usize,

    /// Annealing period for `CosineAnnealingLr`
    #[config(default = 1000)]
    pub t_max: usize,

    /// Floor for `CosineAnnealingLr`
    #[config(default = 0.0)]
    pub eta_min: f64,
}
