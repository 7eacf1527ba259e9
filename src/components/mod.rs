/// Model configurations
pub mod models;

/// Data handler configurations
pub mod data_handlers;

/// Trainer configurations
pub mod trainers;

/// Metric reporter configurations
pub mod metric_reporters;

/// Model input (feature) configurations
pub mod features;

/// Optimizer and learning rate scheduler configurations
pub mod optim;

pub use features::FeatureConfig;
pub use optim::{OptimizerConfig, SchedulerConfig};
pub use trainers::{EnsembleTrainerConfig, HogwildTrainerConfig, TrainerConfig};
