/// The data handler interface
pub mod data_handler;

/// The trainer interface
pub mod trainer;

/// Single-model tasks
pub mod task;

/// Ensembles and ensemble tasks
pub mod ensemble;

#[cfg(test)]
pub(crate) mod testing;

pub use data_handler::DataHandler;
pub use ensemble::{Ensemble, EnsembleTask};
pub use task::Task;
pub use trainer::Trainer;
