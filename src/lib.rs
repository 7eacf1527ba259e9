//! # Burn NLP Tasks
#![forbid(unsafe_code)]

/// Collaborator configs: models, data handlers, trainers, metric reporters and features
pub mod components;

/// Label targets and their vocabularies
pub mod labels;

/// Task configs
pub mod tasks;

/// Turning model outputs into prediction records
pub mod prediction;

/// Training and evaluation through collaborator traits
pub mod training;

/// CLI indexes and utilities
pub mod cli;

/// Utilities
pub mod utils;
