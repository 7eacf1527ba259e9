/// Label configurations
pub mod config;

/// Target metadata and label vocabularies
pub mod meta;

pub use config::{intent_slot_targets, DocLabelConfig, TargetConfig, WordLabelConfig};
pub use meta::{JointTargetMeta, TargetMeta, Vocab};
