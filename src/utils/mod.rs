/// File utilities
pub mod files;

/// Utilities for class labels
pub mod classes;
