/// Task names and the task index
pub mod tasks;
