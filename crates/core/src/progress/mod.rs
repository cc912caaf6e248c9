//! Progress module - ratios shared by every incentive with a progress bar.

mod progress_model;

pub use progress_model::{percent, ratio, Progress};
