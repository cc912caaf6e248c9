//! Schedule module - availability windows of incentives.

mod temporal_status;

pub use temporal_status::{classify, TemporalStatus};
