//! Incentives Core - presentation-state derivation for fundraising overlays.
//!
//! This crate turns raw incentive snapshots (targets, milestones, polls,
//! rewards and the campaign total) into bounded, stable card view models.
//! It performs no I/O: snapshots are injected by the caller and every
//! derivation is a pure function of the snapshot, the render instant and the
//! milestone show-all toggle.

pub mod amounts;
pub mod board;
pub mod constants;
pub mod errors;
pub mod incentives;
pub mod progress;
pub mod schedule;
pub mod settings;
pub mod utils;

// Re-export the types most callers need
pub use amounts::{format_amount, Amount, AmountValue};
pub use board::{BoardView, IncentiveBoard, IncentiveSnapshot, ReplicantName, ReplicantUpdate};
pub use incentives::{IncentiveKind, IncentivePresenter, Milestone, Poll, PollOption, Reward, Target};
pub use schedule::TemporalStatus;
pub use settings::OverlayConfig;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
