//! Incentive board module.
//!
//! The board is the top of the derivation pipeline:
//!
//! ```text
//! replicant snapshots → IncentiveBoard → IncentivePresenter (per card)
//!                                              ↓
//!                              TemporalStatus / Progress (pure)
//!                                              ↓
//!                                          BoardView
//! ```
//!
//! - **Models** (`board_model.rs`) - Snapshots, replicant updates, the show-all toggle
//! - **Service** (`board_service.rs`) - Holds the latest snapshot and renders it
//! - **View** (`board_view.rs`) - Rendered sections and their plain-text form

mod board_model;
mod board_service;
mod board_view;


pub use board_model::{IncentiveSnapshot, MilestoneToggle, ReplicantName, ReplicantUpdate};
pub use board_service::IncentiveBoard;
pub use board_view::{BoardView, SectionView, ToggleView};
