//! Incentives module - domain models, milestone windowing and card presenters.

mod incentives_model;
mod incentives_presenter;
mod incentives_view;
mod milestone_window;

pub use incentives_model::{IncentiveKind, Milestone, Poll, PollOption, Reward, Target};
pub use incentives_presenter::{is_reward_exhausted, IncentivePresenter};
pub use incentives_view::{
    CardView, MilestoneView, PollOptionView, PollView, RewardView, TargetView,
};
pub use milestone_window::{select_milestones, window_start};
