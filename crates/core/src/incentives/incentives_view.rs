//! Card view models produced by the presenter.
//!
//! These are plain data: everything a renderer needs to lay out a card, with
//! every amount already formatted and every status already classified.

use serde::Serialize;

use super::IncentiveKind;
use crate::progress::Progress;
use crate::schedule::TemporalStatus;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetView {
    pub id: String,
    pub kind: IncentiveKind,
    pub name: String,
    /// `"{raised} / {goal}"`
    pub amounts: String,
    pub progress: Progress,
    pub status: TemporalStatus,
    pub status_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneView {
    pub id: String,
    pub kind: IncentiveKind,
    pub name: String,
    /// Campaign total has met this milestone
    pub reached: bool,
    pub progress: Progress,
}

impl MilestoneView {
    /// Badge text shown next to a reached milestone.
    pub fn badge(&self) -> Option<&'static str> {
        self.reached.then_some("REACHED")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PollOptionView {
    pub name: String,
    pub raised: String,
    /// Share of the poll total; label is `"{name} {raised}"`
    pub progress: Progress,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PollView {
    pub id: String,
    pub kind: IncentiveKind,
    pub name: String,
    /// `"Total: {raised}"`
    pub total_text: String,
    pub options: Vec<PollOptionView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardView {
    pub id: String,
    pub kind: IncentiveKind,
    pub name: String,
    /// `"{name} for {amount}"`
    pub headline: String,
    /// `"Raised {amount}"`
    pub raised_text: String,
    /// `"{remaining}/{quantity} remaining"` for limited rewards still in stock
    pub remaining_text: Option<String>,
    pub status: TemporalStatus,
    pub status_text: String,
    /// Sold out or past its end; rendered dimmed
    pub exhausted: bool,
    /// Second line of the card, parts joined with a bullet
    pub summary: String,
    pub description: Option<String>,
    pub degraded: bool,
}

impl RewardView {
    pub fn badge(&self) -> Option<&'static str> {
        self.exhausted.then_some("EXHAUSTED")
    }
}

/// A single card on the board.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "card", rename_all = "camelCase")]
pub enum CardView {
    Target(TargetView),
    Milestone(MilestoneView),
    Poll(PollView),
    Reward(RewardView),
}

impl CardView {
    pub fn kind(&self) -> IncentiveKind {
        match self {
            CardView::Target(_) => IncentiveKind::Target,
            CardView::Milestone(_) => IncentiveKind::Milestone,
            CardView::Poll(_) => IncentiveKind::Poll,
            CardView::Reward(_) => IncentiveKind::Reward,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            CardView::Target(view) => &view.id,
            CardView::Milestone(view) => &view.id,
            CardView::Poll(view) => &view.id,
            CardView::Reward(view) => &view.id,
        }
    }
}
