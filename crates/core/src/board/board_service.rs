//! The incentive board: latest snapshots in, rendered sections out.

use chrono::{DateTime, Utc};
use log::debug;

use super::board_model::{IncentiveSnapshot, MilestoneToggle, ReplicantName, ReplicantUpdate};
use super::board_view::{BoardView, SectionView, ToggleView};
use crate::amounts::Amount;
use crate::errors::Result;
use crate::incentives::{select_milestones, CardView, IncentiveKind, IncentivePresenter};
use crate::settings::OverlayConfig;

/// Aggregates the five replicant snapshots and renders one section per kind.
///
/// The board owns exactly one piece of local state, the milestone show-all
/// toggle. It is flipped only by [`IncentiveBoard::toggle_milestones`] and
/// survives snapshot updates.
#[derive(Debug, Clone)]
pub struct IncentiveBoard {
    config: OverlayConfig,
    snapshot: IncentiveSnapshot,
    milestone_toggle: MilestoneToggle,
}

impl Default for IncentiveBoard {
    fn default() -> Self {
        Self::new(OverlayConfig::default())
    }
}

impl IncentiveBoard {
    pub fn new(config: OverlayConfig) -> Self {
        let snapshot = IncentiveSnapshot {
            total: Amount::zero(config.default_currency.clone()),
            ..IncentiveSnapshot::default()
        };
        Self {
            config,
            snapshot,
            milestone_toggle: MilestoneToggle::default(),
        }
    }

    pub fn with_snapshot(config: OverlayConfig, snapshot: IncentiveSnapshot) -> Self {
        Self {
            config,
            snapshot,
            milestone_toggle: MilestoneToggle::default(),
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn snapshot(&self) -> &IncentiveSnapshot {
        &self.snapshot
    }

    pub fn milestone_toggle(&self) -> MilestoneToggle {
        self.milestone_toggle
    }

    /// Replaces every stream at once. The show-all toggle is kept.
    pub fn replace_snapshot(&mut self, snapshot: IncentiveSnapshot) {
        self.snapshot = snapshot;
    }

    /// Applies a new value for a single replicant.
    pub fn apply(&mut self, update: ReplicantUpdate) {
        debug!("Applying {} update", update.name());
        match update {
            ReplicantUpdate::Targets(targets) => {
                self.snapshot.targets = targets.unwrap_or_default();
            }
            ReplicantUpdate::Milestones(milestones) => {
                self.snapshot.milestones = milestones.unwrap_or_default();
            }
            ReplicantUpdate::Polls(polls) => {
                self.snapshot.polls = polls.unwrap_or_default();
            }
            ReplicantUpdate::Rewards(rewards) => {
                self.snapshot.rewards = rewards.unwrap_or_default();
            }
            ReplicantUpdate::Total(total) => {
                self.snapshot.total =
                    total.unwrap_or_else(|| Amount::zero(self.config.default_currency.clone()));
            }
        }
    }

    /// Decodes and applies a raw replicant payload.
    ///
    /// On error the previous value of that replicant is kept.
    pub fn apply_json(&mut self, name: ReplicantName, payload: &str) -> Result<()> {
        let update = ReplicantUpdate::from_json(name, payload)?;
        self.apply(update);
        Ok(())
    }

    /// User action on the milestone header button. Returns the new state.
    pub fn toggle_milestones(&mut self) -> bool {
        self.milestone_toggle.toggle()
    }

    /// Renders every section against the given instant.
    pub fn render(&self, now: DateTime<Utc>) -> BoardView {
        let presenter = IncentivePresenter::new(&self.config, now);
        let snapshot = &self.snapshot;

        let targets: Vec<CardView> = snapshot
            .targets
            .iter()
            .map(|target| CardView::Target(presenter.present_target(target)))
            .collect();

        let milestones: Vec<CardView> = select_milestones(
            &snapshot.milestones,
            &snapshot.total,
            self.milestone_toggle.show_all(),
        )
        .into_iter()
        .map(|milestone| {
            CardView::Milestone(presenter.present_milestone(milestone, &snapshot.total))
        })
        .collect();
        let mut milestone_section = SectionView::new(IncentiveKind::Milestone, milestones);
        milestone_section.toggle = Some(ToggleView {
            expanded: self.milestone_toggle.show_all(),
            label: self.milestone_toggle.label().to_string(),
        });

        let polls: Vec<CardView> = snapshot
            .polls
            .iter()
            .map(|poll| CardView::Poll(presenter.present_poll(poll)))
            .collect();

        let rewards: Vec<CardView> = snapshot
            .rewards
            .iter()
            .map(|reward| CardView::Reward(presenter.present_reward(reward)))
            .collect();

        BoardView {
            sections: vec![
                SectionView::new(IncentiveKind::Target, targets),
                milestone_section,
                SectionView::new(IncentiveKind::Poll, polls),
                SectionView::new(IncentiveKind::Reward, rewards),
            ],
        }
    }

    /// Renders against the current wall-clock time.
    pub fn render_now(&self) -> BoardView {
        self.render(Utc::now())
    }
}
