//! Per-kind assembly of card view models.

use chrono::{DateTime, Utc};
use log::warn;

use super::incentives_view::{MilestoneView, PollOptionView, PollView, RewardView, TargetView};
use super::{IncentiveKind, Milestone, Poll, Reward, Target};
use crate::amounts::{format_amount, Amount};
use crate::constants::SUMMARY_SEPARATOR;
use crate::progress::Progress;
use crate::schedule::TemporalStatus;
use crate::settings::OverlayConfig;

/// Builds card view models for a single render pass.
///
/// Holds the display configuration and the instant the pass is rendered at,
/// so every card in the pass is classified against the same "now".
#[derive(Debug, Clone, Copy)]
pub struct IncentivePresenter<'a> {
    config: &'a OverlayConfig,
    now: DateTime<Utc>,
}

impl<'a> IncentivePresenter<'a> {
    pub fn new(config: &'a OverlayConfig, now: DateTime<Utc>) -> Self {
        Self { config, now }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn status(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> (TemporalStatus, String) {
        let status =
            TemporalStatus::classify_with_notice(start, end, self.now, self.config.end_notice());
        let text = status.label(self.config);
        (status, text)
    }

    pub fn present_target(&self, target: &Target) -> TargetView {
        let (status, status_text) = self.status(None, target.ends_at);
        let amounts = format!(
            "{} / {}",
            format_amount(&target.amount_raised),
            format_amount(&target.amount)
        );
        TargetView {
            id: target.id.clone(),
            kind: IncentiveKind::Target,
            name: target.name.clone(),
            progress: Progress::from_amounts(&target.amount_raised, &target.amount, &amounts),
            amounts,
            status,
            status_text,
        }
    }

    /// Milestones measure the campaign total, not a raised amount of their own.
    ///
    /// A milestone with an unparseable amount is never reached.
    pub fn present_milestone(&self, milestone: &Milestone, total: &Amount) -> MilestoneView {
        let label = format!(
            "{} / {}",
            format_amount(total),
            format_amount(&milestone.amount)
        );
        MilestoneView {
            id: milestone.id.clone(),
            kind: IncentiveKind::Milestone,
            name: milestone.name.clone(),
            reached: !milestone.amount.is_malformed()
                && total.value() >= milestone.amount.value(),
            progress: Progress::from_amounts(total, &milestone.amount, label),
        }
    }

    /// Each option's bar is its share of the poll total.
    pub fn present_poll(&self, poll: &Poll) -> PollView {
        let options = poll
            .options
            .iter()
            .map(|option| {
                let raised = format_amount(&option.amount_raised);
                let label = format!("{} {}", option.name, raised);
                PollOptionView {
                    name: option.name.clone(),
                    progress: Progress::from_amounts(
                        &option.amount_raised,
                        &poll.amount_raised,
                        label,
                    ),
                    raised,
                }
            })
            .collect();

        PollView {
            id: poll.id.clone(),
            kind: IncentiveKind::Poll,
            name: poll.name.clone(),
            total_text: format!("Total: {}", format_amount(&poll.amount_raised)),
            options,
        }
    }

    pub fn present_reward(&self, reward: &Reward) -> RewardView {
        let (status, status_text) = self.status(reward.starts_at, reward.ends_at);

        let raised = reward
            .amount_raised
            .clone()
            .unwrap_or_else(|| Amount::zero(reward.amount.currency.clone()));
        let raised_text = format!("Raised {}", format_amount(&raised));

        let remaining_text = match (reward.quantity_remaining, reward.quantity) {
            (Some(remaining), Some(quantity)) if remaining > 0 && quantity > 0 => {
                Some(format!("{}/{} remaining", remaining, quantity))
            }
            _ => None,
        };

        let mut parts = vec![raised_text.clone()];
        parts.extend(remaining_text.clone());
        if !status_text.is_empty() {
            parts.push(status_text.clone());
        }

        let degraded = [Some(&reward.amount), reward.amount_raised.as_ref()]
            .into_iter()
            .flatten()
            .filter_map(|amount| amount.malformed_text())
            .inspect(|raw| warn!("Reward '{}' has malformed amount '{}'", reward.id, raw))
            .count()
            > 0;

        RewardView {
            id: reward.id.clone(),
            kind: IncentiveKind::Reward,
            name: reward.name.clone(),
            headline: format!("{} for {}", reward.name, format_amount(&reward.amount)),
            raised_text,
            remaining_text,
            status,
            status_text,
            exhausted: is_reward_exhausted(reward, self.now),
            summary: parts.join(SUMMARY_SEPARATOR),
            description: reward.description.clone(),
            degraded,
        }
    }
}

/// A reward is exhausted when it is sold out or its end time has passed.
pub fn is_reward_exhausted(reward: &Reward, now: DateTime<Utc>) -> bool {
    let sold_out = reward.quantity_remaining == Some(0);
    let expired = reward.ends_at.is_some_and(|end| end < now);
    sold_out || expired
}
