//! Incentive domain models, as published by the fundraising integration.

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};

use crate::amounts::Amount;

/// Kind of incentive a card represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IncentiveKind {
    Target,
    Milestone,
    Poll,
    Reward,
}

impl IncentiveKind {
    /// Icon marker drawn before the card title.
    pub fn icon(&self) -> &'static str {
        match self {
            IncentiveKind::Target => "bullseye",
            IncentiveKind::Milestone => "flag-fill",
            IncentiveKind::Poll => "bar-chart-fill",
            IncentiveKind::Reward => "star-fill",
        }
    }

    /// Section header shown above the cards of this kind.
    pub fn section_header(&self) -> &'static str {
        match self {
            IncentiveKind::Target => "Targets",
            IncentiveKind::Milestone => "Milestones",
            IncentiveKind::Poll => "Polls",
            IncentiveKind::Reward => "Rewards",
        }
    }
}

impl std::fmt::Display for IncentiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.section_header())
    }
}

/// A fundraising target with its own raised amount and optional deadline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: String,
    pub name: String,
    pub amount: Amount,
    pub amount_raised: Amount,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub ends_at: Option<DateTime<Utc>>,
}

/// A campaign-wide threshold, checked against the campaign total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub name: String,
    pub amount: Amount,
}

/// One option of a poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollOption {
    pub name: String,
    pub amount_raised: Amount,
}

/// A donation poll; options compete for a share of the poll's total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poll {
    pub id: String,
    pub name: String,
    pub amount_raised: Amount,
    #[serde(default)]
    pub options: Vec<PollOption>,
}

/// A donor reward, optionally limited in quantity and availability window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    pub id: String,
    pub name: String,
    pub amount: Amount,
    #[serde(default)]
    pub amount_raised: Option<Amount>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub quantity_remaining: Option<u32>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Reads an optional RFC 3339 timestamp.
///
/// An unparseable timestamp is logged and treated as absent so the rest of
/// the record still renders.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let Some(text) = raw.filter(|t| !t.trim().is_empty()) else {
        return Ok(None);
    };
    match DateTime::parse_from_rfc3339(text.trim()) {
        Ok(parsed) => Ok(Some(parsed.with_timezone(&Utc))),
        Err(e) => {
            warn!("Ignoring unparseable timestamp '{}': {}", text, e);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_deserialize_target() {
        let target: Target = serde_json::from_value(json!({
            "id": "t1",
            "name": "Speedrun",
            "amount": {"currency": "GBP", "value": "500.00"},
            "amount_raised": {"currency": "GBP", "value": "123.45"},
            "ends_at": "2026-10-20T18:00:00Z"
        }))
        .unwrap();
        assert_eq!(target.amount.value(), dec!(500));
        assert_eq!(target.amount_raised.value(), dec!(123.45));
        assert_eq!(
            target.ends_at,
            Some(Utc.with_ymd_and_hms(2026, 10, 20, 18, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_deserialize_target_without_deadline() {
        let target: Target = serde_json::from_value(json!({
            "id": "t2",
            "name": "Open ended",
            "amount": {"currency": "GBP", "value": 10},
            "amount_raised": {"currency": "GBP", "value": 0},
            "ends_at": null
        }))
        .unwrap();
        assert_eq!(target.ends_at, None);
    }

    #[test]
    fn test_bad_timestamp_is_dropped() {
        let target: Target = serde_json::from_value(json!({
            "id": "t3",
            "name": "Typo",
            "amount": {"currency": "GBP", "value": 10},
            "amount_raised": {"currency": "GBP", "value": 1},
            "ends_at": "next tuesday"
        }))
        .unwrap();
        assert_eq!(target.ends_at, None);
    }

    #[test]
    fn test_deserialize_reward_minimal() {
        let reward: Reward = serde_json::from_value(json!({
            "id": "r1",
            "name": "Shoutout",
            "amount": {"currency": "GBP", "value": "5"}
        }))
        .unwrap();
        assert_eq!(reward.amount_raised, None);
        assert_eq!(reward.quantity, None);
        assert_eq!(reward.quantity_remaining, None);
        assert_eq!(reward.starts_at, None);
        assert_eq!(reward.description, None);
    }

    #[test]
    fn test_deserialize_poll_options() {
        let poll: Poll = serde_json::from_value(json!({
            "id": "p1",
            "name": "Next game",
            "amount_raised": {"currency": "GBP", "value": "100"},
            "options": [
                {"name": "Tetris", "amount_raised": {"currency": "GBP", "value": "25"}},
                {"name": "Doom", "amount_raised": {"currency": "GBP", "value": "75"}}
            ]
        }))
        .unwrap();
        assert_eq!(poll.options.len(), 2);
        assert_eq!(poll.options[1].amount_raised.value(), dec!(75));
    }

    #[test]
    fn test_kind_markers() {
        assert_eq!(IncentiveKind::Target.icon(), "bullseye");
        assert_eq!(IncentiveKind::Reward.section_header(), "Rewards");
        assert_eq!(IncentiveKind::Milestone.to_string(), "Milestones");
    }
}
