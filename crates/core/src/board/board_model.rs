//! Snapshot and replicant models consumed by the incentive board.

use std::str::FromStr;

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::amounts::Amount;
use crate::constants::REPLICANT_NAMESPACE;
use crate::errors::{Error, Result, ValidationError};
use crate::incentives::{Milestone, Poll, Reward, Target};

/// Names of the replicants published under [`REPLICANT_NAMESPACE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplicantName {
    Targets,
    Milestones,
    Polls,
    Rewards,
    Total,
}

impl ReplicantName {
    pub const ALL: [ReplicantName; 5] = [
        ReplicantName::Targets,
        ReplicantName::Milestones,
        ReplicantName::Polls,
        ReplicantName::Rewards,
        ReplicantName::Total,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReplicantName::Targets => "targets",
            ReplicantName::Milestones => "milestones",
            ReplicantName::Polls => "polls",
            ReplicantName::Rewards => "rewards",
            ReplicantName::Total => "total",
        }
    }

    /// Fully qualified name, e.g. `nodecg-tiltify:targets`.
    pub fn qualified(&self) -> String {
        format!("{}:{}", REPLICANT_NAMESPACE, self.as_str())
    }
}

impl std::fmt::Display for ReplicantName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReplicantName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.strip_prefix(REPLICANT_NAMESPACE).map_or(s, |rest| {
            rest.strip_prefix(':').unwrap_or(rest)
        });
        ReplicantName::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == name)
            .ok_or_else(|| ValidationError::UnknownReplicant(s.to_string()).into())
    }
}

/// The latest value of every replicant the board reads.
///
/// Streams that have not delivered yet hold their defaults: empty lists and
/// a zero GBP total.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IncentiveSnapshot {
    pub targets: Vec<Target>,
    pub milestones: Vec<Milestone>,
    pub polls: Vec<Poll>,
    pub rewards: Vec<Reward>,
    pub total: Amount,
}

/// A new value for one replicant. `None` means the replicant was cleared.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplicantUpdate {
    Targets(Option<Vec<Target>>),
    Milestones(Option<Vec<Milestone>>),
    Polls(Option<Vec<Poll>>),
    Rewards(Option<Vec<Reward>>),
    Total(Option<Amount>),
}

impl ReplicantUpdate {
    pub fn name(&self) -> ReplicantName {
        match self {
            ReplicantUpdate::Targets(_) => ReplicantName::Targets,
            ReplicantUpdate::Milestones(_) => ReplicantName::Milestones,
            ReplicantUpdate::Polls(_) => ReplicantName::Polls,
            ReplicantUpdate::Rewards(_) => ReplicantName::Rewards,
            ReplicantUpdate::Total(_) => ReplicantName::Total,
        }
    }

    /// Decodes a raw replicant payload.
    ///
    /// List replicants are decoded record by record: a record that fails to
    /// decode is logged and skipped so its siblings still render. A payload
    /// that is not a list at all is rejected.
    pub fn from_json(name: ReplicantName, payload: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(payload)
            .map_err(|e| Error::replicant(name.as_str(), e.to_string()))?;
        Self::from_value(name, value)
    }

    pub fn from_value(name: ReplicantName, value: Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::cleared(name));
        }
        let update = match name {
            ReplicantName::Targets => ReplicantUpdate::Targets(Some(decode_list(name, value)?)),
            ReplicantName::Milestones => {
                ReplicantUpdate::Milestones(Some(decode_list(name, value)?))
            }
            ReplicantName::Polls => ReplicantUpdate::Polls(Some(decode_list(name, value)?)),
            ReplicantName::Rewards => ReplicantUpdate::Rewards(Some(decode_list(name, value)?)),
            ReplicantName::Total => ReplicantUpdate::Total(Some(
                serde_json::from_value(value)
                    .map_err(|e| Error::replicant(name.as_str(), e.to_string()))?,
            )),
        };
        Ok(update)
    }

    fn cleared(name: ReplicantName) -> Self {
        match name {
            ReplicantName::Targets => ReplicantUpdate::Targets(None),
            ReplicantName::Milestones => ReplicantUpdate::Milestones(None),
            ReplicantName::Polls => ReplicantUpdate::Polls(None),
            ReplicantName::Rewards => ReplicantUpdate::Rewards(None),
            ReplicantName::Total => ReplicantUpdate::Total(None),
        }
    }
}

fn decode_list<T: DeserializeOwned>(name: ReplicantName, value: Value) -> Result<Vec<T>> {
    let Value::Array(items) = value else {
        return Err(Error::replicant(name.as_str(), "expected a list"));
    };
    let total = items.len();
    let decoded: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<T>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping {} record #{}: {}", name, index, e);
                None
            }
        })
        .collect();
    if decoded.len() < total {
        warn!(
            "Decoded {} of {} {} records",
            decoded.len(),
            total,
            name
        );
    }
    Ok(decoded)
}

/// Explicit state of the milestone "Show All / Show Less" button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneToggle {
    show_all: bool,
}

impl MilestoneToggle {
    pub fn new(show_all: bool) -> Self {
        Self { show_all }
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    /// Flips the toggle and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.show_all = !self.show_all;
        self.show_all
    }

    /// Button label offering the opposite of the current state.
    pub fn label(&self) -> &'static str {
        if self.show_all {
            "Show Less"
        } else {
            "Show All"
        }
    }
}
