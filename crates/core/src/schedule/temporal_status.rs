//! Start/end window classification for incentive cards.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::END_NOTICE_HOURS;
use crate::settings::OverlayConfig;
use crate::utils::time_utils::format_time_date;

/// Where an incentive's availability window sits relative to "now".
///
/// Only imminent or concluded windows carry a label; an end time more than
/// the notice period away is deliberately left off the card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "at", rename_all = "camelCase")]
pub enum TemporalStatus {
    /// Nothing worth showing.
    #[default]
    Hidden,
    /// Not started yet; carries the start instant.
    Starts(DateTime<Utc>),
    /// Ends within the notice period; carries the end instant.
    Ends(DateTime<Utc>),
    /// Already over; carries the end instant.
    Ended(DateTime<Utc>),
}

impl TemporalStatus {
    /// Classifies a start/end pair using the given end-notice period.
    ///
    /// A future start wins over any end-based status. A missing start never
    /// yields [`TemporalStatus::Starts`].
    pub fn classify_with_notice(
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
        notice: Duration,
    ) -> Self {
        if let Some(start) = start {
            if start > now {
                return TemporalStatus::Starts(start);
            }
        }

        let Some(end) = end else {
            return TemporalStatus::Hidden;
        };

        match now.checked_add_signed(notice) {
            Some(cutoff) if cutoff < end => TemporalStatus::Hidden,
            _ if now < end => TemporalStatus::Ends(end),
            _ => TemporalStatus::Ended(end),
        }
    }

    /// Returns the lowercase state name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemporalStatus::Hidden => "hidden",
            TemporalStatus::Starts(_) => "starts",
            TemporalStatus::Ends(_) => "ends",
            TemporalStatus::Ended(_) => "ended",
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, TemporalStatus::Hidden)
    }

    /// Renders the status label, e.g. `Ends 18:00 19/10/2026`. Empty when hidden.
    pub fn label(&self, config: &OverlayConfig) -> String {
        match self {
            TemporalStatus::Hidden => String::new(),
            TemporalStatus::Starts(at) => format!("Starts {}", format_time_date(*at, config)),
            TemporalStatus::Ends(at) => format!("Ends {}", format_time_date(*at, config)),
            TemporalStatus::Ended(at) => format!("Ended {}", format_time_date(*at, config)),
        }
    }
}

/// Classifies a start/end pair with the standard 24 hour end notice.
pub fn classify(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> TemporalStatus {
    TemporalStatus::classify_with_notice(
        start,
        end,
        now,
        Duration::hours(i64::from(END_NOTICE_HOURS)),
    )
}
