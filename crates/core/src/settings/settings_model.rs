//! Overlay display configuration.

use chrono::format::{Item, StrftimeItems};
use chrono::Duration;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CURRENCY, DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT, END_NOTICE_HOURS,
};
use crate::errors::{Error, Result};

/// Display configuration for the overlay.
///
/// Controls how instants are rendered into status labels and when an end
/// time becomes worth surfacing on a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverlayConfig {
    /// Time zone used to render start/end instants (default: Europe/London)
    pub timezone: Tz,

    /// strftime pattern for the time part of a status label (default: "%H:%M")
    pub time_format: String,

    /// strftime pattern for the date part of a status label (default: "%d/%m/%Y")
    pub date_format: String,

    /// Hours before an end time at which "Ends ..." is shown (default: 24)
    pub end_notice_hours: u32,

    /// Currency of the campaign total until the first snapshot arrives (default: GBP)
    pub default_currency: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::Europe::London,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            end_notice_hours: END_NOTICE_HOURS,
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl OverlayConfig {
    /// Returns a copy of this configuration rendering in the named IANA zone.
    pub fn with_timezone_name(mut self, name: &str) -> Result<Self> {
        self.timezone = name
            .parse::<Tz>()
            .map_err(|e| Error::InvalidConfigValue(format!("timezone '{}': {}", name, e)))?;
        Ok(self)
    }

    /// Lead time before an end instant during which the end status is shown.
    pub fn end_notice(&self) -> Duration {
        Duration::hours(i64::from(self.end_notice_hours))
    }

    /// Checks the configuration for values that would produce broken labels.
    pub fn validate(&self) -> Result<()> {
        check_strftime("time_format", &self.time_format)?;
        check_strftime("date_format", &self.date_format)?;
        let currency_ok = self.default_currency.len() == 3
            && self
                .default_currency
                .chars()
                .all(|c| c.is_ascii_uppercase());
        if !currency_ok {
            return Err(Error::InvalidConfigValue(format!(
                "default_currency '{}' is not a 3-letter code",
                self.default_currency
            )));
        }
        Ok(())
    }
}

fn check_strftime(field: &str, pattern: &str) -> Result<()> {
    if pattern.trim().is_empty() {
        return Err(Error::InvalidConfigValue(format!(
            "{} must not be empty",
            field
        )));
    }
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(Error::InvalidConfigValue(format!(
            "{} '{}' is not a valid strftime pattern",
            field, pattern
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OverlayConfig::default();
        assert_eq!(config.timezone, chrono_tz::Europe::London);
        assert_eq!(config.end_notice_hours, 24);
        assert_eq!(config.end_notice(), Duration::hours(24));
        assert_eq!(config.default_currency, "GBP");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_timezone_name() {
        let config = OverlayConfig::default()
            .with_timezone_name("America/New_York")
            .unwrap();
        assert_eq!(config.timezone, chrono_tz::America::New_York);

        let err = OverlayConfig::default()
            .with_timezone_name("Mars/Olympus")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
    }

    #[test]
    fn test_validate_rejects_bad_currency() {
        let config = OverlayConfig {
            default_currency: "pounds".to_string(),
            ..OverlayConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_strftime_specifier() {
        let config: OverlayConfig = serde_json::from_str(r#"{"timeFormat": "%Q"}"#).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
        assert!(err.to_string().contains("time_format '%Q'"));

        let config = OverlayConfig {
            date_format: "%d/%m/%".to_string(),
            ..OverlayConfig::default()
        };
        assert!(config.validate().is_err());

        let config = OverlayConfig {
            time_format: "  ".to_string(),
            ..OverlayConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: OverlayConfig =
            serde_json::from_str(r#"{"endNoticeHours": 6, "timezone": "UTC"}"#).unwrap();
        assert_eq!(config.end_notice_hours, 6);
        assert_eq!(config.timezone, chrono_tz::UTC);
        assert_eq!(config.time_format, "%H:%M");
    }
}
