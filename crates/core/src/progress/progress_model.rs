//! Progress of a raised amount towards a goal.

use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amounts::Amount;
use crate::constants::PERCENT_DECIMAL_PRECISION;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Raw `raised / target` ratio.
///
/// Not clamped: a raised amount above the target yields a ratio above one.
/// A target of zero or less is degenerate and yields zero.
pub fn ratio(raised: Decimal, target: Decimal) -> Decimal {
    if target <= Decimal::ZERO {
        debug!("Degenerate progress target {}, treating as 0%", target);
        return Decimal::ZERO;
    }
    raised.checked_div(target).unwrap_or_else(|| {
        warn!("Progress ratio {} / {} overflowed, treating as 0%", raised, target);
        Decimal::ZERO
    })
}

/// Bar fill percentage, clamped to `[0, 100]` and rounded for display.
pub fn percent(raised: Decimal, target: Decimal) -> Decimal {
    let pct = ratio(raised, target)
        .checked_mul(HUNDRED)
        .unwrap_or(HUNDRED);
    pct.clamp(Decimal::ZERO, HUNDRED)
        .round_dp(PERCENT_DECIMAL_PRECISION)
}

/// A progress indicator as shown on a card: value, max and a text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Amount raised so far
    pub value: Decimal,
    /// Goal the bar fills towards
    pub max: Decimal,
    /// Unclamped `value / max`
    pub ratio: Decimal,
    /// Bar fill in `[0, 100]`
    pub percent: Decimal,
    /// Text drawn on the bar; never derived from the ratio
    pub label: String,
    /// True when either input amount failed to parse
    pub degraded: bool,
}

impl Progress {
    pub fn new(value: Decimal, max: Decimal, label: impl Into<String>) -> Self {
        Self {
            value,
            max,
            ratio: ratio(value, max),
            percent: percent(value, max),
            label: label.into(),
            degraded: false,
        }
    }

    /// Builds progress from two amounts, flagging malformed inputs.
    pub fn from_amounts(raised: &Amount, target: &Amount, label: impl Into<String>) -> Self {
        let mut progress = Self::new(raised.value(), target.value(), label);
        for amount in [raised, target] {
            if let Some(raw) = amount.malformed_text() {
                warn!(
                    "Malformed amount '{}' ({}) read as zero for progress",
                    raw, amount.currency
                );
                progress.degraded = true;
            }
        }
        progress
    }

    /// True once the raised amount meets or exceeds a positive goal.
    pub fn is_complete(&self) -> bool {
        self.max > Decimal::ZERO && self.value >= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amounts::AmountValue;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ratio_and_percent() {
        assert_eq!(ratio(dec!(25), dec!(100)), dec!(0.25));
        assert_eq!(percent(dec!(25), dec!(100)), dec!(25));
        assert_eq!(percent(dec!(1), dec!(3)), dec!(33.33));
    }

    #[test]
    fn test_overflow_is_not_clamped_in_ratio() {
        assert_eq!(ratio(dec!(150), dec!(100)), dec!(1.5));
        assert_eq!(percent(dec!(150), dec!(100)), dec!(100));
    }

    #[test]
    fn test_degenerate_target_is_zero() {
        assert_eq!(ratio(dec!(50), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(percent(dec!(50), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(percent(Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_progress_label_is_independent_of_ratio() {
        let progress = Progress::new(dec!(300), dec!(100), "£300.00 / £100.00");
        assert_eq!(progress.label, "£300.00 / £100.00");
        assert_eq!(progress.ratio, dec!(3));
        assert_eq!(progress.percent, dec!(100));
        assert!(progress.is_complete());
    }

    #[test]
    fn test_from_amounts_flags_malformed() {
        let raised = Amount {
            currency: "GBP".to_string(),
            value: AmountValue::Malformed("lots".to_string()),
        };
        let target = Amount::new("GBP", dec!(100));
        let progress = Progress::from_amounts(&raised, &target, "label");
        assert!(progress.degraded);
        assert_eq!(progress.value, Decimal::ZERO);
        assert_eq!(progress.percent, Decimal::ZERO);
    }

    #[test]
    fn test_from_amounts_clean() {
        let raised = Amount::new("GBP", dec!(40));
        let target = Amount::new("GBP", dec!(80));
        let progress = Progress::from_amounts(&raised, &target, "label");
        assert!(!progress.degraded);
        assert_eq!(progress.percent, dec!(50));
        assert!(!progress.is_complete());
    }
}
