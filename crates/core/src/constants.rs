/// Replicant namespace published by the fundraising integration
pub const REPLICANT_NAMESPACE: &str = "nodecg-tiltify";

/// Currency used for the campaign total before the first snapshot arrives
pub const DEFAULT_CURRENCY: &str = "GBP";

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for progress percentages
pub const PERCENT_DECIMAL_PRECISION: u32 = 2;

/// Number of milestones shown while the milestone list is collapsed
pub const MILESTONE_WINDOW: usize = 3;

/// strftime pattern for the time part of a status label
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// strftime pattern for the date part of a status label
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Hours before an end time at which the end status becomes visible
pub const END_NOTICE_HOURS: u32 = 24;

/// Separator between the parts of a card summary line
pub const SUMMARY_SEPARATOR: &str = " • ";
