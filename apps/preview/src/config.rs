use std::path::PathBuf;

use anyhow::Context;
use incentives_core::OverlayConfig;

pub struct Config {
    pub snapshot_dir: PathBuf,
    pub overlay: OverlayConfig,
    pub show_all_milestones: bool,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let snapshot_dir = std::env::var("OVERLAY_SNAPSHOT_DIR")
            .unwrap_or_else(|_| "./replicants".into())
            .into();

        let mut overlay = OverlayConfig::default();
        if let Ok(tz) = std::env::var("OVERLAY_TIMEZONE") {
            overlay = overlay.with_timezone_name(&tz)?;
        }
        if let Ok(hours) = std::env::var("OVERLAY_END_NOTICE_HOURS") {
            overlay.end_notice_hours = hours
                .parse()
                .with_context(|| format!("Invalid OVERLAY_END_NOTICE_HOURS '{}'", hours))?;
        }
        if let Ok(currency) = std::env::var("OVERLAY_DEFAULT_CURRENCY") {
            overlay.default_currency = currency.trim().to_uppercase();
        }
        overlay.validate()?;

        let show_all_milestones = std::env::var("OVERLAY_SHOW_ALL_MILESTONES")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let log_format = std::env::var("OVERLAY_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            snapshot_dir,
            overlay,
            show_all_milestones,
            log_format,
        })
    }
}
