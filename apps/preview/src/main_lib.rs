use std::path::Path;

use anyhow::Context;
use incentives_core::{IncentiveBoard, OverlayConfig, ReplicantName};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

/// Builds a board from `<replicant>.json` dumps found in `dir`.
///
/// Missing files leave that replicant at its default. A dump that cannot be
/// decoded is logged and skipped so the remaining sections still render.
pub fn load_board(dir: &Path, overlay: OverlayConfig) -> anyhow::Result<IncentiveBoard> {
    if !dir.is_dir() {
        anyhow::bail!("Snapshot directory {} does not exist", dir.display());
    }

    let mut board = IncentiveBoard::new(overlay);
    for name in ReplicantName::ALL {
        let path = dir.join(format!("{}.json", name));
        if !path.exists() {
            tracing::info!("No {} dump at {}, using default", name, path.display());
            continue;
        }
        let payload = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        match board.apply_json(name, &payload) {
            Ok(()) => tracing::debug!("Loaded {} from {}", name.qualified(), path.display()),
            Err(e) => tracing::warn!("Ignoring {}: {}", path.display(), e),
        }
    }
    Ok(board)
}
