mod config;
mod main_lib;

use chrono::Utc;
use config::Config;
use main_lib::{init_tracing, load_board};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config.log_format);

    let mut board = load_board(&config.snapshot_dir, config.overlay.clone())?;
    if config.show_all_milestones {
        board.toggle_milestones();
    }

    let now = Utc::now();
    tracing::info!(
        "Rendering {} at {}",
        config.snapshot_dir.display(),
        now.to_rfc3339()
    );
    print!("{}", board.render(now));
    Ok(())
}
