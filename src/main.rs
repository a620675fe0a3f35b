// Stats browser entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Load the four dataset tables
// 4. Build the session state (enriched rows, selector lists)
// 5. Run the TUI event loop until the user quits

use dugout::app::AppState;
use dugout::config;
use dugout::datasets;
use dugout::tui;

use anyhow::Context;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing (log to file, not the terminal, which the TUI owns)
    init_tracing()?;
    info!("dugout starting up");

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: people={}, teams={}, batting={}, pitching={}",
        config.data_paths.people,
        config.data_paths.teams,
        config.data_paths.batting,
        config.data_paths.pitching
    );

    // 3. Load the tables (once per session; reused across recomputations)
    let tables = datasets::load_all(&config.data_paths).context("failed to load datasets")?;
    info!(
        "Loaded {} players, {} teams, {} batting rows, {} pitching rows",
        tables.players.len(),
        tables.teams.len(),
        tables.batting.len(),
        tables.pitching.len()
    );

    // 4. Build the session state
    let mut app = AppState::new(&tables);

    // 5. Run the TUI (blocking until the user quits)
    tui::run(&mut app).context("TUI error")?;

    info!("dugout shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by
/// the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("dugout.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dugout=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
