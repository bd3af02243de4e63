//! Shared helpers for CLI commands.

use habitgrid_core::storage::{self, FileStore};
use habitgrid_core::{Config, MonthKey, Tracker};
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. `HABITGRID_LOG` overrides the default
/// `warn` filter so stdout stays clean for JSON output.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env("HABITGRID_LOG")
        .unwrap_or_else(|_| EnvFilter::new("habitgrid_core=warn,habitgrid=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Month argument, or the current month when omitted.
pub fn month_or_current(month: Option<MonthKey>) -> MonthKey {
    month.unwrap_or_else(MonthKey::current)
}

/// Load config and open a tracker on `month` over the file-backed store.
pub fn open_tracker(
    month: Option<MonthKey>,
) -> Result<(Config, Tracker<FileStore>), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let store = storage::open_habit_store(&config)?;
    let tracker = Tracker::open(store, month_or_current(month));
    Ok((config, tracker))
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
