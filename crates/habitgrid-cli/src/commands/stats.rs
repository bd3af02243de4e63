use chrono::Local;
use clap::Args;
use habitgrid_core::MonthKey;

use crate::common::{open_tracker, print_json};

#[derive(Args)]
pub struct StatsArgs {
    /// Month as YEAR-MONTH (default: current month)
    #[arg(long)]
    month: Option<MonthKey>,
    /// Override the recent-activity window in days
    #[arg(long)]
    window: Option<u32>,
}

/// Print the month overview as JSON.
pub fn run(args: StatsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (config, tracker) = open_tracker(args.month)?;
    let window = args.window.unwrap_or(config.stats.recent_window_days);
    let overview = tracker.overview(Local::now().date_naive(), window);
    print_json(&overview)
}
