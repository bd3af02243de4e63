//! Month view and navigation commands for CLI.

use clap::Subcommand;
use habitgrid_core::{Config, FileStore, MonthKey, Tracker};

use crate::common::{month_or_current, open_tracker, print_json};

#[derive(Subcommand)]
pub enum MonthAction {
    /// Show the habit grid for a month
    Show {
        /// Month as YEAR-MONTH (default: current month)
        #[arg(long)]
        month: Option<MonthKey>,
    },
    /// Seed a month with the habits of another month, progress cleared
    CopyForward {
        /// Target month (default: current month)
        #[arg(long)]
        month: Option<MonthKey>,
        /// Source month (default: the month before the target)
        #[arg(long)]
        from: Option<MonthKey>,
        /// Replace the target even if it already has habits
        #[arg(long)]
        force: bool,
    },
    /// Print the key of the following month
    Next {
        #[arg(long)]
        month: Option<MonthKey>,
    },
    /// Print the key of the preceding month
    Prev {
        #[arg(long)]
        month: Option<MonthKey>,
    },
}

pub fn run(action: MonthAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        MonthAction::Show { month } => {
            let (config, tracker) = open_tracker(month)?;
            print!("{}", render_grid(&tracker, &config));
        }
        MonthAction::CopyForward { month, from, force } => {
            let (_, tracker) = open_tracker(month)?;
            let target = tracker.month();
            if !tracker.habits().is_empty() && !force {
                return Err(format!(
                    "{target} already has {} habit(s); pass --force to replace them",
                    tracker.habits().len()
                )
                .into());
            }
            let source = from.unwrap_or_else(|| target.previous());
            let mut store = tracker.into_store();
            let copied = store.copy_forward(target, source);
            println!("Copied {} habit(s) from {source} to {target}", copied.len());
            print_json(&copied)?;
        }
        MonthAction::Next { month } => println!("{}", month_or_current(month).next()),
        MonthAction::Prev { month } => println!("{}", month_or_current(month).previous()),
    }
    Ok(())
}

/// Text grid: one row per habit, one column per day.
fn render_grid(tracker: &Tracker<FileStore>, config: &Config) -> String {
    let month = tracker.month();
    let habits = tracker.habits();
    let labels: Vec<String> = habits
        .iter()
        .enumerate()
        .map(|(i, h)| format!("[{i}] {}", h.name))
        .collect();
    let width = labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut out = format!("{} {}\n", month.month_name(), month.year());
    if habits.is_empty() {
        out.push_str("No habits yet. Add one with `habit add` or run `month copy-forward`.\n");
        return out;
    }

    out.push_str(&format!("{:width$}", ""));
    for day in month.days() {
        out.push_str(&format!("{day:>3}"));
    }
    out.push('\n');

    if config.display.show_weekdays {
        out.push_str(&format!("{:width$}", ""));
        for day in month.days() {
            let abbrev = month.weekday_abbrev(day).unwrap_or("");
            let short: String = abbrev.chars().take(2).collect();
            out.push_str(&format!("{short:>3}"));
        }
        out.push('\n');
    }

    let day_count = month.days_in_month();
    for (label, habit) in labels.iter().zip(habits) {
        out.push_str(&format!("{label:<width$}"));
        for day in month.days() {
            out.push_str(&format!("{:>3}", habit.progress.get(day).glyph()));
        }
        out.push_str(&format!(
            "  {}%  total {}",
            habit.success_rate, habit.longest_streak
        ));
        if config.display.show_streaks {
            out.push_str(&format!("  streak {}", habit.current_streak(day_count)));
        }
        out.push('\n');
    }
    out
}
