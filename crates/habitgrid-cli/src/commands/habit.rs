//! Habit management commands for CLI.

use clap::Subcommand;
use habitgrid_core::MonthKey;

use crate::common::{open_tracker, print_json};

#[derive(Subcommand)]
pub enum HabitAction {
    /// List habits of a month
    List {
        /// Month as YEAR-MONTH (default: current month)
        #[arg(long)]
        month: Option<MonthKey>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Add a habit
    Add {
        /// Habit name
        name: String,
        /// Habit description
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        month: Option<MonthKey>,
    },
    /// Rename or re-describe a habit
    Edit {
        /// Row index as shown by `habit list`
        index: usize,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        month: Option<MonthKey>,
    },
    /// Remove a habit
    Remove {
        /// Row index as shown by `habit list`
        index: usize,
        #[arg(long)]
        month: Option<MonthKey>,
    },
    /// Cycle a day: blank -> done -> half -> missed -> blank
    Toggle {
        /// Row index as shown by `habit list`
        index: usize,
        /// Day of month
        day: u32,
        #[arg(long)]
        month: Option<MonthKey>,
    },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        HabitAction::List { month, json } => {
            let (_, tracker) = open_tracker(month)?;
            let rows = tracker.summaries();
            if json {
                print_json(&rows)?;
            } else if rows.is_empty() {
                println!("No habits for {}", tracker.month());
            } else {
                for row in rows {
                    println!(
                        "[{}] {}{}  score {}  rate {}%  streak {}",
                        row.index,
                        row.name,
                        if row.description.is_empty() {
                            String::new()
                        } else {
                            format!(" {}", row.description)
                        },
                        row.total_score,
                        row.success_rate,
                        row.current_streak,
                    );
                }
            }
        }
        HabitAction::Add {
            name,
            description,
            month,
        } => {
            let (_, mut tracker) = open_tracker(month)?;
            let index = tracker.add_habit(name, description)?;
            println!("Habit added: {index}");
            print_json(&tracker.habits()[index])?;
        }
        HabitAction::Edit {
            index,
            name,
            description,
            month,
        } => {
            let (_, mut tracker) = open_tracker(month)?;
            let current = tracker
                .habits()
                .get(index)
                .cloned()
                .ok_or_else(|| format!("no habit at index {index}"))?;
            tracker.edit_habit(
                index,
                name.unwrap_or(current.name),
                description.unwrap_or(current.description),
            )?;
            print_json(&tracker.habits()[index])?;
        }
        HabitAction::Remove { index, month } => {
            let (_, mut tracker) = open_tracker(month)?;
            let removed = tracker.remove_habit(index)?;
            println!("Habit removed: {}", removed.name);
        }
        HabitAction::Toggle { index, day, month } => {
            let (_, mut tracker) = open_tracker(month)?;
            let status = tracker.toggle_day(index, day)?;
            let habit = &tracker.habits()[index];
            println!(
                "{} day {day}: {status} (score {}, rate {}%)",
                habit.name, habit.longest_streak, habit.success_rate
            );
        }
    }
    Ok(())
}
