mod config;
pub mod habit_store;
pub mod kv;

pub use config::{Config, CopyForwardConfig, DisplayConfig, StatsConfig};
pub use habit_store::{HabitStore, DEFAULT_PLACEHOLDER_NAME, SEED_MONTH};
pub use kv::{FileStore, KeyValueStore, MemoryStore};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the data directory, creating it if needed.
///
/// `HABITGRID_DATA_DIR` wins when set. Otherwise `~/.config/habitgrid[-dev]/`,
/// with the `-dev` suffix when `HABITGRID_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("HABITGRID_DATA_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("HABITGRID_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("habitgrid-dev")
            } else {
                base_dir.join("habitgrid")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

/// Open the file-backed habit store in [`data_dir`], configured from `config`.
///
/// # Errors
/// Returns an error if the data directory cannot be prepared.
pub fn open_habit_store(config: &Config) -> Result<HabitStore<FileStore>, crate::CoreError> {
    let backend = FileStore::open(data_dir()?.join("months"))?;
    Ok(HabitStore::new(backend).with_placeholder(
        config.copy_forward.placeholder_name.clone(),
        config.copy_forward.placeholder_description.clone(),
    ))
}
