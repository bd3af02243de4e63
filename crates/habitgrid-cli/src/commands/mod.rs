pub mod config;
pub mod habit;
pub mod month;
pub mod stats;
