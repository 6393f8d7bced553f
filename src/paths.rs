//! Project path functions - single source of truth for default file paths.
//!
//! ## Environment Variables
//!
//! - `DATA_DIR`: Override the base data directory (default: "data")
//!
//! Explicit locations from config.toml or `DATABASE_PATH` / `SITUATION_DIR`
//! take precedence over these defaults (see config.rs).

use std::env;
use std::sync::OnceLock;

/// Lazily initialized data directory from DATA_DIR env var
static DATA_DIR_VALUE: OnceLock<String> = OnceLock::new();

/// Get the base data directory (from DATA_DIR env var or default "data")
pub fn data_dir() -> &'static str {
    DATA_DIR_VALUE.get_or_init(|| env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()))
}

/// SQLite database path
pub fn db_path() -> String {
    format!("{}/situations.db", data_dir())
}

/// Directory scanned for situation documents
pub fn situation_dir() -> String {
    format!("{}/situation", data_dir())
}

/// Default output file for `preview`
pub fn preview_path() -> String {
    format!("{}/preview.json", data_dir())
}
