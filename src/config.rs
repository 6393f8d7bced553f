//! Ingestion configuration.
//!
//! Centralizes the fixed group table and the configurable locations that the
//! import run reads from and writes to.

use serde::Deserialize;
use std::path::PathBuf;

use crate::paths;

// ==================== File Configuration ====================

/// Configuration file structure for config.toml
#[derive(Debug, Default, Deserialize)]
struct AppConfig {
    database: Option<DatabaseConfig>,
    ingest: Option<IngestSection>,
}

#[derive(Debug, Default, Deserialize)]
struct DatabaseConfig {
    path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct IngestSection {
    source_dir: Option<String>,
    extension: Option<String>,
}

/// Default document extension scanned in the source directory
pub const DEFAULT_EXTENSION: &str = "docx";

/// Resolved settings for one ingestion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestConfig {
    /// SQLite database file
    pub database_path: PathBuf,
    /// Directory holding one document per topical group
    pub source_dir: PathBuf,
    /// File extension (without dot) of the documents to read
    pub extension: String,
}

impl IngestConfig {
    /// Load settings with priority: config.toml > .env / environment > default
    pub fn load() -> Self {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let file_config = std::fs::read_to_string("config.toml")
            .ok()
            .and_then(|contents| match toml::from_str::<AppConfig>(&contents) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("Ignoring invalid config.toml: {}", e);
                    None
                }
            })
            .unwrap_or_default();

        Self::resolve(file_config, |key| std::env::var(key).ok())
    }

    fn resolve(file_config: AppConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let database_path = pick(
            "database path",
            file_config.database.and_then(|d| d.path),
            env("DATABASE_PATH"),
            paths::db_path(),
        );

        let ingest = file_config.ingest.unwrap_or_default();
        let source_dir = pick(
            "source directory",
            ingest.source_dir,
            env("SITUATION_DIR"),
            paths::situation_dir(),
        );
        let extension = ingest
            .extension
            .or_else(|| env("SITUATION_EXT"))
            .map(|e| e.trim_start_matches('.').to_lowercase())
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

        Self {
            database_path: PathBuf::from(database_path),
            source_dir: PathBuf::from(source_dir),
            extension,
        }
    }
}

fn pick(label: &str, from_file: Option<String>, from_env: Option<String>, default: String) -> String {
    if let Some(value) = from_file {
        tracing::info!("Using {} from config.toml: {}", label, value);
        return value;
    }
    if let Some(value) = from_env {
        tracing::info!("Using {} from environment: {}", label, value);
        return value;
    }
    tracing::info!("Using default {}: {}", label, default);
    default
}

// ==================== Group Configuration ====================

/// Topical group definition
pub struct GroupInfo {
    /// Stable identifier, assigned here and never auto-incremented
    pub id: i64,
    pub name: &'static str,
    pub description: &'static str,
    /// Lower-case, precomposed substring looked for in document filenames
    pub keyword: &'static str,
}

/// All topical groups, in classification priority order
pub const GROUPS: [GroupInfo; 4] = [
    GroupInfo {
        id: 1,
        name: "Bạn bè",
        description: "Các tình huống liên quan đến bạn bè",
        keyword: "bạn bè",
    },
    GroupInfo {
        id: 2,
        name: "Thầy cô",
        description: "Các tình huống liên quan đến thầy cô",
        keyword: "thầy cô",
    },
    GroupInfo {
        id: 3,
        name: "Cha mẹ",
        description: "Các tình huống liên quan đến cha mẹ",
        keyword: "cha mẹ",
    },
    GroupInfo {
        id: 4,
        name: "Anh em",
        description: "Các tình huống liên quan đến anh em",
        keyword: "anh em",
    },
];

/// Get group info by id
pub fn get_group_info(id: i64) -> Option<&'static GroupInfo> {
    GROUPS.iter().find(|g| g.id == id)
}

/// Get group display name by id
pub fn get_group_name(id: i64) -> String {
    get_group_info(id)
        .map(|g| g.name.to_string())
        .unwrap_or_else(|| format!("Group {}", id))
}

// ==================== Parsing Configuration ====================

/// Level assumed for blocks that appear before any level marker
pub const DEFAULT_LEVEL: u32 = 1;
