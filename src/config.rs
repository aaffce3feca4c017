//! Application configuration module
//!
//! Tool defaults and recent files are stored with `confy`, which picks the
//! OS-specific config directory and serializes `Settings` as TOML.

use crate::constant::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, MAX_RECENT_FILES};
use crate::tools::ToolKind;
use crate::tools::codec::Alphabet;
use crate::tools::diff::DiffMode;
use crate::tools::lorem::LoremKind;
use crate::tools::password::{COST_RANGE, DEFAULT_COST};
use crate::tools::qr::{self, ErrorLevel};
use crate::tools::uuid_gen::{DEFAULT_BATCH_SIZE, UuidFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

pub const MAX_JSON_INDENT: usize = 8;
pub const MAX_UUID_BATCH: usize = 100;
pub const MAX_LOREM_COUNT: usize = 100;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// Load configuration from disk, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = confy::load(APP_NAME, None)?;
        info!("Load config from {:?}", Self::config_path()?);
        Ok(Self {
            settings: settings.normalized(),
        })
    }

    /// Save current configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, &self.settings)?;
        info!("Save config to {:?}", Self::config_path()?);
        Ok(())
    }

    /// Get the application data directory
    /// Falls back to a local "data" directory if platform dirs are unavailable
    pub fn data_dir(&self) -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME) {
            proj_dirs.data_dir().to_path_buf()
        } else {
            PathBuf::from("data")
        }
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }

    /// Add a file to the recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.settings.push_recent_file(path);

        // Save changes in background since it's synchronous IO
        let settings = self.settings.clone();
        std::thread::spawn(move || {
            if let Err(e) = confy::store(APP_NAME, None, &settings) {
                tracing::error!("Failed to save recent files: {}", e);
            }
        });
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Falling back to default settings: {}", e);
            Self {
                settings: Settings::default(),
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Tool shown on startup
    pub last_tool: ToolKind,

    pub diff_mode: DiffMode,

    /// Spaces per level when pretty-printing JSON
    pub json_indent: usize,
    pub json_sort_keys: bool,

    pub base64_alphabet: Alphabet,

    pub uuid_batch_size: usize,

    /// bcrypt cost factor
    pub bcrypt_cost: u32,

    /// Files recently loaded into the diff checker, most recent first
    pub recent_files: Vec<PathBuf>,

    // Nested tables go last so the TOML stays valid
    pub uuid_format: UuidFormat,
    pub lorem: LoremSettings,
    pub qr: QrSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            last_tool: ToolKind::default(),
            diff_mode: DiffMode::default(),
            json_indent: 2,
            json_sort_keys: false,
            base64_alphabet: Alphabet::default(),
            uuid_batch_size: DEFAULT_BATCH_SIZE,
            uuid_format: UuidFormat::default(),
            lorem: LoremSettings::default(),
            bcrypt_cost: DEFAULT_COST,
            qr: QrSettings::default(),
            recent_files: Vec::new(),
        }
    }
}

impl Settings {
    /// Clamp hand-edited values back into the ranges the tools accept.
    pub fn normalized(mut self) -> Self {
        self.json_indent = self.json_indent.min(MAX_JSON_INDENT);
        self.uuid_batch_size = self.uuid_batch_size.clamp(1, MAX_UUID_BATCH);
        self.lorem.count = self.lorem.count.clamp(1, MAX_LOREM_COUNT);
        self.bcrypt_cost = self
            .bcrypt_cost
            .clamp(*COST_RANGE.start(), *COST_RANGE.end());
        self.qr.size = self
            .qr
            .size
            .clamp(*qr::SIZE_RANGE.start(), *qr::SIZE_RANGE.end());
        self.recent_files.truncate(MAX_RECENT_FILES);
        self
    }

    /// Move the path to the front, dropping duplicates and the oldest overflow.
    pub fn push_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|p| p != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(MAX_RECENT_FILES);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoremSettings {
    pub kind: LoremKind,
    pub count: usize,
    pub start_with_lorem: bool,
}

impl Default for LoremSettings {
    fn default() -> Self {
        Self {
            kind: LoremKind::Paragraphs,
            count: 3,
            start_with_lorem: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrSettings {
    /// Rendered edge length in pixels
    pub size: u32,
    pub error_level: ErrorLevel,
}

impl Default for QrSettings {
    fn default() -> Self {
        Self {
            size: qr::DEFAULT_SIZE,
            error_level: ErrorLevel::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use uuid::Uuid;

    #[test]
    fn missing_fields_take_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"bcrypt_cost": 6, "lorem": {"count": 5}}"#).unwrap();
        assert_eq!(settings.bcrypt_cost, 6);
        assert_eq!(settings.lorem.count, 5);
        assert!(settings.lorem.start_with_lorem);
        assert_eq!(settings.json_indent, 2);
        assert_eq!(settings.uuid_batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(settings.last_tool, ToolKind::CharacterCounter);
    }

    #[test]
    fn normalized_clamps_out_of_range_values() {
        let settings = Settings {
            json_indent: 40,
            uuid_batch_size: 0,
            bcrypt_cost: 31,
            qr: QrSettings {
                size: 10,
                error_level: ErrorLevel::High,
            },
            ..Settings::default()
        }
        .normalized();

        assert_eq!(settings.json_indent, MAX_JSON_INDENT);
        assert_eq!(settings.uuid_batch_size, 1);
        assert_eq!(settings.bcrypt_cost, 12);
        assert_eq!(settings.qr.size, 128);
        assert_eq!(settings.qr.error_level, ErrorLevel::High);
    }

    #[test]
    fn recent_files_are_deduplicated_and_capped() {
        let mut settings = Settings::default();
        for i in 0..(MAX_RECENT_FILES + 3) {
            settings.push_recent_file(PathBuf::from(format!("/tmp/{}.txt", i)));
        }
        settings.push_recent_file(PathBuf::from("/tmp/5.txt"));

        assert_eq!(settings.recent_files.len(), MAX_RECENT_FILES);
        assert_eq!(settings.recent_files[0], PathBuf::from("/tmp/5.txt"));
        assert_eq!(
            settings
                .recent_files
                .iter()
                .filter(|p| p.ends_with("5.txt"))
                .count(),
            1
        );
    }

    #[test]
    fn settings_survive_a_store_and_load() {
        let test_dir = std::env::temp_dir().join(format!("test_config_{}", Uuid::new_v4()));
        let path = test_dir.join("devkit.toml");

        let mut settings = Settings {
            diff_mode: DiffMode::Aligned,
            last_tool: ToolKind::QrCode,
            ..Settings::default()
        };
        settings.push_recent_file(PathBuf::from("/tmp/a.txt"));

        confy::store_path(&path, &settings).unwrap();
        let loaded: Settings = confy::load_path(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = fs::remove_dir_all(&test_dir);
    }
}
