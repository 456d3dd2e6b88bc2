//! Config file storage for the console host.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::{info, warn};

const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "eebk";
const APP_NAME: &str = "simplecdn";
const CONFIG_FILE_NAME: &str = "config.toml";

const CONFIG_TEMPLATE: &str = r#"# simplecdn configuration.
#
# secret_id / secret_key: Tencent Cloud API credentials (required).
# region: vendor API region (optional, defaults to ap-singapore).
# zone_id: enables the zone-scoped API variant; must start with "zone-".

secret_id = ""
secret_key = ""
region = "ap-singapore"
# zone_id = "zone-xxxxxxxx"
"#;

/// Config file storage error variants.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The platform config directory could not be determined.
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    /// Filesystem error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Loads the plugin config table from disk.
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Create a new `StorageManager` over the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the configuration directory cannot be
    /// determined.
    pub fn new() -> Result<Self, StorageError> {
        let config_dir = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(StorageError::ConfigDirNotFound)?;

        Ok(Self { config_dir })
    }

    /// Creates a `StorageManager` with a specific directory (useful for testing).
    #[must_use]
    pub fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    /// Returns the configuration directory path.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Ensures the configuration directory exists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the directory cannot be created.
    pub fn ensure_config_dir(&self) -> Result<(), StorageError> {
        if !self.config_dir.exists() {
            info!("Creating configuration directory at {:?}", self.config_dir);
            fs::create_dir_all(&self.config_dir)?;
        }
        Ok(())
    }

    /// Loads the plugin configuration table.
    ///
    /// A missing file is replaced by a commented template; a malformed file
    /// logs a warning and yields an empty table, leaving the plugin
    /// uninitialized until the file is fixed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be read or created.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<toml::Table, StorageError> {
        self.ensure_config_dir()?;
        let config_path = path_override.map_or_else(
            || self.config_dir.join(CONFIG_FILE_NAME),
            std::path::Path::to_path_buf,
        );

        if !config_path.exists() {
            info!(
                "Config file not found at {:?}, writing template.",
                config_path
            );
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }
            Self::save_to_file(&config_path, CONFIG_TEMPLATE)?;
            return Ok(toml::from_str(CONFIG_TEMPLATE).unwrap_or_default());
        }

        let content = fs::read_to_string(&config_path)?;
        match toml::from_str::<toml::Table>(&content) {
            Ok(table) => Ok(table),
            Err(e) => {
                warn!("Failed to parse config file: {}. Treating as empty.", e);
                Ok(toml::Table::new())
            }
        }
    }

    fn save_to_file(path: &Path, content: &str) -> Result<(), StorageError> {
        let parent = path
            .parent()
            .ok_or_else(|| std::io::Error::other("Invalid path"))?;
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}
