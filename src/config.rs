//! # Configuration
//!
//! Settings live in `config.toml`. Its existence is what marks the
//! application as initialized; board commands refuse to run without it.
//!
//! ## Locations
//!
//! 1. **`KANTAN_HOME`**: when set, both the config file and the board files
//!    live directly under this directory.
//! 2. **Otherwise**: the config file goes in the OS config directory and
//!    board files in the home directory (`~/.<name>_board.json`).
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | (see above) | Directory holding the board files |
//! | `default_board` | `default` | Board used when `-n` is not given |
//! | `atomic_writes` | `true` | Write to a temp file and rename over the board |

use crate::{
    domain::BoardName,
    error::{KantanError, Result},
    storage::WriteMode,
};
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Where the config file and board files live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config_file: PathBuf,
    pub data_dir: PathBuf,
}

impl AppPaths {
    pub const HOME_ENV: &'static str = "KANTAN_HOME";
    const CONFIG_FILE: &'static str = "config.toml";

    /// Resolves paths from `KANTAN_HOME`, falling back to OS locations
    pub fn discover() -> Result<Self> {
        if let Some(home) = std::env::var_os(Self::HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::rooted_at(PathBuf::from(home)));
        }

        let project = ProjectDirs::from("", "", "kantan").ok_or_else(|| {
            KantanError::Config("could not determine a config directory".to_string())
        })?;
        let base = BaseDirs::new()
            .ok_or_else(|| KantanError::Config("could not determine home directory".to_string()))?;

        Ok(Self {
            config_file: project.config_dir().join(Self::CONFIG_FILE),
            data_dir: base.home_dir().to_path_buf(),
        })
    }

    /// Keeps everything under a single directory
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            config_file: root.join(Self::CONFIG_FILE),
            data_dir: root.to_path_buf(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.config_file.exists()
    }
}

/// Contents of `config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KantanConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    pub default_board: BoardName,
    pub atomic_writes: bool,
}

impl Default for KantanConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_board: BoardName::default(),
            atomic_writes: true,
        }
    }
}

impl KantanConfig {
    /// Loads the config file. A missing file means the app was never initialized.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(KantanError::NotInitialized)
            }
            Err(e) => return Err(KantanError::io(path, e)),
        };

        toml::from_str(&contents)
            .map_err(|e| KantanError::Config(format!("{}: {}", path.display(), e)))
    }

    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| KantanError::io(parent, e))?;
        }

        let contents = toml::to_string_pretty(self).map_err(|e| KantanError::Config(e.to_string()))?;
        fs::write(path, contents)
            .await
            .map_err(|e| KantanError::io(path, e))
    }

    /// Directory holding board files: the configured override or the default
    pub fn data_dir(&self, paths: &AppPaths) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| paths.data_dir.clone())
    }

    pub fn write_mode(&self) -> WriteMode {
        if self.atomic_writes {
            WriteMode::Atomic
        } else {
            WriteMode::Direct
        }
    }
}

/// Writes the default config unless one exists, then returns the effective config
pub async fn init_app(paths: &AppPaths) -> Result<KantanConfig> {
    if paths.is_initialized() {
        return KantanConfig::load(&paths.config_file).await;
    }

    let config = KantanConfig::default();
    config.save(&paths.config_file).await?;
    tracing::info!(path = %paths.config_file.display(), "created config file");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = KantanConfig::default();
        assert_eq!(config.default_board.as_str(), "default");
        assert!(config.atomic_writes);
        assert_eq!(config.write_mode(), WriteMode::Atomic);
    }

    #[tokio::test]
    async fn test_load_missing_file_is_not_initialized() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::rooted_at(temp_dir.path());

        assert!(!paths.is_initialized());
        assert!(matches!(
            KantanConfig::load(&paths.config_file).await,
            Err(KantanError::NotInitialized)
        ));
    }

    #[tokio::test]
    async fn test_init_app_creates_config_once() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::rooted_at(temp_dir.path().join("nested"));

        let config = init_app(&paths).await.unwrap();
        assert!(paths.is_initialized());
        assert_eq!(config, KantanConfig::default());

        // Existing settings are kept
        let custom = KantanConfig {
            atomic_writes: false,
            ..Default::default()
        };
        custom.save(&paths.config_file).await.unwrap();
        assert_eq!(init_app(&paths).await.unwrap(), custom);
    }

    #[tokio::test]
    async fn test_partial_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "default_board = \"work\"\n").await.unwrap();

        let config = KantanConfig::load(&path).await.unwrap();
        assert_eq!(config.default_board.as_str(), "work");
        assert!(config.atomic_writes);
        assert!(config.data_dir.is_none());
    }

    #[tokio::test]
    async fn test_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        fs::write(&path, "atomic_writes = \"maybe\"\n").await.unwrap();
        assert!(matches!(
            KantanConfig::load(&path).await,
            Err(KantanError::Config(_))
        ));

        fs::write(&path, "default_board = \"../escape\"\n").await.unwrap();
        assert!(matches!(
            KantanConfig::load(&path).await,
            Err(KantanError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_save_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b").join("config.toml");

        let config = KantanConfig {
            default_board: "work".parse().unwrap(),
            ..Default::default()
        };
        config.save(&path).await.unwrap();

        assert!(fs::try_exists(&path).await.unwrap());
        assert_eq!(KantanConfig::load(&path).await.unwrap(), config);
    }

    #[test]
    fn test_data_dir_override() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::rooted_at(temp_dir.path());

        let config = KantanConfig::default();
        assert_eq!(config.data_dir(&paths), temp_dir.path());

        let config = KantanConfig {
            data_dir: Some(PathBuf::from("/srv/boards")),
            ..Default::default()
        };
        assert_eq!(config.data_dir(&paths), PathBuf::from("/srv/boards"));
    }
}
