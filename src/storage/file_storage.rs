use crate::{
    domain::Card,
    error::{KantanError, Result},
    storage::{to_pretty_json, CardStore},
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// How a board file is replaced on write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Truncate and write in place. A failed write can leave the file truncated.
    Direct,
    /// Write a sibling `.tmp` file, then rename it over the board file
    #[default]
    Atomic,
}

/// One board stored as a JSON array in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    write_mode: WriteMode,
}

impl JsonFileStore {
    /// Creates a store for the given board file
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_mode: WriteMode::default(),
        }
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn ensure_parent_exists(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| KantanError::io(parent, e))?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CardStore for JsonFileStore {
    async fn initialize(&self) -> Result<()> {
        self.ensure_parent_exists().await?;
        self.write_cards(&[]).await
    }

    async fn read_cards(&self) -> Result<Vec<Card>> {
        let contents = fs::read_to_string(&self.path)
            .await
            .map_err(|e| KantanError::io(&self.path, e))?;

        let cards: Vec<Card> =
            serde_json::from_str(&contents).map_err(|e| KantanError::parse(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), count = cards.len(), "read cards");
        Ok(cards)
    }

    async fn write_cards(&self, cards: &[Card]) -> Result<()> {
        let json = to_pretty_json(cards)?;

        match self.write_mode {
            WriteMode::Direct => {
                fs::write(&self.path, json)
                    .await
                    .map_err(|e| KantanError::io(&self.path, e))?;
            }
            WriteMode::Atomic => {
                let temp = self.temp_path();
                fs::write(&temp, json)
                    .await
                    .map_err(|e| KantanError::io(&temp, e))?;
                if let Err(e) = fs::rename(&temp, &self.path).await {
                    let _ = fs::remove_file(&temp).await;
                    return Err(KantanError::io(&self.path, e));
                }
            }
        }

        tracing::debug!(path = %self.path.display(), count = cards.len(), "wrote cards");
        Ok(())
    }

    async fn exists(&self) -> bool {
        self.path.exists()
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
