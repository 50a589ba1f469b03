use crate::{
    domain::Card,
    error::{KantanError, Result},
    storage::{to_pretty_json, CardStore},
};
use async_trait::async_trait;
use std::{
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

/// In-memory card store.
///
/// Holds the serialized JSON text rather than the cards themselves, so reads
/// go through the same parsing as the file store. `None` means the store was
/// never initialized.
#[derive(Debug)]
pub struct MemoryStore {
    label: PathBuf,
    contents: Mutex<Option<String>>,
}

impl MemoryStore {
    /// Creates an uninitialized store
    pub fn new(label: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            contents: Mutex::new(None),
        }
    }

    /// Creates a store holding the given raw text
    pub fn with_contents(label: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            contents: Mutex::new(Some(contents.into())),
        }
    }

    /// Returns the raw stored text
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn not_found(&self) -> KantanError {
        KantanError::io(
            &self.label,
            std::io::Error::new(std::io::ErrorKind::NotFound, "store not initialized"),
        )
    }
}

#[async_trait]
impl CardStore for MemoryStore {
    async fn initialize(&self) -> Result<()> {
        self.write_cards(&[]).await
    }

    async fn read_cards(&self) -> Result<Vec<Card>> {
        let contents = self.contents().ok_or_else(|| self.not_found())?;
        serde_json::from_str(&contents).map_err(|e| KantanError::parse(&self.label, e))
    }

    async fn write_cards(&self, cards: &[Card]) -> Result<()> {
        let json = String::from_utf8_lossy(&to_pretty_json(cards)?).into_owned();
        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = Some(json);
        Ok(())
    }

    async fn exists(&self) -> bool {
        self.contents().is_some()
    }

    fn location(&self) -> &Path {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[tokio::test]
    async fn test_uninitialized_read_is_io_error() {
        let store = MemoryStore::new("memory");
        assert!(!store.exists().await);
        assert_eq!(store.read_cards().await.unwrap_err().kind(), ErrorKind::Io);
    }

    #[tokio::test]
    async fn test_round_trip() {
        let store = MemoryStore::new("memory");
        store.initialize().await.unwrap();
        assert_eq!(store.contents().as_deref(), Some("[]"));

        let cards = vec![Card::new("Buy milk".to_string(), "home")];
        store.write_cards(&cards).await.unwrap();
        assert_eq!(store.read_cards().await.unwrap(), cards);
    }

    #[tokio::test]
    async fn test_malformed_contents_is_parse_error() {
        let store = MemoryStore::with_contents("memory", "not json");
        assert_eq!(store.read_cards().await.unwrap_err().kind(), ErrorKind::Parse);
    }
}
