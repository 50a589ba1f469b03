use crate::{domain::Card, error::Result};
use async_trait::async_trait;
use serde::Serialize;
use std::path::Path;

pub mod file_storage;
pub mod memory;

pub use file_storage::{JsonFileStore, WriteMode};
pub use memory::MemoryStore;

/// Storage trait for persisting a board's card list.
///
/// Every call reads or writes the whole list; there are no partial updates.
#[async_trait]
pub trait CardStore: Send + Sync {
    /// Creates the backing store holding an empty list
    async fn initialize(&self) -> Result<()>;

    /// Reads the full card list
    async fn read_cards(&self) -> Result<Vec<Card>>;

    /// Replaces the stored card list
    async fn write_cards(&self, cards: &[Card]) -> Result<()>;

    /// Checks if the backing store exists
    async fn exists(&self) -> bool;

    /// Where the cards live, used in errors and to tell boards apart
    fn location(&self) -> &Path;
}

/// Serializes cards as a JSON array indented with four spaces
pub(crate) fn to_pretty_json(cards: &[Card]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    cards.serialize(&mut serializer)?;
    Ok(buf)
}
