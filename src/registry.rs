//! Board name to file resolution, plus the `boards` board that records
//! every board created through [`BoardRegistry::init_board`].

use crate::{
    board::{checked_index, Board},
    config::{AppPaths, KantanConfig},
    domain::{BoardName, Card},
    error::{KantanError, Result},
    storage::{CardStore, JsonFileStore, WriteMode},
};
use std::path::{Path, PathBuf};

pub struct BoardRegistry {
    data_dir: PathBuf,
    write_mode: WriteMode,
}

impl BoardRegistry {
    pub fn new(data_dir: impl AsRef<Path>, write_mode: WriteMode) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            write_mode,
        }
    }

    pub fn from_config(config: &KantanConfig, paths: &AppPaths) -> Self {
        Self::new(config.data_dir(paths), config.write_mode())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// File backing a board: `<data_dir>/.<name>_board.json`
    pub fn board_path(&self, name: &BoardName) -> PathBuf {
        self.data_dir.join(format!(".{}_board.json", name.as_str()))
    }

    pub fn exists(&self, name: &BoardName) -> bool {
        self.board_path(name).exists()
    }

    fn store_for(&self, name: &BoardName) -> JsonFileStore {
        JsonFileStore::new(self.board_path(name)).with_write_mode(self.write_mode)
    }

    /// Creates an empty board and records its name in the registry board
    pub async fn init_board(&self, name: &BoardName) -> Result<PathBuf> {
        if name.is_registry() {
            return Err(KantanError::InvalidBoardName(name.to_string()));
        }
        if self.exists(name) {
            return Err(KantanError::BoardAlreadyExists(name.to_string()));
        }

        let store = self.store_for(name);
        store.initialize().await?;
        tracing::info!(board = %name, path = %store.path().display(), "created board");

        let registry = self.registry_board().await?;
        registry.add(&[name.as_str()], "").await?;

        Ok(store.path().to_path_buf())
    }

    /// Opens an existing board
    pub fn open(&self, name: &BoardName) -> Result<Board<JsonFileStore>> {
        if !self.exists(name) {
            return Err(KantanError::BoardNotFound(name.to_string()));
        }
        Ok(Board::new(name.clone(), self.store_for(name)))
    }

    /// Names of all boards recorded in the registry board
    pub async fn board_names(&self) -> Result<Vec<String>> {
        let registry = BoardName::registry();
        if !self.exists(&registry) {
            return Ok(Vec::new());
        }

        let cards = self.open(&registry)?.cards().await?;
        Ok(cards.into_iter().map(|c| c.title).collect())
    }

    /// Opens the registry board, creating it on first use
    async fn registry_board(&self) -> Result<Board<JsonFileStore>> {
        let name = BoardName::registry();
        let store = self.store_for(&name);
        if !store.exists().await {
            store.initialize().await?;
            tracing::debug!(path = %store.path().display(), "created board registry");
        }
        Ok(Board::new(name, store))
    }

    /// Moves the card at `index` from `src` to the end of `dst`.
    ///
    /// The card keeps its ID, creation date and tags. The destination is
    /// written before the source, so a failed write can duplicate the card
    /// but never drop it.
    pub async fn move_card(&self, src: &BoardName, index: i64, dst: &BoardName) -> Result<Card> {
        let source = self.open(src)?;
        let destination = self.open(dst)?;

        let mut src_cards = source.cards().await?;
        let position = checked_index(index, src_cards.len())?;
        let card = src_cards.remove(position);

        if src == dst {
            src_cards.push(card.clone());
        } else {
            let mut dst_cards = destination.cards().await?;
            dst_cards.push(card.clone());
            destination.store().write_cards(&dst_cards).await?;
        }
        source.store().write_cards(&src_cards).await?;

        tracing::info!(from = %src, to = %dst, title = %card.title, "moved card");
        Ok(card)
    }
}
