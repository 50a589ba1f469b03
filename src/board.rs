//! Card operations on a single board.
//!
//! Each operation is one read-mutate-write cycle against a [`CardStore`].
//! There is no locking: two processes mutating the same board concurrently
//! can lose an update (last writer wins).

use crate::{
    domain::{BoardName, Card, CardId},
    error::{ErrorKind, KantanError, Result},
    storage::CardStore,
};

/// A named board backed by a card store
pub struct Board<S: CardStore> {
    name: BoardName,
    store: S,
}

impl<S: CardStore> Board<S> {
    pub fn new(name: BoardName, store: S) -> Self {
        Self { name, store }
    }

    pub fn name(&self) -> &BoardName {
        &self.name
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Appends a card whose title is `title_words` joined by spaces.
    ///
    /// An unreadable board fails before anything is written. A board file
    /// with malformed JSON is treated as empty and overwritten.
    pub async fn add<T: AsRef<str>>(&self, title_words: &[T], tags: &str) -> Result<Card> {
        let card = Card::from_words(title_words, tags)?;

        let mut cards = match self.load(false).await {
            Ok(cards) => cards,
            Err(e) if e.kind() == ErrorKind::Parse => {
                tracing::warn!(board = %self.name, error = %e, "discarding unreadable board contents");
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        cards.push(card.clone());
        self.store.write_cards(&cards).await?;

        tracing::info!(board = %self.name, title = %card.title, "added card");
        Ok(card)
    }

    /// Removes the card at `index` and returns it.
    ///
    /// Negative or out-of-range indexes leave the board untouched.
    pub async fn remove(&self, index: i64) -> Result<Card> {
        let mut cards = self.load(false).await?;
        let position = checked_index(index, cards.len())?;

        let card = cards.remove(position);
        self.store.write_cards(&cards).await?;

        tracing::info!(board = %self.name, index, title = %card.title, "removed card");
        Ok(card)
    }

    /// Removes the card with the given ID and returns it
    pub async fn remove_by_id(&self, id: &CardId) -> Result<Card> {
        let mut cards = self.load(false).await?;
        let position = cards
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| KantanError::CardNotFound(id.to_string()))?;

        let card = cards.remove(position);
        self.store.write_cards(&cards).await?;

        tracing::info!(board = %self.name, id = %id, title = %card.title, "removed card");
        Ok(card)
    }

    /// Removes every card from the board
    pub async fn remove_all(&self) -> Result<()> {
        self.store.write_cards(&[]).await?;
        tracing::info!(board = %self.name, "cleared board");
        Ok(())
    }

    /// Returns all cards in insertion order.
    ///
    /// Cards stored without an ID get one here, and the board is written
    /// back so the same IDs come out of every later read.
    pub async fn cards(&self) -> Result<Vec<Card>> {
        self.load(true).await
    }

    /// Returns the card at `index` without modifying the board
    pub async fn get(&self, index: i64) -> Result<Card> {
        let mut cards = self.load(true).await?;
        let position = checked_index(index, cards.len())?;
        Ok(cards.swap_remove(position))
    }

    /// Finds a card by its ID
    pub async fn find(&self, id: &CardId) -> Result<Option<Card>> {
        let cards = self.load(true).await?;
        Ok(cards.into_iter().find(|c| &c.id == id))
    }

    pub async fn len(&self) -> Result<usize> {
        Ok(self.store.read_cards().await?.len())
    }

    pub async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }

    /// Reads the cards, giving each card stored without an ID a new one.
    ///
    /// With `persist`, newly assigned IDs are written back. Operations that
    /// rewrite the board anyway pass `false`. A failed write-back is logged
    /// and the cards are still returned.
    async fn load(&self, persist: bool) -> Result<Vec<Card>> {
        let mut cards = self.store.read_cards().await?;

        let mut assigned = 0usize;
        for card in cards.iter_mut().filter(|c| !c.id.is_assigned()) {
            card.id = CardId::new();
            assigned += 1;
        }

        if persist && assigned > 0 {
            match self.store.write_cards(&cards).await {
                Ok(()) => tracing::info!(board = %self.name, assigned, "assigned card IDs"),
                Err(e) => {
                    tracing::warn!(board = %self.name, error = %e, "could not save assigned card IDs")
                }
            }
        }

        Ok(cards)
    }
}

/// Converts a caller-supplied index into a position within `len` cards
pub(crate) fn checked_index(index: i64, len: usize) -> Result<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < len)
        .ok_or(KantanError::IndexOutOfRange { index, len })
}
