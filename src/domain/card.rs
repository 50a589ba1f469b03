use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Format used for the `Creation Date` field, e.g. `17/10/2026 09:30:00`
pub const CREATION_DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Stable identifier for a card, assigned once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(Uuid);

impl CardId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Placeholder for cards stored without an ID
    pub fn unassigned() -> Self {
        Self(Uuid::nil())
    }

    pub fn is_assigned(&self) -> bool {
        !self.0.is_nil()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for CardId {
    type Err = crate::error::KantanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| crate::error::KantanError::CardNotFound(s.to_string()))
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single work item on a board.
///
/// Field names on disk follow the board file format (`Title`,
/// `Creation Date`, `Tags`). Cards written before IDs existed deserialize
/// with [`CardId::unassigned`]; [`crate::Board`] gives them real IDs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "ID", default = "CardId::unassigned")]
    pub id: CardId,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Creation Date")]
    pub creation_date: String,
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl Card {
    /// Creates a card stamped with the current local time.
    /// Empty tags are dropped.
    pub fn new(title: String, tags: impl Into<String>) -> Self {
        let tags = tags.into();
        Self {
            id: CardId::new(),
            title,
            creation_date: Local::now().format(CREATION_DATE_FORMAT).to_string(),
            tags: if tags.is_empty() { None } else { Some(tags) },
        }
    }

    /// Builds a card from title words joined by single spaces
    pub fn from_words<S: AsRef<str>>(
        words: &[S],
        tags: impl Into<String>,
    ) -> Result<Self, crate::error::KantanError> {
        let title = words
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");

        if title.is_empty() {
            return Err(crate::error::KantanError::EmptyTitle);
        }

        Ok(Self::new(title, tags))
    }

    pub fn tags(&self) -> &str {
        self.tags.as_deref().unwrap_or("")
    }

    /// Parses the creation date, if it is in the expected format
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.creation_date, CREATION_DATE_FORMAT).ok()
    }
}
