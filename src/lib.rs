//! # Kantan
//!
//! Personal kanban boards kept as flat JSON files.
//!
//! Each board is one file holding a JSON array of cards. Every operation
//! reads the whole array, changes it in memory and writes it back. The crate
//! assumes a single user and a single process per board: nothing locks the
//! files, so concurrent writers can lose updates.
//!
//! - [`storage`]: reading and writing card lists ([`CardStore`]).
//! - [`board`]: add, remove, clear and list on one board ([`Board`]).
//! - [`registry`]: board names to files, board creation and moves.
//! - [`config`]: paths and `config.toml`.

pub mod board;
pub mod config;
pub mod domain;
pub mod error;
pub mod registry;
pub mod storage;

// Re-export commonly used types
pub use board::Board;
pub use config::{AppPaths, KantanConfig};
pub use domain::{BoardName, Card, CardId};
pub use error::{ErrorKind, KantanError, Result};
pub use registry::BoardRegistry;
pub use storage::{CardStore, JsonFileStore, MemoryStore, WriteMode};
