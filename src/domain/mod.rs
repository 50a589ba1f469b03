pub mod board_name;
pub mod card;

pub use board_name::BoardName;
pub use card::{Card, CardId, CREATION_DATE_FORMAT};
