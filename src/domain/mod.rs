//! Доменная модель FreeCell: карты, колода, стопки, конфиг и состояние партии.

pub mod card;
pub mod deck;
pub mod game;
pub mod pile;

/// Индекс стопки внутри группы (0-based).
pub type PileIndex = usize;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use game::*;
pub use pile::*;
