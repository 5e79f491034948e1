//! Движок пасьянса FreeCell.
//!
//! Слои:
//! - `domain` — карты, колода, стопки, состояние партии;
//! - `engine` — раздача, правила ходов (обычный и суперход), выигрыш, текстовое состояние;
//! - `api` — сериализуемые команды/запросы/DTO поверх движка;
//! - `infra` — RNG-реализации;
//! - `controller` — текстовый цикл партии поверх `BufRead`/`Write`.

pub mod api;
pub mod controller;
pub mod domain;
pub mod engine;
pub mod infra;

pub use domain::{canonical_deck, Card, GameConfig, GameState, GameStatus, PileKind, Rank, Suit};
pub use engine::{EngineError, FreecellEngine, MoveRequest, MoveVariant};
