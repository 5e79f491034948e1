//! Движок FreeCell: раздача, проверка и выполнение ходов, выигрыш, текстовое состояние.
//!
//! Высокоуровневый объект: `FreecellEngine`
//! Основные операции:
//!   - `deal_new_game` – раздать (пересдать) партию
//!   - `apply_move` – проверить и выполнить ход
//!   - `is_game_over` – проверить (и защёлкнуть) выигрыш
//!   - `render_state` – текстовое состояние

pub mod deal;
pub mod errors;
pub mod game_loop;
pub mod render;
pub mod rules;
pub mod validation;
pub mod win;

pub use deal::deal_new_game;
pub use errors::{DeckError, EngineError, MoveError};
pub use game_loop::FreecellEngine;
pub use render::{render_pile, render_state};
pub use rules::{apply_move, validate_move, MoveRequest, MoveVariant};
pub use win::{foundations_complete, is_game_over};

/// RNG интерфейс для engine.
/// Реализации — в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
