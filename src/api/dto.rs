use serde::{Deserialize, Serialize};

use crate::domain::{GameStatus, Pile, PileKind};
use crate::engine::MoveVariant;

/// DTO одной стопки: метка (`C3`) и карты снизу вверх в текстовом виде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PileDto {
    pub label: String,
    pub cards: Vec<String>,
}

impl PileDto {
    pub fn from_pile(kind: PileKind, index: usize, pile: &Pile) -> Self {
        Self {
            label: format!("{}{}", kind.label(), index + 1),
            cards: pile.cards().iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// DTO партии целиком.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameViewDto {
    pub status: GameStatus,
    pub variant: MoveVariant,
    pub foundations: Vec<PileDto>,
    pub opens: Vec<PileDto>,
    pub cascades: Vec<PileDto>,
    pub game_over: bool,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Вернуть обновлённое состояние партии.
    GameState(GameViewDto),

    /// Ход привёл к выигрышу.
    GameWon(GameViewDto),
}
