use crate::domain::{Card, GameStatus, PileIndex, PileKind};

pub use crate::domain::deck::DeckError;

use thiserror::Error;

/// Нарушения правил при ходе. Любая из этих ошибок оставляет состояние без изменений.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("Стопки {kind}{} не существует", .index + 1)]
    NoSuchPile { kind: PileKind, index: PileIndex },

    #[error("Карту с индексом {index} нельзя взять из этой стопки")]
    NoSuchCard { index: usize },

    #[error("Источник и приёмник — одна и та же стопка")]
    SamePile,

    #[error("Свободная ячейка уже занята")]
    OpenOccupied,

    #[error("Карту {moving} нельзя положить на {target}: нужен другой цвет и ранг на единицу меньше")]
    CascadeMismatch { moving: Card, target: Card },

    #[error("Карту {moving} нельзя положить в дом{}", foundation_target(.target))]
    FoundationMismatch { moving: Card, target: Option<Card> },

    #[error("Перемещаемые карты не образуют корректную последовательность")]
    RunNotValidBuild,

    #[error("Слишком длинная последовательность: {run} карт, можно не больше {max}")]
    CapacityExceeded { run: usize, max: usize },

    #[error("В свободную ячейку можно положить только одну карту (а не {run})")]
    MultiCardToOpen { run: usize },

    #[error("В дом можно положить только одну карту (а не {run})")]
    MultiCardToFoundation { run: usize },
}

/// Ошибки движка FreeCell.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Ходы недоступны: партия в статусе {0:?}")]
    IllegalState(GameStatus),

    #[error("Недопустимый ход: {0}")]
    InvalidMove(#[from] MoveError),

    #[error("Недопустимая колода: {0}")]
    InvalidDeck(#[from] DeckError),
}

fn foundation_target(target: &Option<Card>) -> String {
    match target {
        Some(top) => format!(" поверх {top}"),
        None => " (пустой дом принимает только туза)".to_string(),
    }
}
