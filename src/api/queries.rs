use serde::{Deserialize, Serialize};

use crate::domain::{GameState, GameStatus, PileKind};
use crate::engine::{FreecellEngine, MoveVariant, RandomSource};

use super::dto::{GameViewDto, PileDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Состояние партии в виде DTO.
    State,

    /// Каноническое текстовое состояние.
    Rendered,

    /// Закончена ли партия.
    IsGameOver,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    State(GameViewDto),
    Rendered(String),
    GameOver(bool),
}

/// Сформировать DTO партии.
pub fn build_game_view(state: &GameState, variant: MoveVariant) -> GameViewDto {
    let piles = |kind: PileKind| -> Vec<PileDto> {
        state
            .piles(kind)
            .iter()
            .enumerate()
            .map(|(idx, pile)| PileDto::from_pile(kind, idx, pile))
            .collect()
    };

    GameViewDto {
        status: state.status(),
        variant,
        foundations: piles(PileKind::Foundation),
        opens: piles(PileKind::Open),
        cascades: piles(PileKind::Cascade),
        game_over: state.status() == GameStatus::Won,
    }
}

/// Выполнить запрос.
///
/// `IsGameOver` может защёлкнуть статус `Won`, поэтому нужен `&mut`.
pub fn execute_query<R: RandomSource>(engine: &mut FreecellEngine<R>, query: Query) -> QueryResponse {
    match query {
        Query::State => QueryResponse::State(build_game_view(engine.state(), engine.variant())),
        Query::Rendered => QueryResponse::Rendered(engine.render_state()),
        Query::IsGameOver => QueryResponse::GameOver(engine.is_game_over()),
    }
}
