use serde::{Deserialize, Serialize};

use crate::domain::{Card, GameStatus};
use crate::engine::{FreecellEngine, MoveRequest, RandomSource};

use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::build_game_view;

/// Команда верхнего уровня — всё, что меняет состояние партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Раздать (или пересдать) партию.
    StartGame(StartGameCommand),

    /// Сделать ход.
    Move(MoveRequest),
}

/// Раздача новой партии.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StartGameCommand {
    /// Своя колода; `None` — каноническая.
    pub deck: Option<Vec<Card>>,
    pub shuffle: bool,
}

impl Command {
    /// Разобрать команду из JSON.
    pub fn from_json(text: &str) -> Result<Self, ApiError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Выполнить команду над партией и вернуть её обновлённое состояние.
pub fn execute_command<R: RandomSource>(
    engine: &mut FreecellEngine<R>,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::StartGame(cmd) => {
            engine.start_game(cmd.deck.as_deref(), cmd.shuffle)?;
        }
        Command::Move(request) => {
            engine.apply(&request)?;
        }
    }

    let view = build_game_view(engine.state(), engine.variant());
    if engine.status() == GameStatus::Won {
        Ok(CommandResponse::GameWon(view))
    } else {
        Ok(CommandResponse::GameState(view))
    }
}
