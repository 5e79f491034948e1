use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// Ход в неподходящем статусе партии (не начата / уже выиграна).
    IllegalState(String),

    /// Ход нарушает правила.
    InvalidMove(String),

    /// Раздача отклонена: плохая колода или конфиг.
    InvalidDeck(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        let msg = err.to_string();
        match err {
            EngineError::IllegalState(_) => ApiError::IllegalState(msg),
            EngineError::InvalidMove(_) => ApiError::InvalidMove(msg),
            EngineError::InvalidDeck(_) => ApiError::InvalidDeck(msg),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
