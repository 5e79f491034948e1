//! Внешний API движка FreeCell.
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что меняет состояние (раздача, ход);
//! - запросы (queries.rs) — только чтение;
//! - DTO (dto.rs) — сериализуемое представление партии;
//! - ошибки (errors.rs) — то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
