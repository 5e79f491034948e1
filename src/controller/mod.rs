//! Текстовый контроллер: читает ходы из потока, печатает состояние.
//! Движок ничего не знает о вводе-выводе — всё это здесь.

pub mod input;
pub mod session;

pub use input::{is_quit, parse_card_index, parse_pile, InputError, TokenReader};
pub use session::{play_game, ControllerError, SessionOutcome, GAME_OVER_MESSAGE, QUIT_MESSAGE};
