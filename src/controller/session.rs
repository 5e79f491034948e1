use std::io::{self, BufRead, Write};

use log::debug;
use thiserror::Error;

use crate::domain::{Card, PileIndex, PileKind};
use crate::engine::{EngineError, FreecellEngine, RandomSource};

use super::input::{is_quit, parse_card_index, parse_pile, InputError, TokenReader};

pub const QUIT_MESSAGE: &str = "Игра прервана.";
pub const GAME_OVER_MESSAGE: &str = "Игра окончена.";

/// Ошибки текстовой сессии.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] io::Error),

    #[error("Ввод закончился раньше, чем партия")]
    InputExhausted,

    #[error("Не удалось начать партию: {0}")]
    Deal(#[from] EngineError),
}

/// Чем закончилась сессия.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    Won,
    Quit,
}

enum Step<T> {
    Value(T),
    Quit,
}

/// Текстовая партия: раздать, затем в цикле печатать состояние и читать ход
/// (`C1 7 F1` — источник, номер карты, приёмник), пока не выигрыш или выход.
pub fn play_game<R, I, W>(
    engine: &mut FreecellEngine<R>,
    deck: Option<&[Card]>,
    shuffle: bool,
    input: I,
    output: &mut W,
) -> Result<SessionOutcome, ControllerError>
where
    R: RandomSource,
    I: BufRead,
    W: Write,
{
    engine.start_game(deck, shuffle)?;
    let mut tokens = TokenReader::new(input);

    loop {
        writeln!(output, "{}", engine.render_state())?;
        if engine.is_game_over() {
            writeln!(output, "{GAME_OVER_MESSAGE}")?;
            return Ok(SessionOutcome::Won);
        }

        let Step::Value((source, source_index)) = read_pile(&mut tokens, output)? else {
            return quit(output);
        };
        let Step::Value(card_index) = read_value(&mut tokens, output, parse_card_index)? else {
            return quit(output);
        };
        let Step::Value((destination, dest_index)) = read_pile(&mut tokens, output)? else {
            return quit(output);
        };

        if let Err(err) = engine.move_cards(source, source_index, card_index, destination, dest_index) {
            debug!("сессия: ход отклонён: {err}");
            writeln!(output, "Недопустимый ход, попробуйте ещё раз. {err}")?;
        }
    }
}

fn quit<W: Write>(output: &mut W) -> Result<SessionOutcome, ControllerError> {
    writeln!(output, "{QUIT_MESSAGE}")?;
    Ok(SessionOutcome::Quit)
}

fn read_pile<I: BufRead, W: Write>(
    tokens: &mut TokenReader<I>,
    output: &mut W,
) -> Result<Step<(PileKind, PileIndex)>, ControllerError> {
    read_value(tokens, output, parse_pile)
}

/// Читать токены, пока один не разберётся (или не придёт выход).
fn read_value<T, I: BufRead, W: Write>(
    tokens: &mut TokenReader<I>,
    output: &mut W,
    parse: impl Fn(&str) -> Result<T, InputError>,
) -> Result<Step<T>, ControllerError> {
    loop {
        let token = tokens.next_token()?.ok_or(ControllerError::InputExhausted)?;
        if is_quit(&token) {
            return Ok(Step::Quit);
        }
        match parse(&token) {
            Ok(value) => return Ok(Step::Value(value)),
            Err(err) => writeln!(output, "{err}. Введите ещё раз.")?,
        }
    }
}
