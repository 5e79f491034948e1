//! Разбор пользовательского ввода: токены, стопки, индексы карт.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use thiserror::Error;

use crate::domain::{PileIndex, PileKind};

/// Ошибки разбора одного токена. Пользователь просто вводит токен заново.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Нужны и вид стопки, и номер, например C1 или O1")]
    MissingIndex,

    #[error("Вид стопки должен быть одним из C, F или O")]
    UnknownPileKind,

    #[error("Номер стопки должен быть числом, начиная с 1")]
    BadPileIndex,

    #[error("Номер карты должен быть числом, начиная с 1")]
    BadCardIndex,
}

/// Признак выхода: любой токен, содержащий `q`/`Q`.
pub fn is_quit(token: &str) -> bool {
    token.contains(['q', 'Q'])
}

/// `C3` -> (Cascade, 2). Номера у пользователя 1-based, внутри — 0-based.
pub fn parse_pile(token: &str) -> Result<(PileKind, PileIndex), InputError> {
    let mut chars = token.chars();
    let label = chars.next().ok_or(InputError::MissingIndex)?;
    let rest = chars.as_str();
    if rest.is_empty() {
        return Err(InputError::MissingIndex);
    }

    let kind = PileKind::from_label(label).ok_or(InputError::UnknownPileKind)?;
    let index = parse_one_based(rest).ok_or(InputError::BadPileIndex)?;
    Ok((kind, index))
}

/// `7` -> 6.
pub fn parse_card_index(token: &str) -> Result<usize, InputError> {
    parse_one_based(token).ok_or(InputError::BadCardIndex)
}

fn parse_one_based(text: &str) -> Option<usize> {
    match text.parse::<usize>() {
        Ok(n) if n >= 1 => Some(n - 1),
        _ => None,
    }
}

/// Читает токены, разделённые пробелами, построчно из `BufRead`.
pub struct TokenReader<R: BufRead> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Следующий токен или `None`, если ввод закончился.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}
