use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::{Card, Rank, Suit};

/// Размер стандартной колоды.
pub const DECK_SIZE: usize = 52;

/// Ошибки стартовой колоды / конфигурации раскладки.
/// Проверки идут строго в порядке вариантов: размер, дубли, валидность карт, число стопок.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("В колоде должно быть {DECK_SIZE} карт, получено {found}")]
    WrongSize { found: usize },

    #[error("Карта {0} встречается в колоде больше одного раза")]
    DuplicateCard(Card),

    #[error("Недопустимая карта в колоде: {0}")]
    InvalidCard(String),

    #[error("Недопустимое число стопок: каскадов {cascades} (минимум 4), открытых {opens} (минимум 1)")]
    InvalidPileCounts { cascades: usize, opens: usize },
}

/// Колода карт — упорядоченный список.
/// Перемешивание делает engine (через RandomSource), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Каноническая колода: ♣ A..K, ♦ A..K, ♥ A..K, ♠ A..K.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Проверка размера и уникальности карт.
    ///
    /// Валидность отдельных карт гарантирует тип `Card`, поэтому здесь
    /// остаются только проверки (a) и (b).
    pub fn validate(&self) -> Result<(), DeckError> {
        if self.cards.len() != DECK_SIZE {
            return Err(DeckError::WrongSize {
                found: self.cards.len(),
            });
        }

        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for card in &self.cards {
            if !seen.insert(*card) {
                return Err(DeckError::DuplicateCard(*card));
            }
        }
        Ok(())
    }
}

/// Каноническая колода в виде списка карт.
pub fn canonical_deck() -> Vec<Card> {
    Deck::standard_52().cards
}

/// Разобрать колоду из текста: токены через пробелы и/или запятые.
///
/// Порядок проверок тот же, что и при раздаче: сначала размер,
/// затем дубли, затем валидность каждой карты.
pub fn parse_deck(text: &str) -> Result<Deck, DeckError> {
    let tokens: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.len() != DECK_SIZE {
        return Err(DeckError::WrongSize {
            found: tokens.len(),
        });
    }

    // "Ah" и "A♥" — одна и та же карта, поэтому дубли сравниваем
    // по разобранной карте. Неразборные токены ловит следующий проход.
    let mut seen = HashSet::with_capacity(DECK_SIZE);
    for card in tokens.iter().filter_map(|t| t.parse::<Card>().ok()) {
        if !seen.insert(card) {
            return Err(DeckError::DuplicateCard(card));
        }
    }

    let cards = tokens
        .iter()
        .map(|t| t.parse::<Card>().map_err(|_| DeckError::InvalidCard(t.to_string())))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Deck { cards })
}
