use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Вид стопки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PileKind {
    /// Дом: 4 стопки, строятся по масти от туза до короля.
    Foundation,
    /// Свободная ячейка: не больше одной карты.
    Open,
    /// Каскад: рабочая стопка произвольной длины.
    Cascade,
}

impl PileKind {
    /// Однобуквенная метка для текстового вида (`F1`, `O2`, `C8`).
    pub const fn label(self) -> char {
        match self {
            PileKind::Foundation => 'F',
            PileKind::Open => 'O',
            PileKind::Cascade => 'C',
        }
    }

    pub fn from_label(ch: char) -> Option<Self> {
        match ch {
            'F' => Some(PileKind::Foundation),
            'O' => Some(PileKind::Open),
            'C' => Some(PileKind::Cascade),
            _ => None,
        }
    }
}

impl fmt::Display for PileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Стопка карт: индекс 0 — нижняя карта, последняя — верхняя.
/// Менять содержимое можно только с хвоста.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Хвост стопки начиная с `from` (сохраняя порядок).
    pub fn tail(&self, from: usize) -> &[Card] {
        &self.cards[from.min(self.cards.len())..]
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Снять хвост стопки начиная с `from`.
    pub fn split_off(&mut self, from: usize) -> Vec<Card> {
        self.cards.split_off(from.min(self.cards.len()))
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
