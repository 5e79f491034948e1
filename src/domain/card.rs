use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибки конструирования/парсинга карты.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("Недопустимый ранг карты: {0} (ожидается 1..13)")]
    InvalidRank(u8),

    #[error("Недопустимая масть карты: {0:?}")]
    InvalidSuit(char),

    #[error("Не удалось разобрать карту: {0:?}")]
    Malformed(String),
}

/// Масть карты. Порядок вариантов = порядок мастей в канонической колоде.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Suit {
    Clubs,    // ♣
    Diamonds, // ♦
    Hearts,   // ♥
    Spades,   // ♠
}

/// Цвет масти: трефы/пики — чёрные, бубны/червы — красные.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn color(self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Diamonds | Suit::Hearts => Color::Red,
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    /// Масть по символу: глиф или ASCII-алиас (c/d/h/s, регистр не важен).
    pub fn from_char(ch: char) -> Result<Self, CardError> {
        match ch {
            '♣' | 'c' | 'C' => Ok(Suit::Clubs),
            '♦' | 'd' | 'D' => Ok(Suit::Diamonds),
            '♥' | 'h' | 'H' => Ok(Suit::Hearts),
            '♠' | 's' | 'S' => Ok(Suit::Spades),
            other => Err(CardError::InvalidSuit(other)),
        }
    }
}

/// Ранг карты. Туз = 1, король = 13.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Числовое значение ранга (1..=13).
    pub const fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Result<Self, CardError> {
        match value {
            1..=13 => Ok(Rank::ALL[(value - 1) as usize]),
            _ => Err(CardError::InvalidRank(value)),
        }
    }

    /// Ранг ровно на единицу меньше (`None` для туза).
    pub fn pred(self) -> Option<Rank> {
        Rank::from_value(self.value() - 1).ok()
    }

    /// Ранг ровно на единицу больше (`None` для короля).
    pub fn succ(self) -> Option<Rank> {
        Rank::from_value(self.value() + 1).ok()
    }
}

/// Карта стандартной 52-карточной колоды. Неизменяема после создания.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Конструктор из «сырых» значений: ранг 1..13 и символ масти.
    pub fn from_parts(value: u8, suit: char) -> Result<Self, CardError> {
        Ok(Self {
            rank: Rank::from_value(value)?,
            suit: Suit::from_char(suit)?,
        })
    }

    pub const fn color(&self) -> Color {
        self.suit.color()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Ace => write!(f, "A"),
            Rank::Jack => write!(f, "J"),
            Rank::Queen => write!(f, "Q"),
            Rank::King => write!(f, "K"),
            r => write!(f, "{}", r.value()),
        }
    }
}

impl fmt::Display for Card {
    /// Формат вида `A♣`, `10♦`, `Q♥`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Парсинг строки вида "A♣", "10♠", "Qh", "Td".
impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_ch = s
            .chars()
            .last()
            .ok_or_else(|| CardError::Malformed(s.to_string()))?;
        let rank_part = &s[..s.len() - suit_ch.len_utf8()];

        let rank = match rank_part {
            "A" | "a" => Rank::Ace,
            "J" | "j" => Rank::Jack,
            "Q" | "q" => Rank::Queen,
            "K" | "k" => Rank::King,
            "T" | "t" => Rank::Ten,
            digits => {
                let value: u8 = digits
                    .parse()
                    .map_err(|_| CardError::Malformed(s.to_string()))?;
                Rank::from_value(value)?
            }
        };

        let suit = Suit::from_char(suit_ch)?;
        Ok(Card { rank, suit })
    }
}
