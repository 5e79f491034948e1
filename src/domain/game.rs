use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::deck::DeckError;
use crate::domain::pile::{Pile, PileKind};

/// Число домов всегда фиксировано.
pub const FOUNDATION_COUNT: usize = 4;
pub const MIN_CASCADES: usize = 4;
pub const MIN_OPENS: usize = 1;
pub const DEFAULT_CASCADES: usize = 8;
pub const DEFAULT_OPENS: usize = 4;

/// Конфиг раскладки: сколько каскадов и свободных ячеек.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub cascades: usize,
    pub opens: usize,
}

impl GameConfig {
    /// Без проверок: неверные значения отловит раздача.
    pub const fn new(cascades: usize, opens: usize) -> Self {
        Self { cascades, opens }
    }

    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<(), DeckError> {
        if self.cascades < MIN_CASCADES || self.opens < MIN_OPENS {
            return Err(DeckError::InvalidPileCounts {
                cascades: self.cascades,
                opens: self.opens,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CASCADES, DEFAULT_OPENS)
    }
}

/// Билдер конфига. По умолчанию 8 каскадов и 4 ячейки.
#[derive(Clone, Debug, Default)]
pub struct GameConfigBuilder {
    cascades: Option<usize>,
    opens: Option<usize>,
}

impl GameConfigBuilder {
    pub fn cascades(mut self, count: usize) -> Self {
        self.cascades = Some(count);
        self
    }

    pub fn opens(mut self, count: usize) -> Self {
        self.opens = Some(count);
        self
    }

    pub fn build(self) -> Result<GameConfig, DeckError> {
        let config = GameConfig::new(
            self.cascades.unwrap_or(DEFAULT_CASCADES),
            self.opens.unwrap_or(DEFAULT_OPENS),
        );
        config.validate()?;
        Ok(config)
    }
}

/// Статус партии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Won,
}

/// Полное состояние партии: три группы стопок + статус.
///
/// Мутирует состояние только engine (раздача и ходы), снаружи — только чтение.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    pub(crate) status: GameStatus,
    pub(crate) config: GameConfig,
    pub(crate) foundations: Vec<Pile>,
    pub(crate) opens: Vec<Pile>,
    pub(crate) cascades: Vec<Pile>,
}

impl GameState {
    /// Новая партия в статусе NotStarted, все стопки пустые.
    pub fn new(config: GameConfig) -> Self {
        Self {
            status: GameStatus::NotStarted,
            config,
            foundations: vec![Pile::new(); FOUNDATION_COUNT],
            opens: vec![Pile::new(); config.opens],
            cascades: vec![Pile::new(); config.cascades],
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn foundations(&self) -> &[Pile] {
        &self.foundations
    }

    pub fn opens(&self) -> &[Pile] {
        &self.opens
    }

    pub fn cascades(&self) -> &[Pile] {
        &self.cascades
    }

    /// Группа стопок по виду.
    pub fn piles(&self, kind: PileKind) -> &[Pile] {
        match kind {
            PileKind::Foundation => &self.foundations,
            PileKind::Open => &self.opens,
            PileKind::Cascade => &self.cascades,
        }
    }

    pub(crate) fn piles_mut(&mut self, kind: PileKind) -> &mut [Pile] {
        match kind {
            PileKind::Foundation => &mut self.foundations,
            PileKind::Open => &mut self.opens,
            PileKind::Cascade => &mut self.cascades,
        }
    }

    pub fn pile(&self, kind: PileKind, index: usize) -> Option<&Pile> {
        self.piles(kind).get(index)
    }

    /// Сколько пустых стопок данного вида.
    pub fn empty_count(&self, kind: PileKind) -> usize {
        self.piles(kind).iter().filter(|p| p.is_empty()).count()
    }

    /// Все карты на столе (дома, ячейки, каскады — в этом порядке).
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.foundations
            .iter()
            .chain(self.opens.iter())
            .chain(self.cascades.iter())
            .flat_map(|p| p.cards().iter())
    }

    /// Сбросить все стопки под текущий конфиг.
    pub(crate) fn reset_piles(&mut self) {
        self.foundations = vec![Pile::new(); FOUNDATION_COUNT];
        self.opens = vec![Pile::new(); self.config.opens];
        self.cascades = vec![Pile::new(); self.config.cascades];
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
