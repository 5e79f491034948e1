use crate::domain::{Card, GameConfig, GameState, GameStatus, PileIndex, PileKind};
use crate::engine::deal::deal_new_game;
use crate::engine::errors::EngineError;
use crate::engine::render::render_state;
use crate::engine::rules::{apply_move, MoveRequest, MoveVariant};
use crate::engine::win::is_game_over;
use crate::engine::RandomSource;
use crate::infra::rng::SystemRng;

/// Одна партия FreeCell: состояние + вариант правил + источник случайности.
///
/// Внутренней синхронизации нет: один владелец на партию.
pub struct FreecellEngine<R: RandomSource = SystemRng> {
    state: GameState,
    variant: MoveVariant,
    rng: R,
}

impl FreecellEngine<SystemRng> {
    /// Партия с системным RNG.
    pub fn new(config: GameConfig, variant: MoveVariant) -> Self {
        Self::with_rng(config, variant, SystemRng)
    }
}

impl<R: RandomSource> FreecellEngine<R> {
    pub fn with_rng(config: GameConfig, variant: MoveVariant, rng: R) -> Self {
        Self {
            state: GameState::new(config),
            variant,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn variant(&self) -> MoveVariant {
        self.variant
    }

    /// Раздать (или пересдать) партию. `deck = None` — каноническая колода.
    pub fn start_game(&mut self, deck: Option<&[Card]>, shuffle: bool) -> Result<(), EngineError> {
        deal_new_game(&mut self.state, deck, shuffle, &mut self.rng)
    }

    /// Ход по «сырым» координатам.
    pub fn move_cards(
        &mut self,
        source: PileKind,
        source_index: PileIndex,
        card_index: usize,
        destination: PileKind,
        dest_index: PileIndex,
    ) -> Result<(), EngineError> {
        let request = MoveRequest::new(source, source_index, card_index, destination, dest_index);
        self.apply(&request)
    }

    pub fn apply(&mut self, request: &MoveRequest) -> Result<(), EngineError> {
        apply_move(&mut self.state, self.variant, request)
    }

    pub fn is_game_over(&mut self) -> bool {
        is_game_over(&mut self.state)
    }

    pub fn render_state(&self) -> String {
        render_state(&self.state)
    }
}
