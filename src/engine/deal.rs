use log::debug;

use crate::domain::{canonical_deck, Card, Deck, GameState, GameStatus};
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// Раздать новую партию.
///
/// - `deck = None` — берём каноническую колоду;
/// - проверки: размер, дубли, карты, число стопок (первая ошибка выигрывает);
/// - `shuffle` — равномерно перемешать перед раздачей;
/// - карта `i` уходит в каскад `i % cascades`, ячейки и дома пустые.
///
/// Повторный вызов полностью пересдаёт партию. При ошибке состояние не трогаем.
pub fn deal_new_game<R: RandomSource>(
    state: &mut GameState,
    deck: Option<&[Card]>,
    shuffle: bool,
    rng: &mut R,
) -> Result<(), EngineError> {
    let mut deck = match deck {
        Some(cards) => Deck::from_cards(cards.to_vec()),
        None => Deck::from_cards(canonical_deck()),
    };

    deck.validate()?;
    state.config.validate()?;

    if shuffle {
        rng.shuffle(&mut deck.cards);
    }

    state.reset_piles();
    let cascades = state.cascades.len();
    for (i, card) in deck.cards.into_iter().enumerate() {
        state.cascades[i % cascades].push(card);
    }
    state.status = GameStatus::InProgress;

    debug!(
        "deal: {} каскадов, {} ячеек, shuffle={}",
        state.config.cascades, state.config.opens, shuffle
    );
    Ok(())
}
