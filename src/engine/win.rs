use std::collections::HashSet;

use log::info;

use crate::domain::{GameState, GameStatus, Pile, Rank, FOUNDATION_COUNT};

/// Собраны ли дома полностью:
/// - ровно 4 стопки по 13 карт;
/// - каждая стопка одной масти, все 4 масти по одному разу;
/// - внутри стопки ранги идут 1..13 по возрастанию.
pub fn foundations_complete(foundations: &[Pile]) -> bool {
    if foundations.len() != FOUNDATION_COUNT {
        return false;
    }

    let mut suits = HashSet::with_capacity(FOUNDATION_COUNT);
    for pile in foundations {
        let cards = pile.cards();
        if cards.len() != Rank::ALL.len() {
            return false;
        }

        let suit = cards[0].suit;
        let in_order = cards
            .iter()
            .zip(Rank::ALL)
            .all(|(card, rank)| card.suit == suit && card.rank == rank);
        if !in_order || !suits.insert(suit) {
            return false;
        }
    }
    true
}

/// Закончена ли партия. Выигрыш защёлкивается в статус `Won`.
///
/// До старта — всегда `false`. Повторные вызовы карты не трогают.
pub fn is_game_over(state: &mut GameState) -> bool {
    match state.status {
        GameStatus::NotStarted => false,
        GameStatus::Won => true,
        GameStatus::InProgress => {
            if foundations_complete(&state.foundations) {
                state.status = GameStatus::Won;
                info!("партия выиграна");
                true
            } else {
                false
            }
        }
    }
}
