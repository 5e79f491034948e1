//! Движок правил: проверка и выполнение хода.
//!
//! Схема «сначала проверить, потом применить»: вся валидация идёт по
//! неизменяемому состоянию, мутация стопок — только после успешной проверки.
//! Поэтому отклонённый ход никогда не оставляет следов.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::{Card, GameState, GameStatus, PileIndex, PileKind};
use crate::engine::errors::{EngineError, MoveError};
use crate::engine::validation::{
    check_cascade_placement, check_foundation_placement, check_open_placement, is_valid_build,
    max_movable_run,
};
use crate::engine::win::is_game_over;

/// Вариант правил.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MoveVariant {
    /// Переносится только одна верхняя карта.
    #[default]
    Basic,
    /// Можно переносить корректную последовательность карт целиком,
    /// длина ограничена числом свободных ячеек и пустых каскадов.
    Supermove,
}

/// Запрос хода: откуда (вид стопки, индекс, индекс карты) и куда. Все индексы 0-based.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoveRequest {
    pub source: PileKind,
    pub source_index: PileIndex,
    pub card_index: usize,
    pub destination: PileKind,
    pub dest_index: PileIndex,
}

impl MoveRequest {
    pub const fn new(
        source: PileKind,
        source_index: PileIndex,
        card_index: usize,
        destination: PileKind,
        dest_index: PileIndex,
    ) -> Self {
        Self {
            source,
            source_index,
            card_index,
            destination,
            dest_index,
        }
    }
}

/// Выполнить ход.
///
/// Порядок проверок (первая ошибка выигрывает):
/// 1) статус партии InProgress;
/// 2) обе стопки существуют;
/// 3) карта существует и её можно взять (по правилам варианта);
/// 4) приёмник принимает карту/последовательность.
///
/// После успешного хода пересчитываем условие выигрыша.
pub fn apply_move(
    state: &mut GameState,
    variant: MoveVariant,
    request: &MoveRequest,
) -> Result<(), EngineError> {
    if state.status != GameStatus::InProgress {
        return Err(EngineError::IllegalState(state.status));
    }

    if let Err(err) = validate_move(state, variant, request) {
        debug!("ход {:?} отклонён: {}", request, err);
        return Err(err.into());
    }

    let moved = state.piles_mut(request.source)[request.source_index].split_off(request.card_index);
    debug!(
        "ход {}{} -> {}{}: {} карт(а)",
        request.source,
        request.source_index + 1,
        request.destination,
        request.dest_index + 1,
        moved.len()
    );
    state.piles_mut(request.destination)[request.dest_index].extend(moved);

    is_game_over(state);
    Ok(())
}

/// Полная проверка хода без мутаций. Возвращает длину переносимой последовательности.
pub fn validate_move(
    state: &GameState,
    variant: MoveVariant,
    request: &MoveRequest,
) -> Result<usize, MoveError> {
    let source = state
        .pile(request.source, request.source_index)
        .ok_or(MoveError::NoSuchPile {
            kind: request.source,
            index: request.source_index,
        })?;
    let dest = state
        .pile(request.destination, request.dest_index)
        .ok_or(MoveError::NoSuchPile {
            kind: request.destination,
            index: request.dest_index,
        })?;

    let run = match variant {
        MoveVariant::Basic => basic_run(source.cards(), request.card_index)?,
        MoveVariant::Supermove => supermove_run(state, source.cards(), request.card_index)?,
    };

    if request.source == request.destination && request.source_index == request.dest_index {
        return Err(MoveError::SamePile);
    }

    let moving = &run[0];
    match request.destination {
        PileKind::Open => {
            if run.len() > 1 {
                return Err(MoveError::MultiCardToOpen { run: run.len() });
            }
            check_open_placement(dest)?;
        }
        PileKind::Cascade => check_cascade_placement(moving, dest)?,
        PileKind::Foundation => {
            if run.len() > 1 {
                return Err(MoveError::MultiCardToFoundation { run: run.len() });
            }
            check_foundation_placement(moving, dest)?;
        }
    }

    Ok(run.len())
}

/// Базовый вариант: брать можно только верхнюю карту.
fn basic_run(cards: &[Card], card_index: usize) -> Result<&[Card], MoveError> {
    if cards.is_empty() || card_index != cards.len() - 1 {
        return Err(MoveError::NoSuchCard { index: card_index });
    }
    Ok(&cards[card_index..])
}

/// Суперход: хвост стопки от `card_index` до верха.
///
/// K (пустые каскады) считаем до снятия карт с источника: источник
/// непустой, поэтому в K он не попадает; пустой приёмник — попадает.
fn supermove_run<'a>(
    state: &GameState,
    cards: &'a [Card],
    card_index: usize,
) -> Result<&'a [Card], MoveError> {
    if card_index >= cards.len() {
        return Err(MoveError::NoSuchCard { index: card_index });
    }

    let run = &cards[card_index..];
    if !is_valid_build(run) {
        return Err(MoveError::RunNotValidBuild);
    }

    let max = max_movable_run(
        state.empty_count(PileKind::Open),
        state.empty_count(PileKind::Cascade),
    );
    if run.len() > max {
        return Err(MoveError::CapacityExceeded {
            run: run.len(),
            max,
        });
    }

    Ok(run)
}
