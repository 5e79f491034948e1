//! Чистые проверки правил: ничего не мутируют, только отвечают «можно/нельзя».

use crate::domain::{Card, Pile, Rank};
use crate::engine::errors::MoveError;

/// Можно ли положить `moving` на каскад с верхней картой `target`
/// (другой цвет, ранг ровно на единицу меньше).
pub fn stacks_on_cascade(moving: &Card, target: &Card) -> bool {
    moving.color() != target.color() && moving.rank.succ() == Some(target.rank)
}

/// Проверка укладки на каскад. Пустой каскад принимает любую карту.
pub fn check_cascade_placement(moving: &Card, dest: &Pile) -> Result<(), MoveError> {
    match dest.top() {
        None => Ok(()),
        Some(top) if stacks_on_cascade(moving, top) => Ok(()),
        Some(top) => Err(MoveError::CascadeMismatch {
            moving: *moving,
            target: *top,
        }),
    }
}

/// Проверка укладки в дом: на пустой — только туз,
/// иначе та же масть и ранг ровно на единицу больше.
pub fn check_foundation_placement(moving: &Card, dest: &Pile) -> Result<(), MoveError> {
    let ok = match dest.top() {
        None => moving.rank == Rank::Ace,
        Some(top) => moving.suit == top.suit && top.rank.succ() == Some(moving.rank),
    };

    if ok {
        Ok(())
    } else {
        Err(MoveError::FoundationMismatch {
            moving: *moving,
            target: dest.top().copied(),
        })
    }
}

/// Свободная ячейка принимает карту, только если она пуста.
pub fn check_open_placement(dest: &Pile) -> Result<(), MoveError> {
    if dest.is_empty() {
        Ok(())
    } else {
        Err(MoveError::OpenOccupied)
    }
}

/// Последовательность (снизу вверх) — корректная «лесенка»:
/// каждая следующая карта другого цвета и на единицу младше.
pub fn is_valid_build(run: &[Card]) -> bool {
    run.windows(2).all(|pair| stacks_on_cascade(&pair[1], &pair[0]))
}

/// Сколько карт можно перенести за один суперход:
/// `(F + 1) * 2^K`, где F — пустые ячейки, K — пустые каскады.
pub fn max_movable_run(free_opens: usize, empty_cascades: usize) -> usize {
    let factor = u32::try_from(empty_cascades)
        .ok()
        .and_then(|k| 1usize.checked_shl(k))
        .unwrap_or(usize::MAX);
    (free_opens + 1).saturating_mul(factor)
}
