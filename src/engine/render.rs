use crate::domain::{GameState, GameStatus, Pile, PileKind};

/// Текстовое состояние партии.
///
/// Формат: по строке на стопку — дома (F1..F4), ячейки (O1..ON), каскады (C1..CM).
/// `C1: A♣, 9♣, 4♦` — карты снизу вверх; пустая стопка — только `C1:`.
/// Без завершающего перевода строки. До старта — пустая строка.
pub fn render_state(state: &GameState) -> String {
    if state.status() == GameStatus::NotStarted {
        return String::new();
    }

    let mut lines = Vec::new();
    for kind in [PileKind::Foundation, PileKind::Open, PileKind::Cascade] {
        for (idx, pile) in state.piles(kind).iter().enumerate() {
            lines.push(render_pile(kind, idx, pile));
        }
    }
    lines.join("\n")
}

/// Одна строка вида `F1: A♣, 2♣`.
pub fn render_pile(kind: PileKind, index: usize, pile: &Pile) -> String {
    let mut line = format!("{}{}:", kind.label(), index + 1);
    if !pile.is_empty() {
        let cards: Vec<String> = pile.cards().iter().map(|c| c.to_string()).collect();
        line.push(' ');
        line.push_str(&cards.join(", "));
    }
    line
}
