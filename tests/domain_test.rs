//! Интеграционные тесты для доменной модели (crate::domain).

use freecell_engine::domain::*;

/// Card/Suit/Rank: Display в каноническом виде.
#[test]
fn card_display_uses_letters_and_glyphs() {
    assert_eq!(Card::new(Rank::Ace, Suit::Clubs).to_string(), "A♣");
    assert_eq!(Card::new(Rank::Ten, Suit::Spades).to_string(), "10♠");
    assert_eq!(Card::new(Rank::Jack, Suit::Diamonds).to_string(), "J♦");
    assert_eq!(Card::new(Rank::Queen, Suit::Hearts).to_string(), "Q♥");
    assert_eq!(Card::new(Rank::King, Suit::Hearts).to_string(), "K♥");
    assert_eq!(Card::new(Rank::Seven, Suit::Diamonds).to_string(), "7♦");
}

/// Display + FromStr roundtrip и ASCII-алиасы.
#[test]
fn card_display_and_parse_roundtrip() {
    let cards = [
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::Ten, Suit::Spades),
        Card::new(Rank::Two, Suit::Clubs),
        Card::new(Rank::King, Suit::Diamonds),
    ];

    for card in cards {
        let s = card.to_string();
        let parsed: Card = s.parse().expect("parse Card from Display string");
        assert_eq!(parsed, card);
    }

    assert_eq!("Th".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Hearts));
    assert_eq!("qs".parse::<Card>().unwrap(), Card::new(Rank::Queen, Suit::Spades));
    assert_eq!("10C".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Clubs));

    // Неверные строки
    assert!("".parse::<Card>().is_err());
    assert!("♣".parse::<Card>().is_err());
    assert_eq!("14♣".parse::<Card>(), Err(CardError::InvalidRank(14)));
    assert_eq!("0♣".parse::<Card>(), Err(CardError::InvalidRank(0)));
    assert_eq!("Ax".parse::<Card>(), Err(CardError::InvalidSuit('x')));
    assert!(matches!("Z♣".parse::<Card>(), Err(CardError::Malformed(_))));
}

#[test]
fn card_from_parts_rejects_bad_rank_and_suit() {
    assert_eq!(
        Card::from_parts(13, '♠').unwrap(),
        Card::new(Rank::King, Suit::Spades)
    );
    assert_eq!(Card::from_parts(0, '♠'), Err(CardError::InvalidRank(0)));
    assert_eq!(Card::from_parts(14, '♠'), Err(CardError::InvalidRank(14)));
    assert_eq!(Card::from_parts(5, '★'), Err(CardError::InvalidSuit('★')));
}

#[test]
fn suit_colors() {
    assert_eq!(Suit::Clubs.color(), Color::Black);
    assert_eq!(Suit::Spades.color(), Color::Black);
    assert_eq!(Suit::Diamonds.color(), Color::Red);
    assert_eq!(Suit::Hearts.color(), Color::Red);
}

#[test]
fn rank_values_and_neighbours() {
    assert_eq!(Rank::Ace.value(), 1);
    assert_eq!(Rank::King.value(), 13);
    assert_eq!(Rank::from_value(11).unwrap(), Rank::Jack);

    assert_eq!(Rank::Ace.pred(), None);
    assert_eq!(Rank::Two.pred(), Some(Rank::Ace));
    assert_eq!(Rank::King.succ(), None);
    assert_eq!(Rank::Queen.succ(), Some(Rank::King));
}

/// Равенство/хэш — по (rank, suit).
#[test]
fn cards_equal_by_rank_and_suit() {
    use std::collections::HashSet;

    let a = Card::new(Rank::Five, Suit::Hearts);
    let b: Card = "5h".parse().unwrap();
    let c = Card::new(Rank::Five, Suit::Diamonds);

    assert_eq!(a, b);
    assert_ne!(a, c);

    let set: HashSet<Card> = [a, b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
}

/// Каноническая колода: ♣ ♦ ♥ ♠, внутри масти A..K.
#[test]
fn canonical_deck_order() {
    let deck = canonical_deck();
    assert_eq!(deck.len(), DECK_SIZE);

    let text: Vec<String> = deck.iter().map(|c| c.to_string()).collect();
    assert_eq!(
        text.join(", "),
        "A♣, 2♣, 3♣, 4♣, 5♣, 6♣, 7♣, 8♣, 9♣, 10♣, J♣, Q♣, K♣, \
         A♦, 2♦, 3♦, 4♦, 5♦, 6♦, 7♦, 8♦, 9♦, 10♦, J♦, Q♦, K♦, \
         A♥, 2♥, 3♥, 4♥, 5♥, 6♥, 7♥, 8♥, 9♥, 10♥, J♥, Q♥, K♥, \
         A♠, 2♠, 3♠, 4♠, 5♠, 6♠, 7♠, 8♠, 9♠, 10♠, J♠, Q♠, K♠"
    );

    assert_eq!(Deck::standard_52().validate(), Ok(()));
}

#[test]
fn deck_validate_size_then_duplicates() {
    let mut cards = canonical_deck();
    cards.pop();
    assert_eq!(
        Deck::from_cards(cards.clone()).validate(),
        Err(DeckError::WrongSize { found: 51 })
    );

    // 52 карты, но A♣ дважды.
    cards.push(Card::new(Rank::Ace, Suit::Clubs));
    assert_eq!(
        Deck::from_cards(cards).validate(),
        Err(DeckError::DuplicateCard(Card::new(Rank::Ace, Suit::Clubs)))
    );
}

#[test]
fn parse_deck_accepts_glyphs_and_aliases() {
    let glyphs: Vec<String> = canonical_deck().iter().map(|c| c.to_string()).collect();
    let parsed = parse_deck(&glyphs.join(", ")).expect("canonical text parses");
    assert_eq!(parsed.cards, canonical_deck());

    // Тот же порядок в ASCII-виде, через пробелы и переводы строк.
    let mut ascii = String::new();
    for suit in ['c', 'd', 'h', 's'] {
        for rank in ["A", "2", "3", "4", "5", "6", "7", "8", "9", "T", "J", "Q", "K"] {
            ascii.push_str(&format!("{rank}{suit} "));
        }
        ascii.push('\n');
    }
    assert_eq!(parse_deck(&ascii).unwrap().cards, canonical_deck());
}

#[test]
fn parse_deck_checks_in_order() {
    let mut tokens: Vec<String> = canonical_deck().iter().map(|c| c.to_string()).collect();

    // (a) размер
    let short = tokens[..50].join(" ");
    assert_eq!(parse_deck(&short), Err(DeckError::WrongSize { found: 50 }));

    // (b) дубли важнее невалидных карт
    tokens[1] = "Ac".to_string(); // дубль A♣
    tokens[2] = "99x".to_string(); // мусор
    assert_eq!(
        parse_deck(&tokens.join(" ")),
        Err(DeckError::DuplicateCard(Card::new(Rank::Ace, Suit::Clubs)))
    );

    // (c) невалидная карта
    tokens[1] = "2♣".to_string();
    assert_eq!(
        parse_deck(&tokens.join(" ")),
        Err(DeckError::InvalidCard("99x".to_string()))
    );
}

#[test]
fn pile_basic_operations() {
    let mut pile = Pile::new();
    assert!(pile.is_empty());
    assert_eq!(pile.top(), None);

    pile.push(Card::new(Rank::King, Suit::Spades));
    pile.extend([
        Card::new(Rank::Queen, Suit::Hearts),
        Card::new(Rank::Jack, Suit::Clubs),
    ]);
    assert_eq!(pile.len(), 3);
    assert_eq!(pile.top(), Some(&Card::new(Rank::Jack, Suit::Clubs)));
    assert_eq!(pile.tail(1).len(), 2);

    let moved = pile.split_off(1);
    assert_eq!(moved.len(), 2);
    assert_eq!(pile.cards(), &[Card::new(Rank::King, Suit::Spades)]);
}

#[test]
fn pile_kind_labels() {
    assert_eq!(PileKind::Foundation.label(), 'F');
    assert_eq!(PileKind::Open.label(), 'O');
    assert_eq!(PileKind::Cascade.label(), 'C');
    assert_eq!(PileKind::from_label('C'), Some(PileKind::Cascade));
    assert_eq!(PileKind::from_label('X'), None);
}

#[test]
fn config_builder_defaults_and_validation() {
    let cfg = GameConfig::builder().build().unwrap();
    assert_eq!(cfg, GameConfig::new(8, 4));
    assert_eq!(cfg, GameConfig::default());

    let cfg = GameConfig::builder().cascades(10).opens(6).build().unwrap();
    assert_eq!(cfg, GameConfig::new(10, 6));

    assert_eq!(
        GameConfig::builder().cascades(3).opens(2).build(),
        Err(DeckError::InvalidPileCounts { cascades: 3, opens: 2 })
    );
    assert_eq!(
        GameConfig::builder().cascades(4).opens(0).build(),
        Err(DeckError::InvalidPileCounts { cascades: 4, opens: 0 })
    );
}

#[test]
fn new_game_state_is_not_started_and_empty() {
    let state = GameState::new(GameConfig::new(6, 2));
    assert_eq!(state.status(), GameStatus::NotStarted);
    assert_eq!(state.foundations().len(), 4);
    assert_eq!(state.opens().len(), 2);
    assert_eq!(state.cascades().len(), 6);
    assert_eq!(state.all_cards().count(), 0);
}
