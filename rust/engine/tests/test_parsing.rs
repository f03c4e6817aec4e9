use pokerhands_engine::cards::{all_ranks, all_suits, Card, Rank, Suit};
use pokerhands_engine::errors::ParseError;
use pokerhands_engine::hand::Category;
use pokerhands_engine::logger::DuelRecord;
use pokerhands_engine::parse::{parse_hand, parse_line};

#[test]
fn parses_card_tokens() {
    assert_eq!(
        Card::from_token("AS").unwrap(),
        Card {
            rank: Rank::Ace,
            suit: Suit::Spades
        }
    );
    assert_eq!(
        Card::from_token("TD").unwrap(),
        Card {
            rank: Rank::Ten,
            suit: Suit::Diamonds
        }
    );
    assert_eq!(
        Card::from_token("2C").unwrap(),
        Card {
            rank: Rank::Two,
            suit: Suit::Clubs
        }
    );
    assert_eq!(
        "9H".parse::<Card>().unwrap(),
        Card {
            rank: Rank::Nine,
            suit: Suit::Hearts
        }
    );
}

#[test]
fn card_display_round_trips_the_token() {
    for token in ["2C", "9H", "TD", "JS", "QC", "KD", "AS"] {
        assert_eq!(Card::from_token(token).unwrap().to_string(), token);
    }
}

#[test]
fn every_card_in_the_deck_round_trips() {
    for &suit in &all_suits() {
        for &rank in &all_ranks() {
            let card = Card { rank, suit };
            assert_eq!(Card::from_token(&card.to_string()).unwrap(), card);
        }
    }
}

#[test]
fn rejects_invalid_rank_symbol() {
    assert_eq!(
        Card::from_token("1S"),
        Err(ParseError::InvalidRankSymbol('1'))
    );
    assert_eq!(
        Card::from_token("XD"),
        Err(ParseError::InvalidRankSymbol('X'))
    );
}

#[test]
fn rejects_invalid_suit_symbol() {
    assert_eq!(
        Card::from_token("AX"),
        Err(ParseError::InvalidSuitSymbol('X'))
    );
}

#[test]
fn rejects_malformed_tokens() {
    assert_eq!(
        Card::from_token("A"),
        Err(ParseError::InvalidCardToken("A".to_string()))
    );
    assert_eq!(
        Card::from_token("ASX"),
        Err(ParseError::InvalidCardToken("ASX".to_string()))
    );
    assert_eq!(
        Card::from_token(""),
        Err(ParseError::InvalidCardToken("".to_string()))
    );
}

#[test]
fn parses_full_line_into_two_hands() {
    let (h1, h2) = parse_line("8C TS KC 9H 4S 7D 2S 5D 3S AC").unwrap();
    assert_eq!(h1[0], Card::from_token("8C").unwrap());
    assert_eq!(h1[4], Card::from_token("4S").unwrap());
    assert_eq!(h2[0], Card::from_token("7D").unwrap());
    assert_eq!(h2[4], Card::from_token("AC").unwrap());
}

#[test]
fn rejects_wrong_line_cardinality() {
    assert_eq!(
        parse_line("8C TS KC 9H 4S"),
        Err(ParseError::InvalidHand {
            expected: 10,
            actual: 5
        })
    );
    assert_eq!(
        parse_line(""),
        Err(ParseError::InvalidHand {
            expected: 10,
            actual: 0
        })
    );
}

#[test]
fn rejects_wrong_hand_cardinality() {
    assert_eq!(
        parse_hand(&["AS", "KS"]),
        Err(ParseError::InvalidHand {
            expected: 5,
            actual: 2
        })
    );
}

#[test]
fn parse_errors_carry_readable_messages() {
    assert_eq!(
        ParseError::InvalidRankSymbol('x').to_string(),
        "Invalid rank symbol: 'x'"
    );
    assert_eq!(
        ParseError::InvalidHand {
            expected: 5,
            actual: 2
        }
        .to_string(),
        "Invalid hand: expected 5 cards, got 2"
    );
}

#[test]
fn duel_record_round_trips_through_json() {
    let (h1, h2) = parse_line("5C AD 5D AC 9C 7C 5H 8D TD KS").unwrap();
    let rec = DuelRecord {
        line_no: 3,
        hand1: h1.to_vec(),
        hand2: h2.to_vec(),
        category1: Category::TwoPair,
        category2: Category::HighCard,
        winner: Some(1),
        ts: Some("2026-08-30T00:00:00Z".to_string()),
    };
    let json = serde_json::to_string(&rec).unwrap();
    let back: DuelRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rec);
}
