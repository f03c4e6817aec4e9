use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// A five-card poker hand. Order of cards is irrelevant to classification;
/// callers guarantee no duplicate (rank, suit) pairs.
pub type Hand = [Card; 5];

/// The ten standard poker hand categories, weakest to strongest.
/// The ordinal value is the primary ranking between hands.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    /// Human-readable name for terminal output.
    pub fn name(&self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Totally ordered ranking key for a classified hand.
///
/// The category decides first; `kickers` holds the category-specific
/// tie-break ranks ordered high to low priority, zero-padded to a fixed
/// width so that same-category keys compare element by element. The
/// derived `Ord` is exactly the lexicographic comparison over
/// (category, kickers).
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct RankingKey {
    pub category: Category,
    // kickers: ordered high -> low for tiebreaks
    pub kickers: [u8; 5],
}

/// Classifies a five-card hand into its category and tie-break key.
///
/// Pure and total over any five cards: no I/O, no shared state, and no
/// failure path. Classification is independent of the order the cards
/// appear in the hand.
pub fn classify(hand: &Hand) -> RankingKey {
    // Count ranks and suits
    let mut rank_counts = [0u8; 15]; // 2..14 used
    for c in hand.iter() {
        rank_counts[c.rank.value() as usize] += 1;
    }
    let is_flush = hand.iter().all(|c| c.suit == hand[0].suit);

    // Rank groups ordered by (bucket size desc, rank desc). Flattened in
    // that order they are the tie-break key for every category: dominant
    // group ranks first, then kickers high to low.
    let groups = rank_groups(&rank_counts);
    let distinct = groups.len();
    let largest = groups[0].1;

    // A straight requires 5 distinct ranks spanning exactly 4. Ace is high
    // only; A-2-3-4-5 is not a straight here.
    let is_straight = distinct == 5 && groups[0].0 - groups[4].0 == 4;

    let category = if is_straight && is_flush {
        if groups[0].0 == 14 {
            Category::RoyalFlush
        } else {
            Category::StraightFlush
        }
    } else if distinct == 2 {
        if largest == 4 {
            Category::FourOfAKind
        } else {
            Category::FullHouse
        }
    } else if is_flush {
        Category::Flush
    } else if is_straight {
        Category::Straight
    } else if distinct == 3 {
        if largest == 3 {
            Category::ThreeOfAKind
        } else {
            Category::TwoPair
        }
    } else if distinct == 4 {
        Category::OnePair
    } else {
        Category::HighCard
    };

    let mut kickers = [0u8; 5];
    for (i, &(rank, _)) in groups.iter().enumerate() {
        kickers[i] = rank;
    }
    RankingKey { category, kickers }
}

/// Compares two five-card hands by their ranking keys.
///
/// Returns `Less` when `hand1` loses, `Greater` when it wins, and `Equal`
/// when the keys match in every position. Antisymmetric and transitive by
/// construction: both hands reduce to the same total order on keys.
pub fn compare(hand1: &Hand, hand2: &Hand) -> Ordering {
    classify(hand1).cmp(&classify(hand2))
}

/// Distinct ranks present in the hand with their bucket sizes, sorted by
/// (bucket size desc, rank desc). Selection is deterministic regardless of
/// the order cards were scanned.
fn rank_groups(rank_counts: &[u8; 15]) -> Vec<(u8, u8)> {
    let mut groups: Vec<(u8, u8)> = Vec::with_capacity(5);
    for r in (2..=14u8).rev() {
        let count = rank_counts[r as usize];
        if count > 0 {
            groups.push((r, count));
        }
    }
    groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
    groups
}
