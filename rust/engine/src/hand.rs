//! Seven-card hand evaluation and showdown resolution.
//!
//! [`evaluate`] turns 2 hole cards plus a 5-card board into a [`RankDescriptor`]. Descriptors
//! are totally ordered: category first, then the category-defining rank, then the secondary
//! rank, then kickers left to right. Two descriptors that compare equal are a genuine tie and
//! split the pot.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::EvalError;
use crate::player::Player;

/// Hand categories from worst to best. The discriminant is the category number (1..=10).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl HandCategory {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comparable strength of a seven-card hand.
///
/// | category        | primary        | secondary     | kickers              |
/// |-----------------|----------------|---------------|----------------------|
/// | royal flush     | 14             | 0             | -                    |
/// | straight (flush)| top card       | 0             | -                    |
/// | four of a kind  | quad rank      | 0             | best other card      |
/// | full house      | triple rank    | pair rank     | -                    |
/// | flush/high card | highest card   | second card   | next three           |
/// | three of a kind | triple rank    | 0             | two best others      |
/// | two pair        | high pair      | low pair      | best other card      |
/// | one pair        | pair rank      | 0             | three best others    |
///
/// Unused slots are 0. The derived ordering compares fields in declaration order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct RankDescriptor {
    pub category: HandCategory,
    pub primary: u8,
    pub secondary: u8,
    pub kickers: [u8; 3],
}

impl RankDescriptor {
    fn new(category: HandCategory, primary: u8, secondary: u8, kickers: [u8; 3]) -> Self {
        Self {
            category,
            primary,
            secondary,
            kickers,
        }
    }

    /// Five descending values spread over primary, secondary and kickers.
    fn top_five(category: HandCategory, desc: &[u8]) -> Self {
        let at = |i: usize| desc.get(i).copied().unwrap_or(0);
        Self::new(category, at(0), at(1), [at(2), at(3), at(4)])
    }

    /// Coarse weight used to shortlist showdown candidates before the full comparison.
    pub fn weight(&self) -> (HandCategory, u8) {
        (self.category, self.primary)
    }
}

impl fmt::Display for RankDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}", self.category, self.primary)?;
        if self.secondary > 0 {
            write!(f, "/{}", self.secondary)?;
        }
        write!(f, ")")
    }
}

pub fn evaluate(cards: &[Card; 7]) -> RankDescriptor {
    let mut rank_counts = [0u8; 15]; // 2..=14 used
    let mut by_suit: [Vec<u8>; 4] = Default::default();
    for card in cards {
        let r = card.rank.value();
        rank_counts[r as usize] += 1;
        by_suit[card.suit.index()].push(r);
    }

    let suited = evaluate_flush_and_straight(&rank_counts, &by_suit);
    let grouped = evaluate_multiples(&rank_counts);
    if grouped.category > suited.category {
        grouped
    } else {
        suited
    }
}

/// Like [`evaluate`] but for an unchecked slice, e.g. one assembled by an analysis tool.
pub fn evaluate_slice(cards: &[Card]) -> Result<RankDescriptor, EvalError> {
    let cards: &[Card; 7] = cards
        .try_into()
        .map_err(|_| EvalError::WrongCardCount(cards.len()))?;
    Ok(evaluate(cards))
}

/// Joins hole cards with a complete board into the seven-card view used for evaluation.
pub fn seven_cards(hole: [Card; 2], board: &[Card]) -> Result<[Card; 7], EvalError> {
    let board: &[Card; 5] = board
        .try_into()
        .map_err(|_| EvalError::IncompleteBoard(board.len()))?;
    Ok([
        hole[0], hole[1], board[0], board[1], board[2], board[3], board[4],
    ])
}

/// `Greater` when `a` wins, `Less` when `b` wins, `Equal` for an exact tie.
pub fn compare(a: &RankDescriptor, b: &RankDescriptor) -> Ordering {
    a.category
        .cmp(&b.category)
        .then(a.primary.cmp(&b.primary))
        .then(a.secondary.cmp(&b.secondary))
        .then(a.kickers.cmp(&b.kickers))
}

/// Flush, straight and their combinations. Falls back to high card.
fn evaluate_flush_and_straight(rank_counts: &[u8; 15], by_suit: &[Vec<u8>; 4]) -> RankDescriptor {
    if let Some(suited) = by_suit.iter().find(|values| values.len() >= 5) {
        let mut desc = suited.clone();
        desc.sort_unstable_by(|a, b| b.cmp(a));
        if desc[..5] == [14, 13, 12, 11, 10] {
            return RankDescriptor::new(HandCategory::RoyalFlush, 14, 0, [0; 3]);
        }
        if let Some(high) = straight_high(suited) {
            return RankDescriptor::new(HandCategory::StraightFlush, high, 0, [0; 3]);
        }
        return RankDescriptor::top_five(HandCategory::Flush, &desc);
    }

    let distinct: Vec<u8> = (2..=14u8)
        .filter(|&r| rank_counts[r as usize] > 0)
        .collect();
    if let Some(high) = straight_high(&distinct) {
        return RankDescriptor::new(HandCategory::Straight, high, 0, [0; 3]);
    }
    let desc: Vec<u8> = distinct.into_iter().rev().collect();
    RankDescriptor::top_five(HandCategory::HighCard, &desc)
}

/// Quads, full house, trips and pairs from rank multiplicities. Falls back to high card.
fn evaluate_multiples(rank_counts: &[u8; 15]) -> RankDescriptor {
    let ranks_with = |n: u8| -> Vec<u8> {
        (2..=14u8)
            .rev()
            .filter(|&r| rank_counts[r as usize] == n)
            .collect()
    };
    let quads = ranks_with(4);
    let trips = ranks_with(3);
    let pairs = ranks_with(2);

    if let Some(&quad) = quads.first() {
        let [k, ..] = kickers(rank_counts, &[quad]);
        return RankDescriptor::new(HandCategory::FourOfAKind, quad, 0, [k, 0, 0]);
    }

    if let Some(&triple) = trips.first() {
        // a second triple plays as the pair
        let pair = trips.iter().skip(1).chain(pairs.iter()).copied().max();
        if let Some(pair) = pair {
            return RankDescriptor::new(HandCategory::FullHouse, triple, pair, [0; 3]);
        }
        let [k1, k2, _] = kickers(rank_counts, &[triple]);
        return RankDescriptor::new(HandCategory::ThreeOfAKind, triple, 0, [k1, k2, 0]);
    }

    match pairs.as_slice() {
        [high, low, ..] => {
            let [k, ..] = kickers(rank_counts, &[*high, *low]);
            RankDescriptor::new(HandCategory::TwoPair, *high, *low, [k, 0, 0])
        }
        [pair] => RankDescriptor::new(
            HandCategory::OnePair,
            *pair,
            0,
            kickers(rank_counts, &[*pair]),
        ),
        [] => {
            let desc: Vec<u8> = (2..=14u8)
                .rev()
                .filter(|&r| rank_counts[r as usize] > 0)
                .collect();
            RankDescriptor::top_five(HandCategory::HighCard, &desc)
        }
    }
}

/// The three highest ranks present, skipping `exclude`; missing slots are 0.
fn kickers(rank_counts: &[u8; 15], exclude: &[u8]) -> [u8; 3] {
    let mut out = [0u8; 3];
    let remaining = (2..=14u8)
        .rev()
        .filter(|r| rank_counts[*r as usize] > 0 && !exclude.contains(r));
    for (slot, r) in out.iter_mut().zip(remaining) {
        *slot = r;
    }
    out
}

/// Top card of the best five-card run in `values`, with the ace also playing low (A-2-3-4-5).
fn straight_high(values: &[u8]) -> Option<u8> {
    let mut ranks = values.to_vec();
    ranks.sort_unstable();
    ranks.dedup();
    highest_run(&ranks).or_else(|| {
        if ranks.last() == Some(&14) {
            ranks.insert(0, 1);
            highest_run(&ranks)
        } else {
            None
        }
    })
}

fn highest_run(sorted_unique: &[u8]) -> Option<u8> {
    let mut run = 1;
    let mut best = None;
    for w in sorted_unique.windows(2) {
        if w[1] == w[0] + 1 {
            run += 1;
            if run >= 5 {
                best = Some(w[1]);
            }
        } else {
            run = 1;
        }
    }
    best
}

/// Evaluates every non-folded player against `board`, returning `(seat, descriptor)` pairs.
pub fn rank_contenders(
    players: &[Player],
    board: &[Card],
) -> Result<Vec<(usize, RankDescriptor)>, EvalError> {
    players
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.is_folded())
        .map(|(seat, p)| {
            let hole = p
                .hole_cards()
                .pair()
                .ok_or(EvalError::MissingHoleCards(seat))?;
            Ok((seat, evaluate(&seven_cards(hole, board)?)))
        })
        .collect()
}

/// Seats holding the best hand among `contenders`, in seat order. Candidates are first
/// narrowed to the highest coarse weight, then compared in full within that group.
pub fn resolve_winners(contenders: &[(usize, RankDescriptor)]) -> Vec<usize> {
    let Some(top) = contenders.iter().map(|(_, r)| r.weight()).max() else {
        return Vec::new();
    };
    let shortlist: Vec<&(usize, RankDescriptor)> = contenders
        .iter()
        .filter(|(_, r)| r.weight() == top)
        .collect();
    let Some(best) = shortlist
        .iter()
        .map(|(_, r)| *r)
        .reduce(|best, r| if compare(&r, &best).is_gt() { r } else { best })
    else {
        return Vec::new();
    };
    let mut winners: Vec<usize> = shortlist
        .into_iter()
        .filter(|(_, r)| compare(r, &best) == Ordering::Equal)
        .map(|(seat, _)| *seat)
        .collect();
    winners.sort_unstable();
    winners
}

/// Winning seat(s) of a round. More than one seat means a split pot.
///
/// A lone non-folded player wins without evaluation, whatever the board holds. Otherwise
/// every non-folded player needs two hole cards and the board must be complete.
pub fn determine_winner(
    players: &[Player],
    num_folded: usize,
    board: &[Card],
) -> Result<Vec<usize>, EvalError> {
    if num_folded > players.len() {
        return Err(EvalError::FoldCountExceedsPlayers {
            folded: num_folded,
            players: players.len(),
        });
    }
    let active: Vec<usize> = players
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.is_folded())
        .map(|(seat, _)| seat)
        .collect();
    match active.len() {
        0 => Err(EvalError::NoContenders),
        1 => Ok(active),
        _ => Ok(resolve_winners(&rank_contenders(players, board)?)),
    }
}

/// [`determine_winner`] counting folds from the players themselves.
pub fn winners(players: &[Player], board: &[Card]) -> Result<Vec<usize>, EvalError> {
    let folded = players.iter().filter(|p| p.is_folded()).count();
    determine_winner(players, folded, board)
}
