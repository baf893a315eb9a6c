use serde::{Deserialize, Serialize};

use crate::Chips;

/// Blind amounts and the seats that post them. The small blind always sits one seat after
/// the big blind; both move one seat per completed round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlindTracker {
    big_amount: Chips,
    small_amount: Chips,
    big_seat: usize,
    small_seat: usize,
    player_count: usize,
}

impl BlindTracker {
    /// Starts with the big blind at seat 0. `player_count` must be at least 1.
    pub fn new(big_amount: Chips, small_amount: Chips, player_count: usize) -> Self {
        let player_count = player_count.max(1);
        Self {
            big_amount,
            small_amount,
            big_seat: 0,
            small_seat: 1 % player_count,
            player_count,
        }
    }

    /// Big blind is a twentieth of the starting money, kept within 10..=50; small is half of it.
    pub fn for_starting_money(starting_money: Chips, player_count: usize) -> Self {
        let (big, small) = default_blinds(starting_money);
        Self::new(big, small, player_count)
    }

    pub fn advance(&mut self) {
        self.big_seat = (self.big_seat + 1) % self.player_count;
        self.small_seat = (self.small_seat + 1) % self.player_count;
    }

    pub fn big_amount(&self) -> Chips {
        self.big_amount
    }
    pub fn small_amount(&self) -> Chips {
        self.small_amount
    }
    pub fn big_seat(&self) -> usize {
        self.big_seat
    }
    pub fn small_seat(&self) -> usize {
        self.small_seat
    }
}

pub fn default_blinds(starting_money: Chips) -> (Chips, Chips) {
    let big = (starting_money / 20).clamp(10, 50);
    (big, big / 2)
}
