use std::fmt;

use serde::{Deserialize, Serialize};

use crate::player::Player;
use crate::Chips;

/// A win/loss tally, shown as `"wins-losses"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
}

impl Record {
    pub fn of(player: &Player) -> Self {
        Self {
            wins: player.wins(),
            losses: player.losses(),
        }
    }

    /// True when this record's wins/(losses+1) ratio is strictly higher than `other`'s.
    pub fn beats(&self, other: &Record) -> bool {
        let lhs = u64::from(self.wins) * (u64::from(other.losses) + 1);
        let rhs = u64::from(other.wins) * (u64::from(self.losses) + 1);
        lhs > rhs
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.wins, self.losses)
    }
}

/// Session summary handed to the presentation layer after each round for persistence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub rounds_played: u32,
    pub highest_pot: Chips,
    pub best_record: Record,
}

impl SessionStats {
    /// Folds a finished round into the summary.
    pub fn record_round(&mut self, pot: Chips, players: &[Player]) {
        self.rounds_played += 1;
        self.highest_pot = self.highest_pot.max(pot);
        self.best_record = best_record(players);
    }

    /// Keeps the better value of each field, so a persisted summary is only overwritten where
    /// this session improved on it.
    pub fn merged_with(&self, previous: &SessionStats) -> SessionStats {
        SessionStats {
            rounds_played: self.rounds_played.max(previous.rounds_played),
            highest_pot: self.highest_pot.max(previous.highest_pot),
            best_record: if self.best_record.beats(&previous.best_record) {
                self.best_record
            } else {
                previous.best_record
            },
        }
    }
}

/// The best record at the table; the earliest seat wins ties.
pub fn best_record(players: &[Player]) -> Record {
    players
        .iter()
        .map(Record::of)
        .reduce(|best, r| if r.beats(&best) { r } else { best })
        .unwrap_or_default()
}
