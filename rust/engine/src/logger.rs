use std::io::Write;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::board::Street;
use crate::cards::Card;
use crate::player::PlayerAction;
use crate::Chips;

/// Records a single accepted action during a round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: usize,
    pub street: Street,
    pub action: PlayerAction,
}

/// Who took the pot and how it was divided.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    /// Winning seats, ascending; more than one means a split pot
    pub winners: Vec<usize>,
    pub pot: Chips,
    /// Optional notes, e.g. the winning hand's category
    #[serde(default)]
    pub notes: Option<String>,
}

/// History of one round, serialized to JSON Lines for replay and review.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Identifier in `YYYYMMDD-NNNNNN` form, assigned by [`RoundLogger`] when missing
    #[serde(default)]
    pub round_id: Option<String>,
    /// 1-based round number within the session
    pub round: u32,
    /// Seed of the deck's random source, when it was seeded
    pub seed: Option<u64>,
    pub actions: Vec<ActionRecord>,
    pub board: Vec<Card>,
    /// Human-readable result summary
    pub result: Option<String>,
    /// RFC3339 timestamp
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

impl RoundRecord {
    pub fn new(round: u32, seed: Option<u64>) -> Self {
        Self {
            round_id: None,
            round,
            seed,
            actions: Vec::new(),
            board: Vec::new(),
            result: None,
            ts: None,
            showdown: None,
        }
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Writes [`RoundRecord`]s as JSON Lines to a writer supplied by the caller.
pub struct RoundLogger<W: Write> {
    writer: W,
    date: String,
    seq: u32,
}

impl<W: Write> RoundLogger<W> {
    /// Round ids use today's UTC date.
    pub fn new(writer: W) -> Self {
        Self::with_date(writer, &Utc::now().format("%Y%m%d").to_string())
    }

    pub fn with_date(writer: W, date: &str) -> Self {
        Self {
            writer,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    /// Appends one LF-terminated line; fills in `round_id` and `ts` when absent.
    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.round_id.is_none() {
            rec.round_id = Some(self.next_id());
        }
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
