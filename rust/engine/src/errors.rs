use thiserror::Error;

use crate::Chips;

/// Drawing from a deck with no cards left. Never expected with 52 cards and a sane table size.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("There are no more cards in the deck")]
    Empty,
}

/// Broken invariants detected by the hand evaluator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Hand evaluation needs exactly 7 cards, got {0}")]
    WrongCardCount(usize),
    #[error("Folded count {folded} exceeds player count {players}")]
    FoldCountExceedsPlayers { folded: usize, players: usize },
    #[error("Showdown needs a complete board, got {0} cards")]
    IncompleteBoard(usize),
    #[error("Player at seat {0} has no hole cards")]
    MissingHoleCards(usize),
    #[error("Every player has folded")]
    NoContenders,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Insufficient funds: available {available}, required {required}")]
    InsufficientFunds { available: Chips, required: Chips },
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("No player at seat {0}")]
    UnknownPlayer(usize),
    #[error("No round in progress")]
    NoRoundInProgress,
    #[error("Round already in progress")]
    RoundInProgress,
    #[error("Invalid raise amount: {amount}")]
    InvalidBetAmount { amount: Chips },
    #[error("Name must be less than 10 characters: {name:?}")]
    NameTooLong { name: String },
    #[error("Name must not be empty")]
    EmptyName,
    #[error("Name already taken: {name:?}")]
    DuplicateName { name: String },
    #[error("Need at least 2 players, got {count}")]
    NotEnoughPlayers { count: usize },
    #[error("At most {max} players fit one deck, got {count}")]
    TooManyPlayers { count: usize, max: usize },
    #[error("Table holds {total} chips, more than a pot can count")]
    TooManyChips { total: u64 },
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl GameError {
    /// True for errors that signal a broken engine invariant rather than a rejected move.
    /// Callers should abandon the round when this returns true.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, GameError::Deck(_) | GameError::Eval(_))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}
