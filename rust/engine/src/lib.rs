//! # holdem-core: Texas Hold'em Rules Engine
//!
//! Card and deck handling, blind rotation, a betting-round state machine and a seven-card
//! hand evaluator with split-pot resolution. Rendering, input and persistence belong to the
//! presentation layer that drives the [`engine::RoundEngine`].
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and text notation
//! - [`deck`] - Deck with a replaceable random source (ChaCha20 by default)
//! - [`board`] - Community cards and betting streets
//! - [`wallet`] - Chip balances
//! - [`player`] - Seated players, hole cards and actions
//! - [`blinds`] - Blind amounts and seat rotation
//! - [`hand`] - Hand evaluation, comparison and winner resolution
//! - [`rules`] - Betting validation
//! - [`engine`] - Round orchestration
//! - [`stats`] - Session statistics summary
//! - [`logger`] - Round history records in JSON Lines
//! - [`config`] - Table configuration (TOML)
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_core::cards::parse_cards;
//! use holdem_core::hand::{evaluate_slice, HandCategory};
//!
//! let cards = parse_cards("Ts Js Qs Ks As 2c 3d").unwrap();
//! let rank = evaluate_slice(&cards).unwrap();
//! assert_eq!(rank.category, HandCategory::RoyalFlush);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use holdem_core::deck::Deck;
//!
//! let mut d1 = Deck::new_with_seed(42);
//! let mut d2 = Deck::new_with_seed(42);
//! d1.shuffle();
//! d2.shuffle();
//! assert_eq!(d1.cards(), d2.cards());
//! ```

pub mod blinds;
pub mod board;
pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
pub mod stats;
pub mod wallet;

/// Chip amounts.
pub type Chips = u32;
