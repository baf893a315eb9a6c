use std::collections::HashSet;

use rand::Rng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::blinds::BlindTracker;
use crate::board::{Board, Street, BOARD_SIZE};
use crate::cards::Card;
use crate::config::TableConfig;
use crate::deck::{Deck, DECK_SIZE};
use crate::errors::GameError;
use crate::hand::{determine_winner, rank_contenders, RankDescriptor};
use crate::logger::{ActionRecord, RoundRecord, ShowdownInfo};
use crate::player::{HoleCards, Player, PlayerAction};
use crate::rules::{validate_action, ValidatedAction};
use crate::stats::SessionStats;
use crate::Chips;

/// Largest table one deck can deal: two hole cards per seat plus a full board.
pub const MAX_PLAYERS: usize = (DECK_SIZE - BOARD_SIZE) / 2;

/// Chips in play at a table; the pot and every wallet must be able to hold all of them.
pub fn table_chips(balances: impl IntoIterator<Item = Chips>) -> Result<Chips, GameError> {
    let total: u64 = balances.into_iter().map(u64::from).sum();
    Chips::try_from(total).map_err(|_| GameError::TooManyChips { total })
}

/// Where the current round stands.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    Preflop,
    Flop,
    Turn,
    River,
    /// Pot paid out; cards stay visible until the round is ended
    Showdown,
}

impl Phase {
    /// The betting street this phase represents, if any.
    pub fn street(self) -> Option<Street> {
        match self {
            Phase::Preflop => Some(Street::Preflop),
            Phase::Flop => Some(Street::Flop),
            Phase::Turn => Some(Street::Turn),
            Phase::River => Some(Street::River),
            Phase::NotStarted | Phase::Showdown => None,
        }
    }
}

impl From<Street> for Phase {
    fn from(street: Street) -> Self {
        match street {
            Street::Preflop => Phase::Preflop,
            Street::Flop => Phase::Flop,
            Street::Turn => Phase::Turn,
            Street::River => Phase::River,
        }
    }
}

/// What every player at the table may see about one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub seat: usize,
    pub name: String,
    pub balance: Chips,
    pub current_bet: Chips,
    pub folded: bool,
    pub wins: u32,
    pub losses: u32,
}

/// Public snapshot of the table for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub phase: Phase,
    pub pot: Chips,
    pub board: Vec<Card>,
    /// Seat to act, while a street is being bet
    pub turn: Option<usize>,
    /// Cumulative high bet for the round
    pub current_high_bet: Chips,
    /// How much the high bet was raised on this street
    pub street_high_bet: Chips,
    pub last_aggressor: Option<usize>,
    pub big_blind_seat: usize,
    pub small_blind_seat: usize,
    pub players: Vec<PlayerView>,
}

/// Result of a showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Winning seats, ascending
    pub winners: Vec<usize>,
    pub pot: Chips,
    /// Chips paid to each winner before odd chips
    pub share: Chips,
    /// Evaluated hands of the players who reached showdown; empty when all but one folded
    pub ranks: Vec<(usize, RankDescriptor)>,
}

/// Divides `pot` evenly among `winners`. Odd chips go one each to the earliest listed winners.
///
/// ```
/// use holdem_core::engine::split_pot;
///
/// assert_eq!(split_pot(101, &[0, 2]), vec![(0, 51), (2, 50)]);
/// ```
pub fn split_pot(pot: Chips, winners: &[usize]) -> Vec<(usize, Chips)> {
    if winners.is_empty() {
        return Vec::new();
    }
    let count = winners.len() as Chips;
    let share = pot / count;
    let odd_chips = (pot % count) as usize;
    winners
        .iter()
        .enumerate()
        .map(|(i, &seat)| (seat, share + Chips::from(i < odd_chips)))
        .collect()
}

/// Runs betting rounds for one table.
///
/// The engine owns the deck, board and pot for the life of a round and is the only thing that
/// mutates players' wallets. Every call completes synchronously; a rejected action leaves the
/// table exactly as it was.
///
/// # Examples
///
/// ```
/// use holdem_core::engine::{Phase, RoundEngine};
/// use holdem_core::player::PlayerAction;
///
/// let mut engine = RoundEngine::new_with_seed(&["alice", "bob", "carol"], 1000, 7).unwrap();
/// engine.begin_round().unwrap();
/// assert_eq!(engine.phase(), Phase::Preflop);
///
/// // Blinds are posted: big 50 from seat 0, small 25 from seat 1.
/// assert_eq!(engine.pot(), 75);
///
/// // Seat 1 completes the blind, seat 2 calls, then the flop comes.
/// engine.act(1, PlayerAction::Call).unwrap();
/// engine.act(2, PlayerAction::Call).unwrap();
/// assert_eq!(engine.phase(), Phase::Flop);
/// assert_eq!(engine.board().len(), 3);
/// ```
#[derive(Debug)]
pub struct RoundEngine<R = ChaCha20Rng> {
    deck: Deck<R>,
    players: Vec<Player>,
    blinds: BlindTracker,
    board: Board,
    pot: Chips,
    phase: Phase,
    turn: usize,
    current_high_bet: Chips,
    street_high_bet: Chips,
    last_aggressor: Option<usize>,
    folded_count: usize,
    seed: Option<u64>,
    record: Option<RoundRecord>,
    outcome: Option<RoundOutcome>,
    stats: SessionStats,
}

impl RoundEngine<ChaCha20Rng> {
    /// Seats `names` with `starting_money` each, blinds derived from the starting money.
    pub fn new_with_seed(
        names: &[&str],
        starting_money: Chips,
        seed: u64,
    ) -> Result<Self, GameError> {
        let players = names
            .iter()
            .map(|n| Player::new(*n, starting_money))
            .collect::<Result<Vec<_>, _>>()?;
        let blinds = BlindTracker::for_starting_money(starting_money, players.len());
        let mut engine = Self::new(
            Deck::new_with_seed(seed),
            players,
            blinds.big_amount(),
            blinds.small_amount(),
        )?;
        engine.seed = Some(seed);
        Ok(engine)
    }

    pub fn from_config(cfg: &TableConfig) -> Result<Self, GameError> {
        let seed = cfg.seed.unwrap_or_else(rand::random);
        let players = cfg
            .player_names
            .iter()
            .map(|n| Player::new(n.as_str(), cfg.starting_money))
            .collect::<Result<Vec<_>, _>>()?;
        let (big, small) = cfg.blinds();
        let mut engine = Self::new(Deck::new_with_seed(seed), players, big, small)?;
        engine.seed = Some(seed);
        Ok(engine)
    }
}

impl<R: Rng> RoundEngine<R> {
    /// Builds a table from seated players. Names must be unique, there must be between two and
    /// [`MAX_PLAYERS`] of them, and their combined chips must fit in [`Chips`].
    pub fn new(
        deck: Deck<R>,
        players: Vec<Player>,
        big_blind: Chips,
        small_blind: Chips,
    ) -> Result<Self, GameError> {
        if players.len() < 2 {
            return Err(GameError::NotEnoughPlayers {
                count: players.len(),
            });
        }
        if players.len() > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers {
                count: players.len(),
                max: MAX_PLAYERS,
            });
        }
        table_chips(players.iter().map(Player::balance))?;
        {
            let mut seen = HashSet::new();
            if let Some(dup) = players.iter().find(|p| !seen.insert(p.name())) {
                return Err(GameError::DuplicateName {
                    name: dup.name().to_string(),
                });
            }
        }
        let blinds = BlindTracker::new(big_blind, small_blind, players.len());
        Ok(Self {
            deck,
            players,
            blinds,
            board: Board::new(),
            pot: 0,
            phase: Phase::NotStarted,
            turn: 0,
            current_high_bet: 0,
            street_high_bet: 0,
            last_aggressor: None,
            folded_count: 0,
            seed: None,
            record: None,
            outcome: None,
            stats: SessionStats::default(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn blinds(&self) -> &BlindTracker {
        &self.blinds
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
    pub fn folded_count(&self) -> usize {
        self.folded_count
    }
    pub fn current_high_bet(&self) -> Chips {
        self.current_high_bet
    }
    pub fn street_high_bet(&self) -> Chips {
        self.street_high_bet
    }
    pub fn last_aggressor(&self) -> Option<usize> {
        self.last_aggressor
    }

    /// Seat to act, while a street is being bet.
    pub fn turn(&self) -> Option<usize> {
        self.phase.street().map(|_| self.turn)
    }

    /// Summary to persist after each round.
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn last_outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }

    /// History of the round in progress, or of the last one until the next begins.
    pub fn last_record(&self) -> Option<&RoundRecord> {
        self.record.as_ref()
    }

    /// A player's hole cards, for that player's eyes only.
    pub fn hand_of(&self, seat: usize) -> Result<&HoleCards, GameError> {
        self.players
            .get(seat)
            .map(Player::hole_cards)
            .ok_or(GameError::UnknownPlayer(seat))
    }

    pub fn current_state(&self) -> TableView {
        TableView {
            phase: self.phase,
            pot: self.pot,
            board: self.board.cards().to_vec(),
            turn: self.turn(),
            current_high_bet: self.current_high_bet,
            street_high_bet: self.street_high_bet,
            last_aggressor: self.last_aggressor,
            big_blind_seat: self.blinds.big_seat(),
            small_blind_seat: self.blinds.small_seat(),
            players: self
                .players
                .iter()
                .enumerate()
                .map(|(seat, p)| PlayerView {
                    seat,
                    name: p.name().to_string(),
                    balance: p.balance(),
                    current_bet: p.current_bet(),
                    folded: p.is_folded(),
                    wins: p.wins(),
                    losses: p.losses(),
                })
                .collect(),
        }
    }

    /// Shuffles, deals two hole cards to each seat round-robin and posts the blinds.
    /// A round left at showdown is ended first.
    pub fn begin_round(&mut self) -> Result<(), GameError> {
        match self.phase {
            Phase::NotStarted => {}
            Phase::Showdown => self.end_round()?,
            _ => return Err(GameError::RoundInProgress),
        }

        self.deck.shuffle();
        let n = self.players.len();
        for i in 0..n * 2 {
            let card = self.deck.draw()?;
            if let Err(card) = self.players[i % n].receive_card(card) {
                self.deck.add_card(card);
            }
        }

        let big_seat = self.blinds.big_seat();
        let small_seat = self.blinds.small_seat();
        let big_paid = self.players[big_seat].place_bet(self.blinds.big_amount());
        let small_paid = self.players[small_seat].place_bet(self.blinds.small_amount());
        self.pot += big_paid + small_paid;
        self.current_high_bet = self.blinds.big_amount();
        self.street_high_bet = self.blinds.big_amount();
        self.last_aggressor = Some(big_seat);
        self.turn = small_seat;
        self.phase = Phase::Preflop;
        self.outcome = None;
        self.record = Some(RoundRecord::new(self.stats.rounds_played + 1, self.seed));

        info!(
            round = self.stats.rounds_played + 1,
            players = n,
            big_seat,
            small_seat,
            pot = self.pot,
            "round started"
        );
        Ok(())
    }

    /// Applies `action` for the player at `seat` and returns the resulting table state.
    /// Rejected actions leave the table untouched.
    pub fn act(&mut self, seat: usize, action: PlayerAction) -> Result<TableView, GameError> {
        self.apply(seat, action).map_err(|e| {
            warn!(seat, error = %e, "action rejected");
            e
        })?;
        Ok(self.current_state())
    }

    fn apply(&mut self, seat: usize, action: PlayerAction) -> Result<(), GameError> {
        let street = self.phase.street().ok_or(GameError::NoRoundInProgress)?;
        let player = self.players.get(seat).ok_or(GameError::UnknownPlayer(seat))?;
        if seat != self.turn {
            return Err(GameError::NotPlayersTurn {
                expected: self.turn,
                actual: seat,
            });
        }
        let validated = validate_action(
            player.balance(),
            player.current_bet(),
            self.current_high_bet,
            action,
        )?;

        let player = &mut self.players[seat];
        match validated {
            ValidatedAction::Fold => {
                player.fold();
                self.folded_count += 1;
                if self.last_aggressor == Some(seat) {
                    self.last_aggressor = None;
                }
            }
            ValidatedAction::Call(amount) => {
                if amount > 0 {
                    self.pot += player.place_bet(amount);
                }
                if self.last_aggressor.is_none() {
                    self.last_aggressor = Some(seat);
                }
            }
            ValidatedAction::Raise { total, increment } => {
                self.pot += player.place_bet(total);
                self.current_high_bet += increment;
                self.street_high_bet += increment;
                self.last_aggressor = Some(seat);
            }
        }
        if let Some(record) = self.record.as_mut() {
            record.actions.push(ActionRecord {
                seat,
                street,
                action,
            });
        }
        debug!(seat, ?action, pot = self.pot, "action accepted");

        self.advance_turn();
        if self.active_count() == 1 {
            self.showdown()
        } else if self.last_aggressor == Some(self.turn) {
            self.advance_street()
        } else {
            Ok(())
        }
    }

    fn active_count(&self) -> usize {
        self.players.len() - self.folded_count
    }

    fn advance_turn(&mut self) {
        let n = self.players.len();
        for step in 1..=n {
            let seat = (self.turn + step) % n;
            if !self.players[seat].is_folded() {
                self.turn = seat;
                return;
            }
        }
    }

    fn advance_street(&mut self) -> Result<(), GameError> {
        let Some(next) = self.phase.street().and_then(Street::next) else {
            return self.showdown();
        };
        for _ in 0..next.cards_dealt() {
            let card = self.deck.draw()?;
            if let Err(card) = self.board.push(card) {
                self.deck.add_card(card);
            }
        }
        self.phase = Phase::from(next);
        self.street_high_bet = 0;
        info!(street = ?next, board = ?self.board.cards(), "street opened");
        Ok(())
    }

    /// Settles the pot: a lone survivor takes it, otherwise the best hand(s) split it.
    fn showdown(&mut self) -> Result<(), GameError> {
        let winners = determine_winner(&self.players, self.folded_count, self.board.cards())?;
        let ranks = if self.active_count() > 1 {
            rank_contenders(&self.players, self.board.cards())?
        } else {
            Vec::new()
        };

        let pot = self.pot;
        let payouts = split_pot(pot, &winners);
        for (seat, player) in self.players.iter_mut().enumerate() {
            match payouts.iter().find(|(s, _)| *s == seat) {
                Some(&(_, amount)) => player.record_win(amount),
                None => player.record_loss(),
            }
        }
        let share = pot / winners.len().max(1) as Chips;
        self.pot = 0;
        self.phase = Phase::Showdown;
        self.stats.record_round(pot, &self.players);

        let best = ranks
            .iter()
            .find(|(seat, _)| winners.first() == Some(seat))
            .map(|(_, r)| r.category.to_string());
        let result = self.describe_result(&winners, pot);
        if let Some(record) = self.record.as_mut() {
            record.board = self.board.cards().to_vec();
            record.result = Some(result);
            record.showdown = Some(ShowdownInfo {
                winners: winners.clone(),
                pot,
                notes: best,
            });
        }
        info!(?winners, pot, share, "showdown");

        self.outcome = Some(RoundOutcome {
            winners,
            pot,
            share,
            ranks,
        });
        Ok(())
    }

    fn describe_result(&self, winners: &[usize], pot: Chips) -> String {
        let names: Vec<&str> = winners.iter().map(|&s| self.players[s].name()).collect();
        match names.as_slice() {
            [single] => format!("{single} wins {pot}"),
            many => format!("split {pot} between {}", many.join(", ")),
        }
    }

    /// Tears down a finished round: advances the blinds, clears folds and contributions and
    /// returns every dealt card to the deck. Does nothing before the first round.
    pub fn end_round(&mut self) -> Result<(), GameError> {
        match self.phase {
            Phase::Showdown => {}
            Phase::NotStarted => return Ok(()),
            _ => return Err(GameError::RoundInProgress),
        }
        self.blinds.advance();
        for player in &mut self.players {
            player.unfold();
            player.reset_current_bet();
            for card in player.return_cards() {
                self.deck.add_card(card);
            }
        }
        for card in self.board.take_all() {
            self.deck.add_card(card);
        }
        self.pot = 0;
        self.folded_count = 0;
        self.last_aggressor = None;
        self.current_high_bet = 0;
        self.street_high_bet = 0;
        self.turn = 0;
        self.phase = Phase::NotStarted;
        Ok(())
    }
}
