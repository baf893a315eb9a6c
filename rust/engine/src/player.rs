use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::wallet::Wallet;
use crate::Chips;

/// Longest accepted player name.
pub const MAX_NAME_LEN: usize = 9;

/// Action submitted by the player whose turn it is.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Match the table high bet, then raise it by the given amount
    Raise(Chips),
    /// Match the table high bet
    Call,
    /// Give up the round
    Fold,
}

/// A player's two private cards.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct HoleCards {
    cards: [Option<Card>; 2],
}

impl HoleCards {
    /// Places a card in the first free slot; gives it back if both slots are taken.
    pub fn push(&mut self, card: Card) -> Result<(), Card> {
        match self.cards.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(card);
                Ok(())
            }
            None => Err(card),
        }
    }

    /// Both cards, once the hand is fully dealt.
    pub fn pair(&self) -> Option<[Card; 2]> {
        match self.cards {
            [Some(a), Some(b)] => Some([a, b]),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().flatten()
    }

    /// Empties both slots, handing back whatever was held.
    pub fn take_all(&mut self) -> Vec<Card> {
        self.cards.iter_mut().filter_map(Option::take).collect()
    }
}

/// A seated player: identity, chips, cards and session record.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    wallet: Wallet,
    hole: HoleCards,
    folded: bool,
    /// Chips contributed to the pot in the current round
    current_bet: Chips,
    wins: u32,
    losses: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, money: Chips) -> Result<Self, GameError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            wallet: Wallet::new(money),
            hole: HoleCards::default(),
            folded: false,
            current_bet: 0,
            wins: 0,
            losses: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn balance(&self) -> Chips {
        self.wallet.balance()
    }
    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }
    pub fn hole_cards(&self) -> &HoleCards {
        &self.hole
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }
    pub fn wins(&self) -> u32 {
        self.wins
    }
    pub fn losses(&self) -> u32 {
        self.losses
    }

    pub fn receive_card(&mut self, card: Card) -> Result<(), Card> {
        self.hole.push(card)
    }

    pub fn return_cards(&mut self) -> Vec<Card> {
        self.hole.take_all()
    }

    /// Moves `amount` from the wallet into this round's contribution and returns what was
    /// contributed. An empty wallet contributes nothing, and a short wallet contributes only
    /// what it held. The table high bet is not checked here.
    pub fn place_bet(&mut self, amount: Chips) -> Chips {
        if self.wallet.is_empty() {
            return 0;
        }
        let paid = amount.min(self.wallet.balance());
        self.wallet.debit(amount);
        self.current_bet += paid;
        paid
    }

    pub fn fold(&mut self) {
        self.folded = true;
    }

    pub fn unfold(&mut self) {
        self.folded = false;
    }

    pub fn reset_current_bet(&mut self) {
        self.current_bet = 0;
    }

    pub fn record_win(&mut self, amount: Chips) {
        self.wallet.credit(amount);
        self.wins += 1;
    }

    pub fn record_loss(&mut self) {
        self.losses += 1;
    }

    /// The record as shown to players, e.g. `"3-1"`.
    pub fn record_string(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }
}

pub fn validate_name(name: &str) -> Result<(), GameError> {
    if name.is_empty() {
        return Err(GameError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(GameError::NameTooLong {
            name: name.to_string(),
        });
    }
    Ok(())
}
