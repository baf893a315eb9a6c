use crate::errors::GameError;
use crate::player::PlayerAction as A;
use crate::Chips;

/// An action that has passed validation, carrying the chips it moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    /// Chips needed to match the high bet; 0 when already matched
    Call(Chips),
    /// `total` leaves the wallet, the high bet grows by `increment`
    Raise { total: Chips, increment: Chips },
}

/// Validates a player action against the table high bet and the player's balance.
///
/// # Arguments
///
/// * `balance` - Chips left in the player's wallet
/// * `current_bet` - Chips the player already put in this round
/// * `high_bet` - The table's current high bet for the round
/// * `action` - The action the player wishes to perform
///
/// # Errors
///
/// - [`GameError::InsufficientFunds`] - the wallet cannot cover the call or the raise
/// - [`GameError::InvalidBetAmount`] - a raise of zero
///
/// # Examples
///
/// ```
/// use holdem_core::rules::{validate_action, ValidatedAction};
/// use holdem_core::player::PlayerAction;
///
/// // Small blind of 25 facing a big blind of 50
/// let result = validate_action(975, 25, 50, PlayerAction::Call);
/// assert_eq!(result, Ok(ValidatedAction::Call(25)));
///
/// let result = validate_action(975, 25, 50, PlayerAction::Raise(100));
/// assert_eq!(result, Ok(ValidatedAction::Raise { total: 125, increment: 100 }));
/// ```
///
/// ```
/// use holdem_core::rules::validate_action;
/// use holdem_core::player::PlayerAction;
/// use holdem_core::errors::GameError;
///
/// // One chip cannot fund a raise of two
/// let result = validate_action(1, 0, 0, PlayerAction::Raise(2));
/// assert!(matches!(result, Err(GameError::InsufficientFunds { available: 1, required: 2 })));
/// ```
pub fn validate_action(
    balance: Chips,
    current_bet: Chips,
    high_bet: Chips,
    action: A,
) -> Result<ValidatedAction, GameError> {
    let to_call = high_bet.saturating_sub(current_bet);
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Call => {
            if to_call > balance {
                Err(GameError::InsufficientFunds {
                    available: balance,
                    required: to_call,
                })
            } else {
                Ok(ValidatedAction::Call(to_call))
            }
        }
        A::Raise(0) => Err(GameError::InvalidBetAmount { amount: 0 }),
        A::Raise(amount) => {
            let total = to_call.saturating_add(amount);
            if total > balance {
                Err(GameError::InsufficientFunds {
                    available: balance,
                    required: total,
                })
            } else {
                Ok(ValidatedAction::Raise {
                    total,
                    increment: amount,
                })
            }
        }
    }
}
