use holdem_core::errors::GameError;
use holdem_core::player::PlayerAction as A;
use holdem_core::rules::{validate_action, ValidatedAction};

#[test]
fn raise_zero_is_invalid() {
    let err = validate_action(
        10_000, /*current_bet*/ 0, /*high_bet*/ 50, A::Raise(0),
    )
    .unwrap_err();
    match err {
        GameError::InvalidBetAmount { .. } => {}
        _ => panic!("expected InvalidBetAmount"),
    }
}

#[test]
fn raise_includes_amount_owed() {
    let va = validate_action(1000, 25, 50, A::Raise(100)).unwrap();
    assert_eq!(
        va,
        ValidatedAction::Raise {
            total: 125,
            increment: 100
        }
    );
}

#[test]
fn raise_over_balance_is_rejected() {
    let err = validate_action(1, 0, 0, A::Raise(2)).unwrap_err();
    assert_eq!(
        err,
        GameError::InsufficientFunds {
            available: 1,
            required: 2
        }
    );
}

#[test]
fn raise_of_exact_balance_is_allowed() {
    let va = validate_action(100, 0, 50, A::Raise(50)).unwrap();
    assert_eq!(
        va,
        ValidatedAction::Raise {
            total: 100,
            increment: 50
        }
    );
}

#[test]
fn call_pays_difference_only() {
    assert_eq!(
        validate_action(500, 30, 50, A::Call),
        Ok(ValidatedAction::Call(20))
    );
}

#[test]
fn call_when_matched_costs_nothing() {
    assert_eq!(
        validate_action(500, 50, 50, A::Call),
        Ok(ValidatedAction::Call(0))
    );
}

#[test]
fn call_with_insufficient_balance_is_rejected() {
    let err = validate_action(10, 0, 50, A::Call).unwrap_err();
    assert_eq!(
        err,
        GameError::InsufficientFunds {
            available: 10,
            required: 50
        }
    );
}

#[test]
fn fold_is_always_valid() {
    assert_eq!(validate_action(0, 0, 500, A::Fold), Ok(ValidatedAction::Fold));
}
