use holdem_core::blinds::BlindTracker;
use holdem_core::cards::{Card, Rank, Suit};
use holdem_core::errors::GameError;
use holdem_core::player::{Player, PlayerAction};
use holdem_core::wallet::{DebitOutcome, Wallet};

#[test]
fn player_receives_two_hole_cards() {
    let mut p = Player::new("alice", 1000).unwrap();
    let a = Card::new(Rank::Ace, Suit::Spades);
    let k = Card::new(Rank::King, Suit::Spades);
    let q = Card::new(Rank::Queen, Suit::Spades);
    p.receive_card(a).unwrap();
    p.receive_card(k).unwrap();
    assert_eq!(p.hole_cards().pair(), Some([a, k]));
    assert_eq!(p.receive_card(q), Err(q), "third card must be handed back");
    assert_eq!(p.return_cards(), vec![a, k]);
    assert!(p.hole_cards().is_empty());
}

#[test]
fn names_longer_than_nine_chars_are_rejected() {
    assert!(Player::new("ninechars", 10).is_ok());
    assert!(matches!(
        Player::new("tencharsxx", 10),
        Err(GameError::NameTooLong { .. })
    ));
    assert_eq!(Player::new("", 10).unwrap_err(), GameError::EmptyName);
}

#[test]
fn betting_moves_chips_into_current_bet() {
    let mut p = Player::new("bob", 1000).unwrap();
    assert_eq!(p.place_bet(300), 300);
    assert_eq!(p.balance(), 700);
    assert_eq!(p.current_bet(), 300);
    p.reset_current_bet();
    assert_eq!(p.current_bet(), 0);
}

#[test]
fn empty_wallet_bets_nothing() {
    let mut p = Player::new("carol", 0).unwrap();
    assert_eq!(p.place_bet(50), 0);
    assert_eq!(p.current_bet(), 0);
}

#[test]
fn short_wallet_contributes_what_it_holds() {
    let mut p = Player::new("dave", 30).unwrap();
    assert_eq!(p.place_bet(50), 30);
    assert_eq!(p.balance(), 0);
    assert!(p.wallet().is_empty());
    assert_eq!(p.current_bet(), 30);
}

#[test]
fn win_and_loss_update_record() {
    let mut p = Player::new("erin", 100).unwrap();
    p.record_win(40);
    p.record_loss();
    p.record_loss();
    assert_eq!(p.balance(), 140);
    assert_eq!((p.wins(), p.losses()), (1, 2));
    assert_eq!(p.record_string(), "1-2");
}

#[test]
fn fold_and_unfold() {
    let mut p = Player::new("frank", 100).unwrap();
    p.fold();
    assert!(p.is_folded());
    p.unfold();
    assert!(!p.is_folded());
}

#[test]
fn exact_balance_debit_fails_and_zeroes() {
    let mut w = Wallet::new(100);
    assert_eq!(w.debit(100), DebitOutcome::Depleted);
    assert!(!w.debit(0).is_success());
    assert_eq!(w.balance(), 0);
    assert!(w.is_empty());
}

#[test]
fn debit_below_balance_succeeds() {
    let mut w = Wallet::new(100);
    assert!(w.debit(99).is_success());
    assert_eq!(w.balance(), 1);
    assert!(!w.is_empty());
}

#[test]
fn overdraw_clamps_to_zero() {
    let mut w = Wallet::new(10);
    assert_eq!(w.debit(25), DebitOutcome::Depleted);
    assert_eq!(w.balance(), 0);
}

#[test]
fn blinds_rotate_and_wrap() {
    let mut b = BlindTracker::new(50, 25, 3);
    assert_eq!((b.big_seat(), b.small_seat()), (0, 1));
    b.advance();
    assert_eq!((b.big_seat(), b.small_seat()), (1, 2));
    b.advance();
    assert_eq!((b.big_seat(), b.small_seat()), (2, 0));
    b.advance();
    assert_eq!((b.big_seat(), b.small_seat()), (0, 1));
}

#[test]
fn blinds_derive_from_starting_money() {
    let b = BlindTracker::for_starting_money(1000, 2);
    assert_eq!((b.big_amount(), b.small_amount()), (50, 25));
    let low = BlindTracker::for_starting_money(100, 2);
    assert_eq!((low.big_amount(), low.small_amount()), (10, 5));
    let mid = BlindTracker::for_starting_money(600, 2);
    assert_eq!((mid.big_amount(), mid.small_amount()), (30, 15));
}

#[test]
fn player_action_enum_is_available() {
    let a = PlayerAction::Raise(123);
    match a {
        PlayerAction::Raise(n) => assert_eq!(n, 123),
        _ => panic!("expected Raise variant"),
    }
}
