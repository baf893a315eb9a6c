use holdem_core::board::Street;
use holdem_core::cards::{Card, Rank, Suit};
use holdem_core::engine::{Phase, RoundEngine};
use holdem_core::logger::{format_round_id, ActionRecord, RoundLogger, RoundRecord, ShowdownInfo};
use holdem_core::player::PlayerAction;

fn sample() -> RoundRecord {
    RoundRecord {
        round_id: Some("20250102-000123".to_string()),
        round: 3,
        seed: Some(42),
        actions: vec![
            ActionRecord {
                seat: 1,
                street: Street::Preflop,
                action: PlayerAction::Raise(50),
            },
            ActionRecord {
                seat: 2,
                street: Street::Preflop,
                action: PlayerAction::Call,
            },
        ],
        board: vec![
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Diamonds),
            Card::new(Rank::Ace, Suit::Clubs),
        ],
        result: Some("alice wins 300".to_string()),
        ts: None,
        showdown: Some(ShowdownInfo {
            winners: vec![0],
            pot: 300,
            notes: Some("Three of a Kind".to_string()),
        }),
    }
}

#[test]
fn round_record_serializes_and_deserializes() {
    let rec = sample();
    let s = serde_json::to_string(&rec).expect("serialize");
    let back: RoundRecord = serde_json::from_str(&s).expect("deserialize");
    assert_eq!(rec, back);
}

#[test]
fn missing_optional_fields_default_to_none() {
    let json = r#"{"round":1,"seed":null,"actions":[],"board":[],"result":null}"#;
    let rec: RoundRecord = serde_json::from_str(json).unwrap();
    assert_eq!(rec, RoundRecord::new(1, None));
}

#[test]
fn id_format_is_date_and_six_digit_sequence() {
    assert_eq!(format_round_id("20251231", 42), "20251231-000042");
}

#[test]
fn logger_writes_one_lf_terminated_line_per_round() {
    let mut logger = RoundLogger::with_date(Vec::new(), "20250101");
    logger.write(&RoundRecord::new(1, Some(7))).unwrap();
    logger.write(&sample()).unwrap();
    let out = String::from_utf8(logger.into_inner()).unwrap();

    assert!(!out.contains('\r'));
    assert!(out.ends_with('\n'));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: RoundRecord = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first.round_id.as_deref(), Some("20250101-000001"));
    assert!(first.ts.is_some());

    let second: RoundRecord = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second.round_id.as_deref(), Some("20250102-000123"));
}

#[test]
fn engine_records_actions_and_showdown() {
    let mut eng = RoundEngine::new_with_seed(&["alice", "bob", "carol"], 1000, 99).unwrap();
    eng.begin_round().unwrap();
    eng.act(1, PlayerAction::Raise(25)).unwrap();
    eng.act(2, PlayerAction::Fold).unwrap();
    eng.act(0, PlayerAction::Fold).unwrap();
    assert_eq!(eng.phase(), Phase::Showdown);

    let rec = eng.last_record().unwrap();
    assert_eq!(rec.round, 1);
    assert_eq!(rec.seed, Some(99));
    assert_eq!(rec.actions.len(), 3);
    assert_eq!(
        rec.actions[0],
        ActionRecord {
            seat: 1,
            street: Street::Preflop,
            action: PlayerAction::Raise(25),
        }
    );
    let showdown = rec.showdown.as_ref().unwrap();
    assert_eq!(showdown.winners, vec![1]);
    assert_eq!(showdown.pot, 125);
    assert_eq!(rec.result.as_deref(), Some("bob wins 125"));
}
