use chrono::NaiveDate;
use tradequest::engine::{parse_amount, ProgressionEngine, ProgressionError, ProgressionRules};
use tradequest::{Decimal, UserState};

fn d(s: &str) -> Decimal {
    Decimal::from_str_canonical(s).unwrap()
}

fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, n).unwrap()
}

#[test]
fn test_threshold_is_level_times_thousand() {
    let engine = ProgressionEngine::default();
    for level in 1..=500u32 {
        assert_eq!(engine.experience_threshold(level), i64::from(level) * 1000);
    }
}

#[test]
fn test_profit_then_withdrawal_walkthrough() {
    let mut engine = ProgressionEngine::default();

    let record = engine.apply_trade_on(day(1), d("1500"), "BTC", "long").unwrap();
    assert_eq!(record.experience_gained, 1500);
    assert_eq!(engine.state().experience, 500);
    assert_eq!(engine.state().level, 2);
    assert_eq!(engine.state().balance, d("2500"));

    engine.apply_withdrawal(d("2000")).unwrap();
    assert_eq!(engine.state().level, 1);
    assert_eq!(engine.state().experience, 0);
    assert_eq!(engine.state().balance, d("500"));
    assert_eq!(engine.state().history.len(), 1);
}

#[test]
fn test_non_positive_pnl_never_changes_experience() {
    let mut engine = ProgressionEngine::default();
    engine.apply_trade_on(day(1), d("300"), "A", "long").unwrap();
    let exp = engine.state().experience;

    for pnl in ["0", "-0.01", "-250", "-100000"] {
        let record = engine.apply_trade_on(day(2), d(pnl), "A", "short").unwrap();
        assert_eq!(record.experience_gained, 0);
        assert_eq!(engine.state().experience, exp);
    }
}

#[test]
fn test_positive_pnl_adds_floor_before_cascade() {
    let mut engine = ProgressionEngine::default();
    engine.apply_trade_on(day(1), d("123.99"), "A", "long").unwrap();
    assert_eq!(engine.state().experience, 123);
    engine.apply_trade_on(day(1), d("876.01"), "A", "long").unwrap();
    // 123 + 876 = 999, one short of the level 1 threshold.
    assert_eq!(engine.state().experience, 999);
    assert_eq!(engine.state().level, 1);
}

#[test]
fn test_history_most_recent_first() {
    let mut engine = ProgressionEngine::default();
    for (i, symbol) in ["A", "B", "C", "D"].iter().enumerate() {
        engine
            .apply_trade_on(day(i as u32 + 1), d("10"), symbol, "long")
            .unwrap();
        engine.apply_withdrawal(d("1")).unwrap();
    }

    let symbols: Vec<&str> = engine
        .state()
        .history
        .iter()
        .map(|r| r.symbol.as_str())
        .collect();
    assert_eq!(symbols, vec!["D", "C", "B", "A"]);
    assert_eq!(engine.state().history[0].date, "2026-10-04");
}

#[test]
fn test_level_never_below_one() {
    let mut engine = ProgressionEngine::default();
    engine.apply_trade_on(day(1), d("20000"), "A", "long").unwrap();
    assert!(engine.state().level > 1);

    while engine.state().balance.is_positive() {
        let step = if engine.state().balance > d("777") {
            d("777")
        } else {
            engine.state().balance
        };
        engine.apply_withdrawal(step).unwrap();
        assert!(engine.state().level >= 1);
        assert!(engine.state().experience >= 0);
    }
    assert_eq!(engine.state().level, 1);
}

#[test]
fn test_withdrawal_refund_mirrors_level_up_across_levels() {
    // Level 3 -> 5 consumes threshold(3) + threshold(4) = 7000.
    let mut state = UserState::default();
    state.balance = d("10000");
    state.level = 3;
    state.experience = 250;
    let mut engine = ProgressionEngine::new(state, ProgressionRules::default());

    engine.apply_trade_on(day(1), d("7100"), "A", "long").unwrap();
    assert_eq!(engine.state().level, 5);
    assert_eq!(engine.state().experience, 350);

    // Dropping to level 4 refunds threshold(4), then level 3 refunds threshold(3).
    engine.apply_withdrawal(d("7100")).unwrap();
    assert_eq!(engine.state().level, 3);
    assert_eq!(engine.state().experience, 250);
}

#[test]
fn test_clamp_at_level_one_is_not_reversible() {
    let mut state = UserState::default();
    state.experience = 200;
    let mut engine = ProgressionEngine::new(state, ProgressionRules::default());

    engine.apply_withdrawal(d("500")).unwrap();
    assert_eq!(engine.state().experience, 0);

    engine.apply_trade_on(day(1), d("500"), "A", "long").unwrap();
    assert_eq!(engine.state().experience, 500);
    assert_eq!(engine.state().balance, d("1000"));
}

#[test]
fn test_insufficient_funds_leaves_state_unchanged() {
    let mut engine = ProgressionEngine::default();
    engine.apply_trade_on(day(1), d("42"), "A", "long").unwrap();
    let before = engine.snapshot();

    let err = engine.apply_withdrawal(d("1042.01")).unwrap_err();
    assert!(matches!(err, ProgressionError::InsufficientFunds { .. }));
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_non_numeric_pnl_rejected_before_engine() {
    let engine = ProgressionEngine::default();
    let before = engine.snapshot();

    let err = parse_amount("ten dollars", "pnl").unwrap_err();
    assert!(matches!(err, ProgressionError::InvalidInput(_)));
    assert_eq!(engine.snapshot(), before);
}
