use std::sync::Arc;
use tempfile::TempDir;
use tradequest::store::{decode_snapshot, DEFAULT_STATE_KEY};
use tradequest::{Decimal, Journal, ProgressionRules, SqliteStore, StateStore, UserState};

fn d(s: &str) -> Decimal {
    Decimal::from_str_canonical(s).unwrap()
}

fn db_path(temp_dir: &TempDir) -> String {
    temp_dir
        .path()
        .join("journal.db")
        .to_string_lossy()
        .to_string()
}

async fn open_journal(path: &str) -> Journal {
    let store: Arc<dyn StateStore> = Arc::new(SqliteStore::open(path).await.unwrap());
    Journal::load_or_initialize(
        store,
        DEFAULT_STATE_KEY,
        ProgressionRules::default(),
        d("1000.00"),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_fresh_database_starts_from_default() {
    let temp_dir = TempDir::new().unwrap();
    let journal = open_journal(&db_path(&temp_dir)).await;
    assert_eq!(journal.snapshot().await, UserState::default());
}

#[tokio::test]
async fn test_state_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let path = db_path(&temp_dir);

    let before = {
        let journal = open_journal(&path).await;
        journal.apply_trade(d("1500"), "BTCUSDT", "long").await.unwrap();
        journal.apply_trade(d("-220.45"), "ETHUSDT", "short").await.unwrap();
        journal.apply_withdrawal(d("300.10")).await.unwrap();
        journal.apply_trade(d("87.6"), "SOLUSDT", "long").await.unwrap();
        journal.snapshot().await
    };

    let reloaded = open_journal(&path).await;
    assert_eq!(reloaded.snapshot().await, before);
    assert_eq!(before.history.len(), 3);
    assert_eq!(before.history[0].symbol, "SOLUSDT");
}

#[tokio::test]
async fn test_high_precision_amounts_survive_restart() {
    let temp_dir = TempDir::new().unwrap();
    let path = db_path(&temp_dir);

    let before = {
        let journal = open_journal(&path).await;
        journal
            .apply_trade(d("0.1234567890123456789"), "A", "long")
            .await
            .unwrap();
        journal
            .apply_trade(d("12345678901234567.89"), "B", "long")
            .await
            .unwrap();
        journal.apply_withdrawal(d("0.000000001")).await.unwrap();
        journal.snapshot().await
    };

    let reloaded = open_journal(&path).await.snapshot().await;
    assert_eq!(reloaded, before);
    assert_eq!(
        reloaded.history[1].pnl.to_canonical_string(),
        "0.1234567890123456789"
    );
    assert_eq!(
        reloaded.balance.to_canonical_string(),
        before.balance.to_canonical_string()
    );
}

#[tokio::test]
async fn test_every_mutation_is_saved_before_returning() {
    let temp_dir = TempDir::new().unwrap();
    let path = db_path(&temp_dir);
    let store = Arc::new(SqliteStore::open(&path).await.unwrap());
    let journal = Journal::load_or_initialize(
        store.clone(),
        DEFAULT_STATE_KEY,
        ProgressionRules::default(),
        d("1000.00"),
    )
    .await
    .unwrap();

    journal.apply_trade(d("640"), "NQ", "long").await.unwrap();
    let saved = store.load(DEFAULT_STATE_KEY).await.unwrap().unwrap();
    assert_eq!(decode_snapshot(&saved).unwrap(), journal.snapshot().await);

    journal.apply_withdrawal(d("40")).await.unwrap();
    let saved = store.load(DEFAULT_STATE_KEY).await.unwrap().unwrap();
    let saved = decode_snapshot(&saved).unwrap();
    assert_eq!(saved, journal.snapshot().await);
    assert_eq!(saved.experience, 600);
    assert_eq!(saved.balance, d("1600"));
}

#[tokio::test]
async fn test_loads_snapshot_written_by_browser_build() {
    let temp_dir = TempDir::new().unwrap();
    let path = db_path(&temp_dir);
    {
        let store = SqliteStore::open(&path).await.unwrap();
        let legacy = br#"{"balance":2500,"level":2,"exp":500,"history":[{"date":"17/10/2026","symbol":"XAUUSD","type":"Buy","pnl":1500,"exp":1500}]}"#;
        store.save(DEFAULT_STATE_KEY, legacy).await.unwrap();
    }

    let journal = open_journal(&path).await;
    let state = journal.snapshot().await;
    assert_eq!(state.level, 2);
    assert_eq!(state.experience, 500);
    assert_eq!(state.balance, d("2500"));
    assert_eq!(state.history[0].trade_type, "Buy");

    journal.apply_withdrawal(d("2000")).await.unwrap();
    let state = journal.snapshot().await;
    assert_eq!(state.level, 1);
    assert_eq!(state.experience, 0);
    assert_eq!(state.balance, d("500"));
}
