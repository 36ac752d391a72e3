use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use regicide::storage::STATS_HEADER;
use regicide::{Card, GameEngine, GameState, Outcome, SaveStore, StatsLog, StatsRecord, StorageConfig};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_path(name: &str) -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "regicide-storage-{}-{}-{}",
        std::process::id(),
        n,
        name
    ));
    let _ = fs::remove_file(&path);
    path
}

fn record(ts: u64, outcome: Outcome) -> StatsRecord {
    StatsRecord {
        timestamp: ts,
        cards_played: 12,
        enemy_health: 4,
        hand: "[]".to_string(),
        outcome,
    }
}

#[test]
fn save_and_load_roundtrip() {
    let store = SaveStore::new(temp_path("save.bin"));
    let mut rng = SmallRng::seed_from_u64(3);
    let mut engine = GameEngine::new_game("Ada", &mut rng);
    engine.play(&[0]).unwrap();

    store.save(&engine.state()).unwrap();
    let loaded = store.load().expect("saved game");
    assert_eq!(loaded, engine.state());
    assert_eq!(loaded.player_name, "Ada");

    store.clear().unwrap();
    assert!(store.load().is_none());
    assert!(!store.path().exists());
}

#[test]
fn save_overwrites_previous_slot() {
    let store = SaveStore::new(temp_path("slot.bin"));
    let mut rng = SmallRng::seed_from_u64(4);
    let first = GameEngine::new_game("First", &mut rng);
    let second = GameEngine::new_game("Second", &mut rng);

    store.save(&first.state()).unwrap();
    store.save(&second.state()).unwrap();
    assert_eq!(store.load().unwrap().player_name, "Second");
    store.clear().unwrap();
}

#[test]
fn missing_empty_or_corrupt_saves_load_as_none() {
    let missing = SaveStore::new(temp_path("missing.bin"));
    assert!(missing.load().is_none());
    // clearing a missing save is fine
    missing.clear().unwrap();

    let empty_path = temp_path("empty.bin");
    fs::write(&empty_path, b"").unwrap();
    assert!(SaveStore::new(&empty_path).load().is_none());

    let corrupt_path = temp_path("corrupt.bin");
    fs::write(&corrupt_path, b"\xff\xff\xff\xff\xff\xff\xff\xff\x01").unwrap();
    assert!(SaveStore::new(&corrupt_path).load().is_none());

    let _ = fs::remove_file(empty_path);
    let _ = fs::remove_file(corrupt_path);
}

#[test]
fn stats_header_written_once() {
    let path = temp_path("stats.log");
    let log = StatsLog::new(&path);
    log.append(&record(1, Outcome::Victory)).unwrap();
    log.append(&record(2, Outcome::Defeat)).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], STATS_HEADER);
    assert_eq!(lines[1], "1||12||4||[]||Victory");
    assert_eq!(lines.iter().filter(|l| **l == STATS_HEADER).count(), 1);

    let records = log.read_all().unwrap();
    assert_eq!(records, vec![record(1, Outcome::Victory), record(2, Outcome::Defeat)]);
    let _ = fs::remove_file(path);
}

#[test]
fn missing_stats_log_is_empty() {
    let log = StatsLog::new(temp_path("none.log"));
    assert!(log.read_all().unwrap().is_empty());
}

#[test]
fn malformed_stats_lines_are_skipped() {
    let path = temp_path("mixed.log");
    fs::write(
        &path,
        format!(
            "{}\n5||10||-2||[]||Victory\ngarbage\n\n6||x||1||[]||Defeat\n7||3||9||[]||Defeat\n",
            STATS_HEADER
        ),
    )
    .unwrap();

    let records = StatsLog::new(&path).read_all().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].timestamp, 5);
    assert_eq!(records[0].enemy_health, -2);
    assert_eq!(records[1].outcome, Outcome::Defeat);
    let _ = fs::remove_file(path);
}

#[test]
fn record_captures_final_hand_as_json() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut engine = GameEngine::new_game("Tester", &mut rng);
    engine.concede();

    let record = StatsRecord::from_engine(&engine, 42).unwrap();
    assert_eq!(record.outcome, Outcome::Defeat);
    assert_eq!(record.cards_played, 0);
    assert_eq!(record.enemy_health, 20);
    let hand: Vec<regicide::Card> = serde_json::from_str(&record.hand).unwrap();
    assert_eq!(hand, engine.hand());
}

#[test]
fn storage_config_defaults() {
    let config = StorageConfig::default();
    assert_eq!(config.save_path, PathBuf::from("regicide_save.bin"));
    assert_eq!(config.stats_path, PathBuf::from("regicide_stats.log"));
    assert_eq!(config.save_store().path(), config.save_path.as_path());
    assert_eq!(config.stats_log().path(), config.stats_path.as_path());
}

#[test]
fn out_of_range_rank_in_save_is_rejected() {
    let path = temp_path("rank.bin");
    let mut rng = SmallRng::seed_from_u64(8);
    let engine = GameEngine::new_game("Ada", &mut rng);
    let state = engine.state();
    let mut bytes = bincode::serialize(&state).unwrap();

    // name (8 + 3), empty deck (8), hand length (8), then hand[0].rank
    let offset = 8 + 3 + 8 + 8;
    assert_eq!(bytes[offset], state.hand[0].rank());
    bytes[offset] = 200;
    fs::write(&path, &bytes).unwrap();

    assert!(bincode::deserialize::<Card>(&[200, 0, 0, 0, 0]).is_err());
    assert!(SaveStore::new(&path).load().is_none());
    let _ = fs::remove_file(path);
}

#[test]
fn inconsistent_snapshot_is_rejected() {
    let store = SaveStore::new(temp_path("dup.bin"));
    let mut rng = SmallRng::seed_from_u64(9);
    let mut state = GameEngine::new_game("Ada", &mut rng).state();
    assert!(state.is_consistent());

    let dup = state.hand[0];
    state.hand[1] = dup;
    assert!(!state.is_consistent());
    store.save(&state).unwrap();
    assert!(store.load().is_none());

    let mut state = GameEngine::new_game("Ada", &mut rng).state();
    let low = state.tavern.remove(0);
    state.castle.push(low);
    assert!(!state.is_consistent());
    store.save(&state).unwrap();
    assert!(store.load().is_none());

    assert!(!GameState::default().is_consistent());
    store.clear().unwrap();
}
