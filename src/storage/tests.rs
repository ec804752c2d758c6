use super::*;
use crate::cli::types::{AccountId, DiscordId};
use crate::stats::types::{ModeStats, StatsSnapshot};
use std::time::Duration;
use tempfile::tempdir;

fn test_db() -> (tempfile::TempDir, LinkDatabase) {
    let dir = tempdir().expect("Failed to create temp directory");
    let db = LinkDatabase::with_path(&dir.path().join("test.db"))
        .expect("Failed to create test database");
    (dir, db)
}

fn snapshot(wins: u64, kills: u64, matches: u64) -> StatsSnapshot {
    let mut overall = ModeStats {
        wins,
        kills,
        matches,
        ..Default::default()
    };
    overall.finalize();
    StatsSnapshot {
        overall,
        modes: Default::default(),
    }
}

#[test]
fn link_and_lookup_round_trip() {
    let (_dir, mut db) = test_db();
    let discord = DiscordId::new("123456789012345678");
    let epic = AccountId::new("acct-a");

    db.link_account(&discord, &epic, "PlayerOne").unwrap();

    let linked = db.get_linked_account(&discord).unwrap().unwrap();
    assert_eq!(linked.epic_account_id, epic);
    assert_eq!(linked.epic_display_name, "PlayerOne");
    assert!(linked.linked_at > 0);
}

#[test]
fn relink_overwrites_previous_account() {
    let (_dir, mut db) = test_db();
    let discord = DiscordId::new("123456789012345678");

    db.link_account(&discord, &AccountId::new("old"), "Old").unwrap();
    db.link_account(&discord, &AccountId::new("new"), "New").unwrap();

    let linked = db.get_linked_account(&discord).unwrap().unwrap();
    assert_eq!(linked.epic_account_id.as_str(), "new");
    assert_eq!(linked.epic_display_name, "New");
}

#[test]
fn unlink_reports_whether_link_existed() {
    let (_dir, mut db) = test_db();
    let discord = DiscordId::new("42");

    assert!(!db.unlink_account(&discord).unwrap());

    db.link_account(&discord, &AccountId::new("acct"), "P").unwrap();
    assert!(db.unlink_account(&discord).unwrap());
    assert!(db.get_linked_account(&discord).unwrap().is_none());
}

#[test]
fn missing_link_is_none() {
    let (_dir, db) = test_db();
    assert!(db
        .get_linked_account(&DiscordId::new("999"))
        .unwrap()
        .is_none());
}

#[test]
fn leaderboard_orders_by_wins_then_kills() {
    let (_dir, mut db) = test_db();

    db.record_snapshot(&AccountId::new("a"), "Alice", &snapshot(10, 50, 100))
        .unwrap();
    db.record_snapshot(&AccountId::new("b"), "Bob", &snapshot(25, 80, 100))
        .unwrap();
    db.record_snapshot(&AccountId::new("c"), "Carol", &snapshot(10, 90, 100))
        .unwrap();

    let entries = db.leaderboard(10).unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.epic_display_name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Carol", "Alice"]);

    // limit applies
    assert_eq!(db.leaderboard(2).unwrap().len(), 2);
}

#[test]
fn record_snapshot_upserts_per_account() {
    let (_dir, mut db) = test_db();
    let acct = AccountId::new("a");

    db.record_snapshot(&acct, "Alice", &snapshot(10, 50, 100)).unwrap();
    db.record_snapshot(&acct, "Alice", &snapshot(12, 55, 110)).unwrap();

    let entries = db.leaderboard(10).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].wins, 12);
    assert_eq!(entries[0].kills, 55);
}

#[test]
fn prune_removes_only_old_entries() {
    let (_dir, mut db) = test_db();
    db.record_snapshot(&AccountId::new("a"), "Alice", &snapshot(1, 1, 1))
        .unwrap();

    // everything was written just now; a generous max age removes nothing
    assert_eq!(db.prune_leaderboard(Duration::from_secs(3600)).unwrap(), 0);
    // a zero max age removes entries updated before this instant
    let removed = db.prune_leaderboard(Duration::from_secs(0)).unwrap();
    assert!(removed <= 1);
}

#[test]
fn leaderboard_stores_derived_values() {
    let (_dir, mut db) = test_db();
    db.record_snapshot(&AccountId::new("a"), "Alice", &snapshot(2, 10, 5))
        .unwrap();

    let entries = db.leaderboard(1).unwrap();
    assert_eq!(entries[0].kd, 3.33);
    assert_eq!(entries[0].win_rate, 40.0);
}
