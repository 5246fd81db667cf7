//! Integration tests for actionlog
//!
//! End-to-end flows across the recorder, journal, and retention: mixed
//! workloads, flush-driven pruning, and schema selection.

use std::fs;

use chrono::{Local, NaiveDate};
use tempfile::TempDir;

use actionlog::journal::file_name_for;
use actionlog::{
    ActionLogger, ClickKind, Config, GameEvent, ItemStack, LineSchema, Position,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn read_lines(path: &std::path::Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| l.to_string())
        .collect()
}

fn today_name() -> String {
    file_name_for(Local::now().date_naive())
}

// =============================================================================
// Mixed Workload
// =============================================================================

#[test]
fn test_mixed_workload_records_only_policy_passing_events() {
    let temp = TempDir::new().unwrap();
    let config = Config::builder()
        .data_dir(temp.path())
        .buffer_capacity(100)
        .build();
    let logger = ActionLogger::open(config).unwrap();

    // Recorded: break, place, located open, pickup take, tracked kill,
    // death, quit = 7 lines
    logger.record(GameEvent::BlockBreak {
        player: "Alice".to_string(),
        block: "STONE".to_string(),
        world: "world".to_string(),
        position: Position::new(1, 2, 3),
    });
    logger.record(GameEvent::BlockPlace {
        player: "Bob".to_string(),
        block: "DIRT".to_string(),
        world: "world_nether".to_string(),
        position: Position::new(-4, 70, 9),
    });
    logger.record(GameEvent::ContainerOpen {
        player: "Alice".to_string(),
        container: "CHEST".to_string(),
        world: "world".to_string(),
        position: Some(Position::new(10, 64, 10)),
    });
    logger.record(GameEvent::ContainerTake {
        player: "Alice".to_string(),
        container: "CHEST".to_string(),
        item: Some(ItemStack::new("GOLD_INGOT", 8)),
        click: ClickKind::Pickup,
        world: "world".to_string(),
        position: Some(Position::new(10, 64, 10)),
    });
    logger.record(GameEvent::EntityKill {
        player: "Bob".to_string(),
        entity: "WOLF".to_string(),
        world: "world".to_string(),
        position: Position::new(0, 0, 0),
    });
    logger.record(GameEvent::PlayerDeath {
        player: "Alice".to_string(),
        killer: None,
        world: "world".to_string(),
        position: Position::new(7, 8, 9),
    });
    logger.record(GameEvent::PlayerQuit {
        player: "Bob".to_string(),
        world: "world".to_string(),
        position: Position::new(0, 100, 0),
    });

    // Filtered: virtual open, non-taking click, untracked kill
    logger.record(GameEvent::ContainerOpen {
        player: "Alice".to_string(),
        container: "CRAFTING".to_string(),
        world: "world".to_string(),
        position: None,
    });
    logger.record(GameEvent::ContainerTake {
        player: "Alice".to_string(),
        container: "CHEST".to_string(),
        item: Some(ItemStack::new("GOLD_INGOT", 8)),
        click: ClickKind::Other,
        world: "world".to_string(),
        position: Some(Position::new(10, 64, 10)),
    });
    logger.record(GameEvent::EntityKill {
        player: "Bob".to_string(),
        entity: "ZOMBIE".to_string(),
        world: "world".to_string(),
        position: Position::new(0, 0, 0),
    });

    assert_eq!(logger.buffered_count(), 7);
    let path = logger.log_dir().join(today_name());
    logger.close();

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 7);
    assert!(lines[0].contains("BREAK,STONE"));
    assert!(lines[1].contains("PLACE,DIRT"));
    assert!(lines[2].contains("OPEN,CHEST"));
    assert!(lines[3].contains("TAKE_CHEST,GOLD_INGOT"));
    assert!(lines[4].contains("KILL,WOLF"));
    assert!(lines[5].contains("Environment,DEATH,Alice"));
    assert!(lines[6].contains("QUIT,PLAYER"));
}

// =============================================================================
// Flush-Driven Retention
// =============================================================================

#[test]
fn test_flush_prunes_old_files_and_keeps_todays() {
    let temp = TempDir::new().unwrap();
    let log_dir = temp.path().join("ActionLogs");
    fs::create_dir_all(&log_dir).unwrap();

    // 16 old files: one goes in the startup pass, and after today's file
    // appears the flush-time pass prunes back down to 15 again
    for day in 1..=16 {
        let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        fs::write(log_dir.join(file_name_for(date)), b"old\n").unwrap();
    }

    let config = Config::builder()
        .data_dir(temp.path())
        .buffer_capacity(2)
        .max_log_files(15)
        .build();
    let logger = ActionLogger::open(config).unwrap();
    assert_eq!(fs::read_dir(&log_dir).unwrap().count(), 15);

    logger.record(GameEvent::PlayerQuit {
        player: "Alice".to_string(),
        world: "world".to_string(),
        position: Position::new(0, 0, 0),
    });
    logger.record(GameEvent::PlayerQuit {
        player: "Bob".to_string(),
        world: "world".to_string(),
        position: Position::new(0, 0, 0),
    });

    // Threshold flush wrote today's file (16 present), then pruned back to 15;
    // today's file is the newest so it survives
    let entries = fs::read_dir(&log_dir).unwrap().count();
    assert_eq!(entries, 15);
    assert!(log_dir.join(today_name()).is_file());
}

// =============================================================================
// Schema Selection End-to-End
// =============================================================================

#[test]
fn test_legacy_schema_end_to_end() {
    let temp = TempDir::new().unwrap();
    let config = Config::builder()
        .data_dir(temp.path())
        .buffer_capacity(1)
        .schema(LineSchema::LegacyFull)
        .build();
    let logger = ActionLogger::open(config).unwrap();

    logger.record(GameEvent::ContainerTake {
        player: "Alice".to_string(),
        container: "CHEST".to_string(),
        item: Some(ItemStack::new("IRON_INGOT", 32)),
        click: ClickKind::ShiftMove,
        world: "world_nether".to_string(),
        position: Some(Position::new(4, 5, 6)),
    });

    let lines = read_lines(&logger.log_dir().join(today_name()));
    assert_eq!(lines.len(), 1);

    let fields: Vec<&str> = lines[0].split(',').collect();
    assert_eq!(fields.len(), 9);
    assert_eq!(fields[0], "world_nether");
    assert_eq!(fields[2], "Alice");
    assert_eq!(fields[3], "TAKE_CHEST");
    assert_eq!(fields[4], "IRON_INGOT");
    assert_eq!(fields[5], "32");
    assert_eq!(fields[6], "4");
    assert_eq!(fields[7], "5");
    assert_eq!(fields[8], "6");
}

// =============================================================================
// Restart Flow
// =============================================================================

#[test]
fn test_same_day_restart_appends_to_same_file() {
    let temp = TempDir::new().unwrap();

    // First session
    {
        let logger = ActionLogger::open_path(temp.path()).unwrap();
        logger.record(GameEvent::BlockBreak {
            player: "Alice".to_string(),
            block: "STONE".to_string(),
            world: "world".to_string(),
            position: Position::new(1, 2, 3),
        });
        logger.close();
    }

    // Second session, same day: lines accumulate in the same file
    {
        let logger = ActionLogger::open_path(temp.path()).unwrap();
        logger.record(GameEvent::BlockBreak {
            player: "Bob".to_string(),
            block: "DIRT".to_string(),
            world: "world".to_string(),
            position: Position::new(4, 5, 6),
        });
        let path = logger.log_dir().join(today_name());
        logger.close();

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(",Alice,"));
        assert!(lines[1].contains(",Bob,"));
    }
}
