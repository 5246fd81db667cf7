//! actionlog workload simulator
//!
//! Feeds a deterministic synthetic event stream through a logger instance so
//! the full append → flush → prune path can be exercised from a shell.

use clap::Parser;

use actionlog::{
    ActionLogger, ClickKind, Config, FlushMode, GameEvent, ItemStack, LineSchema, Position,
};
use tracing_subscriber::{fmt, EnvFilter};

/// actionlog simulator
#[derive(Parser, Debug)]
#[command(name = "actionlog-sim")]
#[command(about = "Drive a synthetic event workload through the action logger")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./actionlog_data")]
    data_dir: String,

    /// Number of events to generate
    #[arg(short, long, default_value = "2000")]
    events: usize,

    /// Buffered records before a flush triggers
    #[arg(short, long, default_value = "500")]
    buffer_capacity: usize,

    /// Maximum retained log files
    #[arg(short, long, default_value = "15")]
    max_files: usize,

    /// Route flushes through the background worker
    #[arg(long)]
    background: bool,

    /// Write the legacy full column set instead of the current one
    #[arg(long)]
    legacy_schema: bool,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,actionlog=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("actionlog-sim v{}", actionlog::VERSION);
    tracing::info!("Data directory: {}", args.data_dir);
    tracing::info!("Events: {}", args.events);

    // Build config from args
    let mut builder = Config::builder()
        .data_dir(&args.data_dir)
        .buffer_capacity(args.buffer_capacity)
        .max_log_files(args.max_files);

    if args.background {
        builder = builder.flush_mode(FlushMode::Background { queue_capacity: 64 });
    }
    if args.legacy_schema {
        builder = builder.schema(LineSchema::LegacyFull);
    }

    let logger = match ActionLogger::open(builder.build()) {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to open logger: {}", e);
            std::process::exit(1);
        }
    };

    for i in 0..args.events {
        let event = synthetic_event(i);
        tracing::trace!(player = event.player(), "generated event");
        logger.record(event);
    }

    let buffered = logger.buffered_count();
    let log_dir = logger.log_dir().to_path_buf();
    logger.close();

    tracing::info!(
        "Done: {} events generated, {} still buffered at close (flushed on shutdown)",
        args.events,
        buffered
    );
    tracing::info!("Log directory: {}", log_dir.display());
}

/// Deterministic event stream: same index, same event
fn synthetic_event(i: usize) -> GameEvent {
    const PLAYERS: [&str; 4] = ["Alice", "Bob", "Carol", "Dave"];
    const BLOCKS: [&str; 3] = ["STONE", "DIRT", "OAK_LOG"];
    const WORLDS: [&str; 2] = ["world", "world_nether"];

    let player = PLAYERS[i % PLAYERS.len()].to_string();
    let world = WORLDS[i % WORLDS.len()].to_string();
    let position = Position::new(i as i32, 64, -(i as i32));

    match i % 5 {
        0 => GameEvent::BlockBreak {
            player,
            block: BLOCKS[i % BLOCKS.len()].to_string(),
            world,
            position,
        },
        1 => GameEvent::BlockPlace {
            player,
            block: BLOCKS[i % BLOCKS.len()].to_string(),
            world,
            position,
        },
        2 => GameEvent::ContainerOpen {
            player,
            container: "CHEST".to_string(),
            world,
            position: Some(position),
        },
        3 => GameEvent::ContainerTake {
            player,
            container: "CHEST".to_string(),
            item: Some(ItemStack::new("IRON_INGOT", (i % 64) as u32 + 1)),
            click: ClickKind::ShiftMove,
            world,
            position: Some(position),
        },
        _ => GameEvent::EntityKill {
            player,
            entity: "VILLAGER".to_string(),
            world,
            position,
        },
    }
}
