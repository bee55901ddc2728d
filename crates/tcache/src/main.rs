//! TierCache driver - replays cache commands from a script or stdin

mod command;
mod handler;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tiercache::{Cache, CacheConfig, EvictionPolicy, DEFAULT_TIER_CAPACITY, TIER_COUNT};
use tracing::{info, warn};

use crate::command::parse_command;
use crate::handler::{CommandHandler, Reply};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Capacity of each tier (size units)
    #[arg(short, long, default_value_t = DEFAULT_TIER_CAPACITY)]
    capacity: usize,

    /// Eviction policy for INSERT commands that do not name one (lru or mru)
    #[arg(short, long, default_value = "lru")]
    policy: EvictionPolicy,

    /// Render DUMP output as JSON
    #[arg(long)]
    json: bool,

    /// Command script (reads stdin when omitted)
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Logs go to stderr so replies on stdout stay clean
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Starting tcache v{}", env!("CARGO_PKG_VERSION"));
    info!("Tiers: {} x {} units", TIER_COUNT, args.capacity);
    info!("Default eviction policy: {}", args.policy);

    let cache = Cache::with_config(CacheConfig::new(args.capacity));
    let mut handler = CommandHandler::new(cache, args.policy, args.json);

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            info!("Reading commands from {}", path.display());
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut executed = 0usize;

    for (index, line) in input.lines().enumerate() {
        let line = line.context("failed to read command")?;

        match parse_command(&line) {
            Ok(Some(cmd)) => {
                writeln!(out, "{}", handler.handle(cmd))?;
                executed += 1;
            }
            Ok(None) => {}
            Err(e) => {
                warn!(line = index + 1, "Parse error: {}", e);
                writeln!(out, "{}", Reply::Error(e))?;
            }
        }
    }

    out.flush()?;
    info!("Executed {} commands", executed);
    Ok(())
}
