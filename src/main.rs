//! GEMSWAP - headless autoplay driver
//!
//! Plays one game against the core, acknowledging every relocation at once
//! the way an instant presentation layer would, and prints each event as a
//! JSON line.

use gemswap::playability::find_winning_swap;
use gemswap::settings::Settings;
use gemswap::{Event, Game, GameState, Grid, RandomSource};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Get the gemswap temp directory, creating it if needed
fn gemswap_temp_dir() -> PathBuf {
    let dir = std::env::temp_dir().join("gemswap");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// A random neighbouring pair, None on a board without neighbours
fn random_pair(grid: &Grid, rng: &mut RandomSource) -> Option<(usize, usize)> {
    for _ in 0..grid.len() * 4 {
        let a = rng.index_below(grid.len());
        let neighbour = if rng.index_below(2) == 0 {
            grid.right_of(a)
        } else {
            grid.above(a)
        };
        if let Some(b) = neighbour {
            return Some((a, b));
        }
    }
    None
}

/// Print the events and acknowledge every relocation they report, until the
/// game stops waiting
fn settle(game: &mut Game, out: &mut impl Write) -> io::Result<()> {
    loop {
        let events = game.drain_events();
        if events.is_empty() {
            return Ok(());
        }
        let mut landed = Vec::new();
        for event in &events {
            match serde_json::to_string(event) {
                Ok(line) => writeln!(out, "{}", line)?,
                Err(e) => tracing::warn!("Could not encode event {:?}: {}", event, e),
            }
            match event {
                Event::SwapCommitted { a, b } | Event::SwapReverted { a, b } => {
                    landed.extend([*b, *a]);
                }
                Event::Fell(falls) => landed.extend(falls.iter().map(|fall| fall.to)),
                _ => {}
            }
        }
        for index in landed {
            game.notify_move_complete(index);
        }
    }
}

fn main() -> io::Result<()> {
    // Generate session ID for this run
    let session_id: u32 = rand::random();

    // Setup tracing to log file
    let log_dir = gemswap_temp_dir();
    let log_file = format!("{:08x}.log", session_id);
    let file_appender = tracing_appender::rolling::never(&log_dir, &log_file);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gemswap=debug")),
        )
        .with_ansi(false)
        .init();

    tracing::info!(
        "GEMSWAP starting up, session={:08x}, log={}",
        session_id,
        log_dir.join(&log_file).display()
    );

    // Load settings, an optional first argument overrides the seed
    let mut settings = Settings::load();
    let seed_arg = match std::env::args().nth(1) {
        None => None,
        Some(arg) => match arg.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                eprintln!("Usage: gemswap [SEED]");
                drop(guard);
                std::process::exit(2);
            }
        },
    };

    let game = settings.game_config().and_then(|mut config| {
        if seed_arg.is_some() {
            config.seed = seed_arg;
        }
        Game::new(config)
    });
    let mut game = match game {
        Ok(game) => game,
        Err(e) => {
            tracing::error!("Invalid settings: {}", e);
            eprintln!("Invalid settings: {}", e);
            // flush the log file before exiting
            drop(guard);
            std::process::exit(2);
        }
    };
    tracing::info!("Seed {}", game.seed());

    let mut bot = RandomSource::with_seed(game.seed().rotate_left(17));
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", game.grid())?;

    let mut turns = 0;
    while turns < settings.demo.max_turns && game.state() == GameState::Playing {
        let Some((a, b)) =
            find_winning_swap(game.grid()).or_else(|| random_pair(game.grid(), &mut bot))
        else {
            break;
        };
        for index in [a, b] {
            if let Err(e) = game.pick(Some(index)) {
                tracing::warn!("Pick {} rejected: {}", index, e);
            }
        }
        settle(&mut game, &mut out)?;
        turns += 1;
    }

    write!(out, "{}", game.grid())?;
    if game.state() == GameState::NoMoves {
        writeln!(out, "No moves left.")?;
    }
    writeln!(
        out,
        "Turns: {} | Matches: {} | Score: {}",
        turns,
        game.score().matches(),
        game.score().points()
    )?;

    settings.add_score(game.score().points(), game.score().matches(), game.seed());
    if let Err(e) = settings.save() {
        eprintln!("Warning: Could not save settings: {}", e);
    }

    Ok(())
}
