//! Terminal runner (default binary).
//!
//! Owns the clock and the terminal: polls crossterm for key presses, feeds
//! elapsed time into the core, and redraws through the diffing framebuffer
//! renderer whenever the session changes.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use testris::core::{GameSnapshot, GameState};
use testris::input::{handle_key_event, should_quit};
use testris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use testris::types::{Command, TICK_MS};

#[derive(Debug, Parser)]
#[command(name = "testris", version, about = "Falling-block puzzle game for the terminal")]
struct Cli {
    #[arg(long, env = "TESTRIS_SEED", help = "Seed for the piece sequence (default: system clock)")]
    seed: Option<u32>,

    #[arg(long, env = "TESTRIS_LOG_FILE", help = "Write logs to this file")]
    log_file: Option<PathBuf>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v = INFO, -vv = DEBUG, -vvv = TRACE)")]
    verbose: u8,

    #[arg(
        long,
        default_value_t = 2,
        value_parser = clap::value_parser!(u16).range(1..=4),
        help = "Terminal columns per board cell"
    )]
    cell_width: u16,

    #[arg(
        long,
        default_value_t = TICK_MS,
        value_parser = clap::value_parser!(u32).range(1..=1000),
        help = "Host loop step in milliseconds"
    )]
    tick_ms: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let seed = cli.seed.unwrap_or_else(clock_seed);
    info!(seed, cell_width = cli.cell_width, tick_ms = cli.tick_ms, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &cli, seed);

    // Always try to restore terminal state.
    let restored = term.exit();
    result?;
    restored
}

/// Logs go to a file or nowhere; the terminal belongs to the game.
fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = cli.log_file.as_ref() else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(LevelFilter::from_level(level))
        .try_init()
        .context("failed to install log subscriber")?;
    Ok(())
}

fn clock_seed() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (now.as_secs() as u32) ^ now.subsec_nanos()
}

fn run(term: &mut TerminalRenderer, cli: &Cli, seed: u32) -> Result<()> {
    let mut game = GameState::new(seed);
    let view = GameView::new(cli.cell_width, 1);
    let step = Duration::from_millis(cli.tick_ms as u64);

    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    // (revision, terminal size) of the frame on screen
    let mut drawn: Option<(u32, (u16, u16))> = None;
    let mut last_advance = Instant::now();

    loop {
        let size = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        if drawn != Some((snap.revision, size)) {
            view.render_into(&snap, Viewport::new(size.0, size.1), &mut fb);
            term.draw_swap(&mut fb)?;
            drawn = Some((snap.revision, size));
        }

        // Wake for the next host step or the next gravity tick, whichever is first.
        let until_tick = game
            .time_until_tick()
            .map_or(step, |ms| Duration::from_millis(ms as u64));
        let timeout = step
            .min(until_tick)
            .saturating_sub(last_advance.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!(score = game.score(), level = game.level(), "quit");
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        // The pause key doubles as resume.
                        let command = if command == Command::Pause && game.paused() {
                            Command::Start
                        } else {
                            command
                        };
                        let applied = game.apply(command);
                        debug!(command = command.as_str(), applied, "key");
                        log_lock_event(&mut game);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_advance.elapsed();
        if elapsed >= step {
            let ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
            last_advance += Duration::from_millis(ms as u64);
            game.advance(ms);
            log_lock_event(&mut game);
        }
    }
}

/// Drain the session's last lock into the log.
fn log_lock_event(game: &mut GameState) {
    if let Some(event) = game.take_last_event() {
        debug!(
            kind = %event.kind,
            lines_cleared = event.lines_cleared,
            score_awarded = event.score_awarded,
            level = event.level,
            topped_out = event.topped_out,
            "lock"
        );
    }
}
