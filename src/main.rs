//! Terminal quiz runner (default binary).
//!
//! Polls crossterm for key presses, feeds the countdown ticker with measured
//! frame time and redraws the framebuffer view when the session changes.

use std::fs::{self, OpenOptions};
use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mattespel::cli::Cli;
use mattespel::core::{CountdownTicker, RoundEngine, SimpleRng};
use mattespel::input::ActionBatch;
use mattespel::summary::write_summary;
use mattespel::term::{FrameBuffer, FrameThrottle, QuizView, TerminalRenderer, Viewport};
use mattespel::types::FRAME_MS;

/// Redraw an unchanged screen at most this often.
const REFRESH_MS: u64 = 1000;

fn init_logging(cli: &Cli) -> Result<()> {
    let Some(log_path) = cli.log_file.as_ref() else {
        return Ok(());
    };

    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create log directory {}", parent.display()))?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("open log file {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.as_filter()));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    info!(path = %log_path.display(), "logging initialized");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let seed = cli.seed.unwrap_or_else(SimpleRng::seed_from_clock);
    info!(seed, mode = cli.mode.as_str(), "starting mattespel");

    let mut engine = RoundEngine::with_rng(SimpleRng::new(seed), cli.mode);

    let mut term = TerminalRenderer::new();
    if let Err(e) = term.enter() {
        let _ = term.exit();
        return Err(e);
    }

    let result = run(&mut term, &mut engine);

    // Always try to restore terminal state.
    let restored = term.exit();
    result?;
    restored?;

    let history = engine.history();
    info!(
        attempts = history.len(),
        best = history.best_score().unwrap_or(0),
        "shutting down"
    );
    write_summary(history.entries(), cli.summary, &mut io::stdout().lock())
}

fn run(term: &mut TerminalRenderer, engine: &mut RoundEngine) -> Result<()> {
    let view = QuizView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut ticker = CountdownTicker::new();
    let mut throttle = FrameThrottle::new(REFRESH_MS);
    let mut batch = ActionBatch::new();

    let (mut width, mut height) = crossterm::terminal::size().unwrap_or((80, 24));
    debug!(width, height, "terminal size");

    let clock = Instant::now();
    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let snap = engine.snapshot();
        let now_ms = clock.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, snap.fingerprint()) {
            view.render_into(&snap, Viewport::new(width, height), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input until the next frame or the next countdown tick, whichever is sooner.
        let timeout = ticker
            .until_next_ms()
            .map_or(frame, |ms| frame.min(Duration::from_millis(ms as u64)));

        batch.clear();
        if event::poll(timeout)? {
            batch.push_event(&event::read()?);
            while event::poll(Duration::ZERO)? {
                batch.push_event(&event::read()?);
            }
        }

        if batch.quit_requested() {
            info!("quit requested");
            return Ok(());
        }

        if let Some((w, h)) = batch.resized() {
            width = w;
            height = h;
            term.invalidate();
            throttle.reset();
            debug!(width, height, "terminal resized");
        }

        if batch.dropped() > 0 {
            warn!(dropped = batch.dropped(), "too many key presses in one frame");
        }

        // Countdown.
        let elapsed_ms = last_frame.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last_frame = Instant::now();
        for _ in 0..ticker.advance(elapsed_ms) {
            if engine.tick() {
                break;
            }
        }
        ticker.sync(engine.active_round_id());

        // Player actions.
        for &action in batch.actions() {
            let changed = engine.apply_action(action);
            debug!(action = action.as_str(), changed, "action applied");
            ticker.sync(engine.active_round_id());
        }
    }
}
