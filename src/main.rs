//! Terminal 2048 runner (default binary).
//!
//! Single-threaded frame loop: render, wait up to one frame for a key, dispatch
//! it, repeat. It uses crossterm for input and the framebuffer renderer from
//! `tui_2048::term`.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tui_2048::config::Config;
use tui_2048::engine::Session;
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::store::{HighScoreFile, SaveFile, SaveRecord};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::{GameAction, FRAME_MS};

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config)?;

    let high_scores = HighScoreFile::new(&config.high_score_path);
    let best = high_scores.read().unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable high score");
        0
    });
    let saves = SaveFile::new(&config.save_path);
    let mut session = Session::new(config.seed, config.time_limit, best, Instant::now());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &saves);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Err(e) = high_scores.record(session.high_score()) {
        warn!(error = %e, "could not record high score");
    }
    info!(score = session.score(), high_score = session.high_score(), "quit");
    result
}

fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    // The terminal belongs to the renderer, so logs only ever go to the file.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut Session, saves: &SaveFile) -> Result<()> {
    let mut view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut notice: Option<&'static str> = None;
    let frame = Duration::from_millis(FRAME_MS as u64);

    loop {
        let now = Instant::now();
        session.tick(now);

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let snap = session.snapshot(now);
        view.render_into(&snap, notice, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next frame.
        if !event::poll(frame)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    notice = dispatch(action, session, &mut view, saves, Instant::now());
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

/// Route one action to the session or to a collaborator.
///
/// Returns the notice to show under the board, if any.
fn dispatch(
    action: GameAction,
    session: &mut Session,
    view: &mut GameView,
    saves: &SaveFile,
    now: Instant,
) -> Option<&'static str> {
    match action {
        GameAction::Save => {
            let record = SaveRecord::new(session.grid(), session.score());
            match saves.save(&record) {
                Ok(()) => Some("game saved"),
                Err(e) => {
                    warn!(error = %e, "save failed");
                    Some("could not save game")
                }
            }
        }
        GameAction::Load => match saves.load() {
            Ok(Some((grid, score))) => {
                session.load(grid, score, now);
                Some("game loaded")
            }
            Ok(None) => Some("no saved game yet"),
            Err(e) => {
                warn!(error = %e, "load failed");
                Some("save file is invalid")
            }
        },
        GameAction::ToggleTheme => {
            view.toggle_theme();
            None
        }
        _ => {
            session.apply_action(action, now);
            None
        }
    }
}
