//! Terminal runner (default binary).
//!
//! Wires the pieces together: config and logging from the environment, a
//! key-reader thread feeding the event pump, the session fold, and the
//! framebuffer renderer.

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use blockfall::core::GameState;
use blockfall::engine::{logging, run, Config, EventPump, Redraw, Session};
use blockfall::input::spawn_key_reader;
use blockfall::store::{BestScoreStore, JsonFileStore, MemoryStore};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(&config)?;

    let seed = config.seed_or_clock();
    tracing::info!(seed, persist = config.persist, "starting");

    let store: Box<dyn BestScoreStore> = if config.persist {
        Box::new(JsonFileStore::open(&config.best_path))
    } else {
        Box::new(MemoryStore::new())
    };

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("build tokio runtime")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = rt.block_on(play(&config, seed, store, &mut term));

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(error = ?err, "exiting with error");
    }
    result
}

async fn play(
    config: &Config,
    seed: u32,
    store: Box<dyn BestScoreStore>,
    term: &mut TerminalRenderer,
) -> Result<()> {
    let (tx, rx) = mpsc::channel(64);
    spawn_key_reader(tx).context("spawn key reader")?;

    let mut pump = EventPump::new(config.tick, rx);
    let mut session = Session::new(GameState::new(seed), store);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    run(&mut session, &mut pump, |state, best, redraw| {
        if redraw == Redraw::Full {
            term.invalidate();
        }
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(state, best, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)
    })
    .await
}
