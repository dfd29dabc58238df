//! Session and event-loop integration: pump, fold, render, persistence.

use std::path::PathBuf;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time;

use blockfall::core::{GameState, Grid, Piece, PieceKind};
use blockfall::engine::{run, EventPump, Redraw, Session};
use blockfall::input::InputSignal;
use blockfall::store::{BestScoreStore, JsonFileStore, MemoryStore};
use blockfall::types::{Color, GameEvent, SPAWN_ROW};

const PERIOD: Duration = Duration::from_millis(500);

fn about_to_top_out(score: u32) -> GameState {
    let grid = Grid::new().with_cell(4, 2, Some(Color::Obstacle));
    GameState::new(17)
        .with_grid(grid)
        .with_current(Piece::new(PieceKind::T, 3, SPAWN_ROW))
        .with_score(score)
}

fn scratch_file(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("blockfall-session-{}-{}", std::process::id(), name));
    let _ = std::fs::remove_dir_all(&dir);
    dir.push("best.json");
    dir
}

#[tokio::test(start_paused = true)]
async fn run_renders_after_every_signal() {
    let (tx, rx) = mpsc::channel(8);
    let mut pump = EventPump::new(PERIOD, rx);
    let mut session = Session::new(GameState::new(3), MemoryStore::new());
    let start_x = session.state().current().x;

    tx.send(InputSignal::Game(GameEvent::MoveRight)).await.unwrap();
    tx.send(InputSignal::Resize).await.unwrap();
    tx.send(InputSignal::Quit).await.unwrap();

    let mut frames = Vec::new();
    run(&mut session, &mut pump, |state, best, redraw| {
        frames.push((state.current().x, best, redraw));
        Ok(())
    })
    .await
    .unwrap();

    let redraws: Vec<_> = frames.iter().map(|f| f.2).collect();
    assert_eq!(redraws, vec![Redraw::Full, Redraw::Diff, Redraw::Full]);
    assert!(frames[1].0 >= start_x);
}

#[tokio::test(start_paused = true)]
async fn gravity_ticks_drive_the_piece_down() {
    let (tx, rx) = mpsc::channel(8);
    let mut pump = EventPump::new(PERIOD, rx);
    let mut session = Session::new(GameState::new(11), MemoryStore::new());
    let start_y = session.state().current().y;

    tokio::spawn(async move {
        time::sleep(PERIOD * 2 + PERIOD / 2).await;
        let _ = tx.send(InputSignal::Quit).await;
    });

    let mut ys = Vec::new();
    run(&mut session, &mut pump, |state, _, _| {
        ys.push(state.current().y);
        Ok(())
    })
    .await
    .unwrap();

    assert_eq!(ys, vec![start_y, start_y + 1, start_y + 2]);
}

#[tokio::test(start_paused = true)]
async fn render_errors_stop_the_loop() {
    let (tx, rx) = mpsc::channel(8);
    let mut pump = EventPump::new(PERIOD, rx);
    let mut session = Session::new(GameState::new(1), MemoryStore::new());

    tx.send(InputSignal::Game(GameEvent::Rotate)).await.unwrap();

    let mut calls = 0;
    let result = run(&mut session, &mut pump, |_, _, _| {
        calls += 1;
        if calls == 2 {
            anyhow::bail!("terminal gone");
        }
        Ok(())
    })
    .await;

    assert!(result.is_err());
    assert_eq!(calls, 2);
}

#[tokio::test(start_paused = true)]
async fn game_over_best_score_reaches_disk() {
    let path = scratch_file("game-over");
    let (tx, rx) = mpsc::channel(8);
    let mut pump = EventPump::new(PERIOD, rx);
    let mut session = Session::new(about_to_top_out(60), JsonFileStore::open(&path));

    tokio::spawn(async move {
        time::sleep(PERIOD + PERIOD / 2).await;
        let _ = tx.send(InputSignal::Quit).await;
    });

    let mut last = None;
    run(&mut session, &mut pump, |state, best, _| {
        last = Some((state.is_game_over(), best));
        Ok(())
    })
    .await
    .unwrap();

    assert_eq!(last, Some((true, 60)));

    let text = std::fs::read_to_string(&path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(doc["version"], 1);
    assert_eq!(doc["best"], 60);
    assert_eq!(JsonFileStore::open(&path).get(), 60);
}

#[test]
fn best_score_is_monotonic_across_restarts() {
    let mut session = Session::new(about_to_top_out(80), MemoryStore::new());
    session.handle(GameEvent::Tick);
    assert_eq!(session.frame(), 80);

    session.handle(GameEvent::Restart);
    assert_eq!(session.state().score(), 0);
    assert_eq!(session.frame(), 80);
    assert_eq!(session.store().get(), 80);
}
