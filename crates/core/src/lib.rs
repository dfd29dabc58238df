//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds every rule of the falling-block game. It has **no
//! dependencies** on terminals, clocks, storage or threads:
//!
//! - **Pure**: every transition is `&GameState -> GameState`
//! - **Deterministic**: the RNG lives inside the state, so the same seed and
//!   the same event sequence always produce the same game
//! - **Testable**: scenarios are built directly with the `with_*` builders
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 playfield, full-row scan and compaction, obstacle placement
//! - [`tetromino`]: shape catalog, clockwise rotation, random spawn
//! - [`collision`]: wall/floor/cell checks that tolerate rows above the grid
//! - [`scoring`]: row clearing, score and derived level
//! - [`leveling`]: one obstacle per level-up
//! - [`lock`]: committing a landed piece
//! - [`game_state`]: the state itself and the tick/command reducer
//! - [`rng`]: small seeded LCG
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameEvent;
//!
//! let game = GameState::new(12345);
//! let game = game.apply(GameEvent::MoveRight);
//! let game = game.apply(GameEvent::Tick);
//!
//! assert!(!game.is_game_over());
//! assert_eq!(game.score(), 0);
//! assert_eq!(game.level(), 1);
//! ```

pub mod collision;
pub mod game_state;
pub mod grid;
pub mod leveling;
pub mod lock;
pub mod rng;
pub mod scoring;
pub mod tetromino;

pub use blockfall_types as types;

pub use collision::{blocks_command, collides, collides_below, collides_moved, collides_rotated};
pub use game_state::{GameState, TickOutcome};
pub use grid::{obstacle_position, Grid, Row};
pub use leveling::level_up;
pub use lock::lock_piece;
pub use rng::SimpleRng;
pub use scoring::{clear_rows, level_for_score, row_clear_score};
pub use tetromino::{random_block, spawn_y, Piece, PieceKind, Shape};
