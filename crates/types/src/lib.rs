//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no external dependencies, making them
//! usable from the core state machine, the terminal view and the input layer.
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! Pieces may sit partly above the grid (negative rows) while they enter.
//!
//! # Gameplay Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_RATE_MS` | 500 | Gravity timer period |
//! | `SCORE_PER_ROW` | 10 | Points for each cleared row |
//! | `SCORE_PER_LEVEL` | 40 | Points needed per level |
//! | `SPAWN_ROW` | -1 | Row at which a blocked piece ends the game |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameEvent, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(GameEvent::from_str("moveLeft"), Some(GameEvent::MoveLeft));
//! assert_eq!(GameEvent::Rotate.as_str(), "rotate");
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: usize = 10;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: usize = 20;

/// Gravity timer period in milliseconds
pub const TICK_RATE_MS: u64 = 500;

/// Points awarded per cleared row
pub const SCORE_PER_ROW: u32 = 10;

/// Points per level step: `level = score / SCORE_PER_LEVEL + 1`
pub const SCORE_PER_LEVEL: u32 = 40;

/// A piece that cannot fall while its origin is still on this row tops out.
pub const SPAWN_ROW: i32 = -1;

/// Obstacles land in the middle band of the grid: this many percent from the top...
pub const OBSTACLE_BAND_OFFSET_PCT: usize = 30;

/// ...spanning this many percent of the height.
pub const OBSTACLE_BAND_SPAN_PCT: usize = 40;

/// Display color of a tetromino or an occupied cell.
///
/// The seven piece colors come from the catalog; `Obstacle` is the neutral
/// color used for cells injected on level-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Pink,
    Cyan,
    Red,
    Orange,
    Yellow,
    Purple,
    ForestGreen,
    Obstacle,
}

impl Color {
    /// Lowercase name, e.g. for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Pink => "pink",
            Color::Cyan => "cyan",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::ForestGreen => "forestgreen",
            Color::Obstacle => "obstacle",
        }
    }
}

/// A cell of the grid
///
/// - `None`: empty
/// - `Some(Color)`: occupied, drawn with that color
pub type Cell = Option<Color>;

/// The discrete events folded over the game state.
///
/// Every variant maps to exactly one pure `GameState -> GameState` handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// One gravity step
    Tick,
    /// Move the active piece one column left
    MoveLeft,
    /// Move the active piece one column right
    MoveRight,
    /// Move the active piece one row down
    SoftDrop,
    /// Rotate the active piece 90° clockwise
    Rotate,
    /// Discard the current game and start a fresh one
    Restart,
}

impl GameEvent {
    /// Parse event from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameEvent;
    ///
    /// assert_eq!(GameEvent::from_str("tick"), Some(GameEvent::Tick));
    /// assert_eq!(GameEvent::from_str("SoftDrop"), Some(GameEvent::SoftDrop));
    /// assert_eq!(GameEvent::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tick" => Some(GameEvent::Tick),
            "moveleft" => Some(GameEvent::MoveLeft),
            "moveright" => Some(GameEvent::MoveRight),
            "softdrop" => Some(GameEvent::SoftDrop),
            "rotate" => Some(GameEvent::Rotate),
            "restart" => Some(GameEvent::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::Tick => "tick",
            GameEvent::MoveLeft => "moveLeft",
            GameEvent::MoveRight => "moveRight",
            GameEvent::SoftDrop => "softDrop",
            GameEvent::Rotate => "rotate",
            GameEvent::Restart => "restart",
        }
    }

    /// Player commands move or rotate the active piece; ticks and restarts do not.
    pub fn is_command(&self) -> bool {
        matches!(
            self,
            GameEvent::MoveLeft | GameEvent::MoveRight | GameEvent::SoftDrop | GameEvent::Rotate
        )
    }
}
