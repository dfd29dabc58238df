//! Game state module - the immutable game state and its transitions
//!
//! A `GameState` is never mutated once built: every transition takes
//! `&GameState` and returns the successor. Randomness comes from the `SimpleRng`
//! stored in the state, so a transition is fully determined by its input.
//!
//! # Tick order
//!
//! Each gravity tick on a running game performs exactly one of:
//!
//! 1. game over, if the piece cannot fall and is still on `SPAWN_ROW`
//! 2. clear full rows
//! 3. level-up (one obstacle)
//! 4. lock the landed piece
//! 5. move the piece down one row
//!
//! Player commands (move, rotate) only ever reposition the active piece, and a
//! blocked command leaves the state unchanged.

use crate::collision::{collides_below, collides_moved, collides_rotated};
use crate::grid::Grid;
use crate::leveling::level_up;
use crate::lock::lock_piece;
use crate::rng::SimpleRng;
use crate::scoring::{clear_rows, level_for_score};
use crate::tetromino::{random_block, Piece};
use crate::types::{GameEvent, SPAWN_ROW};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was already over; nothing changed
    Frozen,
    /// The piece topped out; the game is now over
    GameOver,
    /// This many full rows were removed
    RowsCleared(usize),
    /// The score reached this level; one obstacle was injected
    LevelUp(u32),
    /// The active piece was committed to the grid
    Locked,
    /// The active piece moved down one row
    Fell,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) grid: Grid,
    pub(crate) score: u32,
    /// Last level for which an obstacle was injected
    pub(crate) rewarded_level: u32,
    pub(crate) current: Piece,
    pub(crate) next: Piece,
    pub(crate) game_over: bool,
    pub(crate) rng: SimpleRng,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }

    /// Create a new game drawing from an existing random stream
    pub fn with_rng(mut rng: SimpleRng) -> Self {
        let current = random_block(&mut rng);
        let next = random_block(&mut rng);

        Self {
            grid: Grid::new(),
            score: 0,
            rewarded_level: level_for_score(0),
            current,
            next,
            game_over: false,
            rng,
        }
    }

    /// Replace the grid
    pub fn with_grid(self, grid: Grid) -> Self {
        Self { grid, ..self }
    }

    /// Replace the active piece
    pub fn with_current(self, current: Piece) -> Self {
        Self { current, ..self }
    }

    /// Replace the next piece
    pub fn with_next(self, next: Piece) -> Self {
        Self { next, ..self }
    }

    /// Replace the score; the level it implies counts as already rewarded.
    pub fn with_score(self, score: u32) -> Self {
        Self {
            score,
            rewarded_level: level_for_score(score),
            ..self
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Level derived from the score
    pub fn level(&self) -> u32 {
        level_for_score(self.score)
    }

    /// Last level that injected an obstacle
    pub fn rewarded_level(&self) -> u32 {
        self.rewarded_level
    }

    pub fn current(&self) -> Piece {
        self.current
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn rng(&self) -> &SimpleRng {
        &self.rng
    }

    /// Same state, marked as over
    pub fn ended(&self) -> Self {
        Self {
            game_over: true,
            ..self.clone()
        }
    }

    /// One gravity step
    pub fn tick(&self) -> Self {
        self.step().0
    }

    /// One gravity step, reporting which branch ran
    pub fn step(&self) -> (Self, TickOutcome) {
        if self.game_over {
            return (self.clone(), TickOutcome::Frozen);
        }

        let landed = collides_below(&self.current, &self.grid);
        if landed && self.current.y == SPAWN_ROW {
            return (self.ended(), TickOutcome::GameOver);
        }

        if let Some((next, rows)) = clear_rows(self) {
            return (next, TickOutcome::RowsCleared(rows));
        }

        if let Some(next) = level_up(self) {
            let level = next.rewarded_level;
            return (next, TickOutcome::LevelUp(level));
        }

        if landed {
            let next = lock_piece(self);
            let outcome = if next.game_over {
                TickOutcome::GameOver
            } else {
                TickOutcome::Locked
            };
            return (next, outcome);
        }

        (self.clone().with_current(self.current.moved(0, 1)), TickOutcome::Fell)
    }

    /// Move the active piece by (dx, dy); blocked moves leave the state unchanged.
    pub fn move_piece(&self, dx: i32, dy: i32) -> Self {
        if self.game_over || collides_moved(&self.current, dx, dy, &self.grid) {
            return self.clone();
        }
        self.clone().with_current(self.current.moved(dx, dy))
    }

    /// Rotate the active piece clockwise in place; a blocked rotation leaves the state unchanged.
    pub fn rotate(&self) -> Self {
        if self.game_over || collides_rotated(&self.current, &self.grid) {
            return self.clone();
        }
        self.clone().with_current(self.current.rotated())
    }

    /// Fresh game continuing this game's random stream
    pub fn restart(&self) -> Self {
        Self::with_rng(self.rng.clone())
    }

    /// Apply one event
    pub fn apply(&self, event: GameEvent) -> Self {
        match event {
            GameEvent::Tick => self.tick(),
            GameEvent::MoveLeft => self.move_piece(-1, 0),
            GameEvent::MoveRight => self.move_piece(1, 0),
            GameEvent::SoftDrop => self.move_piece(0, 1),
            GameEvent::Rotate => self.rotate(),
            GameEvent::Restart => self.restart(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tetromino::PieceKind;
    use crate::types::{Color, GRID_HEIGHT, GRID_WIDTH};

    fn on_empty(piece: Piece) -> GameState {
        GameState::new(12345).with_current(piece)
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.is_game_over());
        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.grid().occupied_count(), 0);
        assert_eq!(state.current().y, 2 - state.current().shape.height() as i32);
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = GameState::new(77);
        let b = GameState::new(77);
        assert_eq!(a, b);
        assert_eq!(a.tick(), b.tick());
    }

    #[test]
    fn test_tick_gravity() {
        let state = on_empty(Piece::new(PieceKind::T, 3, 2));
        let (next, outcome) = state.step();
        assert_eq!(outcome, TickOutcome::Fell);
        assert_eq!(next.current().y, 3);
        assert_eq!(next.current().x, 3);
    }

    #[test]
    fn test_tick_does_not_mutate_input() {
        let state = on_empty(Piece::new(PieceKind::T, 3, 2));
        let snapshot = state.clone();
        let _ = state.tick();
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_tick_locks_landed_piece() {
        let state = on_empty(Piece::new(PieceKind::O, 0, 17));
        let (next, outcome) = state.step();
        assert_eq!(outcome, TickOutcome::Locked);
        assert_eq!(next.grid().occupied_count(), 4);
        assert_eq!(next.current(), state.next());
    }

    #[test]
    fn test_game_over_on_spawn_row() {
        let grid = Grid::new().with_cell(4, 2, Some(Color::Obstacle));
        // T at y=-1 fills rows 0 and 1; one row down hits (4, 2).
        let state = GameState::new(1)
            .with_grid(grid)
            .with_current(Piece::new(PieceKind::T, 3, SPAWN_ROW))
            .with_score(30);

        let (next, outcome) = state.step();

        assert_eq!(outcome, TickOutcome::GameOver);
        assert!(next.is_game_over());
        assert_eq!(next.grid(), state.grid());
        assert_eq!(next.score(), 30);
    }

    #[test]
    fn test_game_over_is_terminal() {
        let state = GameState::new(1).ended();
        assert_eq!(state.step(), (state.clone(), TickOutcome::Frozen));
        assert_eq!(state.move_piece(1, 0), state);
        assert_eq!(state.rotate(), state);
    }

    #[test]
    fn test_restart_replaces_state() {
        let state = GameState::new(1).with_score(90).ended();
        let fresh = state.apply(GameEvent::Restart);
        assert!(!fresh.is_game_over());
        assert_eq!(fresh.score(), 0);
        assert_eq!(fresh.level(), 1);
        assert_eq!(fresh.grid().occupied_count(), 0);
    }

    #[test]
    fn test_move_commands() {
        let state = on_empty(Piece::new(PieceKind::T, 3, 5));
        assert_eq!(state.apply(GameEvent::MoveLeft).current().x, 2);
        assert_eq!(state.apply(GameEvent::MoveRight).current().x, 4);
        assert_eq!(state.apply(GameEvent::SoftDrop).current().y, 6);
    }

    #[test]
    fn test_move_blocked_by_wall_is_dropped() {
        let state = on_empty(Piece::new(PieceKind::T, 0, 5));
        assert_eq!(state.apply(GameEvent::MoveLeft), state);

        let right = on_empty(Piece::new(PieceKind::T, GRID_WIDTH as i32 - 3, 5));
        assert_eq!(right.apply(GameEvent::MoveRight), right);
    }

    #[test]
    fn test_soft_drop_blocked_by_floor() {
        let state = on_empty(Piece::new(PieceKind::O, 4, GRID_HEIGHT as i32 - 3));
        assert_eq!(state.apply(GameEvent::SoftDrop), state);
    }

    #[test]
    fn test_commands_never_lock() {
        let state = on_empty(Piece::new(PieceKind::O, 4, GRID_HEIGHT as i32 - 3));
        let moved = state.apply(GameEvent::MoveLeft);
        assert_eq!(moved.grid().occupied_count(), 0);
        assert_eq!(moved.current().x, 3);
    }

    #[test]
    fn test_rotate_command() {
        let state = on_empty(Piece::new(PieceKind::T, 3, 5));
        let rotated = state.apply(GameEvent::Rotate);
        assert_eq!(rotated.current().shape, state.current().shape.rotated());
        assert_eq!((rotated.current().x, rotated.current().y), (3, 5));
    }

    #[test]
    fn test_rotate_blocked_by_occupied_cell() {
        // Rotated T fills matrix column 1 from row 0: (4, 5) must be free.
        let grid = Grid::new().with_cell(4, 5, Some(Color::Obstacle));
        let state = GameState::new(3)
            .with_grid(grid)
            .with_current(Piece::new(PieceKind::T, 3, 5));
        assert_eq!(state.apply(GameEvent::Rotate), state);
    }

    #[test]
    fn test_rows_clear_before_level_up_and_lock() {
        let mut grid = Grid::new();
        for x in 0..GRID_WIDTH as i32 {
            grid.set(x, 19, Some(Color::Red));
        }
        // Score already at a new level and the piece landed: clearing still wins.
        let mut state = on_empty(Piece::new(PieceKind::O, 0, 16)).with_grid(grid);
        state.score = 40;

        let (next, outcome) = state.step();
        assert_eq!(outcome, TickOutcome::RowsCleared(1));
        assert_eq!(next.score(), 50);
        assert_eq!(next.rewarded_level, 1);

        let (next, outcome) = next.step();
        assert_eq!(outcome, TickOutcome::LevelUp(2));
        assert_eq!(next.grid().occupied_count(), 1);
    }
}
