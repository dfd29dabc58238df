//! Lock-in: commit a landed piece into the grid and advance the piece queue.

use crate::game_state::GameState;
use crate::grid::Grid;
use crate::tetromino::{random_block, Piece};

/// Copy of `grid` with every filled cell of `piece` set to the piece's color.
///
/// Returns `None` if any filled cell is above the grid (the stack has topped out).
pub fn stamp(grid: &Grid, piece: &Piece) -> Option<Grid> {
    if piece.cells().any(|(_, y)| y < 0) {
        return None;
    }

    let mut next = grid.clone();
    for (x, y) in piece.cells() {
        next.set(x, y, Some(piece.color));
    }
    Some(next)
}

/// Lock the active piece, promote the next piece and draw a fresh next piece.
///
/// A game that is already over is returned unchanged. A piece that would lock
/// partly above the grid ends the game instead.
pub fn lock_piece(state: &GameState) -> GameState {
    if state.game_over {
        return state.clone();
    }

    let Some(grid) = stamp(&state.grid, &state.current) else {
        return state.ended();
    };

    let mut next = state.clone();
    next.grid = grid;
    next.current = state.next;
    next.next = random_block(&mut next.rng);
    next
}
