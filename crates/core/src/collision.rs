//! Collision checks for shapes against the grid walls, floor and locked cells.
//!
//! Gravity tolerates rows above the grid: a piece spends its first ticks
//! partly above row 0. Player commands do not: a move or rotation that would
//! put a filled cell above row 0 is blocked. Every check verifies `row >= 0`
//! before the grid is indexed.

use crate::grid::Grid;
use crate::tetromino::{Piece, Shape};
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

/// Does `shape` with its top-left corner at (origin_x, origin_y) hit a wall,
/// the floor, or an occupied cell?
pub fn collides(shape: &Shape, origin_x: i32, origin_y: i32, grid: &Grid) -> bool {
    shape.filled().any(|(i, j)| {
        let x = origin_x + j as i32;
        let y = origin_y + i as i32;
        x < 0
            || x >= GRID_WIDTH as i32
            || y >= GRID_HEIGHT as i32
            || (y >= 0 && grid.is_occupied(x, y))
    })
}

/// Would `piece` collide if it fell one row?
///
/// A shape exactly two rows tall with a filled cell sitting on row 0 also
/// counts as landed.
pub fn collides_below(piece: &Piece, grid: &Grid) -> bool {
    collides(&piece.shape, piece.x, piece.y + 1, grid) || two_row_spawn_boundary(piece)
}

fn two_row_spawn_boundary(piece: &Piece) -> bool {
    piece.shape.height() == 2 && piece.shape.filled().any(|(i, _)| piece.y + i as i32 == 0)
}

/// Like [`collides`], but a filled cell above row 0 also blocks.
pub fn blocks_command(shape: &Shape, origin_x: i32, origin_y: i32, grid: &Grid) -> bool {
    shape.filled().any(|(i, _)| origin_y + (i as i32) < 0)
        || collides(shape, origin_x, origin_y, grid)
}

/// Is a player move of `piece` by (dx, dy) blocked?
pub fn collides_moved(piece: &Piece, dx: i32, dy: i32, grid: &Grid) -> bool {
    blocks_command(&piece.shape, piece.x + dx, piece.y + dy, grid)
}

/// Is a clockwise rotation of `piece` in place blocked?
pub fn collides_rotated(piece: &Piece, grid: &Grid) -> bool {
    let rotated = piece.shape.rotated();
    blocks_command(&rotated, piece.x, piece.y, grid)
}
