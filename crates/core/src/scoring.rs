//! Scoring module - row clearing, score and level rules
//!
//! Rules:
//! - A row is full when every cell is occupied.
//! - Clearing `k` rows awards `SCORE_PER_ROW * k` points.
//! - `level = score / SCORE_PER_LEVEL + 1`, always derived from the score.

use crate::game_state::GameState;
use crate::types::{SCORE_PER_LEVEL, SCORE_PER_ROW};

/// Level reached at `score`
pub fn level_for_score(score: u32) -> u32 {
    score / SCORE_PER_LEVEL + 1
}

/// Points for clearing `rows` rows in one step
pub fn row_clear_score(rows: usize) -> u32 {
    SCORE_PER_ROW.saturating_mul(rows as u32)
}

/// Clear every full row of `state`'s grid.
///
/// Returns `None` when no row is full. Otherwise the cleared rows are removed,
/// as many empty rows are pushed in at the top, the score grows by
/// `row_clear_score(k)` and the active piece moves down `k` rows. The next
/// piece is untouched.
pub fn clear_rows(state: &GameState) -> Option<(GameState, usize)> {
    let full = state.grid.full_rows();
    if full.is_empty() {
        return None;
    }

    let cleared = full.len();
    let mut next = state.clone();
    next.grid = state.grid.without_rows(&full);
    next.score = state.score.saturating_add(row_clear_score(cleared));
    next.current = state.current.moved(0, cleared as i32);

    Some((next, cleared))
}
