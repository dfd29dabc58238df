//! Level-up handling: each time the derived level passes the last rewarded
//! level, exactly one obstacle cell is injected into the grid.

use crate::game_state::GameState;
use crate::scoring::level_for_score;

/// Inject one obstacle if the score has reached a new level.
///
/// Returns `None` when the derived level has not grown past the stored level.
/// A jump of several levels at once still injects a single obstacle.
pub fn level_up(state: &GameState) -> Option<GameState> {
    if state.game_over {
        return None;
    }

    let level = level_for_score(state.score);
    if level <= state.rewarded_level {
        return None;
    }

    let mut next = state.clone();
    next.grid = state.grid.with_obstacle(&mut next.rng);
    next.rewarded_level = level;
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_level_up_below_threshold() {
        let state = GameState::new(3).with_score(30);
        assert!(level_up(&state).is_none());
    }

    #[test]
    fn test_level_up_injects_one_obstacle() {
        let mut state = GameState::new(3);
        state.score = 45;

        let next = level_up(&state).expect("score 45 reaches level 2");
        assert_eq!(next.rewarded_level, 2);
        assert_eq!(next.grid().occupied_count(), 1);
        assert!(level_up(&next).is_none());
    }

    #[test]
    fn test_multi_level_jump_injects_single_obstacle() {
        let mut state = GameState::new(3);
        state.score = 130;

        let next = level_up(&state).expect("level 4 reached");
        assert_eq!(next.rewarded_level, 4);
        assert_eq!(next.grid().occupied_count(), 1);
    }
}
