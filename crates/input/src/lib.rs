//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameEvent`] and runs the
//! blocking key reader that feeds the async event loop. Unrecognized keys are
//! filtered here and never reach the game state.

pub mod map;
pub mod reader;

pub use blockfall_types as types;

pub use map::{handle_key_event, map_key, should_quit, InputSignal};
pub use reader::{spawn_key_reader, translate};
