//! Engine: everything between the pure core and the terminal.
//!
//! - [`config`]: environment-driven runtime settings
//! - [`logging`]: file-backed tracing subscriber
//! - [`pump`]: merges the gravity timer and key input into one ordered stream
//! - [`session`]: folds that stream over the game state and keeps the best score

pub mod config;
pub mod logging;
pub mod pump;
pub mod session;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_store as store;
pub use blockfall_types as types;

pub use config::Config;
pub use pump::EventPump;
pub use session::{run, Redraw, Session};
