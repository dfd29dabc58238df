//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws a `GameState` into
//! a plain framebuffer, and the renderer flushes framebuffers to the terminal
//! as full redraws or changed runs. No widget toolkit is involved, which keeps
//! exact control over the aspect ratio (2 columns per grid cell).

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_rgb, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
