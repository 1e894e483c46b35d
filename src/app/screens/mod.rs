//! Screen modules.
//!
//! This module provides the screen handlers and the terminal they share.

mod board;
mod common;

pub use board::BoardScreen;
pub use common::{ScreenContext, MAX_MULTILINE_LINES, MULTILINE_TERMINATOR};
