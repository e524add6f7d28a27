//! Pairs: a two-player memory-matching card game.
//!
//! [`game`] holds the tick-driven core; [`ui`] wraps it in a GTK4 /
//! libadwaita window.

mod error;
pub mod game;
pub mod ui;

pub use error::Error;
