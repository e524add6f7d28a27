//! The game core: cards, board, players and the turn state machine.
//!
//! Nothing in here knows about widgets. Drawing goes through a
//! `cairo::Context`, which can belong to a GTK drawing area or an
//! off-screen image surface.

pub mod art;
pub mod board;
pub mod card;
pub mod deck;
#[allow(clippy::module_inception)]
pub mod game;
pub mod geometry;
pub mod paint;
pub mod player;
pub mod state;

pub use art::{Artwork, BACK_STOCK, CardArt, FACE_STOCK};
pub use board::{Board, GridCoord, MIN_CELL};
pub use card::{Card, CardId, CardValue, DEFAULT_CARD_SIZE, Face};
pub use deck::{DECK_SIZE, PAIR_COUNT, new_deck, shuffle};
pub use game::{EndCallback, Game};
pub use geometry::{Rect, Size};
pub use paint::Color;
pub use player::{Player, PlayerId};
pub use state::{Countdown, Cursor, FADE_TICKS, FREEZE_TICKS, Phase, TurnState, Winner};
