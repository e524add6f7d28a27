#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use pairs::game::{
    Board, CardArt, Color, DEFAULT_CARD_SIZE, Game, MIN_CELL, Player, PlayerId, Rect, Winner,
    new_deck,
};

pub const BOARD_REGION: Rect = Rect {
    x: 5.0,
    y: 120.0,
    w: 590.0,
    h: 340.0,
};

/// Unshuffled: slots `2k` and `2k + 1` hold a pair.
pub fn board() -> Board {
    Board::new(new_deck(DEFAULT_CARD_SIZE), BOARD_REGION, MIN_CELL)
}

pub fn players() -> [Player; 2] {
    [
        Player::new(
            PlayerId(0),
            "Player 1",
            Color::from_hex("#f2f542aa").unwrap(),
            Rect::new(5.0, 5.0, 590.0, 100.0),
        ),
        Player::new(
            PlayerId(1),
            "Player 2",
            Color::from_hex("#db9dfcaa").unwrap(),
            Rect::new(5.0, 470.0, 590.0, 100.0),
        ),
    ]
}

/// A started game plus every outcome the end callback has seen.
pub fn game() -> (Game, Rc<RefCell<Vec<Winner>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let mut game = Game::new(CardArt::glyphs(), move |winner| sink.borrow_mut().push(winner));
    game.setup(board(), players());
    (game, seen)
}

pub fn click(game: &mut Game, slot: usize) {
    let (x, y) = game.board().unwrap().cell_rect(slot).center();
    game.mouse_down(x, y);
}

pub fn run_ticks(game: &mut Game, ticks: u32) {
    for _ in 0..ticks {
        game.step();
    }
}

/// Turns up pair `k` and waits until input reopens.
pub fn take_pair(game: &mut Game, k: usize) {
    click(game, 2 * k);
    click(game, 2 * k + 1);
    run_ticks(game, 71);
}

/// Turns up two cards of different pairs and waits until input reopens.
pub fn miss(game: &mut Game, k: usize, other: usize) {
    click(game, 2 * k);
    click(game, 2 * other);
    run_ticks(game, 71);
}
