use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;
use rand::Rng;
use tracing::info;

use crate::game::{Board, CardArt, Game, Player, PlayerId, Winner, new_deck, shuffle};

use super::config::Config;
use super::hud::{start_ticker, stop_ticker, update_subtitle};
use super::state::AppState;

pub(super) fn build_players(config: &Config) -> [Player; 2] {
    let [first, second] = &config.players;
    [
        Player::new(PlayerId(0), first.name.clone(), first.color, first.region),
        Player::new(PlayerId(1), second.name.clone(), second.color, second.region),
    ]
}

/// Deals a freshly shuffled deck and starts the game on it.
pub(super) fn new_game<R: Rng + ?Sized>(
    config: &Config,
    art: &CardArt,
    rng: &mut R,
    on_end: impl FnMut(Winner) + 'static,
) -> Game {
    let mut cards = new_deck(config.card);
    shuffle(&mut cards, rng);
    let board = Board::new(cards, config.board, config.min_cell);

    let mut game = Game::new(art.clone(), on_end).with_table_color(config.table_color);
    game.setup(board, build_players(config));
    game
}

/// Replaces the running game with a new one and restarts the tick driver.
pub(super) fn start_new_game(state: &Rc<RefCell<AppState>>) {
    {
        let mut st = state.borrow_mut();
        stop_ticker(&mut st);
        st.game.quit();

        let restart = st.restart_button.clone();
        if let Some(button) = &restart {
            button.set_visible(false);
        }
        let on_end = move |winner: Winner| {
            info!(?winner, "offering a new game");
            if let Some(button) = &restart {
                button.set_visible(true);
            }
        };

        let game = new_game(&st.config, &st.art, &mut rand::rng(), on_end);
        st.game = game;
        update_subtitle(&st);
        if let Some(area) = &st.drawing_area {
            area.queue_draw();
        }
    }
    start_ticker(state);
}
