use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gettextrs::gettext;
use gtk4::glib;

use crate::game::{Game, Phase, Winner};

use super::state::AppState;

/// Header subtitle: whose turn it is and the pair counts, or the result.
pub(super) fn status_text(game: &Game) -> String {
    let players = game.players();
    let name_of = |idx: usize| players.get(idx).map_or("", |p| p.name());
    let pairs_of = |idx: usize| players.get(idx).map_or(0, |p| p.matches() / 2);

    match game.winner() {
        Winner::Tie => return gettext("Draw"),
        Winner::WonBy(id) => return gettext("{name} wins").replace("{name}", name_of(id.0)),
        Winner::NoWinner => {}
    }

    match game.phase() {
        Phase::InProgress => format!(
            "{} | {} – {}",
            gettext("{name}'s turn").replace("{name}", name_of(game.current_index())),
            pairs_of(0),
            pairs_of(1)
        ),
        Phase::Idle | Phase::Ended => gettext("Paused"),
    }
}

pub(super) fn update_subtitle(st: &AppState) {
    if let Some(subtitle) = &st.title_game_subtitle {
        let text = status_text(&st.game);
        if subtitle.text().as_str() != text {
            subtitle.set_text(&text);
        }
    }
}

/// Returns whether a ticker was running.
pub(super) fn stop_ticker(st: &mut AppState) -> bool {
    match st.tick_handle.take() {
        Some(handle) => {
            handle.remove();
            true
        }
        None => false,
    }
}

pub(super) fn start_ticker(state: &Rc<RefCell<AppState>>) {
    let mut st = state.borrow_mut();
    stop_ticker(&mut st);

    let state_tick = state.clone();
    let handle = glib::timeout_add_local(Duration::from_millis(st.config.tick_ms), move || {
        let mut st = state_tick.borrow_mut();
        st.game.step();
        update_subtitle(&st);
        glib::ControlFlow::Continue
    });
    st.tick_handle = Some(handle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{
        Board, CardArt, CardId, Color, DEFAULT_CARD_SIZE, MIN_CELL, Player, PlayerId, Rect,
        new_deck,
    };

    fn game() -> Game {
        let board = Board::new(
            new_deck(DEFAULT_CARD_SIZE),
            Rect::new(5.0, 120.0, 590.0, 340.0),
            MIN_CELL,
        );
        let players = [
            Player::new(PlayerId(0), "Ada", Color::WHITE, Rect::new(5.0, 5.0, 590.0, 100.0)),
            Player::new(PlayerId(1), "Bo", Color::WHITE, Rect::new(5.0, 470.0, 590.0, 100.0)),
        ];
        let mut game = Game::new(CardArt::glyphs(), |_| {});
        game.setup(board, players);
        game
    }

    fn click(game: &mut Game, slot: usize) {
        let (x, y) = game.board().unwrap().cell_rect(slot).center();
        game.mouse_down(x, y);
    }

    #[test]
    fn idle_before_setup() {
        assert_eq!(status_text(&Game::new(CardArt::glyphs(), |_| {})), "Paused");
    }

    #[test]
    fn shows_turn_and_pairs() {
        let mut g = game();
        assert_eq!(status_text(&g), "Ada's turn | 0 – 0");

        click(&mut g, 0);
        click(&mut g, 1);
        for _ in 0..80 {
            g.step();
        }
        assert_eq!(g.players()[0].collected(), &[CardId(0), CardId(1)]);
        assert_eq!(status_text(&g), "Ada's turn | 1 – 0");

        click(&mut g, 2);
        click(&mut g, 4);
        for _ in 0..80 {
            g.step();
        }
        assert_eq!(status_text(&g), "Bo's turn | 1 – 0");
    }
}
