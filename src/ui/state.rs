use gtk4 as gtk;
use gtk4::glib;

use crate::game::{CardArt, Game};

use super::config::Config;

pub struct AppState {
    pub restart_button: Option<gtk::Button>,
    pub title_game_subtitle: Option<gtk::Label>,
    pub drawing_area: Option<gtk::DrawingArea>,

    pub config: Config,
    pub art: CardArt,
    pub game: Game,
    pub tick_handle: Option<glib::SourceId>,
}

impl AppState {
    /// Holds an idle game until a session is started.
    pub fn new(config: Config, art: CardArt) -> Self {
        let game = Game::new(art.clone(), |_| {}).with_table_color(config.table_color);
        AppState {
            restart_button: None,
            title_game_subtitle: None,
            drawing_area: None,
            config,
            art,
            game,
            tick_handle: None,
        }
    }
}
