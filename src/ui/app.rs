use std::cell::RefCell;
use std::rc::Rc;

use gettextrs::gettext;
use gio::SimpleAction;
use gtk4 as gtk;
use gtk4::glib;
use gtk4::prelude::*;
use libadwaita as adw;
use tracing::{info, warn};

use adw::prelude::*;

use super::assets::load_card_art;
use super::board::build_table_area;
use super::config::Config;
use super::dialogs::{show_about_dialog, show_instructions_dialog};
use super::hud::{start_ticker, stop_ticker};
use super::scene::start_new_game;
use super::state::AppState;

pub const APP_ID: &str = "io.github.pairs.Pairs";

/// Stops the clock while a dialog covers the table.
fn pause_game_for_overlay(state: &Rc<RefCell<AppState>>) -> bool {
    stop_ticker(&mut state.borrow_mut())
}

fn resume_game_after_overlay(state: &Rc<RefCell<AppState>>, was_running: bool) {
    if was_running {
        start_ticker(state);
    }
}

pub fn run() -> glib::ExitCode {
    glib::set_prgname(Some(APP_ID));
    let app = adw::Application::builder().application_id(APP_ID).build();

    app.connect_activate(move |app| {
        let config = Config::load().unwrap_or_else(|err| {
            warn!(%err, "using default config");
            Config::default()
        });
        let art = load_card_art(config.art_dir.as_deref());
        let state = Rc::new(RefCell::new(AppState::new(config, art)));

        let new_game_action = SimpleAction::new("new-game", None);
        new_game_action.connect_activate({
            let state = state.clone();
            move |_, _| start_new_game(&state)
        });
        app.add_action(&new_game_action);

        let instructions_action = SimpleAction::new("instructions", None);
        instructions_action.connect_activate({
            let app = app.clone();
            let state = state.clone();
            move |_, _| {
                let was_running = pause_game_for_overlay(&state);
                let dialog = show_instructions_dialog(&app);
                let state_resume = state.clone();
                dialog.connect_response(None, move |_, _| {
                    resume_game_after_overlay(&state_resume, was_running);
                });
            }
        });
        app.add_action(&instructions_action);

        let about_action = SimpleAction::new("about", None);
        about_action.connect_activate({
            let app = app.clone();
            let state = state.clone();
            move |_, _| {
                let was_running = pause_game_for_overlay(&state);
                let dialog = show_about_dialog(&app);
                let state_resume = state.clone();
                dialog.connect_closed(move |_| {
                    resume_game_after_overlay(&state_resume, was_running);
                });
            }
        });
        app.add_action(&about_action);

        let quit_action = SimpleAction::new("quit", None);
        quit_action.connect_activate({
            let app = app.clone();
            let state = state.clone();
            move |_, _| {
                {
                    let mut st = state.borrow_mut();
                    stop_ticker(&mut st);
                    st.game.quit();
                }
                app.quit();
            }
        });
        app.add_action(&quit_action);

        app.set_accels_for_action("app.new-game", &["<Primary>n"]);
        app.set_accels_for_action("app.quit", &["<Primary>q"]);

        let title_game_box = gtk::Box::new(gtk::Orientation::Vertical, 0);
        title_game_box.set_valign(gtk::Align::Center);
        title_game_box.set_halign(gtk::Align::Center);

        let title_game_main = gtk::Label::builder()
            .label("Pairs")
            .halign(gtk::Align::Center)
            .css_classes(vec!["heading"])
            .build();

        let title_game_subtitle = gtk::Label::builder()
            .label("")
            .halign(gtk::Align::Center)
            .css_classes(vec!["caption", "dim-label"])
            .build();

        title_game_box.append(&title_game_main);
        title_game_box.append(&title_game_subtitle);

        let header = adw::HeaderBar::builder()
            .title_widget(&title_game_box)
            .build();

        let menu_model = gio::Menu::new();
        menu_model.append(Some(&gettext("New Game")), Some("app.new-game"));
        menu_model.append(Some(&gettext("Instructions")), Some("app.instructions"));
        menu_model.append(Some(&gettext("About Pairs")), Some("app.about"));
        menu_model.append(Some(&gettext("Quit")), Some("app.quit"));
        let menu_button = gtk::MenuButton::builder()
            .icon_name("open-menu-symbolic")
            .menu_model(&menu_model)
            .build();

        let restart_button = gtk::Button::builder()
            .label(gettext("Play Again"))
            .css_classes(vec!["suggested-action"])
            .visible(false)
            .build();
        restart_button.connect_clicked({
            let state = state.clone();
            move |_| start_new_game(&state)
        });
        let end_box = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        end_box.append(&restart_button);
        end_box.append(&menu_button);
        header.pack_end(&end_box);

        let table = build_table_area(&state);

        let toolbar = adw::ToolbarView::new();
        toolbar.add_top_bar(&header);
        toolbar.set_content(Some(&table));

        let (width, height) = {
            let surface = state.borrow().config.surface;
            (surface.w as i32, surface.h as i32)
        };
        let win = adw::ApplicationWindow::builder()
            .application(app)
            .title("Pairs")
            .default_width(width + 24)
            .default_height(height + 72)
            .content(&toolbar)
            .build();
        win.set_size_request(320, 340);

        {
            let mut st = state.borrow_mut();
            st.restart_button = Some(restart_button);
            st.title_game_subtitle = Some(title_game_subtitle);
            st.drawing_area = Some(table);
        }

        win.connect_close_request({
            let state = state.clone();
            move |_| {
                let mut st = state.borrow_mut();
                stop_ticker(&mut st);
                st.game.quit();
                info!("window closed");
                glib::Propagation::Proceed
            }
        });

        start_new_game(&state);
        win.present();
    });

    app.run()
}
