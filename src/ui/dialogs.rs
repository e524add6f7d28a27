use gettextrs::gettext;
use libadwaita as adw;

use adw::prelude::*;

pub fn show_instructions_dialog(app: &adw::Application) -> adw::AlertDialog {
    let dialog = adw::AlertDialog::new(
        Some(&gettext("Instructions")),
        Some(&gettext(
            "Take turns turning over two cards.\n\
A matching pair goes to the player who found it, and they play again.\n\
Otherwise the cards turn back and the other player goes.\n\
Whoever holds more pairs once the table is empty wins.",
        )),
    );
    dialog.add_response("ok", &gettext("Got it"));
    dialog.set_default_response(Some("ok"));
    dialog.set_close_response("ok");
    dialog.present(app.active_window().as_ref());
    dialog
}

pub fn show_about_dialog(app: &adw::Application) -> adw::AboutDialog {
    let dialog = adw::AboutDialog::builder()
        .application_name("Pairs")
        .application_icon("io.github.pairs.Pairs")
        .version(env!("CARGO_PKG_VERSION"))
        .comments(gettext("A two-player memory game for finding pairs."))
        .build();
    dialog.present(app.active_window().as_ref());
    dialog
}
