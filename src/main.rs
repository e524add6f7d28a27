use gettextrs::{LocaleCategory, bind_textdomain_codeset, bindtextdomain, setlocale, textdomain};
use gtk4::glib;
use tracing::warn;
use tracing_subscriber::EnvFilter;

const GETTEXT_PACKAGE: &str = "pairs";
const LOCALEDIR: &str = "/usr/share/locale";

fn main() -> glib::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pairs=info")),
        )
        .init();

    setlocale(LocaleCategory::LcAll, "");
    if let Err(err) = bindtextdomain(GETTEXT_PACKAGE, LOCALEDIR) {
        warn!(%err, "could not bind text domain");
    }
    if let Err(err) = bind_textdomain_codeset(GETTEXT_PACKAGE, "UTF-8") {
        warn!(%err, "could not set text domain codeset");
    }
    if let Err(err) = textdomain(GETTEXT_PACKAGE) {
        warn!(%err, "could not select text domain");
    }

    pairs::ui::app::run()
}
