use std::path::PathBuf;

use derive_more::{Display, Error};

/// Failures while loading what the game needs before it can start.
#[derive(Debug, Display, Error)]
pub enum Error {
    #[display("Could not read {}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[display("Malformed config {}: {}", path.display(), source)]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[display("Could not decode artwork {}: {}", path.display(), source)]
    Artwork {
        path: PathBuf,
        source: cairo::IoError,
    },
}
