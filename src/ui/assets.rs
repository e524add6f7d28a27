use std::fs::File;
use std::path::Path;

use tracing::{info, instrument, warn};

use crate::Error;
use crate::game::{Artwork, CardArt, PAIR_COUNT};

pub const BACK_FILE_NAME: &str = "back.png";

pub fn face_file_name(value: u8) -> String {
    format!("c{value}.png")
}

/// Image artwork from `dir` when set and complete, glyphs otherwise.
pub fn load_card_art(dir: Option<&Path>) -> CardArt {
    let Some(dir) = dir else {
        return CardArt::glyphs();
    };
    match load_image_art(dir) {
        Ok(art) => art,
        Err(err) => {
            warn!(%err, "falling back to glyph artwork");
            CardArt::glyphs()
        }
    }
}

#[instrument]
pub fn load_image_art(dir: &Path) -> Result<CardArt, Error> {
    let faces = (1..=PAIR_COUNT)
        .map(|value| load_png(&dir.join(face_file_name(value))))
        .collect::<Result<Vec<_>, _>>()?;
    let back = load_png(&dir.join(BACK_FILE_NAME))?;
    info!(faces = faces.len(), "card artwork loaded");
    Ok(CardArt::new(faces, back))
}

fn load_png(path: &Path) -> Result<Artwork, Error> {
    let mut file = File::open(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let surface = cairo::ImageSurface::create_from_png(&mut file).map_err(|source| {
        Error::Artwork {
            path: path.to_path_buf(),
            source,
        }
    })?;
    Ok(Artwork::Image(surface))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pairs-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_png(path: &Path) {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 6, 9).unwrap();
        let mut file = File::create(path).unwrap();
        surface.write_to_png(&mut file).unwrap();
    }

    #[test]
    fn loads_a_complete_set() {
        let dir = scratch_dir("complete");
        for value in 1..=PAIR_COUNT {
            write_png(&dir.join(face_file_name(value)));
        }
        write_png(&dir.join(BACK_FILE_NAME));

        let art = load_image_art(&dir).unwrap();
        assert_eq!(art.face_count(), PAIR_COUNT as usize);
        assert!(matches!(art.back(), Artwork::Image(_)));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_face_names_the_file() {
        let dir = scratch_dir("partial");
        write_png(&dir.join(face_file_name(1)));

        let err = load_image_art(&dir).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert!(err.to_string().contains("c2.png"));
        assert!(matches!(load_card_art(Some(&dir)).back(), Artwork::Glyph(_)));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn garbage_png_is_an_artwork_error() {
        let dir = scratch_dir("garbage");
        for value in 1..=PAIR_COUNT {
            fs::write(dir.join(face_file_name(value)), b"not a png").unwrap();
        }
        let err = load_image_art(&dir).unwrap_err();
        assert!(matches!(err, Error::Artwork { .. }));
        let _ = fs::remove_dir_all(&dir);
    }
}
