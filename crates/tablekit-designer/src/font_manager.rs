//! System font lookup for the raster preview.
//!
//! The preview only draws short labels (capacity readout, table name),
//! so a single sans-serif face is enough. Hosts without any usable
//! font get previews with text skipped rather than an error.

use std::{fs, sync::OnceLock};

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use rusttype::Font;
use tracing::debug;

fn db() -> &'static Database {
    static DB: OnceLock<Database> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        db
    })
}

/// Best-effort text face for the preview. `None` when the host exposes
/// no loadable font; callers skip text primitives in that case.
pub fn preview_font() -> Option<&'static Font<'static>> {
    static FONT: OnceLock<Option<Font<'static>>> = OnceLock::new();
    FONT.get_or_init(|| {
        let font = [Family::SansSerif, Family::Serif, Family::Monospace]
            .into_iter()
            .find_map(|family| load_font(family));
        if font.is_none() {
            debug!("no system font available, preview text will be skipped");
        }
        font
    })
    .as_ref()
}

fn load_font(family: Family<'static>) -> Option<Font<'static>> {
    let families = [family];
    let query = Query {
        families: &families,
        weight: Weight::NORMAL,
        stretch: Stretch::Normal,
        style: Style::Normal,
    };

    let id = db().query(&query)?;
    let face = db().face(id)?;

    match &face.source {
        fontdb::Source::File(path) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec(bytes)
        }
        fontdb::Source::SharedFile(path, _) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec(bytes)
        }
        fontdb::Source::Binary(bytes) => Font::try_from_vec(bytes.as_ref().as_ref().to_vec()),
    }
}
