//! CSS font shorthand handling and system font lookup.
//!
//! Shapes store fonts as CSS shorthand strings (`"italic bold 12px/1 serif"`).
//! Resizing only touches the pixel size; rasterisation needs the family and
//! style, resolved to a `rusttype` font through a shared `fontdb` database.

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use rusttype::Font;
use std::{
    collections::HashMap,
    fs,
    sync::{Mutex, OnceLock},
};
use tracing::{debug, warn};

/// Pixel size assumed when a font string carries none.
pub const FALLBACK_FONT_SIZE: f64 = 12.0;

/// Parsed form of a CSS font shorthand.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub size: f64,
    pub family: String,
    pub bold: bool,
    pub italic: bool,
}

impl FontSpec {
    pub fn parse(font: &str) -> Self {
        let mut spec = FontSpec {
            size: FALLBACK_FONT_SIZE,
            family: String::new(),
            bold: false,
            italic: false,
        };
        let tokens: Vec<&str> = font.split_whitespace().collect();
        let Some(size_at) = tokens.iter().position(|t| size_token(t).is_some()) else {
            spec.family = font.trim().to_string();
            return spec;
        };
        for token in &tokens[..size_at] {
            match *token {
                "italic" | "oblique" => spec.italic = true,
                "bold" | "bolder" => spec.bold = true,
                other => {
                    if other.parse::<u16>().is_ok_and(|w| w >= 600) {
                        spec.bold = true;
                    }
                }
            }
        }
        if let Some(size) = size_token(tokens[size_at]) {
            spec.size = size;
        }
        spec.family = tokens[size_at + 1..].join(" ");
        spec
    }

    /// First family of the comma-separated list, unquoted.
    pub fn primary_family(&self) -> &str {
        self.family
            .split(',')
            .next()
            .unwrap_or("")
            .trim()
            .trim_matches(|c| c == '"' || c == '\'')
    }
}

/// Pixel size from a token like `12px` or `10.5px/1`.
fn size_token(token: &str) -> Option<f64> {
    let size = token.split('/').next()?.strip_suffix("px")?;
    let value = size.parse::<f64>().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Pixel size of `font`, or [`FALLBACK_FONT_SIZE`] when none is given.
pub fn font_size_px(font: &str) -> f64 {
    FontSpec::parse(font).size
}

/// Returns `font` with its pixel size replaced by `size`, keeping style,
/// line height and family. A font without a pixel size gets one prepended.
pub fn with_font_size(font: &str, size: f64) -> String {
    let mut replaced = false;
    let tokens: Vec<String> = font
        .split_whitespace()
        .map(|token| {
            if replaced || size_token(token).is_none() {
                return token.to_string();
            }
            replaced = true;
            match token.split_once('/') {
                Some((_, line_height)) => format!("{}px/{}", size, line_height),
                None => format!("{}px", size),
            }
        })
        .collect();
    if replaced {
        tokens.join(" ")
    } else if font.trim().is_empty() {
        format!("{}px sans-serif", size)
    } else {
        format!("{}px {}", size, font.trim())
    }
}

#[derive(Clone, Eq, PartialEq, Hash)]
struct FontKey {
    family: String,
    bold: bool,
    italic: bool,
}

fn db() -> &'static Database {
    static DB: OnceLock<Database> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        debug!("Loaded {} system font faces", db.len());
        db
    })
}

/// Resolves `spec` to a system font, caching hits and misses per family/style.
pub fn font_for(spec: &FontSpec) -> Option<&'static Font<'static>> {
    static CACHE: OnceLock<Mutex<HashMap<FontKey, Option<&'static Font<'static>>>>> =
        OnceLock::new();
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));

    let key = FontKey {
        family: spec.primary_family().to_string(),
        bold: spec.bold,
        italic: spec.italic,
    };

    if let Some(font) = cache.lock().unwrap_or_else(|p| p.into_inner()).get(&key) {
        return *font;
    }

    let loaded = load_font_from_system(&key.family, key.bold, key.italic)
        .or_else(|| load_font_from_system("sans-serif", key.bold, key.italic))
        .map(|font| &*Box::leak(Box::new(font)));
    if loaded.is_none() {
        warn!("No usable system font for family '{}'", key.family);
    }

    cache
        .lock()
        .unwrap_or_else(|p| p.into_inner())
        .insert(key, loaded);
    loaded
}

fn load_font_from_system(family: &str, bold: bool, italic: bool) -> Option<Font<'static>> {
    let families: Vec<Family<'_>> = match family.trim() {
        "" | "sans-serif" | "system-ui" => vec![Family::SansSerif],
        "serif" => vec![Family::Serif],
        "monospace" => vec![Family::Monospace],
        "cursive" => vec![Family::Cursive],
        "fantasy" => vec![Family::Fantasy],
        other => vec![Family::Name(other), Family::SansSerif],
    };

    let query = Query {
        families: &families,
        weight: if bold { Weight::BOLD } else { Weight::NORMAL },
        stretch: Stretch::Normal,
        style: if italic { Style::Italic } else { Style::Normal },
    };

    let id = db().query(&query)?;
    let face = db().face(id)?;

    let font = match &face.source {
        fontdb::Source::File(path) | fontdb::Source::SharedFile(path, _) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec_and_index(bytes, face.index)
        }
        fontdb::Source::Binary(bytes) => {
            Font::try_from_vec_and_index(bytes.as_ref().as_ref().to_vec(), face.index)
        }
    };
    if font.is_none() {
        debug!("Font face {:?} could not be parsed", face.post_script_name);
    }
    font
}
