//! ANSI color rendering.
//!
//! Centralizes the named style table, the render gate deciding whether any
//! escape codes are emitted at all, and helpers for applying or clearing
//! styles. Tag markup lives in [`tag`], the spec grammar in [`code`].

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

pub mod code;
pub mod error;
pub mod support;
pub mod tag;

pub use code::ColorCode;
pub use error::ColorError;

/// ANSI escape sequence prefix.
pub const ESC_PREFIX: &str = "\x1b[";

/// Reset sequence terminating every rendered span.
pub const COLOR_TPL_RESET: &str = "\x1b[0m";

/// Default style table: name -> SGR parameter list.
///
/// The alert styles reuse the basic palette; the `light_*`/`*_ex` families
/// cover the bright variants. Codes are fixed for drop-in compatibility.
pub const STYLES: &[(&str, &str)] = &[
    // basic
    ("normal", "39"),
    ("red", "0;31"),
    ("blue", "0;34"),
    ("cyan", "0;36"),
    ("black", "0;30"),
    ("green", "0;32"),
    ("brown", "0;33"),
    ("white", "1;37"),
    ("yellow0", "0;33"),
    ("yellow", "1;33"),
    ("magenta0", "0;35"),
    ("mga", "1;35"),
    ("magenta", "1;35"),
    // alert
    ("suc", "1;32"),
    ("success", "1;32"),
    ("info", "0;32"),
    ("comment", "0;33"),
    ("note", "36;1"),
    ("notice", "36;4"),
    ("warn", "0;30;43"),
    ("warning", "0;30;43"),
    ("danger", "0;31"),
    ("err", "97;41"),
    ("error", "97;41"),
    // more
    ("light_red", "1;31"),
    ("light_green", "1;32"),
    ("light_blue", "1;34"),
    ("light_cyan", "1;36"),
    ("light_gray", "37"),
    ("dark_gray", "90"),
    ("light_yellow", "93"),
    ("light_magenta", "95"),
    // extra (bright base)
    ("light_red_ex", "91"),
    ("light_green_ex", "92"),
    ("light_blue_ex", "94"),
    ("light_cyan_ex", "96"),
    ("white_ex", "97"),
    // options
    ("b", "0;1"),
    ("bold", "0;1"),
    ("fuzzy", "2"),
    ("italic", "0;3"),
    ("underscore", "4"),
    ("blink", "5"),
    ("reverse", "7"),
    ("concealed", "8"),
];

/// Look up the SGR parameter list for a named style.
pub fn style_code(name: &str) -> Option<&'static str> {
    STYLES.iter().find(|(n, _)| *n == name).map(|(_, c)| *c)
}

/// True when `name` is in the default style table.
pub fn has_style(name: &str) -> bool {
    style_code(name).is_some()
}

/// All primary style names (the snake_case aliases are filtered out).
pub fn style_names() -> Vec<&'static str> {
    STYLES
        .iter()
        .map(|(n, _)| *n)
        .filter(|n| !n[1..].contains('_'))
        .collect()
}

const NO_COLOR_BIT: u8 = 0b01;
const FORCE_COLOR_BIT: u8 = 0b10;

/// Render configuration: the two process-wide toggles deciding whether ANSI
/// codes are emitted.
///
/// Both flags live in one atomic byte so [`reset`](Self::reset) clears them
/// together in a single store. A process-wide default instance is available
/// via [`ColorConfig::global`]; tests can construct their own.
#[derive(Debug, Default)]
pub struct ColorConfig {
    bits: AtomicU8,
}

impl ColorConfig {
    pub const fn new() -> Self {
        Self {
            bits: AtomicU8::new(0),
        }
    }

    /// The process-wide default instance.
    pub fn global() -> &'static ColorConfig {
        static GLOBAL: ColorConfig = ColorConfig::new();
        &GLOBAL
    }

    pub fn no_color(&self) -> bool {
        self.bits.load(Ordering::Relaxed) & NO_COLOR_BIT != 0
    }

    pub fn set_no_color(&self, on: bool) {
        self.set_bit(NO_COLOR_BIT, on);
    }

    pub fn force_color(&self) -> bool {
        self.bits.load(Ordering::Relaxed) & FORCE_COLOR_BIT != 0
    }

    pub fn set_force_color(&self, on: bool) {
        self.set_bit(FORCE_COLOR_BIT, on);
    }

    /// Clear both toggles in one atomic store.
    pub fn reset(&self) {
        self.bits.store(0, Ordering::Relaxed);
    }

    /// Whether color should be rendered: force wins, then no-color, then
    /// the detected terminal capability.
    pub fn should_render(&self) -> bool {
        self.should_render_with(support::supports_color())
    }

    /// Pure variant of [`should_render`](Self::should_render) with the
    /// capability decision supplied by the caller.
    pub fn should_render_with(&self, detected: bool) -> bool {
        let bits = self.bits.load(Ordering::Relaxed);
        if bits & FORCE_COLOR_BIT != 0 {
            return true;
        }
        if bits & NO_COLOR_BIT != 0 {
            return false;
        }
        detected
    }

    fn set_bit(&self, bit: u8, on: bool) {
        if on {
            self.bits.fetch_or(bit, Ordering::Relaxed);
        } else {
            self.bits.fetch_and(!bit, Ordering::Relaxed);
        }
    }
}

/// A style selector for [`render`]: a named table entry or a raw SGR code
/// list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle<'a> {
    Named(&'a str),
    Codes(&'a [u8]),
}

/// Render text, applying a color style, honoring the global gate.
///
/// With no style and tag markup present the text is delegated to the tag
/// parser. An unknown style name falls back to the reset code `0`.
pub fn render(text: &str, style: Option<RenderStyle<'_>>) -> Result<String, ColorError> {
    render_with(text, style, ColorConfig::global().should_render())
}

/// Like [`render`], but with the render decision supplied by the caller.
pub fn render_with(
    text: &str,
    style: Option<RenderStyle<'_>>,
    enabled: bool,
) -> Result<String, ColorError> {
    if text.is_empty() {
        return Ok(String::new());
    }

    if !enabled {
        debug!("color rendering disabled, emitting plain text");
        return Ok(clear_color(text, true));
    }

    let color = match style {
        Some(RenderStyle::Named(name)) => style_code(name).unwrap_or("0").to_string(),
        Some(RenderStyle::Codes(codes)) => codes
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(";"),
        None if text.contains("</") => return tag::parse_with(text, false, true),
        None => return Ok(text.to_string()),
    };

    if color.is_empty() {
        return Ok(text.to_string());
    }

    Ok(format!("{ESC_PREFIX}{color}m{text}{COLOR_TPL_RESET}"))
}

/// Apply a named style to text. Explicit entry point for "call the style
/// name as a method" shorthand.
pub fn render_named(style: &str, text: &str) -> Result<String, ColorError> {
    render(text, Some(RenderStyle::Named(style)))
}

fn ansi_code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").unwrap())
}

/// Remove ANSI escape sequences; optionally strip tag markup first.
pub fn clear_color(text: &str, strip_tags: bool) -> String {
    let text = if strip_tags {
        tag::strip(text)
    } else {
        text.to_string()
    };

    ansi_code_re().replace_all(&text, "").into_owned()
}
