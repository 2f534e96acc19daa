//! Symbolic color spec to ANSI SGR parameter translation.
//!
//! A [`ColorCode`] is built either from explicit parts or from the
//! semicolon-delimited spec grammar, e.g. `fg=white;bg=black;options=bold,underscore;extra=1`,
//! and renders to the numeric SGR parameter list (`"37;40;1;4"`).

use std::fmt;

use super::error::ColorError;

/// Foreground base value.
pub const FG_BASE: u8 = 30;
/// Background base value.
pub const BG_BASE: u8 = 40;
/// Extra (bright) foreground base value.
pub const FG_EXTRA: u8 = 90;
/// Extra (bright) background base value.
pub const BG_EXTRA: u8 = 100;

/// Base color name to code offset.
const KNOWN_COLORS: &[(&str, u8)] = &[
    ("black", 0),
    ("red", 1),
    ("green", 2),
    ("yellow", 3),
    ("blue", 4),
    ("magenta", 5),
    ("cyan", 6),
    ("white", 7),
    ("normal", 9),
];

/// Style option name to SGR code. Canonical names first; the modern
/// spellings `faint` and `underline` are accepted as aliases.
const KNOWN_OPTIONS: &[(&str, u8)] = &[
    ("bold", 1),
    ("fuzzy", 2),
    ("italic", 3),
    ("underscore", 4),
    ("blink", 5),
    ("reverse", 7),
    ("concealed", 8),
];

fn color_offset(name: &str) -> Option<u8> {
    KNOWN_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, c)| *c)
}

fn option_code(name: &str) -> Option<u8> {
    match name {
        "faint" => Some(2),
        "underline" => Some(4),
        _ => KNOWN_OPTIONS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, c)| *c),
    }
}

fn valid_color_names() -> String {
    KNOWN_COLORS
        .iter()
        .map(|(n, _)| *n)
        .collect::<Vec<_>>()
        .join(", ")
}

fn valid_option_names() -> String {
    KNOWN_OPTIONS
        .iter()
        .map(|(n, _)| *n)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A resolved terminal text style as SGR parameters.
///
/// `fg`/`bg` of 0 mean "not set"; options keep their declared order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorCode {
    fg: u8,
    bg: u8,
    options: Vec<u8>,
}

impl ColorCode {
    /// Build from explicit parts. Empty `fg`/`bg` leave that side unset.
    /// `extra` selects the bright (90/100-based) variants for both sides.
    pub fn new(fg: &str, bg: &str, options: &[&str], extra: bool) -> Result<Self, ColorError> {
        let mut code = Self::default();

        if !fg.is_empty() {
            let offset = color_offset(fg).ok_or_else(|| ColorError::InvalidColor {
                name: fg.to_string(),
                valid: valid_color_names(),
            })?;
            code.fg = if extra { FG_EXTRA } else { FG_BASE } + offset;
        }

        if !bg.is_empty() {
            let offset = color_offset(bg).ok_or_else(|| ColorError::InvalidColor {
                name: bg.to_string(),
                valid: valid_color_names(),
            })?;
            code.bg = if extra { BG_EXTRA } else { BG_BASE } + offset;
        }

        for option in options {
            let sgr = option_code(option).ok_or_else(|| ColorError::InvalidOption {
                name: option.to_string(),
                valid: valid_option_names(),
            })?;
            code.options.push(sgr);
        }

        Ok(code)
    }

    /// Parse the spec grammar, e.g. `fg=white;bg=black;options=bold,underscore;extra=1`.
    ///
    /// Spaces are ignored. Clauses without a `=` are skipped. An unknown key
    /// is fatal; unknown color or option names are fatal and name the
    /// offending value along with the valid set.
    pub fn from_spec(spec: &str) -> Result<Self, ColorError> {
        let compact = spec.replace(' ', "");

        let mut fg = String::new();
        let mut bg = String::new();
        let mut options: Vec<String> = Vec::new();
        let mut extra = false;

        for part in compact.split(';') {
            let Some((key, value)) = part.split_once('=') else {
                continue;
            };

            match key {
                "fg" => fg = value.to_string(),
                "bg" => bg = value.to_string(),
                "extra" => extra = !matches!(value, "" | "0"),
                "options" => options = value.split(',').map(str::to_string).collect(),
                _ => {
                    return Err(ColorError::InvalidSpecKey {
                        key: key.to_string(),
                    })
                }
            }
        }

        let option_refs: Vec<&str> = options.iter().map(String::as_str).collect();
        Self::new(&fg, &bg, &option_refs, extra)
    }

    /// The SGR parameter list: fg, then bg, then options, joined by `;`.
    /// Empty when nothing is set (no styling applied).
    pub fn to_style(&self) -> String {
        let mut values: Vec<String> = Vec::new();

        if self.fg != 0 {
            values.push(self.fg.to_string());
        }
        if self.bg != 0 {
            values.push(self.bg.to_string());
        }
        for option in &self.options {
            values.push(option.to_string());
        }

        values.join(";")
    }

    /// Known base color names.
    pub fn known_colors() -> Vec<&'static str> {
        KNOWN_COLORS.iter().map(|(n, _)| *n).collect()
    }

    /// Known style option names (canonical spellings).
    pub fn known_options() -> Vec<&'static str> {
        KNOWN_OPTIONS.iter().map(|(n, _)| *n).collect()
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_style())
    }
}
