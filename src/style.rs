//! User-defined style sheets layered over the default style table.
//!
//! A [`StyleSheet`] lets an application register its own tag names (or
//! shadow the built-in ones) without touching the process-wide table.

use std::collections::HashMap;

use crate::color::{self, tag, ColorCode, ColorError};

/// A named style registry used for tag formatting.
///
/// Resolution order in [`format`](Self::format): own styles, then the
/// default table, then the inline spec grammar.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    styles: HashMap<String, String>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a style under `name` with a raw SGR parameter list.
    pub fn add(&mut self, name: &str, code: impl Into<String>) -> &mut Self {
        self.styles.insert(name.to_string(), code.into());
        self
    }

    /// Register a style from a [`ColorCode`].
    pub fn add_code(&mut self, name: &str, code: &ColorCode) -> &mut Self {
        self.add(name, code.to_style())
    }

    /// True when `name` was registered on this sheet (the default table is
    /// not consulted).
    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Resolve tags in `text` against this sheet, honoring the global
    /// render gate.
    pub fn format(&self, text: &str) -> Result<String, ColorError> {
        self.format_with(text, color::ColorConfig::global().should_render())
    }

    /// Like [`format`](Self::format) with the render decision supplied by
    /// the caller.
    pub fn format_with(&self, text: &str, enabled: bool) -> Result<String, ColorError> {
        if text.is_empty() || !text.contains("</") {
            return Ok(text.to_string());
        }

        if !enabled {
            return Ok(tag::strip(text));
        }

        let matches = tag::match_all(text);
        if matches.is_empty() {
            return Ok(text.to_string());
        }

        let mut out = text.to_string();
        for m in &matches {
            if let Some(code) = self.styles.get(&m.name) {
                out = tag::replace_color(&out, &m.name, &m.body, code);
            } else if let Some(code) = color::style_code(&m.name) {
                out = tag::replace_color(&out, &m.name, &m.body, code);
            } else if m.name.find('=').is_some_and(|at| at > 0) {
                let code = ColorCode::from_spec(&m.name)?.to_style();
                out = tag::replace_color(&out, &m.name, &m.body, &code);
            }
        }

        Ok(out)
    }

    /// Strip tag markup instead of resolving it.
    pub fn strip(&self, text: &str) -> String {
        tag::strip(text)
    }

    /// Registered style names on this sheet.
    pub fn names(&self) -> Vec<&str> {
        self.styles.keys().map(String::as_str).collect()
    }
}
