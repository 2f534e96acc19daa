//! `<name>...</name>` color tag markup engine.
//!
//! A tag is recognized when the open and close names are textually
//! identical. Matching is non-greedy: each open tag binds to the first
//! later `</name>`, so the same tag name reused across disjoint spans never
//! cross-binds. Pair matching is a single-pass scanner rather than a
//! back-reference regex; stripping needs no pairing and uses a plain
//! pattern.

use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use super::code::ColorCode;
use super::error::ColorError;
use super::{style_code, COLOR_TPL_RESET, ESC_PREFIX};

/// Pattern removing any tag-shaped substring, paired or not.
fn strip_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"</?[a-zA-Z0-9=;_]+>").unwrap())
}

/// One matched tag span inside a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
    /// Tag name (may be a style name or inline spec grammar).
    pub name: String,
    /// Content between the open and close tags.
    pub body: String,
    /// Byte offset of `<name>`.
    pub start: usize,
    /// Byte offset just past `</name>`.
    pub end: usize,
}

fn is_tag_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'=' | b';' | b'_')
}

/// Find all `<name>body</name>` spans, left to right, non-overlapping.
///
/// Each open tag binds to the first matching close tag after it; an open
/// tag with no close is skipped and scanning resumes right after it.
pub fn match_all(text: &str) -> Vec<TagMatch> {
    let bytes = text.as_bytes();
    let mut matches = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let Some(rel) = text[pos..].find('<') else {
            break;
        };
        let open_at = pos + rel;

        // Scan the tag name; names are pure ASCII.
        let mut name_end = open_at + 1;
        while name_end < bytes.len() && is_tag_char(bytes[name_end]) {
            name_end += 1;
        }

        if name_end == open_at + 1 || name_end >= bytes.len() || bytes[name_end] != b'>' {
            pos = open_at + 1;
            continue;
        }

        let name = &text[open_at + 1..name_end];
        let body_start = name_end + 1;
        let close = format!("</{name}>");

        match text[body_start..].find(&close) {
            Some(body_len) => {
                let end = body_start + body_len + close.len();
                matches.push(TagMatch {
                    name: name.to_string(),
                    body: text[body_start..body_start + body_len].to_string(),
                    start: open_at,
                    end,
                });
                pos = end;
            }
            None => {
                // Unpaired open tag; leave it and keep scanning.
                pos = body_start;
            }
        }
    }

    matches
}

/// True iff the text contains the literal `</` close-tag marker.
pub fn exists(text: &str) -> bool {
    text.contains("</")
}

/// Wrap text in a color tag: `<tag>text</tag>`.
///
/// Empty text or an empty tag returns the text unchanged.
pub fn wrap(text: &str, tag: &str) -> String {
    if text.is_empty() || tag.is_empty() {
        return text.to_string();
    }

    format!("<{tag}>{text}</{tag}>")
}

/// Alias of [`wrap`].
pub fn add(text: &str, tag: &str) -> String {
    wrap(text, tag)
}

/// Parse color tags and replace them with ANSI sequences, consulting the
/// process-wide render gate. When rendering is disabled the tags are
/// stripped instead.
pub fn parse(text: &str, recursive: bool) -> Result<String, ColorError> {
    parse_with(text, recursive, super::ColorConfig::global().should_render())
}

/// Like [`parse`], but with the render decision supplied by the caller.
pub fn parse_with(text: &str, recursive: bool, enabled: bool) -> Result<String, ColorError> {
    if text.is_empty() || !text.contains("</") {
        return Ok(text.to_string());
    }

    if !enabled {
        trace!("color rendering disabled, stripping tags");
        return Ok(strip(text));
    }

    replace_tags(text, recursive)
}

/// Resolve the color code for a tag name: known style name first, then the
/// inline spec grammar when the name contains `=` past its first character.
/// Returns an empty code when the name resolves to neither.
fn resolve_code(name: &str) -> Result<String, ColorError> {
    if let Some(code) = style_code(name) {
        return Ok(code.to_string());
    }

    if name.find('=').is_some_and(|at| at > 0) {
        return Ok(ColorCode::from_spec(name)?.to_style());
    }

    Ok(String::new())
}

/// Replace each matched tag span with its ANSI-wrapped body. Unresolvable
/// tags keep their literal text. In recursive mode nested tags inside a
/// body are resolved first, so inner spans carry their own reset sequence.
pub fn replace_tags(text: &str, recursive: bool) -> Result<String, ColorError> {
    let matches = match_all(text);
    if matches.is_empty() {
        return Ok(text.to_string());
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for m in matches {
        out.push_str(&text[last..m.start]);
        last = m.end;

        let code = resolve_code(&m.name)?;

        let body = if recursive && m.body.contains("</") {
            replace_tags(&m.body, recursive)?
        } else {
            m.body
        };

        if code.is_empty() {
            // Unknown tag: keep the raw span.
            out.push_str(&text[m.start..m.end]);
        } else {
            out.push_str(&format!("{ESC_PREFIX}{code}m{body}{COLOR_TPL_RESET}"));
        }
    }

    out.push_str(&text[last..]);
    Ok(out)
}

/// Replace one wrapped span `<tag>body</tag>` with its ANSI form.
pub fn replace_color(text: &str, tag: &str, body: &str, code: &str) -> String {
    let target = format!("<{tag}>{body}</{tag}>");
    let replacement = format!("{ESC_PREFIX}{code}m{body}{COLOR_TPL_RESET}");
    text.replace(&target, &replacement)
}

/// Strip color tag markers without attempting to match pairs.
///
/// Returns the input unchanged when it contains no `</`; otherwise every
/// tag-shaped substring is removed, even unpaired ones. Idempotent.
pub fn strip(text: &str) -> String {
    if !text.contains("</") {
        return text.to_string();
    }

    strip_tag_re().replace_all(text, "").into_owned()
}

/// Alias of [`strip`].
pub fn clear(text: &str) -> String {
    strip(text)
}
