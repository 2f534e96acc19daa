//! Lenient argv flag parsing.
//!
//! Classifies a flat token stream into positional arguments, short options
//! and long options following a POSIX-like convention:
//!
//! ```text
//! <value>  arg=<value>
//! -e  -e <value>  -e=<value>  -abc (bundled bools)
//! --long  --long <value>  --long=<value>
//! --  (end of options)
//! ```
//!
//! The parser never fails: malformed input degrades to positional
//! arguments. Classification is driven by two named predicates,
//! [`is_option_value`] and [`is_valid_name`], whose precedence is part of
//! the contract - CLI input is user-controlled free text and heuristics
//! here must stay stable.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use tracing::trace;

use crate::line::LineParser;

const TRUE_WORDS: [&str; 3] = ["on", "yes", "true"];
const FALSE_WORDS: [&str; 3] = ["off", "no", "false"];

/// A single resolved option or named-argument value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Str(String),
}

impl FlagValue {
    /// Coerce boolean words: `on|yes|true` and `off|no|false`
    /// (case-insensitive) become booleans; numeric strings and everything
    /// else pass through unchanged.
    pub fn filter_bool(val: &str) -> FlagValue {
        if is_numeric(val) {
            return FlagValue::Str(val.to_string());
        }

        let lower = val.to_ascii_lowercase();
        if TRUE_WORDS.contains(&lower.as_str()) {
            FlagValue::Bool(true)
        } else if FALSE_WORDS.contains(&lower.as_str()) {
            FlagValue::Bool(false)
        } else {
            FlagValue::Str(val.to_string())
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FlagValue::Bool(b) => Some(*b),
            FlagValue::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FlagValue::Bool(_) => None,
            FlagValue::Str(s) => Some(s),
        }
    }

    /// True for `Bool(true)` only.
    pub fn is_true(&self) -> bool {
        matches!(self, FlagValue::Bool(true))
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Bool(b) => write!(f, "{b}"),
            FlagValue::Str(s) => f.write_str(s),
        }
    }
}

/// An option's collected value: a single value, or the accumulated list
/// for names declared array-valued.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptValue {
    Single(FlagValue),
    Many(Vec<FlagValue>),
}

impl OptValue {
    /// The single value, or the first accumulated one.
    pub fn first(&self) -> Option<&FlagValue> {
        match self {
            OptValue::Single(v) => Some(v),
            OptValue::Many(vs) => vs.first(),
        }
    }

    pub fn is_true(&self) -> bool {
        matches!(self, OptValue::Single(FlagValue::Bool(true)))
    }
}

/// Option name to value map.
pub type OptMap = HashMap<String, OptValue>;

/// Positional arguments: an ordered list of plain values plus a map for
/// tokens given in `name=value` form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Arguments {
    pub positional: Vec<String>,
    pub named: HashMap<String, FlagValue>,
}

impl Arguments {
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}

/// The full classification of one argv.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParsedArgv {
    pub args: Arguments,
    pub short_opts: OptMap,
    pub long_opts: OptMap,
}

impl ParsedArgv {
    /// One combined options map; a long option overrides a short one with
    /// the same name.
    pub fn merged_opts(&self) -> OptMap {
        let mut merged = self.short_opts.clone();
        merged.extend(self.long_opts.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }

    /// Look up an option, preferring the long map.
    pub fn opt(&self, name: &str) -> Option<&OptValue> {
        self.long_opts.get(name).or_else(|| self.short_opts.get(name))
    }

    /// True when the named option resolved to boolean true.
    pub fn opt_is_true(&self, name: &str) -> bool {
        self.opt(name).is_some_and(OptValue::is_true)
    }
}

/// Parse configuration.
#[derive(Debug, Clone, Default)]
pub struct FlagsConfig {
    /// Option names that never consume a following token as their value.
    pub bool_opts: Vec<String>,
    /// Option names whose repeated occurrences accumulate in order.
    pub array_opts: Vec<String>,
}

impl FlagsConfig {
    pub fn with_bool_opts<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bool_opts = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_array_opts<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.array_opts = names.into_iter().map(Into::into).collect();
        self
    }
}

fn valid_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_-]{0,36}$").unwrap())
}

/// True when `name` is a syntactically valid bare identifier: starts with a
/// letter or underscore, the rest alphanumeric/hyphen/underscore, bounded
/// length. Decides whether `name=value` tokens become named arguments.
pub fn is_valid_name(name: &str) -> bool {
    valid_name_re().is_match(name)
}

/// PHP-style numeric check: the token parses as a number.
fn is_numeric(val: &str) -> bool {
    !val.is_empty()
        && val
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        && val.parse::<f64>().is_ok()
}

/// Whether the lookahead token looks like an option *value*:
/// - no next token: no
/// - empty string: yes
/// - no leading `-`: yes, unless it is a `name=value` token with a valid
///   bare name (that is a named argument, not a value)
/// - leading `-`: only bare `-`/`--` count as values
pub fn is_option_value(val: Option<&str>) -> bool {
    let Some(val) = val else {
        return false;
    };

    if val.is_empty() {
        return true;
    }

    if !val.starts_with('-') {
        if !val.contains('=') {
            return true;
        }

        let name = val.split('=').next().unwrap_or("");
        return !is_valid_name(name);
    }

    val.trim_start_matches('-').is_empty()
}

/// Extract the option name from a token, or `None` when the token is not
/// recognizable as an option (no `-` prefix, bare dashes, or a numeric
/// remainder like `-9` which stays positional).
pub fn filter_option_name(token: &str) -> Option<&str> {
    if token.is_empty() || !token.starts_with('-') {
        return None;
    }

    let name = token.trim_start_matches(['-', ' ']);
    if name.is_empty() || is_numeric(name) {
        return None;
    }

    Some(name)
}

/// Store a non-option token: `name=value` with a valid bare name becomes a
/// named argument, anything else appends to the positional list.
fn collect_arg(args: &mut Arguments, token: &str) {
    if let Some((name, value)) = token.split_once('=') {
        if is_valid_name(name) {
            args.named
                .insert(name.to_string(), FlagValue::filter_bool(value));
            return;
        }
    }

    args.positional.push(token.to_string());
}

fn insert_opt(map: &mut OptMap, name: &str, value: FlagValue, is_array: bool) {
    if is_array {
        let entry = map
            .entry(name.to_string())
            .or_insert_with(|| OptValue::Many(Vec::new()));
        if let OptValue::Many(values) = entry {
            values.push(value);
        }
    } else {
        map.insert(name.to_string(), OptValue::Single(value));
    }
}

/// Parse an argv-like token stream (program name already removed).
///
/// Single pass, one token of lookahead. A literal `--` token ends option
/// parsing for good: it is consumed, and every later token is collected as
/// an argument no matter its shape.
pub fn parse_argv<S: AsRef<str>>(tokens: &[S], config: &FlagsConfig) -> ParsedArgv {
    let mut parsed = ParsedArgv::default();
    if tokens.is_empty() {
        return parsed;
    }

    let tokens: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
    let mut opt_parse_end = false;
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i];
        i += 1;

        if opt_parse_end {
            collect_arg(&mut parsed.args, token);
            continue;
        }

        if let Some(trimmed) = filter_option_name(token) {
            let mut value: Option<&str> = None;
            let mut is_long = false;
            let mut option = &token[1..];

            if option.starts_with('-') {
                // long-opt: --<opt> or --<opt>=<value>
                option = trimmed;
                is_long = true;
                if let Some((name, inline)) = option.split_once('=') {
                    option = name;
                    value = Some(inline);
                }
            } else if option.len() > 1 && option.as_bytes()[1] == b'=' {
                // short-opt inline value: -<o>=<value>
                value = Some(&option[2..]);
                option = &option[..1];
            }

            let is_bool_opt = config.bool_opts.iter().any(|n| n == option);
            let next = tokens.get(i).copied();

            if value.is_none() && !is_bool_opt && is_option_value(next) {
                // lookahead consumed as the value; empty strings allowed
                value = next;
                i += 1;
            } else if !is_long && value.is_none() {
                // POSIX-style bundle of boolean short flags: -abc
                trace!(token, "bundling short flags");
                for ch in option.chars() {
                    insert_opt(
                        &mut parsed.short_opts,
                        &ch.to_string(),
                        FlagValue::Bool(true),
                        false,
                    );
                }
                continue;
            }

            let resolved = match value {
                Some(raw) => FlagValue::filter_bool(raw),
                None => FlagValue::Bool(true),
            };
            let is_array = config.array_opts.iter().any(|n| n == option);

            trace!(option, is_long, ?resolved, "classified option");
            if is_long {
                insert_opt(&mut parsed.long_opts, option, resolved, is_array);
            } else {
                insert_opt(&mut parsed.short_opts, option, resolved, is_array);
            }
            continue;
        }

        if token == "--" {
            opt_parse_end = true;
            continue;
        }

        collect_arg(&mut parsed.args, token);
    }

    parsed
}

/// Parse a full command line string: split with [`LineParser`], then
/// classify with [`parse_argv`].
pub fn parse_line(line: &str, config: &FlagsConfig) -> ParsedArgv {
    let tokens = LineParser::parse_line(line);
    parse_argv(&tokens, config)
}

/// Minimal single-pass variant without lookahead or configuration:
/// `-x`/`--x[=v]` land in one options map, `k=v`/plain tokens in the
/// arguments. Values are kept as-is.
pub fn simple_parse<S: AsRef<str>>(tokens: &[S]) -> (Arguments, HashMap<String, FlagValue>) {
    let mut args = Arguments::default();
    let mut opts: HashMap<String, FlagValue> = HashMap::new();

    for token in tokens {
        let token = token.as_ref();

        if token.starts_with('-') {
            let trimmed = token.trim_start_matches('-');
            if trimmed.is_empty() {
                continue;
            }

            match trimmed.find('=') {
                Some(at) if at > 0 => {
                    opts.insert(
                        trimmed[..at].to_string(),
                        FlagValue::Str(trimmed[at + 1..].to_string()),
                    );
                }
                _ => {
                    opts.insert(trimmed.to_string(), FlagValue::Bool(true));
                }
            }
        } else if let Some(at) = token.find('=').filter(|at| *at > 0) {
            args.named.insert(
                token[..at].to_string(),
                FlagValue::Str(token[at + 1..].to_string()),
            );
        } else {
            args.positional.push(token.to_string());
        }
    }

    (args, opts)
}

/// Render option names for help output: `-s, --long`.
pub fn build_opt_help_name(names: &[&str]) -> String {
    names
        .iter()
        .map(|name| {
            if name.len() > 1 {
                format!("--{name}")
            } else {
                format!("-{name}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Quote a token for shell display when it contains unsafe characters.
pub fn escape_token(token: &str) -> String {
    let safe = !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'));

    if safe {
        token.to_string()
    } else {
        format!("'{}'", token.replace('\'', r"'\''"))
    }
}
