//! Terminal color capability detection.
//!
//! Environment signals win over the tty check: `NO_COLOR` disables,
//! `FORCE_COLOR`/`COLORTERM` enable, and on Windows the usual
//! ANSICON/ConEmu/TERM heuristics apply.

use std::env;

/// Whether stdout can be expected to understand ANSI color sequences.
pub fn supports_color() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if let Ok(force) = env::var("FORCE_COLOR") {
        if !force.is_empty() && force != "0" {
            return true;
        }
    }

    if cfg!(windows) {
        return env::var_os("ANSICON").is_some()
            || env::var("ConEmuANSI").is_ok_and(|v| v == "ON")
            || env::var("TERM").is_ok_and(|v| v == "xterm");
    }

    if env::var("COLORTERM").is_ok_and(|v| !v.is_empty()) {
        return true;
    }

    if env::var("TERM").is_ok_and(|v| v == "dumb") {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Whether the terminal advertises 256-color support.
pub fn supports_256color() -> bool {
    env::var("TERM").is_ok_and(|v| v.contains("256color"))
}
