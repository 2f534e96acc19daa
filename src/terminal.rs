//! Terminal cursor and screen control sequences.
//!
//! Pure sequence builders: every operation renders to its ANSI byte string
//! and writing it to a stream is left to the caller.

use std::fmt;

use terminal_size::{terminal_size, Height, Width};

/// ANSI control sequence prefix (CSI).
pub const BEGIN_CHAR: &str = "\x1b[";

/// Reset sequence for any ANSI format.
pub const END_CHAR: &str = "\x1b[0m";

/// Build an ANSI sequence: `ESC [ <params> <terminator>`.
///
/// `build("0", "m")` is the reset sequence, `build("s", "")` saves the
/// cursor position.
pub fn build(params: &str, terminator: &str) -> String {
    format!("{BEGIN_CHAR}{params}{terminator}")
}

/// Cursor control operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Hide the cursor; bring it back with [`Cursor::Show`].
    Hide,
    Show,
    /// Save the current position for [`Cursor::RestorePosition`].
    SavePosition,
    RestorePosition,
    /// Move to the top-left corner.
    ToTop,
    Up(u16),
    Down(u16),
    Forward(u16),
    Backward(u16),
    /// Beginning of the line N rows up.
    ToPrevLineStart(u16),
    /// Beginning of the line N rows down.
    ToNextLineStart(u16),
    /// Move to a column in the current row (1-based).
    ToColumn(u16),
    /// Absolute position; without a row the cursor moves only within the
    /// current line. Both coordinates are 1-based.
    Coordinate { col: u16, row: Option<u16> },
}

impl Cursor {
    /// The parameter part of the sequence, without the CSI prefix.
    pub fn code(&self) -> String {
        match self {
            Cursor::Hide => "?25l".to_string(),
            Cursor::Show => "?25h".to_string(),
            Cursor::SavePosition => "s".to_string(),
            Cursor::RestorePosition => "u".to_string(),
            Cursor::ToTop => "H".to_string(),
            Cursor::Up(n) => format!("{n}A"),
            Cursor::Down(n) => format!("{n}B"),
            Cursor::Forward(n) => format!("{n}C"),
            Cursor::Backward(n) => format!("{n}D"),
            Cursor::ToPrevLineStart(n) => format!("{n}F"),
            Cursor::ToNextLineStart(n) => format!("{n}E"),
            Cursor::ToColumn(n) => format!("{n};0H"),
            Cursor::Coordinate { col, row: None } => format!("{col}G"),
            Cursor::Coordinate {
                col,
                row: Some(row),
            } => format!("{col};{row}H"),
        }
    }

    /// The full escape sequence.
    pub fn sequence(&self) -> String {
        build(&self.code(), "")
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sequence())
    }
}

/// Screen control operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Clear the entire screen content.
    Clear,
    /// Clear from the cursor to the beginning of the screen.
    ClearToBegin,
    /// Clear the current line.
    ClearLine,
    ClearToLineBegin,
    ClearToLineEnd,
    ScrollUp(u16),
    ScrollDown(u16),
    /// Switch to the secondary screen buffer.
    ShowSecondary,
    /// Switch back to the primary screen buffer.
    ShowPrimary,
}

impl Screen {
    /// The parameter part of the sequence, without the CSI prefix.
    pub fn code(&self) -> String {
        match self {
            Screen::Clear => "2J".to_string(),
            Screen::ClearToBegin => "1J".to_string(),
            Screen::ClearLine => "2K".to_string(),
            Screen::ClearToLineBegin => "1K".to_string(),
            Screen::ClearToLineEnd => "0K".to_string(),
            Screen::ScrollUp(n) => format!("{n}S"),
            Screen::ScrollDown(n) => format!("{n}T"),
            Screen::ShowSecondary => "?47h".to_string(),
            Screen::ShowPrimary => "?47l".to_string(),
        }
    }

    /// The full escape sequence.
    pub fn sequence(&self) -> String {
        build(&self.code(), "")
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sequence())
    }
}

/// Terminal dimensions as (columns, rows), when a terminal is attached.
pub fn size() -> Option<(u16, u16)> {
    terminal_size().map(|(Width(w), Height(h))| (w, h))
}
