//! clikit - terminal/CLI support toolkit
//!
//! ANSI color rendering with `<tag>` markup, a lenient argv flag parser,
//! a quoted command-line splitter, and cursor/screen control sequences.

pub mod color;
pub mod flags;
pub mod line;
pub mod style;
pub mod terminal;

pub use color::{
    clear_color, render, render_named, ColorCode, ColorConfig, ColorError, RenderStyle,
};
pub use flags::{parse_argv, Arguments, FlagValue, FlagsConfig, OptValue, ParsedArgv};
pub use line::LineParser;
pub use style::StyleSheet;
