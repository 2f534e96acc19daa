//! clikit - CLI entry point
//!
//! Small demo surface over the library. Argument parsing dogfoods the
//! crate's own flag parser instead of pulling in a parser dependency.

use std::env;

use anyhow::{bail, Result};

use clikit::color::{self, tag, ColorConfig};
use clikit::flags::{self, FlagsConfig};

const HELP: &str = "\
clikit - terminal color rendering and flag parsing toolkit

USAGE:
    clikit [--no-color|--force-color] <command> [args]

COMMANDS:
    styles              List the named style table, each rendered in its style
    render <text>       Render <tag>...</tag> markup (--recursive for nesting)
    parse [tokens...]   Classify tokens as args/options (--json for JSON output)

OPTIONS:
    --no-color          Disable ANSI output
    --force-color       Emit ANSI output even without a terminal
    --help              Show this help
    --version           Show the version
";

fn version_string() -> String {
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => format!("{} ({sha})", env!("CARGO_PKG_VERSION")),
        None => env!("CARGO_PKG_VERSION").to_string(),
    }
}

fn cli_flags_config() -> FlagsConfig {
    FlagsConfig::default().with_bool_opts([
        "no-color",
        "force-color",
        "json",
        "recursive",
        "help",
        "version",
    ])
}

fn main() -> Result<()> {
    let argv: Vec<String> = env::args().skip(1).collect();
    let parsed = flags::parse_argv(&argv, &cli_flags_config());

    if parsed.opt_is_true("version") {
        println!("clikit {}", version_string());
        return Ok(());
    }

    if parsed.opt_is_true("help") || parsed.args.positional.is_empty() {
        print!("{HELP}");
        return Ok(());
    }

    if parsed.opt_is_true("no-color") {
        ColorConfig::global().set_no_color(true);
    }
    if parsed.opt_is_true("force-color") {
        ColorConfig::global().set_force_color(true);
    }

    let command = parsed.args.positional[0].as_str();
    match command {
        "styles" => cmd_styles(),
        "render" => cmd_render(&parsed.args.positional[1..], parsed.opt_is_true("recursive")),
        "parse" => cmd_parse(&argv, parsed.opt_is_true("json")),
        other => bail!("unknown command: {other}"),
    }
}

/// Print the default style table, each name rendered in its own style.
fn cmd_styles() -> Result<()> {
    for name in color::style_names() {
        let code = color::style_code(name).unwrap_or_default();
        let rendered = color::render_named(name, name)?;
        println!("{rendered:<24} {code}");
    }
    Ok(())
}

fn cmd_render(texts: &[String], recursive: bool) -> Result<()> {
    if texts.is_empty() {
        bail!("render: missing <text> argument");
    }

    for text in texts {
        println!("{}", tag::parse(text, recursive)?);
    }
    Ok(())
}

/// Re-classify everything after the `parse` token and echo the result.
fn cmd_parse(argv: &[String], json: bool) -> Result<()> {
    let rest: Vec<String> = argv
        .iter()
        .skip_while(|token| *token != "parse")
        .skip(1)
        .cloned()
        .collect();

    let parsed = flags::parse_argv(&rest, &FlagsConfig::default());

    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        return Ok(());
    }

    println!("args: {:?}", parsed.args.positional);
    if !parsed.args.named.is_empty() {
        println!("named args: {:?}", parsed.args.named);
    }
    println!("short opts: {:?}", parsed.short_opts);
    println!("long opts: {:?}", parsed.long_opts);
    Ok(())
}
