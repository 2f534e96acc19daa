//! Unit tests for the argv flag parser

use clikit::flags::{
    escape_token, parse_argv, parse_line, simple_parse, FlagValue, FlagsConfig, OptValue,
};

fn argv(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

fn str_opt(parsed: &clikit::flags::ParsedArgv, name: &str) -> Option<String> {
    parsed
        .opt(name)
        .and_then(OptValue::first)
        .and_then(FlagValue::as_str)
        .map(str::to_string)
}

#[test]
fn classifies_positionals_and_both_option_kinds() {
    let parsed = parse_argv(
        &argv(&["git:tag", "--only-tag", "-d", "../view", "arg0"]),
        &FlagsConfig::default(),
    );

    assert_eq!(parsed.args.positional, vec!["git:tag", "arg0"]);
    assert!(parsed.long_opts.get("only-tag").is_some_and(OptValue::is_true));
    assert_eq!(
        parsed.short_opts.get("d").and_then(OptValue::first),
        Some(&FlagValue::Str("../view".to_string()))
    );
}

#[test]
fn url_with_equals_stays_positional() {
    let parsed = parse_argv(
        &argv(&["cmd", "http://some.com/path?a=1&b=2"]),
        &FlagsConfig::default(),
    );

    assert_eq!(
        parsed.args.positional,
        vec!["cmd", "http://some.com/path?a=1&b=2"]
    );
    assert!(parsed.args.named.is_empty());
}

#[test]
fn named_positional_requires_valid_identifier() {
    let parsed = parse_argv(&argv(&["env=dev", "9=bad"]), &FlagsConfig::default());

    assert_eq!(
        parsed.args.named.get("env"),
        Some(&FlagValue::Str("dev".to_string()))
    );
    // left-hand side starting with a digit is not a name
    assert_eq!(parsed.args.positional, vec!["9=bad"]);
}

#[test]
fn double_dash_ends_option_parsing() {
    let parsed = parse_argv(
        &argv(&["-n", "inhere", "--", "--age", "99"]),
        &FlagsConfig::default(),
    );

    assert_eq!(str_opt(&parsed, "n").as_deref(), Some("inhere"));
    assert_eq!(parsed.args.positional, vec!["--age", "99"]);
}

#[test]
fn long_option_inline_and_lookahead_values() {
    let parsed = parse_argv(
        &argv(&["--name=app", "--tag", "v1.2", "--dry-run"]),
        &FlagsConfig::default(),
    );

    assert_eq!(str_opt(&parsed, "name").as_deref(), Some("app"));
    assert_eq!(str_opt(&parsed, "tag").as_deref(), Some("v1.2"));
    assert!(parsed.opt_is_true("dry-run"));
}

#[test]
fn short_option_inline_value() {
    let parsed = parse_argv(&argv(&["-n=app"]), &FlagsConfig::default());
    assert_eq!(str_opt(&parsed, "n").as_deref(), Some("app"));
}

#[test]
fn declared_bool_never_consumes_a_value() {
    let config = FlagsConfig::default().with_bool_opts(["force"]);
    let parsed = parse_argv(&argv(&["--force", "deploy"]), &config);

    assert!(parsed.opt_is_true("force"));
    assert_eq!(parsed.args.positional, vec!["deploy"]);
}

#[test]
fn multi_char_short_without_value_bundles() {
    let parsed = parse_argv(&argv(&["-abc"]), &FlagsConfig::default());

    for name in ["a", "b", "c"] {
        assert!(parsed.opt_is_true(name), "bundled flag {name}");
    }
}

#[test]
fn lookahead_value_beats_bundling() {
    let parsed = parse_argv(&argv(&["-ab", "value"]), &FlagsConfig::default());

    assert_eq!(str_opt(&parsed, "ab").as_deref(), Some("value"));
    assert!(parsed.opt("a").is_none());
}

#[test]
fn array_options_accumulate_in_order() {
    let config = FlagsConfig::default().with_array_opts(["tag"]);
    let parsed = parse_argv(&argv(&["--tag", "a", "--tag=b"]), &config);

    match parsed.opt("tag") {
        Some(OptValue::Many(values)) => {
            let collected: Vec<_> = values.iter().filter_map(FlagValue::as_str).collect();
            assert_eq!(collected, vec!["a", "b"]);
        }
        other => panic!("expected accumulated values, got {other:?}"),
    }
}

#[test]
fn bool_words_are_coerced() {
    let parsed = parse_argv(
        &argv(&["--debug", "ON", "--colors", "no", "--count", "123", "--fruit", "banana"]),
        &FlagsConfig::default(),
    );

    assert!(parsed.opt_is_true("debug"));
    assert_eq!(
        parsed.opt("colors").and_then(OptValue::first),
        Some(&FlagValue::Bool(false))
    );
    // numeric strings pass through the bool-word filter unchanged
    assert_eq!(str_opt(&parsed, "count").as_deref(), Some("123"));
    assert_eq!(str_opt(&parsed, "fruit").as_deref(), Some("banana"));
}

#[test]
fn negative_number_is_positional() {
    let parsed = parse_argv(&argv(&["-9"]), &FlagsConfig::default());
    assert_eq!(parsed.args.positional, vec!["-9"]);
    assert!(parsed.short_opts.is_empty());
}

#[test]
fn bare_dash_is_positional() {
    let parsed = parse_argv(&argv(&["-", "file"]), &FlagsConfig::default());
    assert_eq!(parsed.args.positional, vec!["-", "file"]);
}

#[test]
fn merged_opts_prefer_long_on_collision() {
    let parsed = parse_argv(&argv(&["-v=short", "--v=long"]), &FlagsConfig::default());
    let merged = parsed.merged_opts();

    assert_eq!(
        merged.get("v").and_then(OptValue::first),
        Some(&FlagValue::Str("long".to_string()))
    );
}

#[test]
fn parse_line_splits_with_quotes() {
    let parsed = parse_line("kite git commit -m \"the commit message\"", &FlagsConfig::default());

    assert_eq!(parsed.args.positional, vec!["kite", "git", "commit"]);
    assert_eq!(str_opt(&parsed, "m").as_deref(), Some("the commit message"));
}

#[test]
fn simple_parse_splits_on_first_equals_only() {
    let (args, opts) = simple_parse(&argv(&["run", "--env=dev", "-v"]));

    assert_eq!(args.positional, vec!["run"]);
    assert_eq!(opts.get("env"), Some(&FlagValue::Str("dev".to_string())));
    assert_eq!(opts.get("v"), Some(&FlagValue::Bool(true)));
}

#[test]
fn escape_token_quotes_unsafe_tokens() {
    assert_eq!(escape_token("plain-token_1"), "plain-token_1");
    assert_eq!(escape_token("has space"), "'has space'");
    assert_eq!(escape_token("it's"), r#"'it'\''s'"#);
}
