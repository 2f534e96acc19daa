//! Unit tests for the quote-aware command line splitter

use clikit::line::LineParser;

#[test]
fn plain_words_split_on_spaces() {
    assert_eq!(
        LineParser::parse_line("git status --short"),
        vec!["git", "status", "--short"]
    );
}

#[test]
fn double_quoted_span_is_one_token() {
    let tokens = LineParser::parse_line("kite git commit -m \"the commit message\"");
    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[4], "the commit message");
}

#[test]
fn single_quoted_span_is_one_token() {
    let tokens = LineParser::parse_line("echo 'a b c' done");
    assert_eq!(tokens, vec!["echo", "a b c", "done"]);
}

#[test]
fn node_opening_and_closing_a_quote_keeps_legacy_shape() {
    // A node like "solo" runs both the open and close branches; the legacy
    // split-then-rejoin algorithm emits `solo" solo` and callers rely on it.
    let tokens = LineParser::parse_line("run \"solo\" next");
    assert_eq!(tokens, vec!["run", "solo\" solo", "next"]);
}

#[test]
fn unterminated_quote_flushes_buffer() {
    let tokens = LineParser::parse_line("echo \"never closed here");
    assert_eq!(tokens, vec!["echo", "never closed here"]);
}

#[test]
fn single_node_input_skips_quote_handling() {
    assert_eq!(LineParser::parse_line("\"whole\""), vec!["\"whole\""]);
    assert_eq!(LineParser::parse_line("one"), vec!["one"]);
}

#[test]
fn empty_input_yields_no_tokens() {
    assert!(LineParser::parse_line("").is_empty());
    assert!(LineParser::parse_line("   ").is_empty());
}

#[test]
fn leading_spaces_are_ignored() {
    let mut parser = LineParser::new("  ls -la");
    assert_eq!(parser.line(), "ls -la");
    assert_eq!(parser.parse(), vec!["ls", "-la"]);
}

#[test]
fn mixed_quote_chars_do_not_close_each_other() {
    let tokens = LineParser::parse_line("say \"it's a test\" ok");
    assert_eq!(tokens, vec!["say", "it's a test", "ok"]);
}
