//! Command line string splitting.
//!
//! Splits one command line into argv-style tokens, honoring single/double
//! quoted spans that contain spaces. The algorithm splits on spaces first
//! and re-joins quoted nodes with single spaces; it is deliberately not a
//! full shell lexer, and the legacy behavior (including how a node that
//! both opens and closes a quote is handled) is kept as-is because callers
//! rely on it.

/// Splits a full command line into tokens.
///
/// ```
/// use clikit::line::LineParser;
///
/// let args = LineParser::parse_line("git commit -m \"fix: a bug\"");
/// assert_eq!(args, vec!["git", "commit", "-m", "fix: a bug"]);
/// ```
#[derive(Debug, Clone)]
pub struct LineParser {
    /// Full command line, left-trimmed.
    line: String,
    /// Nodes from the initial split on spaces.
    nodes: Vec<String>,
}

impl LineParser {
    pub fn new(line: &str) -> Self {
        Self {
            line: line.trim_start().to_string(),
            nodes: Vec::new(),
        }
    }

    /// Parse a line in one call.
    pub fn parse_line(line: &str) -> Vec<String> {
        Self::new(line).parse()
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    /// The raw nodes from the space split of the last [`parse`](Self::parse).
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn parse(&mut self) -> Vec<String> {
        if self.line.is_empty() {
            return Vec::new();
        }

        self.nodes = self.line.split(' ').map(str::to_string).collect();
        if self.nodes.len() == 1 {
            // single node: returned as-is, no quote processing
            return self.nodes.clone();
        }

        let mut args: Vec<String> = Vec::new();
        let mut quote_char: Option<char> = None;
        let mut full_item = String::new();

        for node in &self.nodes {
            if node.is_empty() {
                continue;
            }

            let mut goon = true;
            let start = node.chars().next().unwrap_or_default();
            let end = node.chars().last().unwrap_or_default();
            let mut item = node.clone();

            if start == '\'' || start == '"' {
                item.remove(0);
                if quote_char == Some(start) {
                    // closes an open quote
                    args.push(format!("{full_item} {item}"));
                    quote_char = None;
                    full_item.clear();
                } else {
                    // opens a new quoted buffer
                    if !full_item.is_empty() {
                        args.push(full_item.clone());
                    }
                    quote_char = Some(start);
                    full_item = item.clone();
                }
                goon = false;
            }

            if end == '\'' || end == '"' {
                item.pop();
                if quote_char == Some(end) {
                    args.push(format!("{full_item} {item}"));
                    quote_char = None;
                    full_item.clear();
                } else {
                    if !full_item.is_empty() {
                        args.push(full_item.clone());
                    }
                    full_item = item.clone();
                }
                goon = false;
            }

            if goon {
                if quote_char.is_some() {
                    // re-insert the space the initial split consumed
                    full_item.push(' ');
                    full_item.push_str(&item);
                } else {
                    args.push(item);
                }
            }
        }

        // unterminated quote: flush the open buffer as a final token
        if !full_item.is_empty() {
            args.push(full_item);
        }

        args
    }
}
