//! Parsing of `assert <expected> <snippet>` case tables.

use regex::Regex;

use crate::FixtureResult;

static RE_CASE: once_cell::sync::Lazy<Regex> =
    once_cell::sync::Lazy::new(|| Regex::new(r"^assert\s+(\S+)\s+(.*)$").unwrap());

/// The marker every case line starts with.
pub const MARKER: &str = "assert";

/// How quotes around the two fields of a case line are removed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteStyle {
    /// Strip one matching pair of `'` or `"` wrapping the whole field.
    #[default]
    Enclosing,
    /// Strip every leading and trailing `"`, then every leading and trailing `'`.
    Greedy,
    /// Keep fields verbatim.
    None,
}

impl QuoteStyle {
    pub fn strip<'s>(self, field: &'s str) -> &'s str {
        match self {
            Self::Enclosing => {
                for quote in ['\'', '"'] {
                    if field.len() >= 2 && field.starts_with(quote) && field.ends_with(quote) {
                        return &field[1..field.len() - 1];
                    }
                }
                field
            }
            Self::Greedy => field.trim_matches('"').trim_matches('\''),
            Self::None => field,
        }
    }
}

/// One test case read from a table: what the snippet should evaluate to, and the snippet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseRecord {
    pub expected: String,
    pub snippet: String,
    /// 1-based line of the table this case came from.
    pub line: usize,
}

/// Parse a single table line.
///
/// Blank lines and `#` comments yield `None`.
pub fn parse_line(
    line: &str,
    line_no: usize,
    quotes: QuoteStyle,
) -> FixtureResult<Option<CaseRecord>> {
    // Also drops trailing whitespace of an unquoted snippet.
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let Some(caps) = RE_CASE.captures(line) else {
        let has_marker = line
            .strip_prefix(MARKER)
            .map_or(false, |rest| rest.starts_with(char::is_whitespace));
        if !has_marker {
            anyhow::bail!(
                "line {line_no}: expected `{MARKER} <expected> <snippet>`, got `{line}`"
            );
        }
        anyhow::bail!(
            "line {line_no}: missing whitespace between expected result and snippet in `{line}`"
        );
    };

    let expected = quotes.strip(&caps[1]).to_owned();
    let snippet = quotes.strip(&caps[2]).to_owned();
    log::trace!("line {}: {:?} => {:?}", line_no, snippet, expected);
    Ok(Some(CaseRecord {
        expected,
        snippet,
        line: line_no,
    }))
}

/// Parse every case of a table, in order.
pub fn parse_table(text: &str, quotes: QuoteStyle) -> FixtureResult<Vec<CaseRecord>> {
    let mut cases = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some(case) = parse_line(line, idx + 1, quotes)? {
            cases.push(case);
        }
    }
    Ok(cases)
}
