//! Choosing fixture names.
//!
//! A [`NameSource`] proposes names; [`resolve_name`] keeps asking it until the proposal is usable.

use std::collections::BTreeSet;
use std::io::{BufRead, Write};

use crate::table::CaseRecord;
use crate::FixtureResult;

/// Something that proposes fixture names for cases.
pub trait NameSource {
    /// Propose a name for `case`.
    ///
    /// `retry` is `true` when the previous proposal for the same case was rejected.
    fn next_name(&mut self, case: &CaseRecord, retry: bool) -> FixtureResult<String>;
}

impl<F> NameSource for F
where
    F: FnMut(&CaseRecord, bool) -> FixtureResult<String>,
{
    fn next_name(&mut self, case: &CaseRecord, retry: bool) -> FixtureResult<String> {
        self(case, retry)
    }
}

/// Ask `source` for names until one is valid and not already in `existing`.
pub fn resolve_name<S>(
    source: &mut S,
    case: &CaseRecord,
    existing: &BTreeSet<String>,
) -> FixtureResult<String>
where
    S: NameSource + ?Sized,
{
    let mut retry = false;
    loop {
        let name = source.next_name(case, retry)?;
        if !is_valid_name(&name) {
            log::debug!("rejecting invalid fixture name {:?}", name);
        } else if existing.contains(&name) {
            log::debug!("fixture {:?} already exists", name);
        } else {
            return Ok(name);
        }
        retry = true;
    }
}

/// A fixture name must be a single, non-empty, non-hidden path component.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(|c: char| c == '/' || c == '\\' || c == '\0')
}

/// Asks the operator for each name on a terminal.
///
/// Whitespace around a typed name is dropped, not just the newline.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl Prompter<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> NameSource for Prompter<R, W> {
    fn next_name(&mut self, case: &CaseRecord, retry: bool) -> FixtureResult<String> {
        if retry {
            write!(self.output, "Input another test name\n> ")?;
        } else {
            writeln!(self.output, "{} => {}", case.snippet, case.expected)?;
            write!(self.output, "Input test name\n> ")?;
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            anyhow::bail!(
                "input ended before a name was given for line {} (`{}`)",
                case.line,
                case.snippet
            );
        }
        Ok(line.trim().to_owned())
    }
}

/// Names fixtures `<prefix>1`, `<prefix>2`, ... without asking anyone.
#[derive(Clone, Debug)]
pub struct Sequential {
    prefix: String,
    next: usize,
}

impl Sequential {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl NameSource for Sequential {
    fn next_name(&mut self, _case: &CaseRecord, _retry: bool) -> FixtureResult<String> {
        let name = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        Ok(name)
    }
}
