//! Rendering fixtures back into `assert` lines.

use std::collections::HashMap;

use crate::fixture::FixtureRoot;
use crate::templates;
use crate::FixtureResult;

/// Compiler command used by the generated driver when none is given.
pub const DEFAULT_COMPILER: &str = "./target/release/r9cc";

fn remove_trailing_newline(s: &str) -> &str {
    s.strip_suffix('\n').unwrap_or(s)
}

/// `assert '<output>' '<input>'   # <name>`
pub fn render_case(name: &str, input: &str, output: &str) -> String {
    format!(
        "assert '{}' '{}'   # {}",
        remove_trailing_newline(output),
        remove_trailing_newline(input),
        name
    )
}

/// One `assert` line per fixture, sorted by name.
pub fn render_cases(root: &FixtureRoot) -> FixtureResult<Vec<String>> {
    let mut lines = Vec::new();
    for fixture in root.fixtures()? {
        let input = fixture.read_input()?;
        let output = fixture.read_output()?;
        lines.push(render_case(fixture.name(), &input, &output));
    }
    log::debug!("rendered {} cases from {}", lines.len(), root.path().display());
    Ok(lines)
}

/// A complete shell driver running every fixture through `compiler`.
pub fn render_script(root: &FixtureRoot, compiler: &str) -> FixtureResult<String> {
    let cases = render_cases(root)?.join("\n");
    let subs = HashMap::from([("compiler", compiler), ("cases", cases.as_str())]);
    templates::expand(templates::SCRIPT_TEMPLATE, &subs)
}
