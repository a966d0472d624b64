//! One-shot migration turning the last statement of every snippet into a `return` statement.

use crate::fixture::FixtureRoot;
use crate::FixtureResult;

/// The separator snippets use between statements.
pub const DEFAULT_SEPARATOR: char = ';';

/// Rewrite `content` so its final statement becomes `return <statement><separator>`.
///
/// The content is split on `separator`; the last fragment (whatever follows the final separator)
/// and the second-to-last (the final statement) are dropped, and the final statement is appended
/// again as a `return`. Leading newlines of every kept fragment are removed and fragments are
/// rejoined with the separator and a newline.
///
/// This is not idempotent: running it over its own output nests a second `return`.
pub fn reformat_snippet(content: &str, separator: char) -> FixtureResult<String> {
    let mut fragments: Vec<&str> = content.split(separator).collect();
    if fragments.len() < 2 {
        anyhow::bail!("no `{separator}` in snippet {content:?}");
    }

    let statement = fragments[fragments.len() - 2];
    let last = format!("return {}{}", statement.trim_start_matches('\n'), separator);
    if fragments.len() <= 2 {
        return Ok(last);
    }

    fragments.truncate(fragments.len() - 2);
    let mut statements: Vec<&str> = fragments
        .into_iter()
        .map(|fragment| fragment.trim_start_matches('\n'))
        .collect();
    statements.push(&last);
    Ok(statements.join(format!("{separator}\n").as_str()))
}

/// Reformat the `in` file of every fixture under `root`, returning the names touched.
///
/// With `dry_run` nothing is written.
pub fn reformat_all(
    root: &FixtureRoot,
    separator: char,
    dry_run: bool,
) -> FixtureResult<Vec<String>> {
    let mut rewritten = Vec::new();
    for fixture in root.fixtures()? {
        let content = fixture.read_input()?;
        let new = reformat_snippet(&content, separator).map_err(|err| {
            err.context(format!("failed to reformat {}", fixture.input_path().display()))
        })?;
        println!("{}", new);
        if dry_run {
            log::debug!("would rewrite {}", fixture.input_path().display());
        } else {
            fixture.write_input(&new)?;
            log::debug!("rewrote {}", fixture.input_path().display());
        }
        rewritten.push(fixture.name().to_owned());
    }
    log::info!("reformatted {} fixtures", rewritten.len());
    Ok(rewritten)
}
