//! Turning parsed cases into fixture directories.

use crate::fixture::{Fixture, FixtureRoot};
use crate::naming::{resolve_name, NameSource};
use crate::table::CaseRecord;
use crate::FixtureResult;

/// Create one fixture per case, in order, naming each through `source`.
///
/// Existing fixtures are never overwritten: a name that is taken, either before the run or by an
/// earlier case of this run, is sent back to `source`.
pub fn write_cases<S>(
    root: &FixtureRoot,
    cases: &[CaseRecord],
    source: &mut S,
) -> FixtureResult<Vec<Fixture>>
where
    S: NameSource + ?Sized,
{
    let mut existing = root.names()?;
    log::trace!("{} existing fixtures in {}", existing.len(), root.path().display());

    let mut created = Vec::with_capacity(cases.len());
    for case in cases {
        let fixture = loop {
            let name = resolve_name(&mut *source, case, &existing)?;
            match root.create(&name, case)? {
                Some(fixture) => break fixture,
                None => {
                    // Appeared after we listed the root.
                    log::debug!("{} was created concurrently", name);
                    existing.insert(name);
                }
            }
        };
        log::debug!(
            "line {}: wrote {:?} => {:?} to {}",
            case.line,
            case.snippet,
            case.expected,
            fixture.path().display()
        );
        existing.insert(fixture.name().to_owned());
        created.push(fixture);
    }

    log::info!("created {} fixtures", created.len());
    Ok(created)
}
