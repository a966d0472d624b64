use std::io::Write as _;
use std::path::Path;

use anyhow::Context as _;

use crate::FixtureResult;

pub fn write_if_changed(path: &Path, new: &str) -> FixtureResult<()> {
    let write_needed = match std::fs::read_to_string(path) {
        Ok(current) => current != new,
        Err(_) => true,
    };
    if write_needed {
        std::fs::write(path, new).with_context(|| format!("failed to write {}", path.display()))?;
    } else {
        log::trace!("{} is up to date", path.display());
    }
    Ok(())
}

/// Replace the contents of `path` through a temporary file in the same directory.
pub fn overwrite_file(path: &Path, content: &str) -> FixtureResult<()> {
    log::trace!("overwrite_file({:?}, _)", path);
    let dir = path
        .parent()
        .ok_or_else(|| anyhow::format_err!("{} should be a file", path.display()))?;
    let mut temp_file = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.flush()?;
    temp_file
        .persist(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
