//! On-disk fixtures: one directory per case holding an `in` and an `out` file.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::table::CaseRecord;
use crate::FixtureResult;

/// File holding the snippet.
pub const INPUT_FILE: &str = "in";
/// File holding the expected result.
pub const OUTPUT_FILE: &str = "out";

/// Where fixtures live when nothing else is configured.
pub const DEFAULT_ROOT: &str = "tests/testcases";

/// The directory all fixtures live under.
#[derive(Clone, Debug)]
pub struct FixtureRoot {
    path: PathBuf,
}

impl FixtureRoot {
    pub fn open(path: impl Into<PathBuf>) -> FixtureResult<Self> {
        let path = path.into();
        let meta = fs::metadata(&path)
            .with_context(|| format!("failed to open fixtures root {}", path.display()))?;
        if !meta.is_dir() {
            anyhow::bail!("fixtures root {} is not a directory", path.display());
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of every fixture directory under the root.
    ///
    /// Hidden entries (`.git`, editor caches, ...) are not fixtures.
    pub fn names(&self) -> FixtureResult<BTreeSet<String>> {
        let mut names = BTreeSet::new();
        let entries = fs::read_dir(&self.path)
            .with_context(|| format!("failed to list {}", self.path.display()))?;
        for entry in entries {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') || !entry.file_type()?.is_dir() {
                continue;
            }
            names.insert(name);
        }
        Ok(names)
    }

    /// Every fixture under the root, sorted by name.
    pub fn fixtures(&self) -> FixtureResult<Vec<Fixture>> {
        Ok(self
            .names()?
            .into_iter()
            .map(|name| Fixture {
                path: self.path.join(&name),
                name,
            })
            .collect())
    }

    /// Create fixture `name` holding `case`.
    ///
    /// Returns `None` when a fixture of that name already exists; it is left untouched.
    pub fn create(&self, name: &str, case: &CaseRecord) -> FixtureResult<Option<Fixture>> {
        let path = self.path.join(name);
        match fs::create_dir(&path) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| format!("failed to create {}", path.display()))
            }
        }

        let fixture = Fixture {
            name: name.to_owned(),
            path,
        };
        write_file(&fixture.input_path(), &case.snippet)?;
        write_file(&fixture.output_path(), &case.expected)?;
        Ok(Some(fixture))
    }
}

/// A single test case on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fixture {
    name: String,
    path: PathBuf,
}

impl Fixture {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn input_path(&self) -> PathBuf {
        self.path.join(INPUT_FILE)
    }

    pub fn output_path(&self) -> PathBuf {
        self.path.join(OUTPUT_FILE)
    }

    pub fn read_input(&self) -> FixtureResult<String> {
        read_file(&self.input_path())
    }

    pub fn read_output(&self) -> FixtureResult<String> {
        read_file(&self.output_path())
    }

    pub fn write_input(&self, content: &str) -> FixtureResult<()> {
        crate::util::overwrite_file(&self.input_path(), content)
    }
}

fn read_file(path: &Path) -> FixtureResult<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn write_file(path: &Path, content: &str) -> FixtureResult<()> {
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}
