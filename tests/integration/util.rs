use std::path::{Path, PathBuf};

pub struct Fixture {
    fixture: snapbox::path::PathFixture,
    root: PathBuf,
}

impl Fixture {
    /// A scratch directory with an empty `testcases/` fixtures root.
    #[track_caller]
    pub fn new() -> Self {
        let fixture = snapbox::path::PathFixture::mutable_temp().unwrap();
        let root = fixture.path().unwrap().join("testcases");
        std::fs::create_dir(&root).unwrap();
        Self { fixture, root }
    }

    pub fn path(&self) -> &Path {
        self.fixture.path().unwrap()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `<root>/<name>/{in,out}`.
    #[track_caller]
    pub fn add_case(&self, name: &str, input: &str, output: &str) {
        let dir = self.root.join(name);
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("in"), input).unwrap();
        std::fs::write(dir.join("out"), output).unwrap();
    }

    #[track_caller]
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[track_caller]
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.root.join(relative)).unwrap()
    }

    /// The tool, run from the scratch directory against `testcases/`.
    pub fn cmd(&self) -> snapbox::cmd::Command {
        snapbox::cmd::Command::new(snapbox::cmd::cargo_bin("fixturegen"))
            .current_dir(self.path())
            .env("FIXTUREGEN_ROOT", "testcases")
            .env_remove("RUST_LOG")
    }

    #[track_caller]
    pub fn close(self) {
        self.fixture.close().unwrap();
    }
}

macro_rules! table {
    ($($line:expr),* $(,)?) => {
        concat!($($line, "\n"),*)
    };
}
