#![forbid(unsafe_code)]

mod arguments;
mod config;
mod errors;
mod fixture;
mod naming;
mod ops;
mod table;
mod templates;
mod util;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context as _;

use crate::arguments::{Args, Subcommand};
use crate::config::{Config, ConfigFile};
use crate::fixture::FixtureRoot;
use crate::naming::{NameSource, Prompter, Sequential};

pub use crate::errors::FixtureResult;

fn main() {
    env_logger::init();

    if let Err(ref err) = try_main() {
        let stderr = &mut std::io::stderr();
        let _ = writeln!(stderr, "error: {err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> FixtureResult<()> {
    let args = Args::parse()?;
    log::trace!("Arguments: {:?}", args);

    let file = ConfigFile::load(args.config.as_deref())?;
    let root_env = std::env::var_os(config::ROOT_ENV).map(PathBuf::from);
    let config = Config::resolve(file, args.root, root_env);
    log::trace!("config: {:?}", config);

    let root = FixtureRoot::open(&config.root)?;

    match args.command {
        Subcommand::Write {
            table,
            quotes,
            auto_name,
        } => {
            let text = std::fs::read_to_string(&table)
                .with_context(|| format!("failed to read {}", table.display()))?;
            let cases = crate::table::parse_table(&text, quotes.unwrap_or(config.quotes))
                .with_context(|| format!("invalid case table {}", table.display()))?;
            log::debug!("{} cases in {}", cases.len(), table.display());

            let mut source: Box<dyn NameSource> = match auto_name {
                Some(prefix) => Box::new(Sequential::new(prefix)),
                None => Box::new(Prompter::stdio()),
            };
            for fixture in ops::write_cases(&root, &cases, source.as_mut())? {
                println!("created {}", fixture.path().display());
            }
        }
        Subcommand::Reformat { separator, dry_run } => {
            ops::reformat_all(&root, separator.unwrap_or(config.separator), dry_run)?;
        }
        Subcommand::Export {
            output,
            compiler,
            lines_only,
        } => {
            let rendered = if lines_only {
                ops::render_cases(&root)?
                    .into_iter()
                    .map(|line| line + "\n")
                    .collect::<String>()
            } else {
                ops::render_script(&root, compiler.as_deref().unwrap_or(&config.compiler))?
            };
            match output {
                Some(path) => util::write_if_changed(&path, &rendered)?,
                None => print!("{rendered}"),
            }
        }
    }

    Ok(())
}
