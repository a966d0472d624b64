use std::ffi::OsString;
use std::path::PathBuf;

use crate::table::QuoteStyle;

#[derive(Debug)]
pub struct Args {
    pub root: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub command: Subcommand,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Subcommand {
    /// Create fixtures from an `assert` table.
    Write {
        table: PathBuf,
        quotes: Option<QuoteStyle>,
        auto_name: Option<String>,
    },
    /// Turn the last statement of every fixture input into a `return`.
    Reformat {
        separator: Option<char>,
        dry_run: bool,
    },
    /// Render fixtures as a shell test driver.
    Export {
        output: Option<PathBuf>,
        compiler: Option<String>,
        lines_only: bool,
    },
}

impl Args {
    pub fn parse() -> anyhow::Result<Self> {
        Self::parse_from(std::env::args_os())
    }

    pub fn parse_from<I, T>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let m = command().get_matches_from(args);
        Self::from_matches(&m)
    }

    fn from_matches(m: &clap::ArgMatches) -> anyhow::Result<Self> {
        let command = match m.subcommand() {
            Some(("write", m)) => Subcommand::Write {
                table: m.get_one::<PathBuf>("table").cloned().expect("required"),
                quotes: m.get_one::<QuoteStyle>("quotes").copied(),
                auto_name: m.get_one::<String>("auto-name").cloned(),
            },
            Some(("reformat", m)) => Subcommand::Reformat {
                separator: m.get_one::<char>("separator").copied(),
                dry_run: m.get_flag("dry-run"),
            },
            Some(("export", m)) => Subcommand::Export {
                output: m.get_one::<PathBuf>("output").cloned(),
                compiler: m.get_one::<String>("compiler").cloned(),
                lines_only: m.get_flag("lines-only"),
            },
            Some((name, _)) => anyhow::bail!("unknown subcommand `{name}`"),
            None => anyhow::bail!("a subcommand is required"),
        };

        Ok(Args {
            root: m.get_one::<PathBuf>("root").cloned(),
            config: m.get_one::<PathBuf>("config").cloned(),
            command,
        })
    }
}

fn command() -> clap::Command {
    use clap::{Arg, Command};
    let about = r#"Generates and reformats `in`/`out` test-case fixtures"#;

    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(about)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("root")
                .help("Directory holding the fixtures [default: tests/testcases]")
                .long("root")
                .value_name("DIR")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .help("Config file to read instead of ./fixturegen.toml")
                .long("config")
                .value_name("FILE")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .subcommand(
            Command::new("write")
                .about("Create one fixture per line of an `assert <expected> <snippet>` table")
                .arg(
                    Arg::new("table")
                        .help("File holding the `assert` lines")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("quotes")
                        .help("How quotes around the expected result and snippet are removed")
                        .long("quotes")
                        .value_parser(clap::value_parser!(QuoteStyle)),
                )
                .arg(
                    Arg::new("auto-name")
                        .help("Name fixtures <PREFIX>1, <PREFIX>2, ... instead of prompting")
                        .long("auto-name")
                        .value_name("PREFIX"),
                ),
        )
        .subcommand(
            Command::new("reformat")
                .about("Rewrite every fixture input so its last statement is a `return`")
                .arg(
                    Arg::new("separator")
                        .help("Statement separator [default: ;]")
                        .long("separator")
                        .value_name("CHAR")
                        .value_parser(parse_separator),
                )
                .arg(
                    Arg::new("dry-run")
                        .help("Print the new inputs without writing them")
                        .long("dry-run")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Render every fixture as an `assert` line of a shell test driver")
                .arg(
                    Arg::new("output")
                        .help("Write the driver here instead of stdout")
                        .short('o')
                        .long("output")
                        .value_name("FILE")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("compiler")
                        .help("Compiler command the driver runs [default: ./target/release/r9cc]")
                        .long("compiler")
                        .value_name("CMD")
                        .conflicts_with("lines-only"),
                )
                .arg(
                    Arg::new("lines-only")
                        .help("Only print the `assert` lines")
                        .long("lines-only")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
}

fn parse_separator(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("expected a single character, got `{s}`")),
    }
}
