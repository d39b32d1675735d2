//! Command-line front end for the technology catalog.
//!
//! Resolves a catalog file (flag, `TECHDEX_CATALOG`, or the shipped data),
//! builds the keyed index once, and runs a single lookup, search, or listing
//! against it. Output is one tab-separated `name<TAB>link` line per record;
//! `--json` switches to a compact JSON array for scripting.

use anyhow::{Context, Result, bail};
use std::env;
use std::path::PathBuf;
use techdex::{TechIndex, Technology, resolve_catalog_path};

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse()?;
    let catalog_path = resolve_catalog_path(args.catalog);
    let index = TechIndex::load(&catalog_path)
        .with_context(|| format!("loading catalog {}", catalog_path.display()))?;

    match &args.command {
        Command::Get(input) => match index.get(input) {
            Some(tech) => print_entries(&[tech], args.json)?,
            None => {
                // Absence is a normal library outcome; the CLI surfaces it
                // through the exit code instead.
                eprintln!("not found: {input}");
                std::process::exit(1);
            }
        },
        Command::Search(query) => print_entries(&index.search(query), args.json)?,
        Command::List => print_entries(&index.all().iter().collect::<Vec<_>>(), args.json)?,
    }

    Ok(())
}

fn print_entries(entries: &[&Technology], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(entries)?);
        return Ok(());
    }
    for tech in entries {
        println!("{}\t{}", tech.name, tech.link);
    }
    Ok(())
}

enum Command {
    Get(String),
    Search(String),
    List,
}

struct CliArgs {
    command: Command,
    catalog: Option<PathBuf>,
    json: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args_os().skip(1);
        let mut command: Option<Command> = None;
        let mut catalog: Option<PathBuf> = None;
        let mut json = false;

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow::anyhow!("argument is not valid UTF-8"))?;
            match arg.as_str() {
                "--get" => {
                    let value = next_value(&mut args, "--get")?;
                    set_command(&mut command, Command::Get(value))?;
                }
                "--search" => {
                    let value = next_value(&mut args, "--search")?;
                    set_command(&mut command, Command::Search(value))?;
                }
                "--list" => {
                    set_command(&mut command, Command::List)?;
                }
                "--catalog" => {
                    let value = next_value(&mut args, "--catalog")?;
                    catalog = Some(PathBuf::from(value));
                }
                "--json" => json = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => bail!("unknown flag: {other}"),
            }
        }

        let Some(command) = command else {
            bail!("missing command: expected --get NAME, --search QUERY, or --list");
        };

        Ok(Self {
            command,
            catalog,
            json,
        })
    }
}

fn set_command(slot: &mut Option<Command>, command: Command) -> Result<()> {
    if slot.is_some() {
        bail!("--get/--search/--list may only be provided once");
    }
    *slot = Some(command);
    Ok(())
}

fn next_value(args: &mut impl Iterator<Item = std::ffi::OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow::anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))
}

fn usage() -> &'static str {
    "Usage: tech-lookup (--get NAME | --search QUERY | --list) [--catalog PATH] [--json]\n\
Resolves technology records by display name or canonical key, or searches display names case-insensitively.\n\
The catalog defaults to the shipped data/technologies.json; override with --catalog or TECHDEX_CATALOG.\n"
}

fn print_usage() {
    print!("{}", usage());
}
