//! batcat - syntax-colorizing cat for DOS/Windows batch files
//!
//! Labels, `rem` comments, `%VAR%`/`!VAR!` expansions and `%1`-style
//! arguments are colored; everything else is written as plain text.

mod cat;
mod config;
mod display;
mod error;
mod filter;
mod syntax;
mod terminal;

use std::env;
use std::path::{Path, PathBuf};
use std::process;

use log::{debug, error};

use cat::BatchCat;
use config::DisplayOptions;
use error::{CatError, Result};

/// What the command line asked for
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    /// Flags that override the config file
    overrides: Vec<Flag>,
    start_line: usize,
    max_lines: Option<usize>,
    force: bool,
    files: Vec<PathBuf>,
    help: bool,
    version: bool,
}

/// A display option set on the command line
#[derive(Debug, PartialEq, Eq)]
enum Flag {
    LineNumbers,
    Ignore(String),
    IgnoreBlank,
    IgnoreWhitespace,
    Wrap,
}

impl Flag {
    fn apply(&self, options: &mut DisplayOptions) {
        match self {
            Flag::LineNumbers => options.show_line_numbers = true,
            Flag::Ignore(prefix) => options.add_ignore_prefix(prefix),
            Flag::IgnoreBlank => options.ignore_blank_lines = true,
            Flag::IgnoreWhitespace => options.ignore_whitespace_lines = true,
            Flag::Wrap => options.wrap_text = true,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(true) => {}
        // each failed file was already reported
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Returns whether every file was written
fn run() -> Result<bool> {
    let args = parse_args(env::args().skip(1))?;

    if args.help {
        print_usage();
        return Ok(true);
    }
    if args.version {
        print_version();
        return Ok(true);
    }
    if args.files.is_empty() {
        print_usage();
        return Err(CatError::InvalidArgument("no input files".to_string()));
    }

    let mut options = DisplayOptions::load();
    for flag in &args.overrides {
        flag.apply(&mut options);
    }
    debug!("options: {:?}", options);

    let cat = BatchCat::new()?;
    let mut all_ok = true;

    for path in &args.files {
        if !args.force && !cat.can_cat(path) {
            report(&CatError::UnsupportedFile(path.display().to_string()), None);
            all_ok = false;
            continue;
        }

        debug!("cat {}", path.display());
        let result = if args.start_line == 0 && args.max_lines.is_none() {
            cat.cat(&options, path)
        } else {
            cat.cat_range(&options, path, args.start_line, args.max_lines)
        };
        if let Err(e) = result {
            report(&e, Some(path));
            all_ok = false;
        }
    }

    Ok(all_ok)
}

/// Report a failed file on stderr and in the log
fn report(e: &CatError, path: Option<&Path>) {
    let message = failure_message(e, path);
    error!("{}", message);
    eprintln!("Error: {}", message);
}

fn failure_message(e: &CatError, path: Option<&Path>) -> String {
    match path {
        Some(path) => format!("{}: {}", path.display(), e),
        None => e.to_string(),
    }
}

/// Parse command line arguments (program name already removed)
fn parse_args<I: Iterator<Item = String>>(mut iter: I) -> Result<Args> {
    let mut args = Args::default();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => args.help = true,
            "--version" | "-V" => args.version = true,
            "--line-numbers" | "-n" => args.overrides.push(Flag::LineNumbers),
            "--ignore-blank" | "-b" => args.overrides.push(Flag::IgnoreBlank),
            "--ignore-whitespace" | "-w" => args.overrides.push(Flag::IgnoreWhitespace),
            "--wrap" => args.overrides.push(Flag::Wrap),
            "--force" | "-f" => args.force = true,
            "--ignore" | "-i" => {
                let prefix = value(&arg, iter.next())?;
                args.overrides.push(Flag::Ignore(prefix));
            }
            "--start" | "-s" => args.start_line = number(&arg, iter.next())?,
            "--lines" | "-l" => args.max_lines = Some(number(&arg, iter.next())?),
            "--" => {
                args.files.extend(iter.by_ref().map(PathBuf::from));
            }
            s if s.starts_with('-') => {
                return Err(CatError::InvalidArgument(format!("unknown option {}", s)));
            }
            _ => args.files.push(PathBuf::from(&arg)),
        }
    }

    Ok(args)
}

fn value(flag: &str, next: Option<String>) -> Result<String> {
    next.ok_or_else(|| CatError::InvalidArgument(format!("{} needs a value", flag)))
}

fn number(flag: &str, next: Option<String>) -> Result<usize> {
    let text = value(flag, next)?;
    text.parse()
        .map_err(|_| CatError::InvalidArgument(format!("{} expects a number, got '{}'", flag, text)))
}

fn print_usage() {
    println!("batcat {} - colorize DOS/Windows batch files", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: batcat [OPTIONS] FILE...");
    println!();
    println!("Options:");
    println!("  -n, --line-numbers       Show line numbers");
    println!("  -i, --ignore PREFIX      Skip lines starting with PREFIX (any case, repeatable)");
    println!("  -b, --ignore-blank       Skip empty lines");
    println!("  -w, --ignore-whitespace  Skip lines containing only whitespace");
    println!("      --wrap               Word-wrap comments and plain lines");
    println!("  -s, --start N            First line to show (1-based)");
    println!("  -l, --lines N            Read at most N lines; skipped lines count too");
    println!("  -f, --force              Colorize files without a .bat/.cmd extension");
    println!("  -h, --help               Show this help message");
    println!("  -V, --version            Show version information");
    println!();
    println!("Defaults are read from ~/.batcat.toml when present.");
}

fn print_version() {
    println!("batcat {}", env!("CARGO_PKG_VERSION"));
}
