use std::path::PathBuf;
use std::process;

use anyhow::{bail, Result};
use clap::{ArgAction, CommandFactory, Parser};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Modifies each \"Content-Length\" line in .test files, based on the same values in the corresponding .out file",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// .test or .out file to modify. Alternatively, a directory in which case
    /// all the .test/.out files in that directory are checked, recursively
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Dry-run mode, i.e. .test files are not modified
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Verbose mode
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Print this usage message
    #[arg(short = 'u', long = "usage", action = ArgAction::Help)]
    pub usage: Option<bool>,

    /// Option parsing stops at the first non-option; the rest is ignored
    #[arg(hide = true, trailing_var_arg = true, num_args = 0..)]
    pub rest: Vec<String>,
}

/// Run configuration handed to every stage that needs it.
#[derive(Debug, Clone)]
pub struct Options {
    pub path: PathBuf,
    pub dry_run: bool,
    pub verbose: bool,
}

pub fn build_options(args: &Args) -> Result<Options> {
    let Some(path) = args.file.clone() else {
        bail!("missing -f parameter");
    };

    Ok(Options {
        path,
        dry_run: args.dry_run,
        verbose: args.verbose,
    })
}

pub fn usage() -> String {
    Args::command().render_help().to_string()
}

/// Prints `message`, a blank line and the usage text to stdout, then exits with status 1.
pub fn usage_and_exit(message: &str) -> ! {
    if !message.is_empty() {
        println!("{message}");
        println!();
    }
    print!("{}", usage());
    process::exit(1);
}
