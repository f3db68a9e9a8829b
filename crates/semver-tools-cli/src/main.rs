mod bump;
mod compare;
mod parse;
mod sort;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "semver-tools")]
#[command(about = "Parse, validate, compare and sort Semantic Versioning 2.0.0 versions")]
#[command(version)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace), overridden by RUST_LOG
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the components of each version
    Parse(parse::ParseArgs),

    /// Check whether each version is valid
    Validate(validate::ValidateArgs),

    /// Compare two versions by precedence
    Compare(compare::CompareArgs),

    /// Sort versions by precedence
    Sort(sort::SortArgs),

    /// Increment the major, minor or patch field of a version
    Bump(bump::BumpArgs),
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logger(args.verbose);

    match args.command {
        Commands::Parse(args) => parse::execute(args),
        Commands::Validate(args) => validate::execute(args),
        Commands::Compare(args) => compare::execute(args),
        Commands::Sort(args) => sort::execute(args),
        Commands::Bump(args) => bump::execute(args),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
