use anyhow::Result;
use clap::Args;
use semver_tools::SemanticVersion;
use std::error::Error;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Version strings to validate
    #[arg(value_name = "VERSION", required = true)]
    pub versions: Vec<String>,

    /// Only report invalid versions
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn execute(args: ValidateArgs) -> Result<i32> {
    let mut exit_code = 0;

    for input in &args.versions {
        let reason = verdict(input);
        if reason.is_some() {
            exit_code = 1;
        }
        match reason {
            Some(reason) => println!("{}: invalid: {}", input, reason),
            None if !args.quiet => println!("{}: valid", input),
            None => {}
        }
    }

    Ok(exit_code)
}

/// `None` when valid, otherwise the error with its causes joined by `: `
pub fn verdict(input: &str) -> Option<String> {
    let err = SemanticVersion::parse(input).err()?;

    let mut reasons = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        reasons.push(cause.to_string());
        source = cause.source();
    }
    Some(reasons.join(": "))
}
