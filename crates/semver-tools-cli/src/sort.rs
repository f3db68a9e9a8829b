use anyhow::{bail, Result};
use clap::Args;
use semver_tools::SemanticVersion;

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Version strings to sort
    #[arg(value_name = "VERSION", required = true)]
    pub versions: Vec<String>,

    /// Sort from highest to lowest precedence
    #[arg(short, long)]
    pub descending: bool,

    /// Drop versions that fail to parse instead of failing
    #[arg(long)]
    pub skip_invalid: bool,
}

pub fn execute(args: SortArgs) -> Result<i32> {
    for version in sort(&args.versions, args.descending, args.skip_invalid)? {
        println!("{}", version);
    }
    Ok(0)
}

pub fn sort(
    inputs: &[String],
    descending: bool,
    skip_invalid: bool,
) -> Result<Vec<SemanticVersion>> {
    let mut versions = Vec::with_capacity(inputs.len());

    for input in inputs {
        match SemanticVersion::parse(input) {
            Ok(version) => versions.push(version),
            Err(e) if skip_invalid => log::warn!("Skipping {}: {}", e, e.kind()),
            Err(e) => bail!("{}: {}", e, e.kind()),
        }
    }

    versions.sort();
    if descending {
        versions.reverse();
    }
    Ok(versions)
}
