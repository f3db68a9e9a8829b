use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use semver_tools::SemanticVersion;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Major,
    Minor,
    Patch,
}

#[derive(Args, Debug)]
pub struct BumpArgs {
    /// Field to increment
    #[arg(value_enum)]
    pub field: Field,

    /// Version to bump
    #[arg(value_name = "VERSION")]
    pub version: String,
}

pub fn execute(args: BumpArgs) -> Result<i32> {
    let version = SemanticVersion::parse(&args.version)
        .with_context(|| format!("Cannot bump {}", args.version))?;

    let bumped = bump(&version, args.field).with_context(|| {
        format!("Cannot bump {:?} of {}: already at its maximum", args.field, version)
    })?;
    log::debug!("Bumped {} to {}", version, bumped);
    println!("{}", bumped);
    Ok(0)
}

/// Increment one field by one, everything else is kept as is.
pub fn bump(version: &SemanticVersion, field: Field) -> Option<SemanticVersion> {
    match field {
        Field::Major => version.checked_increase_major(),
        Field::Minor => version.checked_increase_minor(),
        Field::Patch => version.checked_increase_patch(),
    }
}
