use anyhow::{Context, Result};
use clap::Args;
use semver_tools::SemanticVersion;
use std::cmp::Ordering;

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left-hand version
    #[arg(value_name = "A")]
    pub left: String,

    /// Right-hand version
    #[arg(value_name = "B")]
    pub right: String,
}

pub fn execute(args: CompareArgs) -> Result<i32> {
    let left = SemanticVersion::parse(&args.left)
        .with_context(|| format!("Invalid left-hand version: {}", args.left))?;
    let right = SemanticVersion::parse(&args.right)
        .with_context(|| format!("Invalid right-hand version: {}", args.right))?;

    println!("{} {} {}", left, symbol(left.compare_to(&right)), right);
    if let Some(note) = note(&left, &right) {
        println!("{}", note);
    }

    Ok(0)
}

pub fn symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

/// Explain equal precedence between structurally different versions.
pub fn note(left: &SemanticVersion, right: &SemanticVersion) -> Option<&'static str> {
    (left.compare_to(right) == Ordering::Equal && left != right)
        .then_some("note: equal precedence, the versions differ only in build metadata")
}
