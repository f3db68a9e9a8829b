use anyhow::Result;
use clap::Args;
use semver_tools::{Identifier, SemanticVersion};

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Version strings to parse
    #[arg(value_name = "VERSION", required = true)]
    pub versions: Vec<String>,
}

pub fn execute(args: ParseArgs) -> Result<i32> {
    let mut exit_code = 0;

    for input in &args.versions {
        match SemanticVersion::parse(input) {
            Ok(version) => println!("{}", describe(&version)),
            Err(e) => {
                eprintln!("{}: {}", e, e.kind());
                exit_code = 1;
            }
        }
    }

    Ok(exit_code)
}

fn describe_identifier(identifier: &Identifier) -> String {
    match identifier {
        Identifier::Numeric(value) => format!("{} (numeric)", value),
        Identifier::Alphanumeric(text) => format!("{} (alphanumeric)", text),
    }
}

/// Multi-line summary of a parsed version
pub fn describe(version: &SemanticVersion) -> String {
    let mut lines = vec![
        format!("version:     {}", version),
        format!("major:       {}", version.major()),
        format!("minor:       {}", version.minor()),
        format!("patch:       {}", version.patch()),
    ];

    match version.pre_release() {
        Some(pre_release) => {
            let identifiers: Vec<String> = pre_release
                .identifiers()
                .iter()
                .map(describe_identifier)
                .collect();
            lines.push(format!("pre-release: {}", identifiers.join(", ")));
        }
        None => lines.push("pre-release: -".to_string()),
    }

    match version.build() {
        Some(build) => lines.push(format!("build:       {}", build)),
        None => lines.push("build:       -".to_string()),
    }

    lines.join("\n")
}
