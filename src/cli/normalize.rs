use clap::Args;

use crate::cli::OutputFormat;
use crate::core::team::TeamName;

#[derive(Args)]
pub struct NormalizeArgs {
    /// Team names to normalize
    #[arg(required = true)]
    pub names: Vec<String>,
}

pub fn run(args: NormalizeArgs, format: OutputFormat) -> anyhow::Result<()> {
    let normalized: Vec<(&str, TeamName)> = args
        .names
        .iter()
        .map(|raw| (raw.as_str(), TeamName::normalize(raw)))
        .collect();

    match format {
        OutputFormat::Text => {
            for (_, team) in &normalized {
                println!("{team}");
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = normalized
                .iter()
                .map(|(raw, team)| serde_json::json!({ "raw": raw, "normalized": team }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("raw\tnormalized");
            for (raw, team) in &normalized {
                println!("{raw}\t{team}");
            }
        }
    }

    Ok(())
}
