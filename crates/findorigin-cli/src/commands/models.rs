//! Models command

use crate::app::OutputFormat;
use anyhow::Result;
use findorigin_core::Config;

pub async fn run(config: &Config, format: OutputFormat) -> Result<()> {
    let models = &config.completion.models;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(models)?);
        }
        _ => {
            for (i, model) in models.iter().enumerate() {
                println!("{}. {}", i + 1, model);
            }
        }
    }

    Ok(())
}
