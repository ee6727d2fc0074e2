//! Find command

use super::read_input;
use crate::app::{FindArgs, OutputFormat};
use crate::output;
use anyhow::Result;
use findorigin_core::{Config, FindOriginError, SourceFinder};

pub async fn run(args: FindArgs, config: &Config, format: OutputFormat, verbose: bool) -> Result<()> {
    let input = read_input(&args.text)?;

    let api_key = args
        .api_key
        .or_else(|| config.completion.api_key.clone())
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| {
            FindOriginError::Config(
                "no API key: pass --api-key or set FINDORIGIN_API_KEY / OPENROUTER_API_KEY"
                    .to_string(),
            )
        })?;

    let mut completion = config.completion.clone();
    if !args.models.is_empty() {
        completion.models = args.models;
    }

    let finder = SourceFinder::from_config(&completion, &api_key)?;
    let (result, attempts) = finder.find_sources_traced(&input.text).await;

    if verbose {
        for attempt in &attempts {
            eprintln!("  {} -> {:?}", attempt.model, attempt.outcome);
        }
    }

    let result = result?;
    print!("{}", output::format_find_result(&result, format));
    Ok(())
}
