//! Extract and query commands

use super::read_input;
use crate::app::{OutputFormat, TextArgs};
use crate::output;
use anyhow::Result;
use findorigin_core::{build_search_query, extract};

pub async fn run(args: TextArgs, format: OutputFormat) -> Result<()> {
    let input = read_input(&args.text)?;
    let entities = extract(&input.text);
    let query = build_search_query(&entities);

    tracing::debug!(
        "Extracted {} claim(s), {} date(s), {} number(s), {} name(s), {} link(s)",
        entities.claims.len(),
        entities.dates.len(),
        entities.numbers.len(),
        entities.names.len(),
        entities.links.len()
    );

    print!("{}", output::format_entities(&entities, &query, format));
    Ok(())
}

pub async fn run_query(args: TextArgs) -> Result<()> {
    let input = read_input(&args.text)?;
    println!("{}", build_search_query(&extract(&input.text)));
    Ok(())
}
