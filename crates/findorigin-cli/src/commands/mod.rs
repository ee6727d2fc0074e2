//! CLI command handlers

pub mod extract;
pub mod find;
pub mod models;

use anyhow::{Context, Result};
use findorigin_core::{prepare_input, PreparedInput};
use std::io::Read;

/// Join positional words, or read stdin when there are none, then validate
pub fn read_input(words: &[String]) -> Result<PreparedInput> {
    let raw = if words.is_empty() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read text from stdin")?;
        buf
    } else {
        words.join(" ")
    };

    Ok(prepare_input(&raw)?)
}
