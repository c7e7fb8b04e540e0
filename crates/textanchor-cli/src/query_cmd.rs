use std::path::Path;

use textanchor::RawQuery;

use crate::cli::OutputFormat;
use crate::shared::run_extraction;

pub fn run(file: &Path, query_file: &Path, format: &OutputFormat) -> Result<(), i32> {
    if !query_file.exists() {
        eprintln!("Error: file not found: {}", query_file.display());
        return Err(1);
    }

    let json = std::fs::read_to_string(query_file).map_err(|e| {
        eprintln!("Error: failed to read {}: {e}", query_file.display());
        1
    })?;

    let raw: RawQuery = serde_json::from_str(&json).map_err(|e| {
        eprintln!("Error: failed to parse query: {e}");
        1
    })?;

    run_extraction(file, &raw, format)
}
