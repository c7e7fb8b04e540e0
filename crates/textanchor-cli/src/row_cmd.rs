use std::path::Path;

use textanchor::RawQuery;

use crate::cli::OutputFormat;
use crate::shared::run_extraction;

pub fn run(
    file: &Path,
    anchor: &str,
    position: Option<&str>,
    tiebreaker: Option<&str>,
    format: &OutputFormat,
) -> Result<(), i32> {
    let raw = RawQuery {
        id: "row".to_string(),
        anchor: anchor.to_string(),
        position: position.map(str::to_string),
        text_alignment: None,
        tiebreaker: tiebreaker.map(str::to_string),
        multiline: None,
    };
    run_extraction(file, &raw, format)
}
