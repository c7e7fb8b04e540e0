use std::path::Path;

use textanchor::RawQuery;

use crate::cli::OutputFormat;
use crate::shared::run_extraction;

pub fn run(
    file: &Path,
    anchor: &str,
    position: Option<&str>,
    alignment: Option<&str>,
    multiline: bool,
    format: &OutputFormat,
) -> Result<(), i32> {
    // Position and alignment pass through unparsed; the engine owns the
    // validation taxonomy and its error wording.
    let raw = RawQuery {
        id: "label".to_string(),
        anchor: anchor.to_string(),
        position: position.map(str::to_string),
        text_alignment: alignment.map(str::to_string),
        tiebreaker: None,
        multiline: multiline.then_some(true),
    };
    run_extraction(file, &raw, format)
}
