use std::path::Path;

use textanchor::{Document, ExtractError, ExtractedValue, RawQuery, ValueExtractor};

use crate::cli::OutputFormat;

/// Load a standardized document JSON file with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is not found,
/// cannot be read, or does not parse as a document.
pub fn load_document(file: &Path) -> Result<Document, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    let json = std::fs::read_to_string(file).map_err(|e| {
        eprintln!("Error: failed to read {}: {e}", file.display());
        1
    })?;

    serde_json::from_str(&json).map_err(|e| {
        eprintln!("Error: failed to parse document: {e}");
        1
    })
}

/// Print an extraction error and map it to an exit code.
///
/// Validation errors exit 1 (bad invocation); `AnchorNotFound` and
/// `NoMatchFound` exit 2 so scripts can tell "bad query" from "no data".
pub fn report_extract_error(e: &ExtractError) -> i32 {
    eprintln!("Error: {e}");
    match e {
        ExtractError::AnchorNotFound | ExtractError::NoMatchFound => 2,
        _ => 1,
    }
}

/// Load a document, run a raw query against it, and print the results.
pub fn run_extraction(file: &Path, raw: &RawQuery, format: &OutputFormat) -> Result<(), i32> {
    let document = load_document(file)?;
    let extractor = ValueExtractor::new(document);
    let values = extractor.extract_value(raw).map_err(|e| report_extract_error(&e))?;
    write_values(&values, format);
    Ok(())
}

/// Print extracted values in the requested format.
///
/// One output row per anchor occurrence: the anchor text, the value text,
/// and the value line's box edges.
pub fn write_values(values: &[ExtractedValue], format: &OutputFormat) {
    match format {
        OutputFormat::Text => {
            println!("anchor\tvalue\tleft\ttop\tright\tbottom");
            for v in values {
                let quad = &v.value.bounding_polygon;
                println!(
                    "{}\t{}\t{:.3}\t{:.3}\t{:.3}\t{:.3}",
                    v.anchor.text,
                    v.value.text,
                    quad.left(),
                    quad.top(),
                    quad.right(),
                    quad.bottom(),
                );
            }
        }
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = values
                .iter()
                .map(|v| {
                    let quad = &v.value.bounding_polygon;
                    serde_json::json!({
                        "anchor": v.anchor.text,
                        "value": v.value.text,
                        "left": quad.left(),
                        "top": quad.top(),
                        "right": quad.right(),
                        "bottom": quad.bottom(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string(&rows).unwrap());
        }
        OutputFormat::Csv => {
            println!("anchor,value,left,top,right,bottom");
            for v in values {
                let quad = &v.value.bounding_polygon;
                println!(
                    "{},{},{:.3},{:.3},{:.3},{:.3}",
                    csv_escape(&v.anchor.text),
                    csv_escape(&v.value.text),
                    quad.left(),
                    quad.top(),
                    quad.right(),
                    quad.bottom(),
                );
            }
        }
    }
}

/// Escape a string for CSV output.
///
/// If the text contains commas, double quotes, or newlines, wraps it in
/// double quotes and escapes any internal double quotes by doubling them.
pub fn csv_escape(text: &str) -> String {
    if text.contains(',') || text.contains('"') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_escape_plain_text() {
        assert_eq!(csv_escape("hello"), "hello");
    }

    #[test]
    fn csv_escape_with_comma() {
        assert_eq!(csv_escape("19,748lbs"), "\"19,748lbs\"");
    }

    #[test]
    fn csv_escape_with_quotes() {
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn csv_escape_with_newline() {
        assert_eq!(csv_escape("line1\nline2"), "\"line1\nline2\"");
    }

    #[test]
    fn csv_escape_empty_string() {
        assert_eq!(csv_escape(""), "");
    }

    #[test]
    fn load_document_file_not_found() {
        let result = load_document(Path::new("/nonexistent/document.json"));
        match result {
            Err(code) => assert_eq!(code, 1),
            Ok(_) => panic!("expected error"),
        }
    }

    #[test]
    fn extraction_failures_map_to_exit_code_2() {
        assert_eq!(report_extract_error(&ExtractError::AnchorNotFound), 2);
        assert_eq!(report_extract_error(&ExtractError::NoMatchFound), 2);
    }

    #[test]
    fn validation_failures_map_to_exit_code_1() {
        assert_eq!(report_extract_error(&ExtractError::UnsupportedId), 1);
        assert_eq!(report_extract_error(&ExtractError::UnsupportedLabelPosition), 1);
        assert_eq!(report_extract_error(&ExtractError::UnsupportedTiebreaker), 1);
    }
}
