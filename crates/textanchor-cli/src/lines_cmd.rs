use std::path::Path;

use textanchor::{Document, LineMatch, SearchOptions, find_lines};

use crate::cli::OutputFormat;
use crate::shared::{csv_escape, load_document};

pub fn run(
    file: &Path,
    pattern: Option<&str>,
    ignore_case: bool,
    no_regex: bool,
    format: &OutputFormat,
) -> Result<(), i32> {
    let document = load_document(file)?;

    let matches = match pattern {
        Some(pattern) => {
            let options = SearchOptions { regex: !no_regex, case_sensitive: !ignore_case };
            find_lines(&document, pattern, &options)
        }
        None => all_lines(&document),
    };

    match format {
        OutputFormat::Text => {
            println!("page\tline\ttext\tleft\ttop\tright\tbottom");
            for m in &matches {
                let quad = &m.bounding_polygon;
                println!(
                    "{}\t{}\t{}\t{:.3}\t{:.3}\t{:.3}\t{:.3}",
                    m.page_number + 1,
                    m.line_index,
                    m.text,
                    quad.left(),
                    quad.top(),
                    quad.right(),
                    quad.bottom(),
                );
            }
        }
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = matches
                .iter()
                .map(|m| {
                    let quad = &m.bounding_polygon;
                    serde_json::json!({
                        "page": m.page_number + 1,
                        "line": m.line_index,
                        "text": m.text,
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
            println!("page,line,text,left,top,right,bottom");
            for m in &matches {
                let quad = &m.bounding_polygon;
                println!(
                    "{},{},{},{:.3},{:.3},{:.3},{:.3}",
                    m.page_number + 1,
                    m.line_index,
                    csv_escape(&m.text),
                    quad.left(),
                    quad.top(),
                    quad.right(),
                    quad.bottom(),
                );
            }
        }
    }

    Ok(())
}

/// Every line of the document as a match, in document order.
fn all_lines(document: &Document) -> Vec<LineMatch> {
    let mut lines = Vec::new();
    for (page_number, page) in document.pages.iter().enumerate() {
        for (line_index, line) in page.lines.iter().enumerate() {
            lines.push(LineMatch {
                text: line.text.clone(),
                bounding_polygon: line.bounding_polygon,
                page_number,
                line_index,
            });
        }
    }
    lines
}
