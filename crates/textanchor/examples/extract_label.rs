//! Extract a labelled value from a standardized OCR document.
//!
//! Usage: `cargo run --example extract_label --features serde -- <document.json>`

use textanchor::{Direction, HorizontalDirection, LabelQuery, ValueExtractor};

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: extract_label <document.json>");
        std::process::exit(1);
    });

    let json = std::fs::read_to_string(&path).unwrap_or_else(|e| {
        eprintln!("Error reading {path}: {e}");
        std::process::exit(1);
    });
    let document = serde_json::from_str(&json).unwrap_or_else(|e| {
        eprintln!("Error parsing document: {e}");
        std::process::exit(1);
    });

    let extractor = ValueExtractor::new(document);
    let query = LabelQuery {
        anchor: "distance".to_string(),
        position: Direction::Below,
        text_alignment: HorizontalDirection::Left,
        multiline: false,
    };

    match extractor.extract_label(&query) {
        Ok(values) => {
            for value in values {
                println!("{} -> {}", value.anchor.text, value.value.text);
            }
        }
        Err(e) => {
            eprintln!("Extraction failed: {e}");
            std::process::exit(1);
        }
    }
}
