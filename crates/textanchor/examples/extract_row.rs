//! Extract a row value from a standardized OCR document.
//!
//! Usage: `cargo run --example extract_row --features serde -- <document.json>`

use textanchor::{HorizontalDirection, RowQuery, Tiebreaker, ValueExtractor};

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: extract_row <document.json>");
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
    let query = RowQuery {
        anchor: "line haul".to_string(),
        position: HorizontalDirection::Right,
        tiebreaker: Tiebreaker::First,
    };

    match extractor.extract_row(&query) {
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
