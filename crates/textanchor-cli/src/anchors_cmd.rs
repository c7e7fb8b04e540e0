use std::path::Path;

use textanchor::AnchorIndex;

use crate::cli::OutputFormat;
use crate::shared::{csv_escape, load_document};

pub fn run(file: &Path, format: &OutputFormat) -> Result<(), i32> {
    let document = load_document(file)?;
    let index = AnchorIndex::build(&document);

    let mut anchors: Vec<(&str, usize)> = index.anchors().collect();
    anchors.sort_unstable();

    match format {
        OutputFormat::Text => {
            println!("anchor\tcount");
            for (anchor, count) in &anchors {
                println!("{anchor}\t{count}");
            }
        }
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = anchors
                .iter()
                .map(|(anchor, count)| serde_json::json!({ "anchor": anchor, "count": count }))
                .collect();
            println!("{}", serde_json::to_string(&rows).unwrap());
        }
        OutputFormat::Csv => {
            println!("anchor,count");
            for (anchor, count) in &anchors {
                println!("{},{count}", csv_escape(anchor));
            }
        }
    }

    Ok(())
}
