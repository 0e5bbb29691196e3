use crate::models::{Document, Error};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Deserialize)]
struct ListingData {
    children: Vec<ListingChild>,
}

#[derive(Deserialize)]
struct ListingChild {
    data: Value,
}

/// Parses a Reddit-style listing (`{"data": {"children": [{"data": {"title": ...}}]}}`).
///
/// Entries keep their listing order. An entry without a string `title` fails
/// the whole listing with `Error::MalformedDocument`.
pub fn read_documents_from_listing_json(json: &str) -> Result<Vec<Document>, Error> {
    let listing: Listing = serde_json::from_str(json)
        .map_err(|e| Error::ParserError(format!("Failed to parse listing: {}", e)))?;

    listing
        .data
        .children
        .into_iter()
        .enumerate()
        .map(|(index, child)| {
            child
                .data
                .get("title")
                .and_then(Value::as_str)
                .map(Document::new)
                .ok_or_else(|| {
                    Error::MalformedDocument(format!(
                        "Listing entry {} is missing a string 'title' field",
                        index
                    ))
                })
        })
        .collect()
}

/// Treats each non-blank line as one document title.
pub fn read_documents_from_lines(text: &str) -> Vec<Document> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Document::new)
        .collect()
}

/// Reads documents from a file: `.json` files are parsed as listings, anything
/// else as one title per line.
pub fn read_documents_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Document>, Error> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|e| {
        Error::RetrievalFailure(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let is_listing = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

    if is_listing {
        read_documents_from_listing_json(&contents)
    } else {
        Ok(read_documents_from_lines(&contents))
    }
}
