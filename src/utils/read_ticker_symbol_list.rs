use crate::constants::SYMBOL_COLUMN_HEADER;
use crate::models::Error;
use crate::types::TickerSymbolSet;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

/// Reads a set of ticker symbols from CSV text with a `Symbol` header column.
///
/// Other columns are ignored. Symbols are trimmed and upper-cased; blank
/// symbols are skipped.
pub fn read_ticker_symbol_list_from_string(csv: &str) -> Result<TickerSymbolSet, Error> {
    read_ticker_symbol_list_from_reader(Cursor::new(csv))
}

/// Reads a ticker symbol list from disk, decompressing `.gz` files on the fly.
pub fn read_ticker_symbol_list_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<TickerSymbolSet, Error> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let is_compressed = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("gz"));

    if is_compressed {
        read_ticker_symbol_list_from_reader(GzDecoder::new(file))
    } else {
        read_ticker_symbol_list_from_reader(file)
    }
}

fn read_ticker_symbol_list_from_reader<R: Read>(reader: R) -> Result<TickerSymbolSet, Error> {
    let mut ticker_symbols = TickerSymbolSet::new();

    let mut reader = ReaderBuilder::new()
        .has_headers(true) // Ensure headers are expected
        .flexible(true)
        .from_reader(reader);

    // Locate the symbol column by header name
    let symbol_index = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .iter()
        .position(|h| h.trim() == SYMBOL_COLUMN_HEADER)
        .ok_or_else(|| {
            Error::ParserError(format!("Missing '{}' column", SYMBOL_COLUMN_HEADER))
        })?;

    for record in reader.records() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        let symbol = record.get(symbol_index).map(str::trim).unwrap_or_default();

        if symbol.is_empty() {
            continue;
        }

        ticker_symbols.insert(symbol.to_uppercase());
    }

    Ok(ticker_symbols)
}
