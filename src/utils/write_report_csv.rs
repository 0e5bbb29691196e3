use crate::models::{Error, ResultRow};
use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the report as CSV: a `ticker,mentions,average_sentiment` header,
/// then one line per row in the given order.
pub fn write_report_csv<W: Write>(writer: W, results: &[ResultRow]) -> Result<(), Error> {
    let mut csv_writer = Writer::from_writer(writer);

    if results.is_empty() {
        // Serializing no rows would omit the header
        csv_writer.write_record(["ticker", "mentions", "average_sentiment"])?;
    }

    for result in results {
        csv_writer.serialize(result)?;
    }

    csv_writer.flush()?;

    Ok(())
}

pub fn write_report_csv_to_path<P: AsRef<Path>>(
    path: P,
    results: &[ResultRow],
) -> Result<(), Error> {
    let file = File::create(path)?;

    write_report_csv(file, results)
}
