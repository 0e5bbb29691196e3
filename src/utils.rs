pub mod read_documents;
pub use read_documents::{
    read_documents_from_lines, read_documents_from_listing_json, read_documents_from_path,
};

pub mod read_ticker_symbol_list;
pub use read_ticker_symbol_list::{
    read_ticker_symbol_list_from_path, read_ticker_symbol_list_from_string,
};

pub mod round_to_decimal_places;
pub use round_to_decimal_places::round_to_decimal_places;

pub mod sort_results;
pub use sort_results::sort_results;

pub mod top_results;
pub use top_results::top_results;

pub mod write_report_csv;
pub use write_report_csv::{write_report_csv, write_report_csv_to_path};
