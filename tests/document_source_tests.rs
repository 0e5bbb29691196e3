use std::fs;
use tempfile::tempdir;
use ticker_sentiment::utils::{
    read_documents_from_lines, read_documents_from_listing_json, read_documents_from_path,
};
use ticker_sentiment::{Document, Error};

const LISTING_JSON: &str = r#"{
    "kind": "Listing",
    "data": {
        "after": "t3_abc",
        "children": [
            { "kind": "t3", "data": { "title": "TSLA to the moon!", "score": 420 } },
            { "kind": "t3", "data": { "title": "GME earnings thread", "ups": 69 } }
        ]
    }
}"#;

#[cfg(test)]
mod document_source_tests {
    use super::*;

    #[test]
    fn test_listing_titles_in_order() {
        let documents = read_documents_from_listing_json(LISTING_JSON).unwrap();

        assert_eq!(
            documents,
            vec![
                Document::new("TSLA to the moon!"),
                Document::new("GME earnings thread")
            ]
        );
    }

    #[test]
    fn test_listing_entry_without_title_is_malformed() {
        let json = r#"{"data": {"children": [
            {"data": {"title": "AMC"}},
            {"data": {"selftext": "no title"}}
        ]}}"#;

        match read_documents_from_listing_json(json) {
            Err(Error::MalformedDocument(msg)) => assert!(msg.contains("1"), "{}", msg),
            other => panic!("Expected MalformedDocument, got {:?}", other),
        }
    }

    #[test]
    fn test_listing_non_string_title_is_malformed() {
        let json = r#"{"data": {"children": [{"data": {"title": 42}}]}}"#;

        assert!(matches!(
            read_documents_from_listing_json(json),
            Err(Error::MalformedDocument(_))
        ));
    }

    #[test]
    fn test_listing_invalid_json_is_parser_error() {
        assert!(matches!(
            read_documents_from_listing_json("{not json"),
            Err(Error::ParserError(_))
        ));
        assert!(matches!(
            read_documents_from_listing_json(r#"{"data": {}}"#),
            Err(Error::ParserError(_))
        ));
    }

    #[test]
    fn test_empty_listing() {
        let documents = read_documents_from_listing_json(r#"{"data": {"children": []}}"#).unwrap();

        assert!(documents.is_empty());
    }

    #[test]
    fn test_lines_skip_blank_entries() {
        let documents = read_documents_from_lines("GME\n\n   \n  AMC squeeze  \r\n");

        assert_eq!(
            documents,
            vec![Document::new("GME"), Document::new("AMC squeeze")]
        );
    }

    #[test]
    fn test_read_from_path_by_extension() {
        let dir = tempdir().unwrap();

        let listing_path = dir.path().join("hot.json");
        fs::write(&listing_path, LISTING_JSON).unwrap();
        assert_eq!(read_documents_from_path(&listing_path).unwrap().len(), 2);

        let lines_path = dir.path().join("titles.txt");
        fs::write(&lines_path, "NVDA\nAMD\nINTC\n").unwrap();
        assert_eq!(read_documents_from_path(&lines_path).unwrap().len(), 3);
    }

    #[test]
    fn test_read_missing_path_is_retrieval_failure() {
        let dir = tempdir().unwrap();

        assert!(matches!(
            read_documents_from_path(dir.path().join("missing.json")),
            Err(Error::RetrievalFailure(_))
        ));
    }
}
