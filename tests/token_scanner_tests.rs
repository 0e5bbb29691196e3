use ticker_sentiment::{TokenScanner, TokenScannerConfig};

#[cfg(test)]
mod token_scanner_tests {
    use super::*;

    #[test]
    fn test_scan_preserves_order_and_duplicates() {
        let scanner = TokenScanner::ticker_symbol_scanner();

        let tokens = scanner.scan("TSLA and GME both mooning, TSLA again");
        assert_eq!(tokens, vec!["TSLA", "GME", "TSLA"]);
    }

    #[test]
    fn test_scan_empty_string() {
        let scanner = TokenScanner::ticker_symbol_scanner();

        assert_eq!(scanner.scan(""), Vec::<String>::new());
    }

    #[test]
    fn test_scan_regular_sentence() {
        let scanner = TokenScanner::ticker_symbol_scanner();

        assert!(scanner.scan("just a regular sentence").is_empty());
    }

    #[test]
    fn test_scan_never_matches_inside_longer_runs() {
        let scanner = TokenScanner::ticker_symbol_scanner();

        assert!(scanner.scan("NASDAQ").is_empty());
        assert!(scanner.scan("WALLSTREETBETS rally").is_empty());
        assert_eq!(scanner.scan("NASDAQ vs NDX"), vec!["NDX"]);
    }

    #[test]
    fn test_scan_length_bounds() {
        let scanner = TokenScanner::ticker_symbol_scanner();

        assert_eq!(
            scanner.scan("A BA GME TSLA GOOGL NVIDIA"),
            vec!["BA", "GME", "TSLA", "GOOGL"]
        );
    }

    #[test]
    fn test_scan_is_case_sensitive() {
        let scanner = TokenScanner::ticker_symbol_scanner();

        assert!(scanner.scan("tsla gme Tsla").is_empty());
        assert!(scanner.scan("TSla").is_empty());
    }

    #[test]
    fn test_scan_punctuation_boundaries() {
        let scanner = TokenScanner::ticker_symbol_scanner();

        assert_eq!(
            scanner.scan("$AAPL (NVDA) AMD/INTC, AMC's \"META\"."),
            vec!["AAPL", "NVDA", "AMD", "INTC", "AMC", "META"]
        );
    }

    #[test]
    fn test_scan_rejects_runs_glued_to_word_characters() {
        let scanner = TokenScanner::ticker_symbol_scanner();

        assert!(scanner.scan("TSLA2 2TSLA GME_x x_GME aAMC AMCé").is_empty());
    }

    #[test]
    fn test_scan_handles_multibyte_neighbours() {
        let scanner = TokenScanner::ticker_symbol_scanner();

        assert_eq!(scanner.scan("🚀GME🚀 — AMC…"), vec!["GME", "AMC"]);
    }

    #[test]
    fn test_scan_with_custom_bounds() {
        let scanner = TokenScanner::new(&TokenScannerConfig {
            min_token_length: 1,
            max_token_length: 6,
        });

        assert_eq!(scanner.scan("F NASDAQ TSLAXXX"), vec!["F", "NASDAQ"]);
    }

    #[test]
    fn test_scan_output_shape_and_determinism() {
        let scanner = TokenScanner::ticker_symbol_scanner();
        let texts = [
            "ABCDEF ABCDE abcde AB A 12AB AB12 _AB_ AB-CD",
            "YOLO!!! GME/AMC/BB to the 🌕, DD inside",
            "",
        ];

        for text in texts {
            let first = scanner.scan(text);
            let second = scanner.scan(text);
            assert_eq!(first, second);

            for token in &first {
                assert!((2..=5).contains(&token.len()), "{:?}", token);
                assert!(token.chars().all(|c| c.is_ascii_uppercase()), "{:?}", token);
            }
        }
    }
}
