use crate::models::TokenScannerConfig;

pub const DEFAULT_TOKEN_SCANNER_CONFIG: &TokenScannerConfig = &TokenScannerConfig {
    min_token_length: 2,
    max_token_length: 5,
};
