/// Rounds `value` to `decimal_places`, with ties rounded away from zero.
///
/// # Example
/// ```
/// use ticker_sentiment::utils::round_to_decimal_places;
///
/// assert_eq!(round_to_decimal_places(0.12345, 3), 0.123);
/// assert_eq!(round_to_decimal_places(-0.25, 1), -0.3);
/// ```
pub fn round_to_decimal_places(value: f64, decimal_places: i32) -> f64 {
    let factor = 10f64.powi(decimal_places);

    (value * factor).round() / factor
}
