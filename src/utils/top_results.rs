use crate::models::ResultRow;

/// Leading `n` rows of an already ranked report (or all of them if fewer).
pub fn top_results(results: &[ResultRow], n: usize) -> &[ResultRow] {
    &results[..n.min(results.len())]
}
