//! Statistical functions
//!
//! These operate on the numeric members of a range only. Filtering out text
//! and empty members happens in the evaluator before they get here.

/// SUM - arithmetic sum, 0 for no members
pub fn fn_sum(numbers: &[f64]) -> f64 {
    numbers.iter().sum()
}

/// AVERAGE - sum divided by count
pub fn fn_average(numbers: &[f64]) -> Option<f64> {
    if numbers.is_empty() {
        return None;
    }
    Some(fn_sum(numbers) / numbers.len() as f64)
}

/// MIN - smallest member
pub fn fn_min(numbers: &[f64]) -> Option<f64> {
    numbers.iter().copied().reduce(f64::min)
}

/// MAX - largest member
pub fn fn_max(numbers: &[f64]) -> Option<f64> {
    numbers.iter().copied().reduce(f64::max)
}
