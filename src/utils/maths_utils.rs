use itertools::Itertools;

use crate::config::WINDOW;

/// Mean with exactly two decimals. An empty window reads "0.00".
/// Ties round away from zero, so a mean of 3.625 reads "3.63".
pub fn format_average(values: &[i64]) -> String {
    if values.is_empty() {
        return WINDOW.empty_average.to_string();
    }
    let sum: i128 = values.iter().map(|&v| i128::from(v)).sum();
    let len = values.len() as i128;

    // Mean scaled by 100, rounded on integers to avoid float ties.
    let scaled = sum.abs() * 100;
    let cents = (2 * scaled + len) / (2 * len);
    let sign = if sum < 0 && cents != 0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}

/// Renders `[a, b, c]`, or `[]` for nothing.
pub fn format_numbers(values: &[i64]) -> String {
    format!("[{}]", values.iter().join(", "))
}
