//! Percentile Computation
//!
//! Linear interpolation between nearest ranks. For the 50th percentile this
//! yields the middle element for odd counts and the average of the two middle
//! elements for even counts.

/// Percentile of samples that are already sorted ascending
fn percentile_of_sorted(sorted: &[f64], percentile: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        n => {
            let p = percentile.clamp(0.0, 100.0) / 100.0;
            let rank = p * (n - 1) as f64;
            let lower_idx = rank.floor() as usize;
            let upper_idx = (lower_idx + 1).min(n - 1);
            let fraction = rank - lower_idx as f64;

            sorted[lower_idx] + fraction * (sorted[upper_idx] - sorted[lower_idx])
        }
    }
}

/// Median of samples that are already sorted ascending
#[inline]
pub fn median_of_sorted(sorted: &[f64]) -> f64 {
    percentile_of_sorted(sorted, 50.0)
}
