//! Small descriptive statistics shared by the classifier and the denoiser.

use std::cmp::Ordering;

/// Arithmetic mean; `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by `n`).
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

/// First and third quartile of an unsorted sample.
pub fn quartiles(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    Some((percentile_sorted(&sorted, 25.0), percentile_sorted(&sorted, 75.0)))
}

fn percentile_sorted(sorted: &[f64], q: f64) -> f64 {
    let last = sorted.len() - 1;
    let rank = (q.clamp(0.0, 100.0) / 100.0) * last as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(last);
    let frac = rank - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_dev_is_population_deviation() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&values), 5.0);
        assert_eq!(std_dev(&values), 2.0);
    }

    #[test]
    fn quartiles_interpolate_linearly() {
        let values = [4.0, 1.0, 3.0, 2.0];
        let (q1, q3) = quartiles(&values).unwrap();
        assert!((q1 - 1.75).abs() < 1e-12);
        assert!((q3 - 3.25).abs() < 1e-12);
    }

    #[test]
    fn empty_sample_has_no_quartiles() {
        assert_eq!(quartiles(&[]), None);
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(std_dev(&[]), 0.0);
    }

    #[test]
    fn single_value_is_both_quartiles() {
        assert_eq!(quartiles(&[3.5]), Some((3.5, 3.5)));
    }
}
