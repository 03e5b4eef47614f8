//! Distribution statistics and correlation.
//!
//! - Median and percentiles use linear interpolation between closest ranks
//!   (R-7, the default in R, NumPy and pandas).
//! - Standard deviation is the sample deviation (Bessel's correction),
//!   accumulated with Welford's algorithm.
//! - Correlation is Pearson's r.

use serde::{Deserialize, Serialize};

/// Spread of one metric across a range
///
/// **Public** - part of `RangeInsights`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub median: f64,

    /// `None` with fewer than two values
    pub std_dev: Option<f64>,

    pub p90: f64,
    pub p95: f64,
}

impl Distribution {
    /// Summarize a set of values; `None` when empty
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        Some(Self {
            median: quantile_sorted(&sorted, 0.5)?,
            std_dev: sample_std_dev(values),
            p90: quantile_sorted(&sorted, 0.9)?,
            p95: quantile_sorted(&sorted, 0.95)?,
        })
    }
}

/// Quantile of already sorted data
///
/// **Public** - `p` must be within `[0, 1]`
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&p) {
        return None;
    }

    let h = (sorted.len() - 1) as f64 * p;
    let lower = h.floor() as usize;
    let upper = h.ceil() as usize;
    let fraction = h - lower as f64;

    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

/// Sample standard deviation
///
/// **Public** - `None` with fewer than two values
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let mut count = 0.0;
    let mut mean = 0.0;
    let mut m2 = 0.0;
    for &value in values {
        count += 1.0;
        let delta = value - mean;
        mean += delta / count;
        m2 += delta * (value - mean);
    }

    Some((m2 / (count - 1.0)).sqrt())
}

/// Pearson correlation coefficient
///
/// **Public** - `None` for mismatched lengths, fewer than two points,
/// or a constant column
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    let n = x.len();
    if n != y.len() || n < 2 {
        return None;
    }

    let mean_x = x.iter().sum::<f64>() / n as f64;
    let mean_y = y.iter().sum::<f64>() / n as f64;

    let mut numerator = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;

    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        numerator += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    let denominator = (sum_sq_x * sum_sq_y).sqrt();
    if denominator == 0.0 {
        None
    } else {
        Some((numerator / denominator).clamp(-1.0, 1.0))
    }
}

/// Column names of the correlation matrix, in order
pub const CORRELATION_COLUMNS: &[&str] = &[
    "starting_number",
    "sequence_length",
    "max_value",
    "steps_to_peak",
    "total_steps",
];

/// Pairwise Pearson correlations
///
/// **Public** - square, symmetric; cells are `None` where undefined
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Build from named columns of equal length
    ///
    /// **Public** - `None` with fewer than two rows
    pub fn from_columns(columns: &[(&str, Vec<f64>)]) -> Option<Self> {
        let rows = columns.first().map(|(_, values)| values.len())?;
        if rows < 2 {
            return None;
        }

        let values = columns
            .iter()
            .map(|(_, a)| columns.iter().map(|(_, b)| pearson(a, b)).collect())
            .collect();

        Some(Self {
            columns: columns.iter().map(|(name, _)| name.to_string()).collect(),
            values,
        })
    }

    /// Look up a coefficient by column names
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        self.values[i][j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantile_interpolates() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile_sorted(&sorted, 0.5), Some(2.5));
        assert_eq!(quantile_sorted(&sorted, 0.0), Some(1.0));
        assert_eq!(quantile_sorted(&sorted, 1.0), Some(4.0));
        assert_eq!(quantile_sorted(&[], 0.5), None);
        assert_eq!(quantile_sorted(&sorted, 1.5), None);
    }

    #[test]
    fn test_sample_std_dev() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let sd = sample_std_dev(&values).unwrap();
        assert!((sd - 4.571428571428571_f64.sqrt()).abs() < 1e-12);
        assert_eq!(sample_std_dev(&[3.0]), None);
    }

    #[test]
    fn test_pearson() {
        let x = [1.0, 2.0, 3.0, 4.0];
        assert!((pearson(&x, &[2.0, 4.0, 6.0, 8.0]).unwrap() - 1.0).abs() < 1e-12);
        assert!((pearson(&x, &[8.0, 6.0, 4.0, 2.0]).unwrap() + 1.0).abs() < 1e-12);
        assert_eq!(pearson(&x, &[5.0, 5.0, 5.0, 5.0]), None);
        assert_eq!(pearson(&x, &[1.0]), None);
    }

    #[test]
    fn test_distribution() {
        let dist = Distribution::from_values(&[5.0, 1.0, 3.0]).unwrap();
        assert_eq!(dist.median, 3.0);
        assert_eq!(dist.std_dev, Some(2.0));
        assert!(Distribution::from_values(&[]).is_none());
    }

    #[test]
    fn test_correlation_matrix_lookup() {
        let matrix = CorrelationMatrix::from_columns(&[
            ("a", vec![1.0, 2.0, 3.0]),
            ("b", vec![3.0, 2.0, 1.0]),
        ])
        .unwrap();

        assert_eq!(matrix.get("a", "a").map(f64::round), Some(1.0));
        assert_eq!(matrix.get("a", "b").map(f64::round), Some(-1.0));
        assert_eq!(matrix.get("a", "missing"), None);
    }
}
