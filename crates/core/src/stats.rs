//! Descriptive statistics summary
//!
//! One pure function computing the full superset of summary fields: basic
//! aggregates, sample variance and standard deviation, geometric and harmonic
//! means (defined only for all-positive input), and moment-based skewness and
//! excess kurtosis (defined only when the data has nonzero spread).

use serde::Serialize;

/// Summary statistics for a numeric sample
#[derive(Debug, Clone, Serialize)]
pub struct StatsSummary {
    pub count: usize,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub mean: f64,
    pub median: f64,
    /// Sample variance (n-1 denominator); 0 for a single value
    pub variance: f64,
    pub std_dev: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometric_mean: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harmonic_mean: Option<f64>,
    /// Population moment skewness (g1); None when spread is zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skewness: Option<f64>,
    /// Population excess kurtosis (g2); None when spread is zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kurtosis: Option<f64>,
}

/// Compute the summary for a sample.
///
/// Returns an error for an empty sample or when any value is non-finite.
pub fn summarize(values: &[f64]) -> Result<StatsSummary, String> {
    if values.is_empty() {
        return Err("No values to summarize".to_string());
    }

    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(format!("Non-finite value in input: {bad}"));
    }

    let count = values.len();
    let n = count as f64;
    let sum: f64 = values.iter().sum();
    let mean = sum / n;

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let median = if count % 2 == 1 {
        sorted[count / 2]
    } else {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    };

    let sum_sq_dev: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    let variance = if count > 1 { sum_sq_dev / (n - 1.0) } else { 0.0 };
    let std_dev = variance.sqrt();

    let all_positive = values.iter().all(|v| *v > 0.0);
    let geometric_mean = if all_positive {
        Some((values.iter().map(|v| v.ln()).sum::<f64>() / n).exp())
    } else {
        None
    };
    let harmonic_mean = if all_positive {
        Some(n / values.iter().map(|v| 1.0 / v).sum::<f64>())
    } else {
        None
    };

    // Population central moments for the shape statistics.
    let m2 = sum_sq_dev / n;
    let (skewness, kurtosis) = if m2 > 0.0 {
        let m3: f64 = values.iter().map(|v| (v - mean).powi(3)).sum::<f64>() / n;
        let m4: f64 = values.iter().map(|v| (v - mean).powi(4)).sum::<f64>() / n;
        (Some(m3 / m2.powf(1.5)), Some(m4 / (m2 * m2) - 3.0))
    } else {
        (None, None)
    };

    Ok(StatsSummary {
        count,
        sum,
        min,
        max,
        range: max - min,
        mean,
        median,
        variance,
        std_dev,
        geometric_mean,
        harmonic_mean,
        skewness,
        kurtosis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_input_is_error() {
        assert!(summarize(&[]).is_err());
    }

    #[test]
    fn test_non_finite_input_is_error() {
        assert!(summarize(&[1.0, f64::NAN]).is_err());
        assert!(summarize(&[1.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn test_basic_aggregates() {
        let summary = summarize(&[2.0, 4.0, 6.0, 8.0]).unwrap();
        assert_eq!(summary.count, 4);
        assert!(close(summary.sum, 20.0));
        assert!(close(summary.min, 2.0));
        assert!(close(summary.max, 8.0));
        assert!(close(summary.range, 6.0));
        assert!(close(summary.mean, 5.0));
    }

    #[test]
    fn test_median_odd_and_even() {
        let summary = summarize(&[5.0, 1.0, 3.0]).unwrap();
        assert!(close(summary.median, 3.0));

        let summary = summarize(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert!(close(summary.median, 2.5));
    }

    #[test]
    fn test_sample_variance_and_std_dev() {
        // Sample variance of [2, 4, 6, 8] is 20/3.
        let summary = summarize(&[2.0, 4.0, 6.0, 8.0]).unwrap();
        assert!(close(summary.variance, 20.0 / 3.0));
        assert!(close(summary.std_dev, (20.0f64 / 3.0).sqrt()));
    }

    #[test]
    fn test_single_value() {
        let summary = summarize(&[42.0]).unwrap();
        assert_eq!(summary.count, 1);
        assert!(close(summary.median, 42.0));
        assert!(close(summary.variance, 0.0));
        assert!(summary.skewness.is_none());
        assert!(summary.kurtosis.is_none());
    }

    #[test]
    fn test_geometric_and_harmonic_means() {
        let summary = summarize(&[1.0, 4.0, 16.0]).unwrap();
        assert!(close(summary.geometric_mean.unwrap(), 4.0));
        assert!(close(summary.harmonic_mean.unwrap(), 3.0 / (1.0 + 0.25 + 0.0625)));
    }

    #[test]
    fn test_means_undefined_for_non_positive_input() {
        let summary = summarize(&[-1.0, 2.0, 3.0]).unwrap();
        assert!(summary.geometric_mean.is_none());
        assert!(summary.harmonic_mean.is_none());

        let summary = summarize(&[0.0, 2.0]).unwrap();
        assert!(summary.geometric_mean.is_none());
    }

    #[test]
    fn test_symmetric_data_has_zero_skewness() {
        let summary = summarize(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!(close(summary.skewness.unwrap(), 0.0));
    }

    #[test]
    fn test_uniform_five_point_kurtosis() {
        // Discrete uniform over five equally spaced points: g2 = -1.3.
        let summary = summarize(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!(close(summary.kurtosis.unwrap(), -1.3));
    }

    #[test]
    fn test_right_skewed_data_positive_skewness() {
        let summary = summarize(&[1.0, 1.0, 1.0, 1.0, 10.0]).unwrap();
        assert!(summary.skewness.unwrap() > 0.0);
    }

    #[test]
    fn test_undefined_fields_are_omitted_from_json() {
        let summary = summarize(&[3.0, 3.0]).unwrap();
        let json = serde_json::to_value(&summary).unwrap();

        assert!(json.get("skewness").is_none());
        assert!(json.get("kurtosis").is_none());
        assert_eq!(json["count"], 2);
    }

    #[test]
    fn test_constant_data_shape_stats_undefined() {
        let summary = summarize(&[3.0, 3.0, 3.0]).unwrap();
        assert!(close(summary.variance, 0.0));
        assert!(summary.skewness.is_none());
        assert!(summary.kurtosis.is_none());
    }
}
