use std::cmp::Ordering;

use crate::error::MetricsError;
use crate::model::Statistic;

/// Distributional summary of one sample series.
#[derive(Debug, Clone)]
pub struct SeriesSummary {
    pub mean: f64,
    pub p50: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
    pub p999: f64,
    pub p9999: f64,
    pub cnt: usize,
}

impl SeriesSummary {
    pub fn value_for(&self, stat: Statistic) -> f64 {
        match stat {
            Statistic::Mean => self.mean,
            Statistic::P50 => self.p50,
            Statistic::P90 => self.p90,
            Statistic::P95 => self.p95,
            Statistic::P99 => self.p99,
            Statistic::P999 => self.p999,
            Statistic::P9999 => self.p9999,
        }
    }
}

/// Mean and the fixed percentile set for one category's samples. An empty
/// series has no defined statistics and fails rather than yielding 0 or NaN.
pub fn summarize(category: &str, values: &[f64]) -> Result<SeriesSummary, MetricsError> {
    if values.is_empty() {
        return Err(MetricsError::EmptySeries {
            category: category.to_string(),
        });
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let sum: f64 = sorted.iter().sum();
    let pct = |stat: Statistic| percentile_sorted(&sorted, stat.rank().unwrap());
    Ok(SeriesSummary {
        mean: sum / (sorted.len() as f64),
        p50: pct(Statistic::P50),
        p90: pct(Statistic::P90),
        p95: pct(Statistic::P95),
        p99: pct(Statistic::P99),
        p999: pct(Statistic::P999),
        p9999: pct(Statistic::P9999),
        cnt: sorted.len(),
    })
}

/// Arithmetic mean of one series, for series that only need the average.
pub fn mean_of(category: &str, values: &[f64]) -> Result<f64, MetricsError> {
    if values.is_empty() {
        return Err(MetricsError::EmptySeries {
            category: category.to_string(),
        });
    }
    let sum: f64 = values.iter().sum();
    Ok(sum / (values.len() as f64))
}

/// Percentile at `rank` percent via linear interpolation between adjacent
/// order statistics: position (n-1) * rank/100, fractional part interpolated.
/// The same rule for every series keeps runs comparable.
fn percentile_sorted(sorted: &[f64], rank: f64) -> f64 {
    let pos = ((sorted.len() - 1) as f64) * rank / 100.0;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - (lo as f64);
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singleton_series_percentiles_equal_the_sample() {
        let s = summarize("Read", &[42.5]).unwrap();
        assert_eq!(s.p50, 42.5);
        assert_eq!(s.p9999, 42.5);
        assert_eq!(s.mean, 42.5);
        assert_eq!(s.cnt, 1);
    }

    #[test]
    fn two_sorted_samples_interpolate_linearly() {
        let s = summarize("Read", &[5.0, 15.0]).unwrap();
        assert_eq!(s.mean, 10.0);
        assert_eq!(s.p50, 10.0);
        assert_eq!(s.p90, 14.0);
    }

    #[test]
    fn percentiles_are_monotone_in_rank() {
        let values: Vec<f64> = (0..1000).map(|i| ((i * 7919) % 1000) as f64).collect();
        let s = summarize("Write0", &values).unwrap();
        assert!(s.p50 <= s.p90);
        assert!(s.p90 <= s.p95);
        assert!(s.p95 <= s.p99);
        assert!(s.p99 <= s.p999);
        assert!(s.p999 <= s.p9999);
    }

    #[test]
    fn mean_is_order_invariant() {
        let forward = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        let mut reversed = forward;
        reversed.reverse();
        assert_eq!(
            summarize("Read", &forward).unwrap().mean,
            summarize("Read", &reversed).unwrap().mean
        );
    }

    #[test]
    fn empty_series_is_an_error() {
        match summarize("Read", &[]) {
            Err(MetricsError::EmptySeries { category }) => assert_eq!(category, "Read"),
            other => panic!("expected EmptySeries, got {other:?}"),
        }
        assert!(mean_of("tput", &[]).is_err());
    }

    #[test]
    fn mean_of_averages_all_samples() {
        assert_eq!(mean_of("tput", &[100.0, 200.0]).unwrap(), 150.0);
    }
}
