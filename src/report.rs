use serde::Serialize;
use std::collections::BTreeMap;

use crate::model::{Category, Statistic};
use crate::stats::SeriesSummary;

pub const THROUGHPUT_KEY: &str = "avg_tput";

/// Flat metric-name to value mapping, the final output of a run. The key set
/// is fixed by configuration: one `<statistic>_<Category>` entry per
/// configured combination plus `avg_tput`, never more or fewer.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct MetricsReport(BTreeMap<String, f64>);

impl MetricsReport {
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Single-line JSON rendering. Values are emitted at full float
    /// precision; rounding is a presentation concern left to consumers.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.0)
    }
}

pub fn assemble(summaries: &[(Category, SeriesSummary)], avg_tput: f64) -> MetricsReport {
    let mut entries = BTreeMap::new();
    for (category, summary) in summaries {
        let label = category.label();
        for stat in Statistic::all_in_order() {
            entries.insert(
                format!("{}_{}", stat.name(), label),
                summary.value_for(*stat),
            );
        }
    }
    entries.insert(THROUGHPUT_KEY.to_string(), avg_tput);
    MetricsReport(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OpKind;
    use crate::stats::summarize;

    fn summary(values: &[f64]) -> SeriesSummary {
        summarize("test", values).unwrap()
    }

    #[test]
    fn key_set_is_determined_by_configuration() {
        let summaries = vec![
            (Category::sharded(OpKind::Read, 0), summary(&[1.0, 2.0])),
            (Category::sharded(OpKind::Write, 0), summary(&[3.0, 4.0])),
        ];
        let report = assemble(&summaries, 99.0);

        // 7 statistics per category plus the throughput entry.
        assert_eq!(report.len(), 2 * 7 + 1);
        assert!(report.get("mean_Read0").is_some());
        assert!(report.get("p9999_Write0").is_some());
        assert_eq!(report.get(THROUGHPUT_KEY), Some(99.0));
        assert!(report.get("mean_Read1").is_none());
    }

    #[test]
    fn json_rendering_is_one_line() {
        let summaries = vec![(Category::base(OpKind::Read), summary(&[5.0, 15.0]))];
        let json = assemble(&summaries, 150.0).to_json_line().unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"p50_Read\":10.0"));
        assert!(json.contains("\"avg_tput\":150.0"));
    }
}
