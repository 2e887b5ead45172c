use itertools::Itertools;

use crate::models::{
    comparison::{BenchmarkComparison, Revision},
    metric::{Metric, MetricCell},
};

/// Renders every highlighted metric as a markdown table, ready to paste into a PR.
pub fn markdown_summary(from: &Revision, to: &Revision, rows: &[BenchmarkComparison]) -> String {
    let from_label = from.label();
    let to_label = to.label();

    let results = rows
        .iter()
        .flat_map(|row| {
            Metric::ALL
                .into_iter()
                .map(move |metric| (row, MetricCell::new(metric, &row.last, &row.current, &row.diff)))
        })
        .filter_map(|(row, cell)| {
            let outcome = cell.highlight().status_text()?;
            Some(format!(
                "| {} | {} | {} | {} | {} | {} % | {} |",
                row.pkg_name,
                row.sub_benchmark_name,
                cell.metric.title(),
                cell.last_text(),
                cell.current_text(),
                cell.diff_text(),
                outcome
            ))
        })
        .join("\n");

    if results.is_empty() {
        return format!("No significant changes between {from_label} and {to_label}.");
    }

    format!(
        r#"| Package | Benchmark | Metric | {from_label} | {to_label} | Diff % | Outcome |
| ------- | --------- | ------ | ---- | ---- | ------ | ------- |
{results}"#
    )
}
