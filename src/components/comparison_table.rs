use byte_unit::{Byte, UnitType};
use dioxus::prelude::*;

use crate::models::{
    comparison::{BenchmarkComparison, Revision},
    metric::{Metric, MetricCell},
};

#[component]
pub fn ComparisonTable(from: Revision, to: Revision, rows: Vec<BenchmarkComparison>) -> Element {
    let from_label = from.label();
    let to_label = to.label();

    rsx! {
        div { class: "card",
            table { class: "w-full border-collapse comparison",
                thead {
                    tr {
                        th { scope: "col", "Package" }
                        th { scope: "col", "Benchmark Name" }
                        for metric in Metric::ALL {
                            th { scope: "col", colspan: "3", {metric.title()} }
                        }
                    }
                }
                tbody {
                    tr {
                        th { scope: "col" }
                        th { scope: "col" }
                        for _ in Metric::ALL {
                            th { scope: "col", "{from_label}" }
                            th { scope: "col", "{to_label}" }
                            th { scope: "col", "Diff %" }
                        }
                    }
                    for (i, row) in rows.iter().enumerate() {
                        tr { key: "{i}", class: "w-full group hover:bg-gray-400 border-[1px]",
                            td { "{row.pkg_name}" }
                            td { "{row.sub_benchmark_name}" }
                            for metric in Metric::ALL {
                                MetricCells { cell: MetricCell::new(metric, &row.last, &row.current, &row.diff) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Baseline, current and diff cells of one metric.
#[component]
fn MetricCells(cell: MetricCell) -> Element {
    let highlight = cell.highlight();
    let last = cell.last_text();
    let current = cell.current_text();
    let diff = cell.diff_text();

    let (last_title, current_title) = if cell.metric == Metric::BytesPerOp {
        (Some(bytes_text(cell.last)), Some(bytes_text(cell.current)))
    } else {
        (None, None)
    };

    rsx! {
        td { title: last_title, "{last}" }
        td { title: current_title, "{current}" }
        td { class: highlight.class(), "{diff}" }
    }
}

fn bytes_text(value: f64) -> String {
    let byte = Byte::from_u64(value.max(0.0).round() as u64);
    format!("{:.2}", byte.get_appropriate_unit(UnitType::Binary))
}
