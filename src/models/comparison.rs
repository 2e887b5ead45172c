use serde::{Deserialize, Serialize};

/// A revision the dashboard can compare against another one.
#[derive(Clone, PartialEq, Debug)]
pub struct Revision {
    pub commit_hash: String,
    pub name: String,
}

impl Revision {
    pub fn new(commit_hash: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            commit_hash: commit_hash.into(),
            name: name.into(),
        }
    }

    /// The name shown in table headers. Falls back to the short hash.
    pub fn label(&self) -> String {
        if self.name.trim().is_empty() {
            self.commit_hash.chars().take(7).collect()
        } else {
            self.name.clone()
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Metrics {
    pub ops: f64,
    #[serde(rename = "NSPerOp")]
    pub ns_per_op: f64,
    pub bytes_per_op: f64,
    #[serde(rename = "MBPerSec")]
    pub mb_per_sec: f64,
    pub allocs_per_op: f64,
}

/// One sub-benchmark as computed by the comparison backend.
///
/// `diff` holds the percentage change of every metric from `last` to `current`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct BenchmarkComparison {
    pub pkg_name: String,
    pub sub_benchmark_name: String,

    pub last: Metrics,
    pub current: Metrics,
    pub diff: Metrics,
}
