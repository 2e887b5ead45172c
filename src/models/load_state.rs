use crate::functions::fetch_comparison::CompareError;

use super::comparison::BenchmarkComparison;

#[derive(Clone, PartialEq, Debug, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<BenchmarkComparison>),
    Failed(String),
}

/// Identifies one issued load. Only the most recent ticket may complete.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RequestTicket(u64);

#[derive(Debug, Default)]
pub struct ComparisonLoader {
    issued: u64,
    state: LoadState,
}

impl ComparisonLoader {
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn begin(&mut self) -> RequestTicket {
        self.issued += 1;
        self.state = LoadState::Loading;
        RequestTicket(self.issued)
    }

    /// Stores the outcome of a load. Returns `false` and leaves the state
    /// untouched if a newer load has been issued since `ticket`.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<BenchmarkComparison>, CompareError>,
    ) -> bool {
        if ticket.0 != self.issued {
            return false;
        }

        self.state = match result {
            Ok(rows) => LoadState::Loaded(rows),
            Err(err) => LoadState::Failed(err.to_string()),
        };
        true
    }
}
