use crate::report::Report;
use std::sync::Arc;

/// Shared handler state. The report is immutable for the life of the process,
/// so a plain `Arc` is enough; there is nothing to lock.
#[derive(Clone)]
pub struct AppState {
    pub report: Arc<Report>,
}

impl AppState {
    pub fn new(report: Report) -> Self {
        Self {
            report: Arc::new(report),
        }
    }
}
