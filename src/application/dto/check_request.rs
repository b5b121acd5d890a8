use chrono::{DateTime, Utc};

use crate::alert_policy::domain::ThresholdTable;

/// Input for one alert check run.
///
/// The evaluation instant is captured once by the caller and carried here,
/// so everything downstream is deterministic.
#[derive(Debug, Clone, Copy)]
pub struct CheckRequest {
    pub thresholds: ThresholdTable,
    pub report_only: bool,
    pub now: DateTime<Utc>,
}

impl CheckRequest {
    pub fn new(thresholds: ThresholdTable, report_only: bool, now: DateTime<Utc>) -> Self {
        Self {
            thresholds,
            report_only,
            now,
        }
    }
}
