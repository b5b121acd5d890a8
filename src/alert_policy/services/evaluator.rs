use chrono::{DateTime, Utc};

use crate::alert_policy::domain::{Alert, EvaluationResult, SeverityCounts, ThresholdTable};
use crate::alert_policy::services::classifier::{classify, Classification};

/// Evaluates a collection of alerts against the configured threshold table.
///
/// Thresholds and the evaluation instant are fixed at construction, so one
/// evaluator corresponds to exactly one deterministic run. Each alert is
/// classified independently; a malformed alert degrades to an anomaly in the
/// result instead of aborting the batch.
pub struct PolicyEvaluator {
    thresholds: ThresholdTable,
    now: DateTime<Utc>,
}

impl PolicyEvaluator {
    pub fn new(thresholds: ThresholdTable, now: DateTime<Utc>) -> Self {
        Self { thresholds, now }
    }

    pub fn thresholds(&self) -> &ThresholdTable {
        &self.thresholds
    }

    /// Processes every alert exactly once, in input order.
    ///
    /// Violation records preserve the relative order of the input alerts.
    /// This never fails: unknown severities and invalid timestamps are
    /// collected in the result rather than propagated as errors.
    pub fn evaluate(&self, alerts: &[Alert]) -> EvaluationResult {
        let mut counts = SeverityCounts::default();
        let mut violations = Vec::new();
        let mut unknown_severities = Vec::new();
        let mut anomalies = Vec::new();

        for alert in alerts {
            counts.record(alert.severity());
            match classify(alert, &self.thresholds, self.now) {
                Classification::Compliant { .. } => {}
                Classification::Violating(record) => violations.push(record),
                Classification::UnknownSeverity(record) => unknown_severities.push(record),
                Classification::InvalidTimestamp(anomaly) => anomalies.push(anomaly),
            }
        }

        EvaluationResult::new(alerts.len(), counts, violations, unknown_severities, anomalies)
    }
}
