use chrono::{DateTime, Utc};

use crate::alert_policy::domain::{
    Alert, Severity, ThresholdTable, TimestampAnomaly, UnknownSeverityRecord, ViolationRecord,
};
use crate::alert_policy::services::age::age_in_days;

/// Result of classifying a single alert against the threshold table.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// Age is at or below the threshold. The boundary day itself is compliant.
    Compliant { severity: Severity, age_days: i64 },
    /// Age is strictly greater than the threshold.
    Violating(ViolationRecord),
    /// Severity label is outside the four recognized levels. Policy: report
    /// separately, never block and never escalate.
    UnknownSeverity(UnknownSeverityRecord),
    /// The open timestamp could not be evaluated (future-dated).
    InvalidTimestamp(TimestampAnomaly),
}

/// Classifies one alert. Pure: no I/O, no clock reads, no mutation.
pub fn classify(alert: &Alert, thresholds: &ThresholdTable, now: DateTime<Utc>) -> Classification {
    let severity = match alert.severity() {
        Some(severity) => severity,
        None => {
            return Classification::UnknownSeverity(UnknownSeverityRecord {
                alert_id: alert.id().clone(),
                package: alert.package().to_string(),
                label: alert.severity_label().to_string(),
            })
        }
    };

    let age_days = match age_in_days(alert.opened_at(), now) {
        Ok(age) => age,
        Err(err) => {
            return Classification::InvalidTimestamp(TimestampAnomaly {
                alert_id: alert.id().clone(),
                package: alert.package().to_string(),
                opened_at: alert.opened_at(),
                reason: err.to_string(),
            })
        }
    };

    let threshold_days = thresholds.threshold_for(severity);
    if age_days > i64::from(threshold_days) {
        Classification::Violating(ViolationRecord::new(
            alert.id().clone(),
            alert.package().to_string(),
            severity,
            age_days,
            threshold_days,
            alert.opened_at(),
            alert.url().map(str::to_string),
            alert.title().map(str::to_string),
        ))
    } else {
        Classification::Compliant { severity, age_days }
    }
}
