use chrono::{DateTime, Utc};

use super::alert::{AlertId, Severity};

/// One alert that exceeded its severity's age threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct ViolationRecord {
    alert_id: AlertId,
    package: String,
    severity: Severity,
    age_days: i64,
    threshold_days: u32,
    opened_at: DateTime<Utc>,
    url: Option<String>,
    title: Option<String>,
}

impl ViolationRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        alert_id: AlertId,
        package: String,
        severity: Severity,
        age_days: i64,
        threshold_days: u32,
        opened_at: DateTime<Utc>,
        url: Option<String>,
        title: Option<String>,
    ) -> Self {
        Self {
            alert_id,
            package,
            severity,
            age_days,
            threshold_days,
            opened_at,
            url,
            title,
        }
    }

    pub fn alert_id(&self) -> &AlertId {
        &self.alert_id
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn age_days(&self) -> i64 {
        self.age_days
    }

    pub fn threshold_days(&self) -> u32 {
        self.threshold_days
    }

    /// Days beyond the allowed age (age - threshold), always >= 1.
    pub fn excess_days(&self) -> i64 {
        self.age_days - i64::from(self.threshold_days)
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// An alert with a severity label outside the four recognized levels.
///
/// These are a visibility signal, not a policy failure: they are reported
/// separately and never fail the gate on their own.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownSeverityRecord {
    pub alert_id: AlertId,
    pub package: String,
    pub label: String,
}

/// An alert whose open timestamp could not be evaluated (e.g. it lies in the
/// future relative to the evaluation instant). Recorded as a data-quality
/// anomaly; the rest of the batch proceeds.
#[derive(Debug, Clone, PartialEq)]
pub struct TimestampAnomaly {
    pub alert_id: AlertId,
    pub package: String,
    pub opened_at: DateTime<Utc>,
    pub reason: String,
}

/// Running tally of evaluated alerts by severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub unknown: usize,
}

impl SeverityCounts {
    pub fn record(&mut self, severity: Option<Severity>) {
        match severity {
            Some(Severity::Critical) => self.critical += 1,
            Some(Severity::High) => self.high += 1,
            Some(Severity::Medium) => self.medium += 1,
            Some(Severity::Low) => self.low += 1,
            None => self.unknown += 1,
        }
    }

    pub fn for_severity(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }
}

/// Aggregate result of one policy evaluation run.
///
/// `violations` preserves the input alert order. Unknown severities and
/// timestamp anomalies are carried alongside but never contribute to
/// `has_violations`.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    total: usize,
    counts: SeverityCounts,
    violations: Vec<ViolationRecord>,
    unknown_severities: Vec<UnknownSeverityRecord>,
    anomalies: Vec<TimestampAnomaly>,
}

impl EvaluationResult {
    pub fn new(
        total: usize,
        counts: SeverityCounts,
        violations: Vec<ViolationRecord>,
        unknown_severities: Vec<UnknownSeverityRecord>,
        anomalies: Vec<TimestampAnomaly>,
    ) -> Self {
        Self {
            total,
            counts,
            violations,
            unknown_severities,
            anomalies,
        }
    }

    /// Total alerts evaluated, including unknown severities and anomalies.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn counts(&self) -> SeverityCounts {
        self.counts
    }

    pub fn violations(&self) -> &[ViolationRecord] {
        &self.violations
    }

    pub fn unknown_severities(&self) -> &[UnknownSeverityRecord] {
        &self.unknown_severities
    }

    pub fn anomalies(&self) -> &[TimestampAnomaly] {
        &self.anomalies
    }

    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}
