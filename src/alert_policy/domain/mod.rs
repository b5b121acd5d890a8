/// Domain layer - pure value objects for alert policy evaluation
pub mod alert;
pub mod evaluation;
pub mod outcome;
pub mod thresholds;

pub use alert::{Alert, AlertId, Severity};
pub use evaluation::{
    EvaluationResult, SeverityCounts, TimestampAnomaly, UnknownSeverityRecord, ViolationRecord,
};
pub use outcome::Outcome;
pub use thresholds::{
    ThresholdTable, DEFAULT_CRITICAL_DAYS, DEFAULT_HIGH_DAYS, DEFAULT_LOW_DAYS,
    DEFAULT_MEDIUM_DAYS,
};
