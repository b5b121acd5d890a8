//! alert-gate - CI gate for open Dependabot alert ages
//!
//! This library evaluates open dependency alerts against configurable
//! per-severity age thresholds and decides a pass/fail outcome for a CI
//! check, following hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`alert_policy::domain`): Pure value objects
//! - **Decision Core** (`alert_policy::services`): Age calculation,
//!   classification, evaluation and the final outcome decision
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use alert_gate::prelude::*;
//! use chrono::{Duration, Utc};
//!
//! let now = Utc::now();
//! let alerts = vec![
//!     Alert::new(AlertId::new("1"), "requests", "critical", now - Duration::days(4)),
//!     Alert::new(AlertId::new("2"), "flask", "low", now - Duration::days(2)),
//! ];
//!
//! let thresholds = ThresholdTable::new(3, 5, 14, 30);
//! let evaluator = PolicyEvaluator::new(thresholds, now);
//! let result = evaluator.evaluate(&alerts);
//! assert!(result.has_violations());
//!
//! let outcome = decide(result, false);
//! assert!(!outcome.passed());
//! ```

pub mod adapters;
pub mod alert_policy;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StdoutPresenter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, JsonFileSource};
    pub use crate::adapters::outbound::formatters::{MarkdownFormatter, COMMENT_MARKER};
    pub use crate::adapters::outbound::network::{GitHubAlertClient, PrCommentSink};
    pub use crate::alert_policy::domain::{
        Alert, AlertId, EvaluationResult, Outcome, Severity, SeverityCounts, ThresholdTable,
        TimestampAnomaly, UnknownSeverityRecord, ViolationRecord,
    };
    pub use crate::alert_policy::services::{
        age_in_days, classify, decide, Classification, PolicyEvaluator,
    };
    pub use crate::application::dto::{CheckRequest, CheckResponse};
    pub use crate::application::use_cases::CheckAlertsUseCase;
    pub use crate::config::GateConfig;
    pub use crate::ports::outbound::{AlertSource, OutputPresenter, ReportSink};
    pub use crate::shared::{ExitCode, GateError, Result};
}
