use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::adapters::outbound::formatters::MarkdownFormatter;
use crate::alert_policy::services::{decide, PolicyEvaluator};
use crate::application::dto::{CheckRequest, CheckResponse};
use crate::ports::outbound::{AlertSource, ReportSink};
use crate::shared::Result;

/// CheckAlertsUseCase - fetch, evaluate and report on open alerts
///
/// Orchestrates one run: pulls the open alert collection from the injected
/// source, runs the pure evaluator over it, applies the report-only override
/// and renders the Markdown summary. A spinner is shown while the fetch is
/// in flight; evaluation itself is instantaneous at this scale.
///
/// # Type Parameters
/// * `S` - AlertSource implementation
pub struct CheckAlertsUseCase<S: AlertSource> {
    alert_source: S,
}

impl<S: AlertSource + Sync> CheckAlertsUseCase<S> {
    /// Creates a new CheckAlertsUseCase with an injected alert source
    pub fn new(alert_source: S) -> Self {
        Self { alert_source }
    }

    /// Runs the full check: fetch, evaluate, decide, format.
    ///
    /// Fetch failures are fatal (there is nothing to evaluate safely).
    /// Per-alert problems never are: they surface inside the evaluation
    /// result as unrecognized severities or timestamp anomalies.
    pub async fn execute(&self, request: CheckRequest) -> Result<CheckResponse> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("   {spinner:.green} {msg}")
                .expect("Failed to set spinner template"),
        );
        spinner.set_message("Fetching open Dependabot alerts...");
        spinner.enable_steady_tick(Duration::from_millis(80));

        let fetched = self.alert_source.fetch_open_alerts().await;
        spinner.finish_and_clear();
        let alerts = fetched?;

        let evaluator = PolicyEvaluator::new(request.thresholds, request.now);
        let result = evaluator.evaluate(&alerts);
        let outcome = decide(result, request.report_only);

        let summary_markdown =
            MarkdownFormatter::new().format(outcome.result(), request.report_only);

        Ok(CheckResponse {
            outcome,
            summary_markdown,
        })
    }

    /// Publishes the rendered summary through the given sink.
    ///
    /// Delivery failure must not change the gate verdict, so the caller
    /// decides whether to treat the returned error as fatal (it should not).
    pub async fn publish_report(&self, sink: &dyn ReportSink, response: &CheckResponse) -> Result<()> {
        sink.publish(&response.summary_markdown).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert_policy::domain::{Alert, AlertId, ThresholdTable};
    use async_trait::async_trait;
    use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};

    struct MockAlertSource {
        alerts: Vec<Alert>,
        should_fail: bool,
    }

    #[async_trait]
    impl AlertSource for MockAlertSource {
        async fn fetch_open_alerts(&self) -> Result<Vec<Alert>> {
            if self.should_fail {
                anyhow::bail!("Mock alert fetch failure");
            }
            Ok(self.alerts.clone())
        }
    }

    fn reference_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap()
    }

    fn alert(id: &str, severity: &str, opened_days_ago: i64) -> Alert {
        Alert::new(
            AlertId::new(id),
            format!("pkg-{}", id),
            severity,
            reference_now() - ChronoDuration::days(opened_days_ago),
        )
    }

    fn request(report_only: bool) -> CheckRequest {
        CheckRequest::new(ThresholdTable::new(3, 5, 14, 30), report_only, reference_now())
    }

    #[tokio::test]
    async fn test_execute_fails_the_gate_on_violations() {
        let source = MockAlertSource {
            alerts: vec![
                alert("1", "critical", 4),
                alert("2", "low", 10),
                alert("3", "low", 30),
            ],
            should_fail: false,
        };
        let use_case = CheckAlertsUseCase::new(source);

        let response = use_case.execute(request(false)).await.unwrap();
        assert!(!response.outcome.passed());
        assert_eq!(response.outcome.result().violations().len(), 1);
        assert!(response.summary_markdown.contains("## Dependabot Alert Summary"));
        assert!(response.summary_markdown.contains(":no_entry:"));
    }

    #[tokio::test]
    async fn test_execute_report_only_passes_but_reports() {
        let source = MockAlertSource {
            alerts: vec![alert("1", "critical", 4)],
            should_fail: false,
        };
        let use_case = CheckAlertsUseCase::new(source);

        let response = use_case.execute(request(true)).await.unwrap();
        assert!(response.outcome.passed());
        assert!(response.outcome.result().has_violations());
        assert!(response.summary_markdown.contains("report mode"));
    }

    #[tokio::test]
    async fn test_execute_all_compliant() {
        let source = MockAlertSource {
            alerts: vec![alert("1", "critical", 3), alert("2", "low", 30)],
            should_fail: false,
        };
        let use_case = CheckAlertsUseCase::new(source);

        let response = use_case.execute(request(false)).await.unwrap();
        assert!(response.outcome.passed());
        assert!(response.summary_markdown.contains(":white_check_mark:"));
    }

    #[tokio::test]
    async fn test_execute_propagates_fetch_failure() {
        let source = MockAlertSource {
            alerts: vec![],
            should_fail: true,
        };
        let use_case = CheckAlertsUseCase::new(source);

        let result = use_case.execute(request(false)).await;
        assert!(result.is_err());
    }
}
