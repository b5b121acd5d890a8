use crate::alert_policy::domain::EvaluationResult;

/// First line of the summary; also the marker used to find and update an
/// existing PR comment from a previous run.
pub const COMMENT_MARKER: &str = "## Dependabot Alert Summary";

/// Renders the evaluation result as a Markdown summary suitable for a PR
/// comment or a job log.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, result: &EvaluationResult, report_only: bool) -> String {
        let mut output = Vec::new();
        output.push(COMMENT_MARKER.to_string());
        output.push(format!("Total open alerts: {}", result.total()));
        output.push(format!(
            "Alerts exceeding age threshold: {}",
            result.violations().len()
        ));

        if result.has_violations() {
            output.push("\n### :x: Violations (Alerts exceeding threshold)".to_string());
            for violation in result.violations() {
                output.push(format!(
                    "\n#### {}",
                    Self::escape(violation.package())
                ));
                output.push(format!("- **Severity:** {}", violation.severity()));
                output.push(format!(
                    "- **Age:** {} days (Threshold: {} days)",
                    violation.age_days(),
                    violation.threshold_days()
                ));
                output.push(format!(
                    "- **Created:** {}",
                    violation.opened_at().format("%Y-%m-%d %H:%M:%S UTC")
                ));
                if let Some(title) = violation.title() {
                    output.push(format!("- **Advisory:** {}", Self::escape(title)));
                }
                if let Some(url) = violation.url() {
                    output.push(format!("- **URL:** {}", url));
                }
            }
        }

        if !result.unknown_severities().is_empty() {
            output.push("\n### :mag: Unrecognized severities (not gated)".to_string());
            for record in result.unknown_severities() {
                output.push(format!(
                    "- Alert #{} ({}): reported severity `{}`",
                    record.alert_id,
                    Self::escape(&record.package),
                    Self::escape(&record.label)
                ));
            }
        }

        if !result.anomalies().is_empty() {
            output.push("\n### :warning: Timestamp anomalies (not classified)".to_string());
            for anomaly in result.anomalies() {
                output.push(format!(
                    "- Alert #{} ({}): {}",
                    anomaly.alert_id,
                    Self::escape(&anomaly.package),
                    anomaly.reason
                ));
            }
        }

        if result.has_violations() {
            if report_only {
                output.push(
                    "\n:warning: Alerts exceed age thresholds but running in report mode"
                        .to_string(),
                );
            } else {
                output.push(
                    "\n:no_entry: Action failed due to alerts exceeding age thresholds"
                        .to_string(),
                );
            }
        } else {
            output.push(
                "\n:white_check_mark: All alerts are within acceptable age thresholds"
                    .to_string(),
            );
        }

        output.join("\n")
    }

    /// Keeps untrusted advisory text from breaking out of its Markdown line.
    fn escape(text: &str) -> String {
        text.replace('\n', " ").replace('|', "\\|")
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}
