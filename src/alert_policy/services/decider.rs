use crate::alert_policy::domain::{EvaluationResult, Outcome};

/// Applies the report-only override to an evaluation result.
///
/// In report-only mode the gate always passes, but the verdict text still
/// states the true violation count: only enforcement is overridden, never the
/// reported facts.
pub fn decide(result: EvaluationResult, report_only: bool) -> Outcome {
    let passed = if report_only {
        true
    } else {
        !result.has_violations()
    };
    let verdict_text = render_verdict(&result, report_only);
    Outcome::new(passed, verdict_text, result)
}

fn render_verdict(result: &EvaluationResult, report_only: bool) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "Evaluated {} open alerts; {} exceeded the age threshold.",
        result.total(),
        result.violations().len()
    ));

    for violation in result.violations() {
        lines.push(format!(
            "- {} alert #{} ({}): {} days old, threshold {} days, {} over",
            violation.severity(),
            violation.alert_id(),
            violation.package(),
            violation.age_days(),
            violation.threshold_days(),
            violation.excess_days()
        ));
    }

    if !result.unknown_severities().is_empty() {
        lines.push(format!(
            "{} alert(s) carry an unrecognized severity and were not gated.",
            result.unknown_severities().len()
        ));
    }

    if !result.anomalies().is_empty() {
        lines.push(format!(
            "{} alert(s) have a future-dated open timestamp and were not classified.",
            result.anomalies().len()
        ));
    }

    if report_only && result.has_violations() {
        lines.push("Report-only mode: violations are reported but do not fail the gate.".to_string());
    }

    lines.join("\n")
}
