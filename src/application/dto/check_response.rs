use crate::alert_policy::domain::Outcome;

/// Output of one alert check run.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResponse {
    /// The gate decision, with the raw evaluation result attached.
    pub outcome: Outcome,
    /// The rendered Markdown summary, ready for a PR comment or stdout.
    pub summary_markdown: String,
}
