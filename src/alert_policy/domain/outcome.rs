use super::evaluation::EvaluationResult;

/// Final decision of one run, after the report-only override has been applied.
///
/// The raw evaluation result is always carried, so callers can see the true
/// state even when report-only mode forced `passed` to true.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    passed: bool,
    verdict_text: String,
    result: EvaluationResult,
}

impl Outcome {
    pub fn new(passed: bool, verdict_text: String, result: EvaluationResult) -> Self {
        Self {
            passed,
            verdict_text,
            result,
        }
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn verdict_text(&self) -> &str {
        &self.verdict_text
    }

    pub fn result(&self) -> &EvaluationResult {
        &self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert_policy::domain::evaluation::SeverityCounts;

    #[test]
    fn test_outcome_carries_raw_result() {
        let result = EvaluationResult::new(2, SeverityCounts::default(), vec![], vec![], vec![]);
        let outcome = Outcome::new(true, "all clear".to_string(), result.clone());

        assert!(outcome.passed());
        assert_eq!(outcome.verdict_text(), "all clear");
        assert_eq!(outcome.result(), &result);
    }
}
