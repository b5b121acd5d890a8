use alert_gate::prelude::*;
use async_trait::async_trait;

/// Mock AlertSource for testing
pub struct MockAlertSource {
    pub alerts: Vec<Alert>,
    pub should_fail: bool,
}

impl MockAlertSource {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self {
            alerts,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            alerts: Vec::new(),
            should_fail: true,
        }
    }
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
