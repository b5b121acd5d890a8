use alert_gate::prelude::*;
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock ReportSink that records every published body
pub struct MockReportSink {
    pub published: Mutex<Vec<String>>,
    pub should_fail: bool,
}

impl MockReportSink {
    pub fn new() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
            should_fail: true,
        }
    }

    pub fn published_bodies(&self) -> Vec<String> {
        self.published.lock().unwrap().clone()
    }
}

impl Default for MockReportSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportSink for MockReportSink {
    async fn publish(&self, body: &str) -> Result<()> {
        if self.should_fail {
            anyhow::bail!("Mock report publish failure");
        }
        self.published.lock().unwrap().push(body.to_string());
        Ok(())
    }
}
