use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::PathBuf;

use crate::alert_policy::domain::{Alert, AlertId};
use crate::ports::outbound::AlertSource;
use crate::shared::{GateError, Result};

/// AlertSource adapter that reads alerts from a JSON file.
///
/// Used for offline runs and CI pipelines where an earlier stage already
/// exported the alert list. The file holds a JSON array of records:
///
/// ```json
/// [{"id": 1, "package": "requests", "severity": "critical",
///   "opened_at": "2026-08-01T12:00:00Z"}]
/// ```
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl AlertSource for JsonFileSource {
    async fn fetch_open_alerts(&self) -> Result<Vec<Alert>> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| GateError::AlertFileRead {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        let records: Vec<AlertFileRecord> =
            serde_json::from_str(&content).map_err(|e| GateError::AlertFileRead {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        Ok(records.into_iter().map(AlertFileRecord::into_alert).collect())
    }
}

/// The source platform assigns identifiers as strings or numbers; accept both.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IdField {
    Number(u64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct AlertFileRecord {
    id: IdField,
    package: String,
    severity: String,
    opened_at: DateTime<Utc>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

impl AlertFileRecord {
    fn into_alert(self) -> Alert {
        let id = match self.id {
            IdField::Number(n) => AlertId::from(n),
            IdField::Text(s) => AlertId::new(s),
        };
        let mut alert = Alert::new(id, self.package, self.severity, self.opened_at);
        if let Some(url) = self.url {
            alert = alert.with_url(url);
        }
        if let Some(title) = self.title {
            alert = alert.with_title(title);
        }
        alert
    }
}
