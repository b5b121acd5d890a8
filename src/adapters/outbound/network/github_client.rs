use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::adapters::outbound::formatters::COMMENT_MARKER;
use crate::alert_policy::domain::{Alert, AlertId};
use crate::ports::outbound::{AlertSource, ReportSink};
use crate::shared::{GateError, Result};

/// GitHub REST client for Dependabot alerts and PR comments.
///
/// Consumes a ready token; token issuance (GitHub App JWT signing, installation
/// exchange) is outside this crate.
///
/// # Security
/// - Implements timeout (30 seconds)
/// - Does not retry failed requests (fail fast for CI gates)
pub struct GitHubAlertClient {
    client: Client,
    api_url: String,
    repo: String,
}

impl GitHubAlertClient {
    const API_ENDPOINT: &'static str = "https://api.github.com";
    const TIMEOUT_SECONDS: u64 = 30;
    const PER_PAGE: usize = 100;

    /// Creates a new client for `owner/name` with default configuration.
    pub fn new(repo: impl Into<String>, token: &str) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("alert-gate/{}", version);

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
            GateError::Configuration {
                message: format!("GITHUB_TOKEN contains invalid header characters: {}", e),
                hint: "Pass the token exactly as issued by GitHub".to_string(),
            }
        })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_url: Self::API_ENDPOINT.to_string(),
            repo: repo.into(),
        })
    }

    /// Overrides the API base URL (test servers).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Lists all open Dependabot alerts, following pagination.
    pub async fn list_open_alerts(&self) -> Result<Vec<Alert>> {
        let mut alerts = Vec::new();
        let mut page = 1usize;

        loop {
            let url = format!(
                "{}/repos/{}/dependabot/alerts?state=open&per_page={}&page={}",
                self.api_url,
                self.repo,
                Self::PER_PAGE,
                page
            );
            let response = self.client.get(&url).send().await.map_err(|e| {
                GateError::AlertFetch {
                    repo: self.repo.clone(),
                    details: e.to_string(),
                    hint: "Check network connectivity to the GitHub API".to_string(),
                }
            })?;

            let status = response.status();
            if status == StatusCode::FORBIDDEN {
                return Err(GateError::AlertFetch {
                    repo: self.repo.clone(),
                    details: "HTTP status 403 (insufficient permissions)".to_string(),
                    hint: "Please ensure:\n\
                           1. GITHUB_TOKEN has 'security_events' permission\n\
                           2. Workflow has 'security-events: read' permission\n\
                           3. Dependabot alerts are enabled for this repository"
                        .to_string(),
                }
                .into());
            }
            if !status.is_success() {
                return Err(GateError::AlertFetch {
                    repo: self.repo.clone(),
                    details: format!("HTTP status {}", status),
                    hint: "Check that the repository exists and the token can read it"
                        .to_string(),
                }
                .into());
            }

            let payloads: Vec<AlertPayload> =
                response.json().await.map_err(|e| GateError::AlertFetch {
                    repo: self.repo.clone(),
                    details: format!("failed to decode alert payload: {}", e),
                    hint: "The GitHub API response did not match the expected schema"
                        .to_string(),
                })?;

            let page_len = payloads.len();
            // The state=open filter is applied server-side; keep it client-side
            // too in case the source ever relaxes the query.
            alerts.extend(
                payloads
                    .into_iter()
                    .filter(|p| p.state == "open")
                    .map(AlertPayload::into_alert),
            );

            if page_len < Self::PER_PAGE {
                break;
            }
            page += 1;
        }

        Ok(alerts)
    }

    /// Creates or updates the gate's summary comment on a pull request.
    ///
    /// Looks for an existing comment containing the summary marker and edits
    /// it in place, so repeated runs keep a single comment per PR.
    pub async fn create_or_update_comment(&self, pr_number: u64, body: &str) -> Result<()> {
        let comments_url = format!(
            "{}/repos/{}/issues/{}/comments",
            self.api_url, self.repo, pr_number
        );

        let response = self
            .client
            .get(&comments_url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| GateError::CommentPost {
                pr_number,
                details: format!("failed to list existing comments: {}", e),
            })?;

        let comments: Vec<CommentPayload> =
            response.json().await.map_err(|e| GateError::CommentPost {
                pr_number,
                details: format!("failed to decode comment list: {}", e),
            })?;

        let payload = CommentBody {
            body: body.to_string(),
        };

        if let Some(existing) = comments.iter().find(|c| c.body.contains(COMMENT_MARKER)) {
            let edit_url = format!(
                "{}/repos/{}/issues/comments/{}",
                self.api_url, self.repo, existing.id
            );
            self.client
                .patch(&edit_url)
                .json(&payload)
                .send()
                .await
                .and_then(|r| r.error_for_status())
                .map_err(|e| GateError::CommentPost {
                    pr_number,
                    details: format!("failed to update existing comment: {}", e),
                })?;
        } else {
            self.client
                .post(&comments_url)
                .json(&payload)
                .send()
                .await
                .and_then(|r| r.error_for_status())
                .map_err(|e| GateError::CommentPost {
                    pr_number,
                    details: format!("failed to create comment: {}", e),
                })?;
        }

        Ok(())
    }

    /// Revokes the installation token used for this run.
    ///
    /// GitHub answers 204 on success; anything else is an error.
    pub async fn revoke_installation_token(&self) -> Result<()> {
        let url = format!("{}/installation/token", self.api_url);
        let response = self.client.delete(&url).send().await?;

        if response.status() != StatusCode::NO_CONTENT {
            return Err(GateError::TokenRevoke {
                status: response.status().as_u16(),
            }
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl AlertSource for GitHubAlertClient {
    async fn fetch_open_alerts(&self) -> Result<Vec<Alert>> {
        self.list_open_alerts().await
    }
}

/// ReportSink adapter that writes the summary as a PR comment.
pub struct PrCommentSink<'a> {
    client: &'a GitHubAlertClient,
    pr_number: u64,
}

impl<'a> PrCommentSink<'a> {
    pub fn new(client: &'a GitHubAlertClient, pr_number: u64) -> Self {
        Self { client, pr_number }
    }
}

#[async_trait]
impl ReportSink for PrCommentSink<'_> {
    async fn publish(&self, body: &str) -> Result<()> {
        self.client
            .create_or_update_comment(self.pr_number, body)
            .await
    }
}

// GitHub API request/response structures

#[derive(Debug, Deserialize)]
struct AlertPayload {
    number: u64,
    state: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    html_url: Option<String>,
    security_advisory: AdvisoryPayload,
    #[serde(default)]
    dependency: Option<DependencyPayload>,
}

#[derive(Debug, Deserialize)]
struct AdvisoryPayload {
    severity: String,
    #[serde(default)]
    summary: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DependencyPayload {
    #[serde(default)]
    package: Option<PackagePayload>,
}

#[derive(Debug, Deserialize)]
struct PackagePayload {
    name: String,
}

#[derive(Debug, Deserialize)]
struct CommentPayload {
    id: u64,
    #[serde(default)]
    body: String,
}

#[derive(Debug, Serialize)]
struct CommentBody {
    body: String,
}

impl AlertPayload {
    fn into_alert(self) -> Alert {
        let package = self
            .dependency
            .and_then(|d| d.package)
            .map(|p| p.name)
            .unwrap_or_else(|| "unknown".to_string());

        let mut alert = Alert::new(
            AlertId::from(self.number),
            package,
            self.security_advisory.severity,
            self.created_at,
        );
        if let Some(url) = self.html_url {
            alert = alert.with_url(url);
        }
        if let Some(summary) = self.security_advisory.summary {
            alert = alert.with_title(summary);
        }
        alert
    }
}
