use async_trait::async_trait;

use crate::alert_policy::domain::Alert;
use crate::shared::Result;

/// AlertSource port for retrieving the open alert collection.
///
/// This port abstracts where alerts come from (GitHub API, a JSON file
/// exported by an earlier pipeline stage, a test double). The decision core
/// only ever sees an already-materialized, finite collection.
#[async_trait]
pub trait AlertSource {
    /// Fetches all currently open alerts, in the order the source reports them.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source is unreachable or rejects the request
    /// - The payload cannot be decoded into alerts
    async fn fetch_open_alerts(&self) -> Result<Vec<Alert>>;
}

#[async_trait]
impl<T: AlertSource + Sync> AlertSource for &T {
    async fn fetch_open_alerts(&self) -> Result<Vec<Alert>> {
        (**self).fetch_open_alerts().await
    }
}
