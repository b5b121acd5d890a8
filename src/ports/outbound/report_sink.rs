use async_trait::async_trait;

use crate::shared::Result;

/// ReportSink port for publishing the rendered summary.
///
/// Implementations deliver the Markdown report somewhere visible to the team,
/// typically as a pull request comment. Delivery failures are the caller's
/// concern; the gate verdict must never depend on whether publishing worked.
#[async_trait]
pub trait ReportSink {
    /// Publishes the rendered report body.
    ///
    /// # Errors
    /// Returns an error if the destination rejects the report or is
    /// unreachable.
    async fn publish(&self, body: &str) -> Result<()>;
}
