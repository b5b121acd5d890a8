mod mock_alert_source;
mod mock_report_sink;

pub use mock_alert_source::MockAlertSource;
pub use mock_report_sink::MockReportSink;
