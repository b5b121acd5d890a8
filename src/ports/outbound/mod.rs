/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, file system, console).
pub mod alert_source;
pub mod output_presenter;
pub mod report_sink;

pub use alert_source::AlertSource;
pub use output_presenter::OutputPresenter;
pub use report_sink::ReportSink;
