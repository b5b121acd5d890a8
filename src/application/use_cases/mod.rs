pub mod check_alerts;

pub use check_alerts::CheckAlertsUseCase;
