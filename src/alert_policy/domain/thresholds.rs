use super::alert::Severity;

/// Default maximum age in days for critical alerts
pub const DEFAULT_CRITICAL_DAYS: u32 = 3;
/// Default maximum age in days for high alerts
pub const DEFAULT_HIGH_DAYS: u32 = 5;
/// Default maximum age in days for medium alerts
pub const DEFAULT_MEDIUM_DAYS: u32 = 14;
/// Default maximum age in days for low alerts
pub const DEFAULT_LOW_DAYS: u32 = 30;

/// Mapping from severity level to the maximum allowed age in days.
///
/// Immutable once constructed. Non-negativity is guaranteed by the type;
/// raw values that fail to parse as whole day counts are rejected at the
/// configuration boundary before a table is ever built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdTable {
    critical: u32,
    high: u32,
    medium: u32,
    low: u32,
}

impl ThresholdTable {
    pub fn new(critical: u32, high: u32, medium: u32, low: u32) -> Self {
        Self {
            critical,
            high,
            medium,
            low,
        }
    }

    /// Maximum number of days an alert of the given severity may stay open.
    pub fn threshold_for(&self, severity: Severity) -> u32 {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_CRITICAL_DAYS,
            DEFAULT_HIGH_DAYS,
            DEFAULT_MEDIUM_DAYS,
            DEFAULT_LOW_DAYS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_for_each_severity() {
        let table = ThresholdTable::new(1, 2, 7, 15);
        assert_eq!(table.threshold_for(Severity::Critical), 1);
        assert_eq!(table.threshold_for(Severity::High), 2);
        assert_eq!(table.threshold_for(Severity::Medium), 7);
        assert_eq!(table.threshold_for(Severity::Low), 15);
    }

    #[test]
    fn test_default_thresholds() {
        let table = ThresholdTable::default();
        assert_eq!(table.threshold_for(Severity::Critical), 3);
        assert_eq!(table.threshold_for(Severity::High), 5);
        assert_eq!(table.threshold_for(Severity::Medium), 14);
        assert_eq!(table.threshold_for(Severity::Low), 30);
    }

    #[test]
    fn test_every_severity_has_an_entry() {
        let table = ThresholdTable::default();
        for severity in Severity::ALL {
            // threshold_for is total over the enum, so this cannot panic
            let _ = table.threshold_for(severity);
        }
    }

    #[test]
    fn test_zero_threshold_is_allowed() {
        let table = ThresholdTable::new(0, 0, 0, 0);
        assert_eq!(table.threshold_for(Severity::Critical), 0);
    }
}
