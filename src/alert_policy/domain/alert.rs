use chrono::{DateTime, Utc};

/// NewType wrapper for the alert identifier assigned by the source platform.
///
/// GitHub numbers Dependabot alerts per repository, but other sources may use
/// opaque string keys, so the identifier is stored as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlertId(String);

impl AlertId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for AlertId {
    fn from(number: u64) -> Self {
        Self(number.to_string())
    }
}

impl std::fmt::Display for AlertId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four severity levels recognized by the gate policy.
///
/// The platform may report other labels; those are kept as raw text on the
/// alert and surface as unrecognized severities during classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    /// Parses a platform-supplied severity label, case-insensitively.
    /// Returns `None` for labels outside the four recognized levels.
    pub fn parse(label: &str) -> Option<Severity> {
        match label.trim().to_uppercase().as_str() {
            "CRITICAL" => Some(Severity::Critical),
            "HIGH" => Some(Severity::High),
            "MEDIUM" => Some(Severity::Medium),
            "LOW" => Some(Severity::Low),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One open dependency vulnerability finding, as reported by the platform.
///
/// Alerts are read-only inputs: nothing in this crate mutates an alert after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    id: AlertId,
    package: String,
    severity_label: String,
    opened_at: DateTime<Utc>,
    url: Option<String>,
    title: Option<String>,
}

impl Alert {
    pub fn new(
        id: AlertId,
        package: impl Into<String>,
        severity_label: impl Into<String>,
        opened_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            package: package.into(),
            severity_label: severity_label.into(),
            opened_at,
            url: None,
            title: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn id(&self) -> &AlertId {
        &self.id
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// The raw severity label as supplied by the platform.
    pub fn severity_label(&self) -> &str {
        &self.severity_label
    }

    /// The recognized severity, if the label maps to one of the four levels.
    pub fn severity(&self) -> Option<Severity> {
        Severity::parse(&self.severity_label)
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_severity_parse_recognized() {
        assert_eq!(Severity::parse("critical"), Some(Severity::Critical));
        assert_eq!(Severity::parse("CRITICAL"), Some(Severity::Critical));
        assert_eq!(Severity::parse("High"), Some(Severity::High));
        assert_eq!(Severity::parse("medium"), Some(Severity::Medium));
        assert_eq!(Severity::parse(" low "), Some(Severity::Low));
    }

    #[test]
    fn test_severity_parse_unrecognized() {
        assert_eq!(Severity::parse("moderate"), None);
        assert_eq!(Severity::parse("severe"), None);
        assert_eq!(Severity::parse(""), None);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(format!("{}", Severity::Critical), "CRITICAL");
        assert_eq!(format!("{}", Severity::Low), "LOW");
    }

    #[test]
    fn test_alert_id_from_number() {
        let id = AlertId::from(42u64);
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn test_alert_accessors() {
        let opened = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
        let alert = Alert::new(AlertId::new("7"), "requests", "high", opened)
            .with_url("https://github.com/octo/spoon/security/dependabot/7")
            .with_title("SSRF in requests");

        assert_eq!(alert.id().as_str(), "7");
        assert_eq!(alert.package(), "requests");
        assert_eq!(alert.severity_label(), "high");
        assert_eq!(alert.severity(), Some(Severity::High));
        assert_eq!(alert.opened_at(), opened);
        assert_eq!(
            alert.url(),
            Some("https://github.com/octo/spoon/security/dependabot/7")
        );
        assert_eq!(alert.title(), Some("SSRF in requests"));
    }

    #[test]
    fn test_alert_unrecognized_severity() {
        let opened = Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap();
        let alert = Alert::new(AlertId::new("8"), "urllib3", "moderate", opened);
        assert_eq!(alert.severity(), None);
        assert_eq!(alert.severity_label(), "moderate");
    }
}
