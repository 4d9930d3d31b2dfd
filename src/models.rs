use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub plan: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Data for the four big stat cards on the dashboard. Recomputed per request
/// in principle; constant in this demo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub overall_score: i64,
    pub score_change: i64,
    pub attacks_last_24h: i64,
    pub attacks_change_percent: i64,
    pub uptime_percent: f64,
    pub uptime_note: String,
    pub targets_total: i64,
    pub targets_note: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebsiteStatus {
    Online,
    Reachable,
    SslError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// A monitored website. `last_score` and `risk_level` are set together: both
/// present once a scan has completed, both absent before.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Website {
    pub id: String,
    pub domain: String,
    pub status: WebsiteStatus,
    pub last_score: Option<u8>,
    pub last_scan_at: Option<DateTime<Utc>>,
    pub risk_level: Option<RiskLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warn,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Website,
    Server,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    /// Category tag, e.g. "cve", "ssh", "autofix".
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: Severity,
    pub message: String,
    pub target_type: TargetType,
    pub target_label: String,
    pub created_at: DateTime<Utc>,
    /// Short display label for the dashboard badge.
    pub tag: String,
}

/// Minimal syntactic email check: one `@`, non-empty local part, domain with
/// a dot and no leading/trailing dot, no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails_accepted() {
        assert!(is_valid_email("mxdev@example.de"));
        assert!(is_valid_email("a.b+c@sub.domain.io"));
    }

    #[test]
    fn test_invalid_emails_rejected() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@example.de"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@.example.de"));
        assert!(!is_valid_email("user@example.de."));
        assert!(!is_valid_email("user name@example.de"));
        assert!(!is_valid_email("user@ex@ample.de"));
    }

    #[test]
    fn test_website_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&WebsiteStatus::SslError).unwrap(),
            "\"ssl_error\""
        );
        assert_eq!(
            serde_json::to_string(&WebsiteStatus::Online).unwrap(),
            "\"online\""
        );
    }

    #[test]
    fn test_alert_serializes_type_field() {
        let alert = Alert {
            id: "a_9".to_string(),
            kind: "cve".to_string(),
            severity: Severity::Critical,
            message: "test".to_string(),
            target_type: TargetType::Website,
            target_label: "example.de".to_string(),
            created_at: Utc::now(),
            tag: "CVE".to_string(),
        };
        let json = serde_json::to_string(&alert).unwrap();
        assert!(json.contains("\"type\":\"cve\""));
        assert!(json.contains("\"severity\":\"critical\""));
        assert!(json.contains("\"target_type\":\"website\""));
        assert!(!json.contains("\"kind\""));
    }
}
