use chrono::{Duration, Utc};

use crate::models::{
    Alert, OverviewResponse, RiskLevel, Severity, TargetType, User, Website, WebsiteStatus,
};

/// Read-only data behind the route layer. The demo ships one fixture-backed
/// implementation; a real scan store can be swapped in here without touching
/// the routes.
pub trait DataSource: Send + Sync {
    fn user(&self) -> &User;
    fn overview(&self) -> OverviewResponse;
    fn websites(&self) -> &[Website];
    fn alerts(&self) -> &[Alert];
}

/// Hardcoded demo data, built once at startup and never mutated.
pub struct FixtureSet {
    user: User,
    overview: OverviewResponse,
    websites: Vec<Website>,
    alerts: Vec<Alert>,
}

impl FixtureSet {
    pub fn demo() -> Self {
        let now = Utc::now();

        let user = User {
            id: "u_123".to_string(),
            email: "mxdev@example.de".to_string(),
            plan: "pro".to_string(),
        };

        let overview = OverviewResponse {
            overall_score: 89,
            score_change: 4,
            attacks_last_24h: 432,
            attacks_change_percent: 18,
            uptime_percent: 99.96,
            uptime_note: "1 brief outage at shop.mxdev.de (3 minutes).".to_string(),
            targets_total: 4,
            targets_note: "3 websites, 1 server. Limit of your Pro plan.".to_string(),
        };

        let websites = vec![
            Website {
                id: "w_1".to_string(),
                domain: "mxdev.de".to_string(),
                status: WebsiteStatus::Online,
                last_score: Some(93),
                last_scan_at: Some(now - Duration::minutes(20)),
                risk_level: Some(RiskLevel::Low),
            },
            Website {
                id: "w_2".to_string(),
                domain: "shop.mxdev.de".to_string(),
                status: WebsiteStatus::Online,
                last_score: Some(81),
                last_scan_at: Some(now - Duration::minutes(90)),
                risk_level: Some(RiskLevel::Medium),
            },
            Website {
                id: "w_3".to_string(),
                domain: "demo.mxsec.app".to_string(),
                status: WebsiteStatus::Reachable,
                last_score: Some(67),
                last_scan_at: Some(now - Duration::hours(12)),
                risk_level: Some(RiskLevel::High),
            },
            Website {
                id: "w_4".to_string(),
                domain: "kundenprojekt.de".to_string(),
                status: WebsiteStatus::SslError,
                last_score: Some(54),
                last_scan_at: Some(now - Duration::days(1)),
                risk_level: Some(RiskLevel::Critical),
            },
        ];

        // Newest first; stored order is the display order.
        let alerts = vec![
            Alert {
                id: "a_1".to_string(),
                kind: "cve".to_string(),
                severity: Severity::Critical,
                message: "Critical vulnerability found".to_string(),
                target_type: TargetType::Website,
                target_label: "kundenprojekt.de".to_string(),
                created_at: now - Duration::minutes(5),
                tag: "CVE".to_string(),
            },
            Alert {
                id: "a_2".to_string(),
                kind: "ssh".to_string(),
                severity: Severity::Warn,
                message: "Multiple failed SSH logins".to_string(),
                target_type: TargetType::Server,
                target_label: "mc-prod-01".to_string(),
                created_at: now - Duration::minutes(12),
                tag: "SSH".to_string(),
            },
            Alert {
                id: "a_3".to_string(),
                kind: "info".to_string(),
                severity: Severity::Info,
                message: "New domain added".to_string(),
                target_type: TargetType::Website,
                target_label: "demo.mxsec.app".to_string(),
                created_at: now - Duration::minutes(34),
                tag: "Info".to_string(),
            },
            Alert {
                id: "a_4".to_string(),
                kind: "autofix".to_string(),
                severity: Severity::Info,
                message: "AutoFix applied (firewall)".to_string(),
                target_type: TargetType::Server,
                target_label: "mc-prod-01".to_string(),
                created_at: now - Duration::hours(1),
                tag: "AutoFix".to_string(),
            },
        ];

        FixtureSet {
            user,
            overview,
            websites,
            alerts,
        }
    }
}

impl DataSource for FixtureSet {
    fn user(&self) -> &User {
        &self.user
    }

    fn overview(&self) -> OverviewResponse {
        self.overview.clone()
    }

    fn websites(&self) -> &[Website] {
        &self.websites
    }

    fn alerts(&self) -> &[Alert] {
        &self.alerts
    }
}
