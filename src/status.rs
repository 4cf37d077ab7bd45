use crate::{Match, MatchStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Presentation-neutral descriptor for a match status. List and tree views
/// both map it onto their own widgets; the engine never styles anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusInfo {
    pub label: &'static str,
    pub icon_token: &'static str,
    pub severity_class: &'static str,
}

/// Map a match to its display descriptor. Total over every status value,
/// including unknown stored strings (which deserialize as `Pending`).
pub fn resolve_status(m: &Match) -> StatusInfo {
    match m.status {
        MatchStatus::Finished => StatusInfo {
            label: "Finished",
            icon_token: "check",
            severity_class: "success",
        },
        MatchStatus::Live => StatusInfo {
            label: "Live",
            icon_token: "dot-red",
            severity_class: "info",
        },
        MatchStatus::Scheduled => StatusInfo {
            label: "Scheduled",
            icon_token: "clock",
            severity_class: "warning",
        },
        MatchStatus::Locked => StatusInfo {
            label: "Waiting",
            icon_token: "lock",
            severity_class: "neutral",
        },
        MatchStatus::Pending => StatusInfo {
            label: "Pending",
            icon_token: "hourglass",
            severity_class: "neutral",
        },
    }
}

/// Headline for a pairing: `"A vs B"`, the lone team of a bye as
/// `"A (auto-advance)"`, or `"TBD"` while both slots wait on feeders.
pub fn pairing_label(m: &Match) -> String {
    match (&m.home_team, &m.away_team) {
        (Some(home), Some(away)) => format!("{} vs {}", home.name, away.name),
        (Some(lone), None) | (None, Some(lone)) => format!("{} (auto-advance)", lone.name),
        (None, None) => "TBD".to_string(),
    }
}

/// Schedule line for list rows: `"01/03/2026 18:00"` or `"TBD"`.
pub fn format_scheduled_date(date: Option<&DateTime<Utc>>) -> String {
    match date {
        Some(d) => d.format("%d/%m/%Y %H:%M").to_string(),
        None => "TBD".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Team;
    use chrono::TimeZone;

    fn match_with(status: MatchStatus) -> Match {
        Match { id: "match-1".into(), status, round: 1, ..Default::default() }
    }

    #[test]
    fn test_status_table_is_exact() {
        let cases = [
            (MatchStatus::Finished, "Finished", "check", "success"),
            (MatchStatus::Live, "Live", "dot-red", "info"),
            (MatchStatus::Scheduled, "Scheduled", "clock", "warning"),
            (MatchStatus::Locked, "Waiting", "lock", "neutral"),
            (MatchStatus::Pending, "Pending", "hourglass", "neutral"),
        ];
        for (status, label, icon, severity) in cases {
            let info = resolve_status(&match_with(status));
            assert_eq!(info.label, label);
            assert_eq!(info.icon_token, icon);
            assert_eq!(info.severity_class, severity);
        }
    }

    #[test]
    fn test_unlisted_stored_status_resolves_as_pending() {
        let json = r#"{ "id": "match-9", "status": "abandoned", "round": 2, "position": 0 }"#;
        let m: Match = serde_json::from_str(json).unwrap();
        let info = resolve_status(&m);
        assert_eq!(info.label, "Pending");
        assert_eq!(info.icon_token, "hourglass");
    }

    #[test]
    fn test_pairing_label_variants() {
        let mut m = match_with(MatchStatus::Scheduled);
        assert_eq!(pairing_label(&m), "TBD");

        m.home_team = Some(Team::new("t1", "Alpha"));
        assert_eq!(pairing_label(&m), "Alpha (auto-advance)");

        m.home_team = None;
        m.away_team = Some(Team::new("t2", "Beta"));
        assert_eq!(pairing_label(&m), "Beta (auto-advance)");

        m.home_team = Some(Team::new("t1", "Alpha"));
        assert_eq!(pairing_label(&m), "Alpha vs Beta");
    }

    #[test]
    fn test_bye_label_ignores_status() {
        let mut m = match_with(MatchStatus::Locked);
        m.away_team = Some(Team::new("t3", "Gamma"));
        for status in [MatchStatus::Finished, MatchStatus::Locked, MatchStatus::Pending] {
            m.status = status;
            assert!(m.is_bye());
            assert_eq!(pairing_label(&m), "Gamma (auto-advance)");
        }
    }

    #[test]
    fn test_scheduled_date_formatting() {
        let d = Utc.with_ymd_and_hms(2026, 3, 1, 18, 0, 0).unwrap();
        assert_eq!(format_scheduled_date(Some(&d)), "01/03/2026 18:00");
        assert_eq!(format_scheduled_date(None), "TBD");
    }
}
