use std::fmt;

use chrono::NaiveDate;

use super::event::EventRecord;

pub const EVENT_COLORS: [&str; 4] = ["green", "blue", "red", "black"];

const LINK_PREFIXES: [&str; 5] = ["http://", "https://", "/", "#", "mailto:"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub index: usize,
    pub severity: Severity,
    pub message: String,
}

impl ValidationIssue {
    fn error(index: usize, message: String) -> Self {
        Self { index, severity: Severity::Error, message }
    }

    fn warning(index: usize, message: String) -> Self {
        Self { index, severity: Severity::Warning, message }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "event #{}: {}: {}", self.index, label, self.message)
    }
}

pub fn validate_event(index: usize, event: &EventRecord) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if NaiveDate::parse_from_str(&event.date, "%Y-%m-%d").is_err() {
        issues.push(ValidationIssue::error(
            index,
            format!("date '{}' is not a valid YYYY-MM-DD date", event.date),
        ));
    }

    if event.name.trim().is_empty() {
        issues.push(ValidationIssue::error(index, "name is empty".to_string()));
    }

    if let Some(color) = &event.color
        && !EVENT_COLORS.contains(&color.as_str())
    {
        issues.push(ValidationIssue::error(
            index,
            format!("unknown color '{}', expected one of {}", color, EVENT_COLORS.join(", ")),
        ));
    }

    if let Some(url) = &event.data_url
        && !LINK_PREFIXES.iter().any(|prefix| url.starts_with(prefix))
    {
        issues.push(ValidationIssue::warning(index, format!("unusual link format '{}'", url)));
    }

    issues
}

pub fn validate_events(events: &[EventRecord]) -> Vec<ValidationIssue> {
    events
        .iter()
        .enumerate()
        .flat_map(|(index, event)| validate_event(index, event))
        .collect()
}

pub fn has_errors(issues: &[ValidationIssue]) -> bool {
    issues.iter().any(|issue| issue.severity == Severity::Error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_event_has_no_issues() {
        let event = EventRecord::new("2024-03-15", "Voorjaarswedstrijd")
            .with_color("green")
            .with_url("https://example.org/uitslag");

        assert!(validate_event(0, &event).is_empty());
    }

    #[test]
    fn impossible_date_is_an_error() {
        let event = EventRecord::new("2023-02-29", "X");
        let issues = validate_event(3, &event);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].index, 3);
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn blank_name_is_an_error() {
        let issues = validate_event(0, &EventRecord::new("2024-03-15", "   "));
        assert!(has_errors(&issues));
    }

    #[test]
    fn unknown_color_is_an_error() {
        let event = EventRecord::new("2024-03-15", "X").with_color("purple");
        let issues = validate_event(0, &event);

        assert!(has_errors(&issues));
        assert!(issues[0].message.contains("purple"));
    }

    #[test]
    fn odd_link_is_only_a_warning() {
        let event = EventRecord::new("2024-03-15", "X").with_url("www.example.org");
        let issues = validate_event(0, &event);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(!has_errors(&issues));
    }

    #[test]
    fn validate_events_reports_indices() {
        let events = vec![
            EventRecord::new("2024-03-15", "ok"),
            EventRecord::new("15-03-2024", "bad date"),
        ];
        let issues = validate_events(&events);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].to_string(), "event #1: error: date '15-03-2024' is not a valid YYYY-MM-DD date");
    }
}
