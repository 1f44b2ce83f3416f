use std::time::Duration;

use crate::calendar::{CalendarDocument, MonthKey};
use crate::storage::config::Config;
use crate::sync::source::{CalendarSource, SourceError, source_for};
use crate::ui::calendar_view::CalendarView;

/// Fetches the calendar document once and turns it into a view.
///
/// There is no retry: a failed fetch is reported to the caller as is.
pub struct CalendarLoader {
    source: Box<dyn CalendarSource>,
    months: Vec<MonthKey>,
}

impl CalendarLoader {
    pub fn new(source: Box<dyn CalendarSource>) -> Self {
        Self { source, months: Vec::new() }
    }

    pub fn from_config(config: &Config) -> Result<Self, SourceError> {
        let timeout = Duration::from_secs(config.source.timeout_seconds);
        Ok(Self::new(source_for(&config.source.location, timeout)?))
    }

    /// Replaces the document's `displayedMonths`. An empty list keeps them.
    pub fn with_months(mut self, months: Vec<MonthKey>) -> Self {
        self.months = months;
        self
    }

    pub async fn fetch_document(&self) -> Result<CalendarDocument, SourceError> {
        match self.source.fetch_document().await {
            Ok(document) => {
                tracing::info!(
                    "Loaded {} event(s) from {}",
                    document.events.len(),
                    self.source.describe()
                );
                Ok(document)
            }
            Err(e) => {
                tracing::error!("Error loading calendar from {}: {}", self.source.describe(), e);
                Err(e)
            }
        }
    }

    pub async fn load(&self) -> Result<CalendarView, SourceError> {
        let document = self.fetch_document().await?;

        let view = if self.months.is_empty() {
            CalendarView::from_document(&document)
        } else {
            CalendarView::for_months(&document, &self.months)
        };

        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::EventRecord;
    use crate::sync::source::MockCalendarSource;

    fn source_returning(document: CalendarDocument) -> MockCalendarSource {
        let mut source = MockCalendarSource::new();
        source.expect_describe().return_const("mock".to_string());
        source
            .expect_fetch_document()
            .times(1)
            .returning(move || Ok(document.clone()));
        source
    }

    #[tokio::test]
    async fn load_builds_inferred_months() {
        let document = CalendarDocument {
            events: vec![
                EventRecord::new("2024-01-10", "a"),
                EventRecord::new("2024-03-15", "b"),
            ],
            ..CalendarDocument::default()
        };
        let loader = CalendarLoader::new(Box::new(source_returning(document)));

        let view = loader.load().await.unwrap();

        let keys: Vec<String> = view.months.iter().map(|m| m.key.to_string()).collect();
        assert_eq!(keys, vec!["2024-01", "2024-03"]);
    }

    #[tokio::test]
    async fn explicit_months_replace_document_selection() {
        let document = CalendarDocument {
            events: vec![EventRecord::new("2024-01-10", "a")],
            ..CalendarDocument::default()
        };
        let june = MonthKey::new(2024, 6).unwrap();
        let loader = CalendarLoader::new(Box::new(source_returning(document))).with_months(vec![june]);

        let view = loader.load().await.unwrap();

        assert_eq!(view.months.len(), 1);
        assert_eq!(view.months[0].key, june);
    }

    #[tokio::test]
    async fn fetch_failure_is_fetched_once_and_surfaced() {
        let mut source = MockCalendarSource::new();
        source.expect_describe().return_const("mock".to_string());
        source
            .expect_fetch_document()
            .times(1)
            .returning(|| Err(SourceError::NotFound("kalender.json".to_string())));

        let result = CalendarLoader::new(Box::new(source)).load().await;

        assert!(matches!(result, Err(SourceError::NotFound(_))));
    }

    #[test]
    fn from_config_uses_configured_location() {
        let mut config = Config::default();
        config.source.location = "https://example.org/kalender.json".to_string();

        let loader = CalendarLoader::from_config(&config).unwrap();

        assert_eq!(loader.source.describe(), "https://example.org/kalender.json");
    }
}
