use crate::calendar::{CalendarDocument, Legend, MonthKey};
use crate::ui::month_view::{CalendarGridBuilder, MonthGrid};

/// Everything a renderer needs for one calendar page.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarView {
    pub page_title: Option<String>,
    pub main_heading: Option<String>,
    pub legend: Option<Legend>,
    pub months: Vec<MonthGrid>,
}

impl CalendarView {
    /// Uses the document's own month selection.
    pub fn from_document(document: &CalendarDocument) -> Self {
        let builder = CalendarGridBuilder::new(&document.events);
        let months = builder.build(document.requested_months());
        Self::with_grids(document, months)
    }

    /// Ignores `displayedMonths` and renders exactly `keys`.
    pub fn for_months(document: &CalendarDocument, keys: &[MonthKey]) -> Self {
        let builder = CalendarGridBuilder::new(&document.events);
        let months = builder.build_months(keys);
        Self::with_grids(document, months)
    }

    fn with_grids(document: &CalendarDocument, months: Vec<MonthGrid>) -> Self {
        tracing::info!(
            "Built {} month grid(s) from {} event(s)",
            months.len(),
            document.events.len()
        );

        Self {
            page_title: document.page_title.clone(),
            main_heading: document.main_heading.clone(),
            legend: document.legend.clone(),
            months,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::EventRecord;

    fn document_with_events(dates: &[&str]) -> CalendarDocument {
        CalendarDocument {
            events: dates.iter().map(|d| EventRecord::new(*d, "event")).collect(),
            ..CalendarDocument::default()
        }
    }

    #[test]
    fn empty_document_gives_empty_view() {
        let view = CalendarView::from_document(&CalendarDocument::default());
        assert!(view.is_empty());
    }

    #[test]
    fn document_without_months_infers_them() {
        let view = CalendarView::from_document(&document_with_events(&["2024-01-05", "2024-03-15"]));

        let keys: Vec<String> = view.months.iter().map(|m| m.key.to_string()).collect();
        assert_eq!(keys, vec!["2024-01", "2024-03"]);
    }

    #[test]
    fn string_month_list_falls_back_to_inference() {
        let document = CalendarDocument::from_json(
            r#"{"events": [{"date": "2024-03-15", "name": "X"}], "displayedMonths": "2024-03"}"#,
        )
        .unwrap();

        let view = CalendarView::from_document(&document);

        assert_eq!(view.months.len(), 1);
        assert_eq!(view.months[0].key.to_string(), "2024-03");
    }

    #[test]
    fn explicit_months_override_document() {
        let mut document = document_with_events(&["2024-01-05"]);
        document.displayed_months = Some(vec![serde_json::json!([2024, 1])]);
        let keys = [MonthKey::new(2024, 7).unwrap()];

        let view = CalendarView::for_months(&document, &keys);

        assert_eq!(view.months.len(), 1);
        assert_eq!(view.months[0].key, keys[0]);
    }

    #[test]
    fn page_metadata_is_carried_over() {
        let mut document = document_with_events(&[]);
        document.page_title = Some("Kalender".to_string());

        let view = CalendarView::from_document(&document);

        assert_eq!(view.page_title.as_deref(), Some("Kalender"));
        assert!(view.main_heading.is_none());
    }
}
