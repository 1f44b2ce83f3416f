use crate::ui::calendar_view::CalendarView;
use crate::ui::html::{self, LinkStyle};

const MIN_WIDTH: usize = 20;

/// Terminal rendering, derived from the HTML so both outputs stay in step.
/// Links are spelled out inline since the terminal drops the markup.
pub fn render_calendar(view: &CalendarView, width: usize) -> String {
    let markup = html::render_calendar_with(view, LinkStyle::Inline).into_string();
    html_to_text(&markup, width)
}

pub fn render_load_error(width: usize) -> String {
    html_to_text(&html::render_load_error().into_string(), width)
}

fn html_to_text(markup: &str, width: usize) -> String {
    html2text::from_read(markup.as_bytes(), width.max(MIN_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{CalendarDocument, EventRecord};
    use crate::ui::labels::EMPTY_MESSAGE;

    fn view_with(events: Vec<EventRecord>) -> CalendarView {
        CalendarView::from_document(&CalendarDocument { events, ..CalendarDocument::default() })
    }

    #[test]
    fn event_links_are_spelled_out() {
        let view = view_with(vec![EventRecord::new("2024-03-15", "Finale").with_url("/finale.html")]);
        let text = render_calendar(&view, 120);

        assert!(text.contains("Maart 2024"));
        assert!(text.contains("Finale (/finale.html)"));
    }

    #[test]
    fn url_with_apostrophe_is_kept_whole() {
        let view = view_with(vec![
            EventRecord::new("2024-03-15", "Finale").with_url("/uitslagen/kampioen's.html"),
        ]);
        let text = render_calendar(&view, 120);

        assert!(text.contains("Finale (/uitslagen/kampioen's.html)"));
    }

    #[test]
    fn placeholder_link_prints_name_only() {
        let view = view_with(vec![EventRecord::new("2024-03-15", "Training").with_url("#")]);
        let text = render_calendar(&view, 120);

        assert!(text.contains("Training"));
        assert!(!text.contains("Training (#)"));
    }

    #[test]
    fn empty_view_prints_message() {
        let text = render_calendar(&view_with(Vec::new()), 120);
        assert!(text.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn load_error_prints_message() {
        assert!(render_load_error(80).contains("Kon kalender niet laden."));
    }
}
