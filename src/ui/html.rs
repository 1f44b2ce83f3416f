use maud::{DOCTYPE, Markup, html};

use crate::calendar::{EventRecord, Legend};
use crate::ui::calendar_view::CalendarView;
use crate::ui::labels::{DAY_ABBREVIATIONS, EMPTY_MESSAGE, LOAD_ERROR_MESSAGE, month_title};
use crate::ui::month_view::{CalendarDay, MonthGrid};

/// How event links are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkStyle {
    /// `<a href>` around the event name, as on the website.
    #[default]
    Anchor,
    /// `name (url)` as plain text, for output that loses markup.
    Inline,
}

/// Standalone document around [`render_calendar`].
pub fn render_page(view: &CalendarView) -> Markup {
    html! {
        (DOCTYPE)
        html lang="nl" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title id="page-title" { (view.page_title.as_deref().unwrap_or("Kalender")) }
            }
            body {
                (render_calendar(view))
            }
        }
    }
}

/// Heading, legend and month grids, as placed in the calendar page body.
pub fn render_calendar(view: &CalendarView) -> Markup {
    render_calendar_with(view, LinkStyle::Anchor)
}

pub fn render_calendar_with(view: &CalendarView, links: LinkStyle) -> Markup {
    html! {
        @if let Some(heading) = &view.main_heading {
            h1 id="main-heading" { (heading) }
        }
        @if let Some(legend) = &view.legend {
            (render_legend(legend))
        }
        div id="calendar-view-container" {
            @if view.is_empty() {
                p { (EMPTY_MESSAGE) }
            } @else {
                @for month in &view.months {
                    (render_month_with(month, links))
                }
            }
        }
    }
}

pub fn render_load_error() -> Markup {
    html! {
        div id="calendar-view-container" {
            p style="color: red;" { (LOAD_ERROR_MESSAGE) }
        }
    }
}

fn render_legend(legend: &Legend) -> Markup {
    html! {
        div.legend {
            @if let Some(title) = &legend.title {
                h3 id="legend-title" { (title) }
            }
            div id="calendar-legend" {
                @for item in &legend.items {
                    p {
                        span class=(item.color_class) { (item.label) " " }
                        (item.description)
                    }
                }
            }
        }
    }
}

pub fn render_month(grid: &MonthGrid) -> Markup {
    render_month_with(grid, LinkStyle::Anchor)
}

pub fn render_month_with(grid: &MonthGrid, links: LinkStyle) -> Markup {
    html! {
        section.month-grid {
            h2.month-title { (month_title(grid.key)) }
            div.calendar-header {
                @for abbreviation in DAY_ABBREVIATIONS {
                    span { (abbreviation) }
                }
            }
            div.calendar-days {
                @for cell in grid.cells() {
                    (render_cell(cell, links))
                }
            }
        }
    }
}

fn render_cell(cell: &CalendarDay, links: LinkStyle) -> Markup {
    match cell {
        CalendarDay::Padding => html! {
            div.calendar-day.padding-day {}
        },
        CalendarDay::Day { day_number, events } => html! {
            div.calendar-day {
                span.day-number { (day_number) }
                @for event in events {
                    (render_event(event, links))
                }
            }
        },
    }
}

fn render_event(event: &EventRecord, links: LinkStyle) -> Markup {
    html! {
        span class={ "calendar-event " (event.color_class()) }
            title=(event.tooltip())
            data-info=[event.data_info.as_deref()]
            data-location=[event.data_location.as_deref()]
            data-category=[event.data_category.as_deref()]
            data-url=[event.data_url.as_deref()]
        {
            @match (event.link(), links) {
                (Some(link), LinkStyle::Anchor) => { a href=(link) { (event.name) } },
                (Some(link), LinkStyle::Inline) => { (event.name) " (" (link) ")" },
                (None, _) => { (event.name) },
            }
        }
    }
}
