use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

use chrono::Datelike;
use regex::Regex;
use serde_json::Value;

use crate::calendar::{EventRecord, MonthKey};

pub const DAYS_PER_WEEK: usize = 7;

static PADDING_CELL: CalendarDay = CalendarDay::Padding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarDay {
    Padding,
    Day { day_number: u32, events: Vec<EventRecord> },
}

impl CalendarDay {
    pub fn is_padding(&self) -> bool {
        matches!(self, CalendarDay::Padding)
    }

    pub fn events(&self) -> &[EventRecord] {
        match self {
            CalendarDay::Padding => &[],
            CalendarDay::Day { events, .. } => events,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub key: MonthKey,
    pub leading_padding: usize,
    pub days: Vec<CalendarDay>,
    pub trailing_padding: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Week<'a> {
    pub days: Vec<&'a CalendarDay>,
}

impl MonthGrid {
    pub fn days_in_month(&self) -> usize {
        self.days.len()
    }

    /// Every cell in display order, padding included.
    pub fn cells(&self) -> impl Iterator<Item = &CalendarDay> {
        std::iter::repeat_n(&PADDING_CELL, self.leading_padding)
            .chain(self.days.iter())
            .chain(std::iter::repeat_n(&PADDING_CELL, self.trailing_padding))
    }

    pub fn weeks(&self) -> Vec<Week<'_>> {
        let cells: Vec<&CalendarDay> = self.cells().collect();
        cells
            .chunks(DAYS_PER_WEEK)
            .map(|chunk| Week { days: chunk.to_vec() })
            .collect()
    }

    pub fn day(&self, day_number: u32) -> Option<&CalendarDay> {
        let index = usize::try_from(day_number.checked_sub(1)?).ok()?;
        self.days.get(index)
    }
}

/// Builds month grids from a fixed set of events.
///
/// Holds nothing but the date index, so building is repeatable and every call
/// with the same keys returns equal grids.
#[derive(Debug, Clone, Default)]
pub struct CalendarGridBuilder {
    events_by_date: HashMap<String, Vec<EventRecord>>,
    event_months: BTreeSet<MonthKey>,
}

impl CalendarGridBuilder {
    pub fn new(events: &[EventRecord]) -> Self {
        let mut events_by_date: HashMap<String, Vec<EventRecord>> = HashMap::new();
        let mut event_months = BTreeSet::new();

        for event in events {
            events_by_date
                .entry(event.date.clone())
                .or_default()
                .push(event.clone());

            match month_of_date(&event.date) {
                Some(key) => {
                    event_months.insert(key);
                }
                None => {
                    tracing::warn!("Event '{}' has no usable YYYY-MM date: '{}'", event.name, event.date);
                }
            }
        }

        Self { events_by_date, event_months }
    }

    /// Distinct months that have at least one event, ascending.
    pub fn inferred_months(&self) -> Vec<MonthKey> {
        self.event_months.iter().copied().collect()
    }

    /// Builds the requested months, or every month with events when
    /// `requested` is `None`. Malformed entries are skipped.
    pub fn build(&self, requested: Option<&[Value]>) -> Vec<MonthGrid> {
        let Some(requested) = requested else {
            tracing::info!("No displayed months given, inferring from events");
            return self.build_months(&self.inferred_months());
        };

        let keys: Vec<MonthKey> = requested
            .iter()
            .filter_map(|entry| match MonthKey::from_json(entry) {
                Ok(key) => Some(key),
                Err(e) => {
                    tracing::warn!("Skipping invalid month entry {}: {}", entry, e);
                    None
                }
            })
            .collect();

        self.build_months(&keys)
    }

    pub fn build_months(&self, keys: &[MonthKey]) -> Vec<MonthGrid> {
        keys.iter().map(|key| self.build_month(*key)).collect()
    }

    pub fn build_month(&self, key: MonthKey) -> MonthGrid {
        let leading_padding = key.first_day().weekday().num_days_from_monday() as usize;
        let days_in_month = key.days_in_month();

        let days: Vec<CalendarDay> = (1..=days_in_month)
            .map(|day_number| CalendarDay::Day {
                day_number,
                events: self
                    .events_by_date
                    .get(&key.date_key(day_number))
                    .cloned()
                    .unwrap_or_default(),
            })
            .collect();

        let total_cells = leading_padding + days.len();
        let trailing_padding = total_cells.div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK - total_cells;

        tracing::debug!(
            "Built {} with {} leading and {} trailing padding cells",
            key,
            leading_padding,
            trailing_padding
        );

        MonthGrid { key, leading_padding, days, trailing_padding }
    }
}

fn month_of_date(date: &str) -> Option<MonthKey> {
    static MONTH_PREFIX_RE: OnceLock<Regex> = OnceLock::new();
    let regex = MONTH_PREFIX_RE.get_or_init(|| {
        Regex::new(r"^(\d{4})-(\d{2})").expect("invalid month prefix regex")
    });

    let caps = regex.captures(date)?;
    let year = caps.get(1)?.as_str().parse().ok()?;
    let month = caps.get(2)?.as_str().parse().ok()?;
    MonthKey::new(year, month).ok()
}
