use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::event::EventRecord;

/// The JSON document the calendar page is built from.
///
/// `displayedMonths` stays untyped here: entries are validated one at a time
/// by the grid builder so a single bad entry does not reject the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_heading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub events: Vec<EventRecord>,
    #[serde(
        default,
        deserialize_with = "month_list_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub displayed_months: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub items: Vec<LegendItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendItem {
    pub color_class: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<EventRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<EventRecord>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Anything but an array leaves month selection to the events.
fn month_list_or_none<'de, D>(deserializer: D) -> Result<Option<Vec<Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(months) => Ok(Some(months)),
        Value::Null => Ok(None),
        other => {
            tracing::warn!("Ignoring displayedMonths {}, expected an array of [year, month]", other);
            Ok(None)
        }
    }
}

impl CalendarDocument {
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// `None` when the document leaves month selection to the events.
    pub fn requested_months(&self) -> Option<&[Value]> {
        self.displayed_months
            .as_deref()
            .filter(|months| !months.is_empty())
    }
}
