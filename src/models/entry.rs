use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Journal entry category. The wire format matches the values submitted by
/// the entry form: `work`, `learning`, `interesting-thing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum EntryType {
    Work,
    Learning,
    InterestingThing,
}

impl EntryType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "work" => Some(EntryType::Work),
            "learning" => Some(EntryType::Learning),
            "interesting-thing" => Some(EntryType::InterestingThing),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Work => "work",
            EntryType::Learning => "learning",
            EntryType::InterestingThing => "interesting-thing",
        }
    }
}

/// One journal record. `date` is a plain calendar date, serialized
/// `YYYY-MM-DD` with no time-of-day or offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Entry {
    pub id: i64,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: EntryType,
    pub text: String,
}

/// Validated create/update payload. Updates replace all three fields at
/// once; there are no partial edits.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub date: NaiveDate,
    pub kind: EntryType,
    pub text: String,
}

/// Entries of one ISO week, keyed by the Monday that starts it and split by
/// type. Derived on every read, never stored. Sub-lists may be empty; hiding
/// empty groups is up to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeekBucket {
    pub monday: NaiveDate,
    pub work: Vec<Entry>,
    pub learnings: Vec<Entry>,
    pub interesting_things: Vec<Entry>,
}

impl WeekBucket {
    pub fn empty(monday: NaiveDate) -> Self {
        Self {
            monday,
            work: Vec::new(),
            learnings: Vec::new(),
            interesting_things: Vec::new(),
        }
    }
}
