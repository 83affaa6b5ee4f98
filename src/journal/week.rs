use std::collections::BTreeMap;

use chrono::{NaiveDate, Weekday};

use crate::models::{Entry, EntryType, WeekBucket};

/// Monday on or before the given date (ISO week, weeks start Monday). A date
/// that already is a Monday maps to itself.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Mon).first_day()
}

/// Groups a flat entry collection into Monday-keyed week buckets, oldest
/// week first. Within a bucket, entries are partitioned by type and keep the
/// relative order they arrived in; no caching, recomputed on every call.
pub fn aggregate(entries: &[Entry]) -> Vec<WeekBucket> {
    let mut buckets: BTreeMap<NaiveDate, WeekBucket> = BTreeMap::new();

    for entry in entries {
        let monday = week_start(entry.date);
        let bucket = buckets
            .entry(monday)
            .or_insert_with(|| WeekBucket::empty(monday));

        match entry.kind {
            EntryType::Work => bucket.work.push(entry.clone()),
            EntryType::Learning => bucket.learnings.push(entry.clone()),
            EntryType::InterestingThing => bucket.interesting_things.push(entry.clone()),
        }
    }

    buckets.into_values().collect()
}
