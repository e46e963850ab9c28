//! Grouping chat items under day dividers.

use crate::format::DateLabeler;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::Serialize;
use std::fmt::Display;

/// A run of consecutive items that share one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section<'a, T> {
    /// Divider label, taken from the first item of the run
    pub label: String,
    /// Calendar day in the comparison zone (`None` for undated items)
    pub day: Option<NaiveDate>,
    pub items: Vec<&'a T>,
}

impl<T> Section<'_, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl DateLabeler {
    /// Split `items` into day sections relative to `now`.
    ///
    /// Items are taken in the given order; a new section starts whenever the
    /// calendar day changes. Sorting is left to the caller.
    pub fn sections_at<'a, T, Tz, F>(
        &self,
        items: &'a [T],
        now: &DateTime<Tz>,
        instant: F,
    ) -> Vec<Section<'a, T>>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
        F: Fn(&T) -> Option<DateTime<Utc>>,
    {
        let mut sections: Vec<Section<'a, T>> = Vec::new();

        for item in items {
            let at = instant(item);
            let day = Self::day_key(at.as_ref(), now);

            if let Some(current) = sections.last_mut() {
                if current.day == day {
                    current.items.push(item);
                    continue;
                }
            }

            sections.push(Section {
                label: self.label_at(at.as_ref(), now),
                day,
                items: vec![item],
            });
        }

        sections
    }
}
