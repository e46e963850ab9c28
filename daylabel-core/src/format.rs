//! Day labels for chat list dividers.
//!
//! A label classifies a message timestamp relative to "now":
//!
//! | Condition | Label |
//! |-----------|-------|
//! | same calendar day as now | `Today` |
//! | calendar day before now | `Yesterday` |
//! | elapsed days (ceil) <= 7 | `N days ago` |
//! | otherwise | `June 12, 2025` |
//!
//! The first two checks compare calendar days in now's time zone. The
//! days-ago count is computed from elapsed milliseconds and rounded up, so it
//! can read one higher than the calendar distance (a message from 4 days and
//! 10 hours ago is "5 days ago").

use crate::config::{LabelConfig, DEFAULT_DATE_FORMAT};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use std::fmt::{Display, Write};

/// Milliseconds in one elapsed day.
pub const MS_PER_DAY: u64 = 86_400_000;

/// Maps an instant to its divider label.
///
/// Holds only the label strings and thresholds, so one labeler can be shared
/// freely between threads and render passes.
#[derive(Debug, Clone, Default)]
pub struct DateLabeler {
    config: LabelConfig,
}

impl DateLabeler {
    pub fn new(config: LabelConfig) -> Self {
        Self { config }
    }

    /// Label `target` relative to the current local time.
    pub fn label(&self, target: Option<&DateTime<Local>>) -> String {
        self.label_at(target, &Local::now())
    }

    /// Label `target` relative to `now`.
    ///
    /// Calendar days are taken in `now`'s time zone; `target` is converted
    /// into it first. An absent target yields an empty string.
    pub fn label_at<A, B>(&self, target: Option<&DateTime<A>>, now: &DateTime<B>) -> String
    where
        A: TimeZone,
        B: TimeZone,
        B::Offset: Display,
    {
        let Some(target) = target else {
            return String::new();
        };
        let target = target.with_timezone(&now.timezone());

        let target_day = target.date_naive();
        let today = now.date_naive();
        if target_day == today {
            return self.config.today.clone();
        }
        if today.pred_opt() == Some(target_day) {
            return self.config.yesterday.clone();
        }

        let days = elapsed_days(&target, now);
        if days <= u64::from(self.config.recent_days) {
            self.config.days_ago.replace("{n}", &days.to_string())
        } else {
            format_date(&target, &self.config.date_format)
        }
    }

    /// Calendar day of `target` in `now`'s zone, the key sections group by.
    pub(crate) fn day_key<A, B>(target: Option<&DateTime<A>>, now: &DateTime<B>) -> Option<NaiveDate>
    where
        A: TimeZone,
        B: TimeZone,
    {
        target.map(|t| t.with_timezone(&now.timezone()).date_naive())
    }
}

/// Format `date` with `format`, or with the default format if chrono rejects it.
fn format_date<Tz>(date: &DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_ok() {
        return out;
    }
    date.format(DEFAULT_DATE_FORMAT).to_string()
}

/// Elapsed whole days between two instants, rounded up, in either direction.
pub fn elapsed_days<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>) -> u64 {
    let ms = (b.timestamp_millis() - a.timestamp_millis()).unsigned_abs();
    (ms + MS_PER_DAY - 1) / MS_PER_DAY
}

/// Label `target` against the current local time with the default strings.
pub fn format_day_label(target: Option<&DateTime<Local>>) -> String {
    DateLabeler::default().label(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset, Utc};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn now() -> DateTime<Utc> {
        at(2025, 6, 19, 10, 0)
    }

    fn label(target: DateTime<Utc>) -> String {
        DateLabeler::default().label_at(Some(&target), &now())
    }

    #[test]
    fn test_absent_target_is_empty() {
        let labeler = DateLabeler::default();
        assert_eq!(labeler.label_at::<Utc, Utc>(None, &now()), "");
        assert_eq!(format_day_label(None), "");
    }

    #[test]
    fn test_same_calendar_day_is_today() {
        assert_eq!(label(at(2025, 6, 19, 23, 59)), "Today");
        assert_eq!(label(at(2025, 6, 19, 0, 0)), "Today");
        assert_eq!(label(now()), "Today");
    }

    #[test]
    fn test_previous_calendar_day_is_yesterday() {
        assert_eq!(label(at(2025, 6, 18, 0, 1)), "Yesterday");
        assert_eq!(label(at(2025, 6, 18, 23, 59)), "Yesterday");
    }

    #[test]
    fn test_crossing_midnight_is_not_today() {
        let now = at(2025, 6, 19, 0, 30);
        let target = now - Duration::hours(1);
        assert_eq!(
            DateLabeler::default().label_at(Some(&target), &now),
            "Yesterday"
        );
    }

    #[test]
    fn test_yesterday_rolls_over_month_and_year() {
        let labeler = DateLabeler::default();
        let now = at(2025, 3, 1, 8, 0);
        assert_eq!(
            labeler.label_at(Some(&at(2025, 2, 28, 12, 0)), &now),
            "Yesterday"
        );

        let now = at(2025, 1, 1, 8, 0);
        assert_eq!(
            labeler.label_at(Some(&at(2024, 12, 31, 12, 0)), &now),
            "Yesterday"
        );
    }

    #[test]
    fn test_days_ago_uses_ceiling_of_elapsed_time() {
        assert_eq!(label(at(2025, 6, 15, 10, 0)), "4 days ago");
        // 4 days 10 hours rounds up
        assert_eq!(label(at(2025, 6, 15, 0, 0)), "5 days ago");
        assert_eq!(label(at(2025, 6, 17, 9, 0)), "3 days ago");
        assert_eq!(label(at(2025, 6, 12, 10, 0)), "7 days ago");
    }

    #[test]
    fn test_older_than_a_week_is_calendar_date() {
        assert_eq!(label(at(2025, 6, 1, 0, 0)), "June 1, 2025");
        assert_eq!(label(at(2025, 6, 12, 9, 59)), "June 12, 2025");
        assert_eq!(label(at(2024, 12, 25, 18, 0)), "December 25, 2024");
    }

    #[test]
    fn test_future_instant_uses_absolute_difference() {
        assert_eq!(label(at(2025, 6, 20, 9, 0)), "1 days ago");
        assert_eq!(label(at(2025, 7, 4, 0, 0)), "July 4, 2025");
    }

    #[test]
    fn test_calendar_days_follow_now_zone() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        // 2025-06-19 10:00 in Tokyo is 01:00 UTC on the same day
        let now = tokyo.with_ymd_and_hms(2025, 6, 19, 10, 0, 0).unwrap();
        // 2025-06-18 20:00 UTC is already June 19 in Tokyo
        let target = at(2025, 6, 18, 20, 0);
        assert_eq!(
            DateLabeler::default().label_at(Some(&target), &now),
            "Today"
        );
        assert_eq!(
            DateLabeler::default().label_at(Some(&target), &now.with_timezone(&Utc)),
            "Yesterday"
        );
    }

    #[test]
    fn test_custom_strings_and_threshold() {
        let labeler = DateLabeler::new(LabelConfig {
            today: "Aujourd'hui".to_string(),
            yesterday: "Hier".to_string(),
            days_ago: "il y a {n} jours".to_string(),
            recent_days: 3,
            date_format: "%d/%m/%Y".to_string(),
        });
        let now = now();
        assert_eq!(labeler.label_at(Some(&now), &now), "Aujourd'hui");
        assert_eq!(
            labeler.label_at(Some(&at(2025, 6, 18, 9, 0)), &now),
            "Hier"
        );
        assert_eq!(
            labeler.label_at(Some(&at(2025, 6, 16, 10, 0)), &now),
            "il y a 3 jours"
        );
        assert_eq!(
            labeler.label_at(Some(&at(2025, 6, 15, 10, 0)), &now),
            "15/06/2025"
        );
    }

    #[test]
    fn test_invalid_date_format_falls_back_to_default() {
        let labeler = DateLabeler::new(LabelConfig {
            date_format: "%Q".to_string(),
            ..LabelConfig::default()
        });
        assert_eq!(
            labeler.label_at(Some(&at(2025, 6, 1, 0, 0)), &now()),
            "June 1, 2025"
        );
        // only the date form formats, the other labels are unaffected
        assert_eq!(labeler.label_at(Some(&now()), &now()), "Today");
    }

    #[test]
    fn test_label_against_wall_clock() {
        let labeler = DateLabeler::default();
        let now = Local::now();
        assert_eq!(labeler.label(Some(&now)), "Today");
        assert_eq!(format_day_label(Some(&now)), "Today");
        assert_eq!(
            format_day_label(Some(&(now - Duration::days(30)))),
            (now - Duration::days(30)).format("%B %-d, %Y").to_string()
        );
    }

    #[test]
    fn test_labeling_is_pure() {
        let labeler = DateLabeler::default();
        let target = at(2025, 6, 14, 3, 0);
        let first = labeler.label_at(Some(&target), &now());
        let second = labeler.label_at(Some(&target), &now());
        assert_eq!(first, second);
    }

    #[test]
    fn test_elapsed_days_rounds_up() {
        assert_eq!(elapsed_days(&now(), &now()), 0);
        assert_eq!(elapsed_days(&(now() - Duration::milliseconds(1)), &now()), 1);
        assert_eq!(elapsed_days(&(now() - Duration::hours(25)), &now()), 2);
        assert_eq!(elapsed_days(&now(), &(now() - Duration::hours(48))), 2);
    }
}
