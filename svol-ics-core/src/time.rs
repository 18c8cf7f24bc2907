use std::sync::OnceLock;

use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use regex::Regex;

use crate::{Error, Result};

/// Civil timezone volunteer schedule exports are anchored to.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::US::Central;

/// Matches a clock hour carrying a meridiem but no minutes, e.g. "4PM".
fn bad_time_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([0-9]+)(AM|PM)$").unwrap())
}

/// Repairs and localizes the loosely formatted time ranges found in
/// schedule exports.
///
/// The timezone is threaded through explicitly so tests and future
/// configuration can inject a different zone.
#[derive(Debug, Clone, Copy)]
pub struct TimeNormalizer {
    tz: Tz,
}

impl TimeNormalizer {
    /// Create a normalizer anchored to the given civil timezone.
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// The civil timezone events are localized into.
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Rewrite a bare "4PM" style token as "4:00PM".
    ///
    /// Tokens that already carry minutes, or that do not look like a bare
    /// clock hour at all, pass through unchanged; anything unparseable
    /// surfaces downstream.
    pub fn fix_bad_time(token: &str) -> String {
        match bad_time_re().captures(token) {
            Some(caps) => format!("{}:00{}", &caps[1], &caps[2]),
            None => token.to_string(),
        }
    }

    /// Convert one volunteer time range plus its event date into localized
    /// start/end instants.
    ///
    /// The range holds two 12-hour clock tokens separated by exactly one
    /// '-', e.g. "9am- 12:30PM".
    pub fn volunteer_range(
        &self,
        range: &str,
        date: &str,
    ) -> Result<(DateTime<Tz>, DateTime<Tz>)> {
        let mut tokens = range.split('-');
        let (Some(begin), Some(end), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(Error::MalformedTimeRange(range.to_string()));
        };

        let begin = self.localize_clock12(date, begin)?;
        let end = self.localize_clock12(date, end)?;
        Self::ordered(range, begin, end)
    }

    /// Convert one attendance entry of the form "YYYY-MM-DD--HH:MM-HH:MM"
    /// (24-hour clock, date embedded in the value) into localized
    /// start/end instants.
    pub fn attend_range(&self, entry: &str) -> Result<(DateTime<Tz>, DateTime<Tz>)> {
        let Some((date, times)) = entry.split_once("--") else {
            return Err(Error::MalformedTimeRange(entry.to_string()));
        };

        let mut tokens = times.split('-');
        let (Some(begin), Some(end), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(Error::MalformedTimeRange(entry.to_string()));
        };

        let begin = self.localize_clock24(date, begin)?;
        let end = self.localize_clock24(date, end)?;
        Self::ordered(entry, begin, end)
    }

    /// Parse a 12-hour "HH:MM<AM|PM>" token on the given date, repairing
    /// bare hours first.
    fn localize_clock12(&self, date: &str, token: &str) -> Result<DateTime<Tz>> {
        let token = Self::fix_bad_time(&token.trim_start().to_uppercase());
        self.localize(date, &token, "%Y-%m-%dT%I:%M%p")
    }

    /// Parse a 24-hour "HH:MM" token on the given date.
    fn localize_clock24(&self, date: &str, token: &str) -> Result<DateTime<Tz>> {
        self.localize(date, token.trim(), "%Y-%m-%dT%H:%M")
    }

    fn localize(&self, date: &str, token: &str, format: &str) -> Result<DateTime<Tz>> {
        let stamp = format!("{}T{}", date, token);
        let naive = NaiveDateTime::parse_from_str(&stamp, format)
            .map_err(|source| Error::TimeToken {
                token: stamp.clone(),
                source,
            })?;

        // Anchor the wall-clock time to the civil zone; DST transitions
        // make some local times ambiguous or nonexistent.
        self.tz
            .from_local_datetime(&naive)
            .single()
            .ok_or(Error::LocalTime {
                time: naive,
                tz: self.tz,
            })
    }

    fn ordered(
        range: &str,
        begin: DateTime<Tz>,
        end: DateTime<Tz>,
    ) -> Result<(DateTime<Tz>, DateTime<Tz>)> {
        if end <= begin {
            return Err(Error::InvertedRange(range.to_string()));
        }
        Ok((begin, end))
    }
}

impl Default for TimeNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEZONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_bad_times() {
        assert_eq!(TimeNormalizer::fix_bad_time("4PM"), "4:00PM");
        assert_eq!(TimeNormalizer::fix_bad_time("11AM"), "11:00AM");
        assert_eq!(TimeNormalizer::fix_bad_time("4:00PM"), "4:00PM");
        assert_eq!(TimeNormalizer::fix_bad_time("12:30AM"), "12:30AM");
        assert_eq!(TimeNormalizer::fix_bad_time("noon"), "noon");
        assert_eq!(TimeNormalizer::fix_bad_time(""), "");
    }

    #[test]
    fn test_volunteer_range_daylight_offset() {
        let normalizer = TimeNormalizer::default();
        let (begin, end) = normalizer
            .volunteer_range("9AM-5PM", "2024-07-15")
            .unwrap();

        assert_eq!(begin.to_rfc3339(), "2024-07-15T09:00:00-05:00");
        assert_eq!(end.to_rfc3339(), "2024-07-15T17:00:00-05:00");
    }

    #[test]
    fn test_volunteer_range_standard_offset() {
        let normalizer = TimeNormalizer::default();
        let (begin, end) = normalizer
            .volunteer_range("9AM-5PM", "2024-01-15")
            .unwrap();

        assert_eq!(begin.to_rfc3339(), "2024-01-15T09:00:00-06:00");
        assert_eq!(end.to_rfc3339(), "2024-01-15T17:00:00-06:00");
    }

    #[test]
    fn test_volunteer_range_repairs_sloppy_tokens() {
        let normalizer = TimeNormalizer::default();
        let (begin, end) = normalizer
            .volunteer_range("9am- 12:30pm", "2024-07-15")
            .unwrap();

        assert_eq!(begin.to_rfc3339(), "2024-07-15T09:00:00-05:00");
        assert_eq!(end.to_rfc3339(), "2024-07-15T12:30:00-05:00");
    }

    #[test]
    fn test_round_trip_rfc3339() {
        let normalizer = TimeNormalizer::default();
        let (begin, end) = normalizer
            .volunteer_range("9AM-5PM", "2024-07-15")
            .unwrap();

        let reparsed = DateTime::parse_from_rfc3339(&begin.to_rfc3339()).unwrap();
        assert_eq!(reparsed, begin);
        let reparsed = DateTime::parse_from_rfc3339(&end.to_rfc3339()).unwrap();
        assert_eq!(reparsed, end);
    }

    #[test]
    fn test_rejects_wrong_hyphen_count() {
        let normalizer = TimeNormalizer::default();

        assert!(matches!(
            normalizer.volunteer_range("9AM-12PM-3PM", "2024-07-15"),
            Err(Error::MalformedTimeRange(_))
        ));
        assert!(matches!(
            normalizer.volunteer_range("9AM", "2024-07-15"),
            Err(Error::MalformedTimeRange(_))
        ));
    }

    #[test]
    fn test_rejects_unparseable_token() {
        let normalizer = TimeNormalizer::default();

        assert!(matches!(
            normalizer.volunteer_range("9AM-5:60PM", "2024-07-15"),
            Err(Error::TimeToken { .. })
        ));
        assert!(matches!(
            normalizer.volunteer_range("morning-5PM", "2024-07-15"),
            Err(Error::TimeToken { .. })
        ));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let normalizer = TimeNormalizer::default();

        assert!(matches!(
            normalizer.volunteer_range("5PM-9AM", "2024-07-15"),
            Err(Error::InvertedRange(_))
        ));
    }

    #[test]
    fn test_rejects_nonexistent_wall_time() {
        // 2:30AM does not exist on the spring-forward date in US Central.
        let normalizer = TimeNormalizer::default();

        assert!(matches!(
            normalizer.volunteer_range("2:30AM-4AM", "2025-03-09"),
            Err(Error::LocalTime { .. })
        ));
    }

    #[test]
    fn test_attend_range() {
        let normalizer = TimeNormalizer::default();
        let (begin, end) = normalizer.attend_range("2024-11-18--09:00-17:30").unwrap();

        assert_eq!(begin.to_rfc3339(), "2024-11-18T09:00:00-06:00");
        assert_eq!(end.to_rfc3339(), "2024-11-18T17:30:00-06:00");
    }

    #[test]
    fn test_attend_range_requires_date_separator() {
        let normalizer = TimeNormalizer::default();

        assert!(matches!(
            normalizer.attend_range("09:00-17:30"),
            Err(Error::MalformedTimeRange(_))
        ));
    }
}
