//! Transaction Date Resolution
//!
//! Resolves the calendar date of a transaction from relative cues in the
//! utterance. "anteontem" is checked before "ontem" because the former
//! contains the latter as a substring.

use chrono::{Datelike, Duration, Months, NaiveDate};
use fintalk_config::Lexicon;
use regex::Regex;

/// Resolve the transaction date from the lowercased utterance.
///
/// Defaults to `today`. An explicit "dia N" cue sets the day-of-month; if
/// that lands more than 2 days in the future the user is taken to mean the
/// most recent such day, one month back. A day invalid for the current
/// month leaves the date untouched.
pub(crate) fn resolve(
    lower: &str,
    today: NaiveDate,
    day_pattern: &Regex,
    lexicon: &Lexicon,
) -> NaiveDate {
    if contains_any(lower, &lexicon.day_before_yesterday_words) {
        return today - Duration::days(2);
    }
    if contains_any(lower, &lexicon.yesterday_words) {
        return today - Duration::days(1);
    }

    if let Some(caps) = day_pattern.captures(lower) {
        if let Some(m) = caps.get(1) {
            if let Ok(day) = m.as_str().parse::<u32>() {
                if let Some(date) = today.with_day(day) {
                    if date > today + Duration::days(2) {
                        if let Some(rolled) = date.checked_sub_months(Months::new(1)) {
                            return rolled;
                        }
                    }
                    return date;
                }
                tracing::debug!(day, "day-of-month cue invalid for current month, ignored");
            }
        }
    }

    today
}

fn contains_any(lower: &str, words: &[String]) -> bool {
    words.iter().any(|w| lower.contains(w.as_str()))
}
