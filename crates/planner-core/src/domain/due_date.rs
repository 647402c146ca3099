//! DueDate - 期限日
//!
//! 入力された文字列をそのまま保持し、比較・表示のときだけ解釈します。
//!
//! # 順序付け
//! - 解釈できる日付は正規形 `YYYY-MM-DD` に変換してから比較（= 暦順）
//! - 解釈できない文字列は生の文字列のまま辞書順で比較
//!
//! どちらも文字列キーの比較なので、混在していても全順序になります。

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

const CANONICAL_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%-d %b %Y";

/// Calendar due date as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DueDate(String);

impl DueDate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Calendar date, if the raw string is `YYYY-MM-DD` or an RFC 3339 timestamp.
    ///
    /// Timestamps keep only their calendar date in the offset they were written in.
    pub fn parsed(&self) -> Option<NaiveDate> {
        let raw = self.0.trim();
        NaiveDate::parse_from_str(raw, CANONICAL_FORMAT)
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
    }

    /// Key used for ordering.
    pub fn sort_key(&self) -> Cow<'_, str> {
        match self.parsed() {
            Some(date) => Cow::Owned(date.format(CANONICAL_FORMAT).to_string()),
            None => Cow::Borrowed(&self.0),
        }
    }

    /// Date-only comparison with lexical fallback for malformed input.
    pub fn cmp_chronological(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }

    /// Short display form (`15 Dec 2025`), or the raw string when it cannot be parsed.
    pub fn display(&self) -> String {
        match self.parsed() {
            Some(date) => date.format(DISPLAY_FORMAT).to_string(),
            None => self.0.clone(),
        }
    }
}

impl From<&str> for DueDate {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::iso_date("2025-12-15", Some((2025, 12, 15)))]
    #[case::padded("  2025-01-05 ", Some((2025, 1, 5)))]
    #[case::rfc3339("2025-12-15T23:30:00+01:00", Some((2025, 12, 15)))]
    #[case::garbage("next friday", None)]
    #[case::empty("", None)]
    #[case::impossible_day("2025-02-30", None)]
    fn parses_calendar_dates(#[case] raw: &str, #[case] expected: Option<(i32, u32, u32)>) {
        let expected = expected.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap());
        assert_eq!(DueDate::new(raw).parsed(), expected);
    }

    #[test]
    fn parsed_dates_compare_chronologically() {
        let early = DueDate::new("2025-01-05");
        let late = DueDate::new("2025-01-10");
        let same_day_timestamp = DueDate::new("2025-01-05T08:00:00Z");

        assert_eq!(early.cmp_chronological(&late), Ordering::Less);
        assert_eq!(early.cmp_chronological(&same_day_timestamp), Ordering::Equal);
    }

    #[test]
    fn malformed_dates_fall_back_to_lexical_order() {
        let date = DueDate::new("2025-01-05");
        let word = DueDate::new("tomorrow");
        let other_word = DueDate::new("asap");

        // Digits sort before letters in the lexical fallback.
        assert_eq!(date.cmp_chronological(&word), Ordering::Less);
        assert_eq!(other_word.cmp_chronological(&word), Ordering::Less);
        assert_eq!(word.cmp_chronological(&word.clone()), Ordering::Equal);
    }

    #[test]
    fn five_digit_year_is_not_a_date() {
        let far = DueDate::new("10000-01-01");
        let near = DueDate::new("2025-01-10");

        // Unparsed, so it compares by its raw string and lands first.
        assert_eq!(far.parsed(), None);
        assert_eq!(far.sort_key(), "10000-01-01");
        assert_eq!(far.cmp_chronological(&near), Ordering::Less);
        assert_eq!(far.display(), "10000-01-01");
    }

    #[test]
    fn fallback_order_is_transitive_for_mixed_input() {
        let mut dates = vec![
            DueDate::new("2025-1-5x"),
            DueDate::new("2025-01-10"),
            DueDate::new("2025-01-2x"),
            DueDate::new("2025-01-05T00:00:00Z"),
        ];
        dates.sort_by(|a, b| a.cmp_chronological(b));

        let keys: Vec<_> = dates.iter().map(|d| d.sort_key().into_owned()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn display_formats_or_passes_through() {
        assert_eq!(DueDate::new("2025-12-15").display(), "15 Dec 2025");
        assert_eq!(DueDate::new("2025-01-05").display(), "5 Jan 2025");
        assert_eq!(DueDate::new("someday").display(), "someday");
    }
}
