use chrono::{Datelike, Duration, NaiveDate};

/// Canonical storage key for a local calendar day: zero-padded "YYYY-MM-DD",
/// Gregorian, locale-independent digits.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date_key(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// The last `count` calendar days ending at `today`, oldest first.
pub fn last_days(count: usize, today: NaiveDate) -> Vec<NaiveDate> {
    (0..count)
        .rev()
        .map(|back| today - Duration::days(back as i64))
        .collect()
}

/// Number of days in the calendar month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (NaiveDate::from_ymd_opt(year, month, 1), next_month) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 30,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn date_key_is_zero_padded() {
        assert_eq!(date_key(d("2024-05-01")), "2024-05-01");
        assert_eq!(date_key(NaiveDate::from_ymd_opt(2024, 1, 9).unwrap()), "2024-01-09");
    }

    #[test]
    fn date_key_round_trips() {
        let date = d("2023-12-31");
        assert_eq!(parse_date_key(&date_key(date)), Some(date));
        assert_eq!(parse_date_key("not-a-date"), None);
    }

    #[test]
    fn last_days_ends_at_today_oldest_first() {
        let days = last_days(7, d("2024-05-10"));
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], d("2024-05-04"));
        assert_eq!(days[6], d("2024-05-10"));
        for pair in days.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn last_days_crosses_month_boundary() {
        let days = last_days(3, d("2024-03-01"));
        assert_eq!(days, vec![d("2024-02-28"), d("2024-02-29"), d("2024-03-01")]);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(d("2024-02-15")), 29);
        assert_eq!(days_in_month(d("2023-02-15")), 28);
        assert_eq!(days_in_month(d("2024-04-01")), 30);
        assert_eq!(days_in_month(d("2024-12-25")), 31);
    }
}
