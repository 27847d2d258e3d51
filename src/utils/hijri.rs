use chrono::{Datelike, Duration, NaiveDate};
use hijri_date::HijriDate;

/// Islamic month names in English (index 0 = Muharram = month 1)
const HIJRI_MONTH_NAMES: &[&str] = &[
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

fn hijri_month_name(month: usize) -> &'static str {
    if (1..=12).contains(&month) {
        HIJRI_MONTH_NAMES[month - 1]
    } else {
        "Unknown"
    }
}

/// Hijri date string for a Gregorian day, e.g. "17 Ramadan 1446".
///
/// `offset_days` adjusts for local moon sighting differences (e.g. -1 if
/// your country is one day behind Saudi Arabia). Returns None when the
/// date falls outside the range the conversion supports.
pub fn hijri_string(date: NaiveDate, offset_days: i32) -> Option<String> {
    let adjusted = date + Duration::days(offset_days as i64);
    HijriDate::from_gr(
        adjusted.year() as usize,
        adjusted.month() as usize,
        adjusted.day() as usize,
    )
    .ok()
    .map(|hd| format!("{} {} {}", hd.day(), hijri_month_name(hd.month()), hd.year()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_known_date() {
        // Mid-March 2024 falls squarely inside Hijri year 1445
        let date: NaiveDate = "2024-03-20".parse().unwrap();
        let s = hijri_string(date, 0).unwrap();
        assert!(s.contains("1445"), "got {s}");
    }

    #[test]
    fn offset_shifts_the_day() {
        let date: NaiveDate = "2024-03-20".parse().unwrap();
        let base = hijri_string(date, 0).unwrap();
        let behind = hijri_string(date, -1).unwrap();
        assert_ne!(base, behind);
    }
}
