use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::prayer::Prayer;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DailyAttendance {
    pub date: NaiveDate,
    pub attended: u8,
}

impl DailyAttendance {
    /// All five prayers at the mosque that day.
    pub fn is_full(&self) -> bool {
        self.attended as usize == Prayer::PER_DAY
    }
}

/// Streaks of consecutive qualifying days ending at (or just before) today.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Streaks {
    /// Days with at least one prayer at the mosque.
    pub current: u32,
    /// Days with all five prayers at the mosque.
    pub perfect: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekGrid {
    pub days: Vec<DailyAttendance>,
}

impl WeekGrid {
    pub fn new(days: Vec<DailyAttendance>) -> Self {
        Self { days }
    }

    pub fn total_attended(&self) -> u32 {
        self.days.iter().map(|d| d.attended as u32).sum()
    }

    pub fn total_possible(&self) -> u32 {
        (self.days.len() * Prayer::PER_DAY) as u32
    }

    pub fn full_days(&self) -> u32 {
        self.days.iter().filter(|d| d.is_full()).count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, attended: u8) -> DailyAttendance {
        DailyAttendance {
            date: date.parse().unwrap(),
            attended,
        }
    }

    #[test]
    fn grid_totals() {
        let grid = WeekGrid::new(vec![
            day("2024-05-01", 5),
            day("2024-05-02", 2),
            day("2024-05-03", 0),
            day("2024-05-04", 5),
        ]);
        assert_eq!(grid.total_attended(), 12);
        assert_eq!(grid.total_possible(), 20);
        assert_eq!(grid.full_days(), 2);
    }

    #[test]
    fn full_day_needs_all_five() {
        assert!(day("2024-05-01", 5).is_full());
        assert!(!day("2024-05-01", 4).is_full());
    }
}
