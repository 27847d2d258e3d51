use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use log::warn;
use thiserror::Error;

use crate::models::{AttendanceRecord, DailyAttendance, Prayer, Streaks};
use crate::utils::dates::{date_key, days_in_month};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("reading {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("decoding {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("encoding attendance state: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("writing {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Durable map from date key ("YYYY-MM-DD") to that day's attendance.
///
/// One instance per process, owned by the composition root and mutated
/// from a single thread. Every mutation rewrites the whole backing file
/// synchronously, so memory and disk never drift for longer than one
/// failed write. State is bounded by calendar time (a few hundred day
/// records at most), which keeps the full rewrite cheap.
pub struct AttendanceStore {
    path: PathBuf,
    records: BTreeMap<String, AttendanceRecord>,
}

impl AttendanceStore {
    /// Open the store at `path`, loading any existing state.
    ///
    /// A missing or undecodable file is not an error: the store starts
    /// empty and the problem is only logged.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = match Self::load(&path) {
            Ok(records) => records,
            Err(StoreError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                BTreeMap::new()
            }
            Err(err) => {
                warn!("attendance state unreadable, starting empty: {err}");
                BTreeMap::new()
            }
        };
        Self { path, records }
    }

    fn load(path: &Path) -> Result<BTreeMap<String, AttendanceRecord>, StoreError> {
        let bytes = fs::read(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Flip the attendance mark for one prayer on one day, then persist.
    ///
    /// Unmarking the last prayer of a day drops the day's record, so days
    /// with zero attendance never appear in the map or on disk. A failed
    /// write keeps the in-memory change; the error is returned for the
    /// caller to log or ignore.
    pub fn toggle_attendance(&mut self, prayer: Prayer, date: NaiveDate) -> Result<(), StoreError> {
        let key = date_key(date);
        let record = self.records.entry(key.clone()).or_default();
        if !record.prayers_attended.insert(prayer) {
            record.prayers_attended.remove(&prayer);
        }
        if record.is_empty() {
            self.records.remove(&key);
        }
        self.persist()
    }

    pub fn is_attended(&self, prayer: Prayer, date: NaiveDate) -> bool {
        self.records
            .get(&date_key(date))
            .is_some_and(|r| r.contains(prayer))
    }

    /// Prayers attended at the mosque on `date`, always in 0..=5.
    pub fn attended_count(&self, date: NaiveDate) -> usize {
        self.records.get(&date_key(date)).map_or(0, |r| r.count())
    }

    pub fn attended_all(&self, date: NaiveDate) -> bool {
        self.attended_count(date) == Prayer::PER_DAY
    }

    /// Consecutive days with at least one mosque prayer, walking backward
    /// from `today`. An empty today starts the walk at yesterday instead
    /// of breaking the streak: the day is still open.
    pub fn current_streak(&self, today: NaiveDate) -> u32 {
        self.streak_from(today, |d| self.attended_count(d) > 0)
    }

    /// Consecutive days with all five prayers at the mosque, with the same
    /// open-today rule as `current_streak`.
    pub fn perfect_streak(&self, today: NaiveDate) -> u32 {
        self.streak_from(today, |d| self.attended_all(d))
    }

    pub fn streaks(&self, today: NaiveDate) -> Streaks {
        Streaks {
            current: self.current_streak(today),
            perfect: self.perfect_streak(today),
        }
    }

    fn streak_from(&self, today: NaiveDate, qualifies: impl Fn(NaiveDate) -> bool) -> u32 {
        let mut check = today;
        if !qualifies(check) {
            let Some(yesterday) = check.pred_opt() else {
                return 0;
            };
            check = yesterday;
        }
        let mut streak = 0;
        while qualifies(check) {
            streak += 1;
            let Some(prev) = check.pred_opt() else { break };
            check = prev;
        }
        streak
    }

    /// Attendance percentage for the calendar month containing `reference`.
    ///
    /// Days after `today` have not happened yet and count toward neither
    /// numerator nor denominator; a month entirely in the future is 0.
    pub fn monthly_percentage(&self, reference: NaiveDate, today: NaiveDate) -> f64 {
        let mut possible = 0u32;
        let mut attended = 0u32;
        for day in 1..=days_in_month(reference) {
            let Some(date) = NaiveDate::from_ymd_opt(reference.year(), reference.month(), day)
            else {
                continue;
            };
            if date > today {
                continue;
            }
            possible += Prayer::PER_DAY as u32;
            attended += self.attended_count(date) as u32;
        }
        if possible == 0 {
            return 0.0;
        }
        f64::from(attended) / f64::from(possible) * 100.0
    }

    /// Per-day counts for the given dates, in the same order.
    pub fn daily_attendance(&self, days: &[NaiveDate]) -> Vec<DailyAttendance> {
        days.iter()
            .map(|&date| DailyAttendance {
                date,
                attended: self.attended_count(date) as u8,
            })
            .collect()
    }

    pub fn records(&self) -> &BTreeMap<String, AttendanceRecord> {
        &self.records
    }

    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(&self.records).map_err(StoreError::Encode)?;
        // Temp-file-then-rename so a crash mid-write never corrupts the file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &json).map_err(|source| StoreError::Write {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
