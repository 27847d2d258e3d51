use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::prayer::Prayer;

/// One calendar day's mosque attendance.
///
/// A record with an empty set is never stored: the store drops the day
/// entirely instead, so an empty set only exists transiently during a
/// toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(rename = "prayersAttended")]
    pub prayers_attended: BTreeSet<Prayer>,
}

impl AttendanceRecord {
    pub fn contains(&self, prayer: Prayer) -> bool {
        self.prayers_attended.contains(&prayer)
    }

    pub fn count(&self) -> usize {
        self.prayers_attended.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prayers_attended.is_empty()
    }
}
