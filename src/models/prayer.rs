use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the five obligatory congregational prayers.
///
/// Imsak is deliberately absent: it marks the start of the fast, not a
/// prayer, so it is never trackable for mosque attendance. The serialized
/// names ("Fajr", "Dhuhr", ...) are the on-disk vocabulary of the
/// attendance file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Prayer {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    /// All trackable prayers in daily order.
    pub const ALL: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// Fixed number of trackable prayers per day.
    pub const PER_DAY: usize = Self::ALL.len();

    pub fn as_str(&self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }

    /// Three-letter label for grid rows.
    pub fn short_name(&self) -> &'static str {
        match self {
            Prayer::Fajr => "Faj",
            Prayer::Dhuhr => "Dhu",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Mag",
            Prayer::Isha => "Ish",
        }
    }
}

impl std::fmt::Display for Prayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Prayer {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fajr" => Ok(Prayer::Fajr),
            "dhuhr" | "zuhr" | "dhuhur" | "duhr" => Ok(Prayer::Dhuhr),
            "asr" => Ok(Prayer::Asr),
            "maghrib" => Ok(Prayer::Maghrib),
            "isha" => Ok(Prayer::Isha),
            _ => Err(anyhow::anyhow!("Unknown prayer: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        assert_eq!(Prayer::from_str("fajr").unwrap(), Prayer::Fajr);
        assert_eq!(Prayer::from_str("Dhuhr").unwrap(), Prayer::Dhuhr);
        assert_eq!(Prayer::from_str("zuhr").unwrap(), Prayer::Dhuhr);
        assert_eq!(Prayer::from_str("ISHA").unwrap(), Prayer::Isha);
        assert!(Prayer::from_str("imsak").is_err());
        assert!(Prayer::from_str("sunrise").is_err());
    }

    #[test]
    fn serializes_as_capitalized_name() {
        let json = serde_json::to_string(&Prayer::Maghrib).unwrap();
        assert_eq!(json, "\"Maghrib\"");
        let back: Prayer = serde_json::from_str("\"Fajr\"").unwrap();
        assert_eq!(back, Prayer::Fajr);
    }

    #[test]
    fn five_prayers_in_daily_order() {
        assert_eq!(Prayer::PER_DAY, 5);
        assert_eq!(Prayer::ALL[0], Prayer::Fajr);
        assert_eq!(Prayer::ALL[4], Prayer::Isha);
    }
}
