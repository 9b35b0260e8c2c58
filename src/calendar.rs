use serde::{Deserialize, Serialize};
use std::fmt;

/// Weekday codes used in schedule files, Monday through Sunday.
///
/// The tokens are the Portuguese day abbreviations the studio writes in
/// its spreadsheets (SEG = segunda-feira = Monday, DOM = domingo = Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Weekday {
    Seg,
    Ter,
    Qua,
    Qui,
    Sex,
    Sab,
    Dom,
}

impl Weekday {
    /// Parse a single weekday token. Matching is case-insensitive, but
    /// surrounding whitespace is not accepted.
    pub fn from_str(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "SEG" => Some(Self::Seg),
            "TER" => Some(Self::Ter),
            "QUA" => Some(Self::Qua),
            "QUI" => Some(Self::Qui),
            "SEX" => Some(Self::Sex),
            "SAB" => Some(Self::Sab),
            "DOM" => Some(Self::Dom),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Seg => "SEG",
            Self::Ter => "TER",
            Self::Qua => "QUA",
            Self::Qui => "QUI",
            Self::Sex => "SEX",
            Self::Sab => "SAB",
            Self::Dom => "DOM",
        }
    }

    /// The calendar day this code stands for.
    pub fn day_of_week(self) -> chrono::Weekday {
        match self {
            Self::Seg => chrono::Weekday::Mon,
            Self::Ter => chrono::Weekday::Tue,
            Self::Qua => chrono::Weekday::Wed,
            Self::Qui => chrono::Weekday::Thu,
            Self::Sex => chrono::Weekday::Fri,
            Self::Sab => chrono::Weekday::Sat,
            Self::Dom => chrono::Weekday::Sun,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
