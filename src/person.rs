use crate::calendar::Weekday;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Exercise assigned for one schedule day. `Np` marks a day with no
/// booked session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Exercise {
    Mat,
    Trx,
    Cadillac,
    Reformer,
    Chair,
    Barrel,
    Np,
}

impl Exercise {
    /// Parse a single exercise token. Matching is case-insensitive, but
    /// surrounding whitespace is not accepted.
    pub fn from_str(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "MAT" => Some(Self::Mat),
            "TRX" => Some(Self::Trx),
            "CADILLAC" => Some(Self::Cadillac),
            "REFORMER" => Some(Self::Reformer),
            "CHAIR" => Some(Self::Chair),
            "BARREL" => Some(Self::Barrel),
            "NP" => Some(Self::Np),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mat => "MAT",
            Self::Trx => "TRX",
            Self::Cadillac => "CADILLAC",
            Self::Reformer => "REFORMER",
            Self::Chair => "CHAIR",
            Self::Barrel => "BARREL",
            Self::Np => "NP",
        }
    }

    pub fn is_rest(self) -> bool {
        matches!(self, Self::Np)
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded (or predicted) schedule day for a person.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub date: NaiveDate,
    pub exercise: Exercise,
}

impl Session {
    pub fn new(date: NaiveDate, exercise: Exercise) -> Self {
        Self { date, exercise }
    }
}

/// One roster row: a person, the weekdays they attend, and their
/// session history in schedule-column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    /// Attendance days in file order; repeated tokens are kept as given.
    pub weekdays: Vec<Weekday>,
    pub sessions: Vec<Session>,
}

impl Person {
    pub fn new(name: impl Into<String>, weekdays: Vec<Weekday>) -> Self {
        Self {
            name: name.into(),
            weekdays,
            sessions: Vec::new(),
        }
    }

    /// Whether the person attends on the given day of the week.
    pub fn trains_on(&self, day: chrono::Weekday) -> bool {
        self.weekdays.iter().any(|wd| wd.day_of_week() == day)
    }

    /// Latest recorded session date, if any session exists.
    pub fn last_session_date(&self) -> Option<NaiveDate> {
        self.sessions.iter().map(|session| session.date).max()
    }

    /// Comma-joined weekday tokens, as written in schedule files.
    pub fn weekday_tokens(&self) -> String {
        self.weekdays
            .iter()
            .map(|wd| wd.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Copy of this person with one extra session appended.
    pub fn with_session(&self, date: NaiveDate, exercise: Exercise) -> Person {
        let mut person = self.clone();
        person.sessions.push(Session::new(date, exercise));
        person
    }
}
