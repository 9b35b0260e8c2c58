use crate::roster::{ExtendError, Roster};
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PersistenceError {
    Io(io::Error),
    Serialization(SerdeJsonError),
    MissingHeader,
    DateFormat {
        field: String,
        source: chrono::format::ParseError,
    },
    UnknownWeekday {
        row: String,
        token: String,
    },
    UnknownExercise {
        row: String,
        token: String,
    },
    RowLengthMismatch {
        row: String,
        expected: usize,
        found: usize,
    },
    InvalidData(String),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Io(err) => write!(f, "io error: {err}"),
            PersistenceError::Serialization(err) => write!(f, "serialization error: {err}"),
            PersistenceError::MissingHeader => write!(f, "schedule file has no header line"),
            PersistenceError::DateFormat { field, source } => {
                write!(f, "invalid header date '{field}': {source}")
            }
            PersistenceError::UnknownWeekday { row, token } => {
                write!(f, "row '{row}': unknown weekday '{token}'")
            }
            PersistenceError::UnknownExercise { row, token } => {
                write!(f, "row '{row}': unknown exercise '{token}'")
            }
            PersistenceError::RowLengthMismatch {
                row,
                expected,
                found,
            } => write!(f, "row '{row}': expected {expected} fields, found {found}"),
            PersistenceError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<io::Error> for PersistenceError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<SerdeJsonError> for PersistenceError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<ExtendError> for PersistenceError {
    fn from(value: ExtendError) -> Self {
        Self::InvalidData(value.to_string())
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Check the table invariant: every person carries one session per
/// header date, in header order.
pub fn validate_roster(roster: &Roster) -> PersistenceResult<()> {
    for person in roster.people() {
        let aligned = person.sessions.len() == roster.dates().len()
            && person
                .sessions
                .iter()
                .zip(roster.dates())
                .all(|(session, date)| session.date == *date);
        if !aligned {
            return Err(PersistenceError::InvalidData(format!(
                "person '{}' has sessions out of step with the header dates",
                person.name
            )));
        }
    }
    Ok(())
}

pub mod file;

pub use file::{
    extend_roster_file, load_roster, load_roster_from_json, parse_roster, read_lines,
    render_roster, save_roster, save_roster_to_json,
};
