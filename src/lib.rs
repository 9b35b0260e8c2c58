pub mod calendar;
pub mod person;
pub mod persistence;
pub mod prediction;
pub mod roster;

pub use calendar::Weekday;
pub use person::{Exercise, Person, Session};
pub use persistence::{
    PersistenceError, PersistenceResult, extend_roster_file, load_roster, load_roster_from_json,
    save_roster, save_roster_to_json, validate_roster,
};
pub use prediction::{active_exercise, next_exercise, next_session_date};
pub use roster::{DATE_FORMAT, DELIMITER, DaySummary, ExtendError, Roster};
