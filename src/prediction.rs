use crate::person::{Exercise, Person, Session};
use chrono::{Datelike, Months, NaiveDate};

/// Date the next schedule column stands for: the day after the latest
/// recorded date, or `today` when nothing has been recorded yet. `None`
/// when the latest recorded date is the last representable calendar day,
/// so no successor exists.
pub fn next_session_date(dates: &[NaiveDate], today: NaiveDate) -> Option<NaiveDate> {
    match dates.iter().copied().max() {
        Some(last) => last.succ_opt(),
        None => Some(today),
    }
}

/// Exercise to book for `person` on `next_day`.
///
/// A session is only booked on one of the person's attendance weekdays;
/// any other day predicts a rest (`Np`). On an attendance day the booked
/// exercise continues the person's current rotation.
pub fn next_exercise(person: &Person, next_day: NaiveDate) -> Exercise {
    if !person.trains_on(next_day.weekday()) {
        return Exercise::Np;
    }
    active_exercise(&person.sessions)
}

/// Rotation the history is currently on: scanning in recorded order, the
/// first non-rest exercise dated strictly after the cutoff, where the
/// cutoff is one calendar month before the last recorded date. An empty
/// history, or a window holding only rest days, yields `Np`.
pub fn active_exercise(sessions: &[Session]) -> Exercise {
    let Some(last) = sessions.iter().map(|session| session.date).max() else {
        return Exercise::Np;
    };
    let cutoff = last
        .checked_sub_months(Months::new(1))
        .unwrap_or(NaiveDate::MIN);
    sessions
        .iter()
        .filter(|session| session.date > cutoff)
        .map(|session| session.exercise)
        .find(|exercise| !exercise.is_rest())
        .unwrap_or(Exercise::Np)
}
