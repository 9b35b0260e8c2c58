use crate::person::Person;
use crate::prediction;
use chrono::NaiveDate;
use std::fmt;

/// Field separator used by schedule files.
pub const DELIMITER: &str = ";";

/// Date format used in schedule headers and CLI arguments.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// In-memory schedule table: the shared date columns plus one row per
/// person.
///
/// The original header line is kept verbatim so that writing the table
/// back out only ever appends to it; every person's sessions align 1:1
/// with `dates`, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    header: String,
    dates: Vec<NaiveDate>,
    people: Vec<Person>,
}

impl Roster {
    /// Build a roster with a synthesized `Name;Weekdays;...` header.
    /// Used when the original header text is not available, e.g. when
    /// rebuilding from a JSON snapshot.
    pub fn new(dates: Vec<NaiveDate>, people: Vec<Person>) -> Self {
        let mut header = format!("Name{DELIMITER}Weekdays");
        for date in &dates {
            header.push_str(DELIMITER);
            header.push_str(&date.format(DATE_FORMAT).to_string());
        }
        Self {
            header,
            dates,
            people,
        }
    }

    pub(crate) fn from_parts(header: String, dates: Vec<NaiveDate>, people: Vec<Person>) -> Self {
        Self {
            header,
            dates,
            people,
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// New roster with the next schedule day appended: one extra header
    /// date and one predicted session per person. The receiver is left
    /// untouched. `today` only matters for tables with no date columns
    /// yet. Fails only when the latest recorded date has no following
    /// calendar day.
    pub fn extend(&self, today: NaiveDate) -> Result<Roster, ExtendError> {
        let Some(next) = prediction::next_session_date(&self.dates, today) else {
            let last = self.dates.iter().copied().max().unwrap_or(NaiveDate::MAX);
            return Err(ExtendError { last });
        };
        tracing::debug!(date = %next, "appending schedule column");

        let mut header = self.header.clone();
        header.push_str(DELIMITER);
        header.push_str(&next.format(DATE_FORMAT).to_string());

        let mut dates = self.dates.clone();
        dates.push(next);

        let people = self
            .people
            .iter()
            .map(|person| person.with_session(next, prediction::next_exercise(person, next)))
            .collect();

        Ok(Roster {
            header,
            dates,
            people,
        })
    }

    /// Booked/rest head-count for the most recent schedule day, if the
    /// table has any date columns.
    pub fn day_summary(&self) -> Option<DaySummary> {
        let date = self.dates.last().copied()?;
        let scheduled = self
            .people
            .iter()
            .filter(|person| {
                person
                    .sessions
                    .last()
                    .is_some_and(|session| !session.exercise.is_rest())
            })
            .count();
        Some(DaySummary {
            date,
            people: self.people.len(),
            scheduled,
            resting: self.people.len() - scheduled,
        })
    }
}

/// Error from `Roster::extend`: the latest recorded date is the last
/// representable calendar day, so no next schedule day exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendError {
    pub last: NaiveDate,
}

impl fmt::Display for ExtendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "schedule ends on {}; no calendar day follows it",
            self.last.format(DATE_FORMAT)
        )
    }
}

impl std::error::Error for ExtendError {}

/// Head-count for a single schedule day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub people: usize,
    pub scheduled: usize,
    pub resting: usize,
}

impl DaySummary {
    pub fn to_cli_summary(&self) -> String {
        let parts = vec![
            format!("date={}", self.date.format(DATE_FORMAT)),
            format!("people={}", self.people),
            format!("scheduled={}", self.scheduled),
            format!("resting={}", self.resting),
        ];
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Weekday;
    use crate::person::{Exercise, Session};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sample() -> Roster {
        let dates = vec![d(2024, 1, 1), d(2024, 1, 8)];
        let mut ana = Person::new("ANA", vec![Weekday::Seg, Weekday::Qua]);
        ana.sessions = vec![
            Session::new(d(2024, 1, 1), Exercise::Mat),
            Session::new(d(2024, 1, 8), Exercise::Np),
        ];
        let mut rui = Person::new("RUI", vec![Weekday::Ter]);
        rui.sessions = vec![
            Session::new(d(2024, 1, 1), Exercise::Np),
            Session::new(d(2024, 1, 8), Exercise::Trx),
        ];
        Roster::from_parts(
            "name;dias;01/01/2024;08/01/2024".to_string(),
            dates,
            vec![ana, rui],
        )
    }

    #[test]
    fn extend_appends_one_column() {
        let roster = sample();
        let extended = roster.extend(d(2024, 6, 1)).unwrap();

        assert_eq!(extended.dates().last().copied(), Some(d(2024, 1, 9)));
        assert_eq!(extended.dates().len(), 3);
        for person in extended.people() {
            assert_eq!(person.sessions.len(), 3);
            assert_eq!(person.sessions.last().unwrap().date, d(2024, 1, 9));
        }
        // receiver unchanged
        assert_eq!(roster.dates().len(), 2);
    }

    #[test]
    fn extend_keeps_the_original_header_text_verbatim() {
        let extended = sample().extend(d(2024, 6, 1)).unwrap();
        assert_eq!(extended.header(), "name;dias;01/01/2024;08/01/2024;09/01/2024");
    }

    #[test]
    fn extend_predicts_per_person() {
        // 09/01/2024 is a Tuesday: RUI attends, ANA rests.
        let extended = sample().extend(d(2024, 6, 1)).unwrap();
        let last: Vec<Exercise> = extended
            .people()
            .iter()
            .map(|p| p.sessions.last().unwrap().exercise)
            .collect();
        assert_eq!(last, vec![Exercise::Np, Exercise::Trx]);
    }

    #[test]
    fn extend_without_date_columns_uses_today() {
        let roster = Roster::from_parts(
            "Name;Weekdays".to_string(),
            Vec::new(),
            vec![Person::new("ANA", vec![Weekday::Seg])],
        );
        let extended = roster.extend(d(2024, 1, 1)).unwrap();
        assert_eq!(extended.dates(), &[d(2024, 1, 1)]);
        assert_eq!(extended.header(), "Name;Weekdays;01/01/2024");
        // empty history books nothing, even on an attendance day
        assert_eq!(extended.people()[0].sessions[0].exercise, Exercise::Np);
    }

    #[test]
    fn extend_fails_when_the_latest_date_has_no_successor() {
        let mut ana = Person::new("ANA", vec![Weekday::Seg]);
        ana.sessions = vec![Session::new(NaiveDate::MAX, Exercise::Mat)];
        let roster = Roster::from_parts(
            format!("Name;Weekdays;{}", NaiveDate::MAX.format(DATE_FORMAT)),
            vec![NaiveDate::MAX],
            vec![ana],
        );

        let err = roster.extend(d(2024, 1, 1)).unwrap_err();
        assert_eq!(err.last, NaiveDate::MAX);
        assert!(err.to_string().contains("no calendar day follows"));
    }

    #[test]
    fn day_summary_counts_the_last_column() {
        let extended = sample().extend(d(2024, 6, 1)).unwrap();
        let summary = extended.day_summary().unwrap();
        assert_eq!(summary.date, d(2024, 1, 9));
        assert_eq!(summary.people, 2);
        assert_eq!(summary.scheduled, 1);
        assert_eq!(summary.resting, 1);
        assert_eq!(
            summary.to_cli_summary(),
            "date=09/01/2024, people=2, scheduled=1, resting=1"
        );
    }

    #[test]
    fn day_summary_is_none_for_an_empty_table() {
        let roster = Roster::from_parts("Name;Weekdays".to_string(), Vec::new(), Vec::new());
        assert!(roster.day_summary().is_none());
    }

    #[test]
    fn new_synthesizes_a_header_from_the_dates() {
        let roster = Roster::new(vec![d(2024, 1, 1)], Vec::new());
        assert_eq!(roster.header(), "Name;Weekdays;01/01/2024");
    }
}
