use super::{PersistenceError, PersistenceResult};
use crate::calendar::Weekday;
use crate::person::{Exercise, Person, Session};
use crate::roster::{DATE_FORMAT, DELIMITER, Roster};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

/// Read a schedule file into raw lines, in source order and untrimmed.
pub fn read_lines<P: AsRef<Path>>(path: P) -> PersistenceResult<Vec<String>> {
    let text = fs::read_to_string(&path)?;
    let lines: Vec<String> = text.lines().map(str::to_owned).collect();
    tracing::debug!(path = %path.as_ref().display(), lines = lines.len(), "read schedule file");
    Ok(lines)
}

/// Parse raw schedule lines: a `Name;Weekdays;date...` header followed
/// by one row per person.
pub fn parse_roster(lines: &[String]) -> PersistenceResult<Roster> {
    let (header, rows) = lines
        .split_first()
        .ok_or(PersistenceError::MissingHeader)?;
    let dates = parse_header_dates(header)?;
    let mut people = Vec::with_capacity(rows.len());
    for row in rows {
        people.push(parse_person_row(row, &dates)?);
    }
    Ok(Roster::from_parts(header.clone(), dates, people))
}

/// Dates start at the third header field; the two leading label fields
/// survive only inside the verbatim header text. Date fields are parsed
/// strictly, with no trimming.
fn parse_header_dates(header: &str) -> PersistenceResult<Vec<NaiveDate>> {
    header
        .split(DELIMITER)
        .skip(2)
        .map(|field| {
            NaiveDate::parse_from_str(field, DATE_FORMAT).map_err(|source| {
                PersistenceError::DateFormat {
                    field: field.to_string(),
                    source,
                }
            })
        })
        .collect()
}

fn parse_person_row(row: &str, dates: &[NaiveDate]) -> PersistenceResult<Person> {
    let fields: Vec<String> = row
        .split(DELIMITER)
        .map(|field| field.trim().to_ascii_uppercase())
        .collect();
    if fields.len() != dates.len() + 2 {
        return Err(PersistenceError::RowLengthMismatch {
            row: fields.first().cloned().unwrap_or_default(),
            expected: dates.len() + 2,
            found: fields.len(),
        });
    }

    let name = fields[0].clone();
    let weekdays = parse_weekdays(&name, &fields[1])?;
    let mut person = Person::new(name, weekdays);
    for (date, field) in dates.iter().zip(&fields[2..]) {
        let exercise =
            Exercise::from_str(field).ok_or_else(|| PersistenceError::UnknownExercise {
                row: person.name.clone(),
                token: field.clone(),
            })?;
        person.sessions.push(Session::new(*date, exercise));
    }
    Ok(person)
}

/// Weekday lists are comma-separated with no padding around the commas;
/// a token like ` QUA` is rejected rather than silently trimmed.
fn parse_weekdays(row: &str, field: &str) -> PersistenceResult<Vec<Weekday>> {
    field
        .split(',')
        .map(|token| {
            Weekday::from_str(token).ok_or_else(|| PersistenceError::UnknownWeekday {
                row: row.to_string(),
                token: token.to_string(),
            })
        })
        .collect()
}

/// Render the table back into delimited text, one `\n`-terminated line
/// per row, header first.
pub fn render_roster(roster: &Roster) -> String {
    let mut out = String::new();
    out.push_str(roster.header());
    out.push('\n');
    for person in roster.people() {
        out.push_str(&person_row(person));
        out.push('\n');
    }
    out
}

fn person_row(person: &Person) -> String {
    let weekdays = person.weekday_tokens();
    let mut fields = vec![person.name.as_str(), weekdays.as_str()];
    fields.extend(person.sessions.iter().map(|session| session.exercise.as_str()));
    fields.join(DELIMITER)
}

/// Read and parse a schedule file.
pub fn load_roster<P: AsRef<Path>>(path: P) -> PersistenceResult<Roster> {
    let lines = read_lines(path)?;
    parse_roster(&lines)
}

/// Write the table to `path`, replacing any existing file.
pub fn save_roster<P: AsRef<Path>>(roster: &Roster, path: P) -> PersistenceResult<()> {
    fs::write(&path, render_roster(roster))?;
    tracing::debug!(path = %path.as_ref().display(), "wrote schedule file");
    Ok(())
}

/// Run one full planning pass: load `input`, append the next schedule
/// day exactly once, and write the result to `output`. Nothing is
/// written when any stage fails. Returns the extended table so callers
/// can summarize or re-export it.
pub fn extend_roster_file<P, Q>(input: P, output: Q, today: NaiveDate) -> PersistenceResult<Roster>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let roster = load_roster(input)?;
    let extended = roster.extend(today)?;
    save_roster(&extended, output)?;
    Ok(extended)
}

#[derive(Serialize, Deserialize)]
struct RosterSnapshot {
    dates: Vec<NaiveDate>,
    people: Vec<Person>,
}

impl RosterSnapshot {
    fn from_roster(roster: &Roster) -> Self {
        Self {
            dates: roster.dates().to_vec(),
            people: roster.people().to_vec(),
        }
    }

    fn into_roster(self) -> PersistenceResult<Roster> {
        let roster = Roster::new(self.dates, self.people);
        super::validate_roster(&roster)?;
        Ok(roster)
    }
}

pub fn save_roster_to_json<P: AsRef<Path>>(roster: &Roster, path: P) -> PersistenceResult<()> {
    super::validate_roster(roster)?;
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &RosterSnapshot::from_roster(roster))?;
    Ok(())
}

/// Rebuild a roster from a JSON snapshot. The snapshot does not store
/// the original header text, so the header is synthesized from the
/// dates.
pub fn load_roster_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<Roster> {
    let file = File::open(path)?;
    let snapshot: RosterSnapshot = serde_json::from_reader(file)?;
    snapshot.into_roster()
}
