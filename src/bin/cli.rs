use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use roster_tool::persistence::{extend_roster_file, load_roster, save_roster_to_json};
use roster_tool::roster::DATE_FORMAT;
use roster_tool::PersistenceResult;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "roster-tool",
    version,
    about = "Predicts the next session day for a weekly exercise roster"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Append the predicted next schedule day and write a new file.
    Extend {
        /// Schedule file to read.
        #[arg(default_value = "test.csv")]
        input: PathBuf,
        /// Destination for the extended schedule.
        #[arg(default_value = "new.csv")]
        output: PathBuf,
        /// Reference date (DD/MM/YYYY) used when the schedule has no
        /// date columns yet. Defaults to the current date.
        #[arg(long, value_parser = parse_cli_date)]
        today: Option<NaiveDate>,
        /// Also write the extended table as a JSON snapshot.
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Parse a schedule file and report its contents without writing.
    Check {
        /// Schedule file to read.
        #[arg(default_value = "test.csv")]
        input: PathBuf,
    },
}

fn parse_cli_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|err| format!("expected DD/MM/YYYY: {err}"))
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

/// Reads `RUST_LOG`, defaulting to `warn`; logs go to stderr so stdout
/// stays clean for the summary line.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn run() -> PersistenceResult<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Extend {
            input,
            output,
            today,
            json,
        } => cmd_extend(&input, &output, today, json.as_deref()),
        Command::Check { input } => cmd_check(&input),
    }
}

fn cmd_extend(
    input: &Path,
    output: &Path,
    today: Option<NaiveDate>,
    json: Option<&Path>,
) -> PersistenceResult<()> {
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let extended = extend_roster_file(input, output, today)?;
    if let Some(json_path) = json {
        save_roster_to_json(&extended, json_path)?;
    }
    match extended.day_summary() {
        Some(summary) => println!("Extended {} ({})", output.display(), summary.to_cli_summary()),
        None => println!("Extended {}", output.display()),
    }
    Ok(())
}

fn cmd_check(input: &Path) -> PersistenceResult<()> {
    let roster = load_roster(input)?;
    println!(
        "{}: {} people, {} dates",
        input.display(),
        roster.people().len(),
        roster.dates().len()
    );
    for person in roster.people() {
        println!("  {} ({})", person.name, person.weekday_tokens());
    }
    if let Some(summary) = roster.day_summary() {
        println!("last recorded day: {}", summary.to_cli_summary());
    }
    Ok(())
}
