use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::auth::Role;
use crate::common::{command::Command, error::AppError, money::Money};

/// Store file used when `--store` is not given.
pub const DEFAULT_STORE_PATH: &str = "buddies.json";

/// One parsed shell invocation: who is asking, against which store, and
/// what they want done.
#[derive(Debug)]
pub struct Invocation {
    pub role: Role,
    pub password: Option<String>,
    pub store_path: PathBuf,
    pub command: Command,
}

/// Parses the argv tail (everything after the program name).
///
/// Flags may appear anywhere: `--role <name>` (default `guest`),
/// `--password <secret>` and `--store <path>`. The remaining words form
/// the command:
///
/// - `buddy add <name>`, `buddy remove <name>`, `buddy list`
/// - `session record <date> <cost> <name,name,...>`, `session defaults <date>`
/// - `report months`, `report summary <month>`, `report total <month>`,
///   `report history <month>`
///
/// Dates are `YYYY-MM-DD`, months `YYYY-MM`. Month arguments pass through
/// unvalidated; a month nobody played in simply yields an empty report.
///
/// # Examples
///
/// ```
/// use buddy_ledger::auth::Role;
/// use buddy_ledger::common::command::Command;
/// use buddy_ledger::io::cli::parse;
///
/// let args: Vec<String> = ["--role", "admin", "--password", "pw", "buddy", "add", "Ana"]
///     .map(String::from)
///     .to_vec();
/// let invocation = parse(&args).unwrap();
///
/// assert_eq!(invocation.role, Role::Admin);
/// assert!(matches!(invocation.command, Command::AddBuddy { name } if name == "Ana"));
/// ```
pub fn parse(args: &[String]) -> Result<Invocation, AppError> {
    let mut role = Role::Guest;
    let mut password: Option<String> = None;
    let mut store_path = PathBuf::from(DEFAULT_STORE_PATH);
    let mut words: Vec<&str> = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--role" => role = flag_value(&mut iter, "--role")?.parse()?,
            "--password" => password = Some(flag_value(&mut iter, "--password")?.to_string()),
            "--store" => store_path = PathBuf::from(flag_value(&mut iter, "--store")?),
            flag if flag.starts_with("--") => {
                return Err(AppError::Parse(format!("unknown flag: {flag}")));
            }
            word => words.push(word),
        }
    }

    let command = parse_command(&words)?;
    Ok(Invocation {
        role,
        password,
        store_path,
        command,
    })
}

fn flag_value<'a>(
    iter: &mut std::slice::Iter<'a, String>,
    flag: &str,
) -> Result<&'a str, AppError> {
    iter.next()
        .map(String::as_str)
        .ok_or_else(|| AppError::Parse(format!("{flag} needs a value")))
}

fn parse_command(words: &[&str]) -> Result<Command, AppError> {
    match words {
        [] => Err(AppError::MissingCommand),
        // Multi-word names need no quoting: `buddy add Ana Maria`.
        ["buddy", "add", name @ ..] if !name.is_empty() => Ok(Command::AddBuddy {
            name: name.join(" "),
        }),
        ["buddy", "remove", name @ ..] if !name.is_empty() => Ok(Command::RemoveBuddy {
            name: name.join(" "),
        }),
        ["buddy", "list"] => Ok(Command::ListBuddies),
        ["buddy", ..] => Err(AppError::Parse(
            "buddy needs one of: add <name>, remove <name>, list".into(),
        )),
        ["session", "record", date, cost, attendees] => Ok(Command::RecordSession {
            date: parse_date(date)?,
            total_cost: parse_cost(cost)?,
            attendees: split_names(attendees),
        }),
        ["session", "defaults", date] => Ok(Command::SessionDefaults {
            date: parse_date(date)?,
        }),
        ["session", ..] => Err(AppError::Parse(
            "session needs one of: record <date> <cost> <name,name,...>, defaults <date>".into(),
        )),
        ["report", "months"] => Ok(Command::ListMonths),
        ["report", "summary", month] => Ok(Command::MonthlySummary {
            month: (*month).to_string(),
        }),
        ["report", "total", month] => Ok(Command::MonthlyTotal {
            month: (*month).to_string(),
        }),
        ["report", "history", month] => Ok(Command::SessionHistory {
            month: (*month).to_string(),
        }),
        ["report", ..] => Err(AppError::Parse(
            "report needs one of: months, summary <month>, total <month>, history <month>".into(),
        )),
        other => Err(AppError::UnknownCommand(other.join(" "))),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::from_str(raw)
        .map_err(|_| AppError::Parse(format!("invalid date '{raw}': expected YYYY-MM-DD")))
}

fn parse_cost(raw: &str) -> Result<Money, AppError> {
    Money::from_str(raw).map_err(|e| AppError::Parse(format!("invalid cost '{raw}': {e}")))
}

// Attendees arrive as one comma-separated word. Blank pieces drop here;
// whether anyone is left is the worker's question, not the parser's.
fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(args: &[&str]) -> Result<Invocation, AppError> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        parse(&args)
    }

    #[test]
    fn defaults_to_guest_and_local_store() {
        let invocation = parse_args(&["buddy", "list"]).unwrap();

        assert_eq!(invocation.role, Role::Guest);
        assert!(invocation.password.is_none());
        assert_eq!(invocation.store_path, PathBuf::from("buddies.json"));
        assert_eq!(invocation.command, Command::ListBuddies);
    }

    #[test]
    fn flags_may_come_before_or_after_the_command() {
        let invocation = parse_args(&[
            "report",
            "months",
            "--role",
            "reporting",
            "--password",
            "pw",
            "--store",
            "/tmp/club.json",
        ])
        .unwrap();

        assert_eq!(invocation.role, Role::Reporting);
        assert_eq!(invocation.password.as_deref(), Some("pw"));
        assert_eq!(invocation.store_path, PathBuf::from("/tmp/club.json"));
        assert_eq!(invocation.command, Command::ListMonths);
    }

    #[test]
    fn parses_session_record_fields() {
        let invocation =
            parse_args(&["session", "record", "2025-01-05", "20.0", "Ana, Bo"]).unwrap();

        assert_eq!(
            invocation.command,
            Command::RecordSession {
                date: "2025-01-05".parse().unwrap(),
                total_cost: Money::from_f64(20.0),
                attendees: vec!["Ana".into(), "Bo".into()],
            }
        );
    }

    #[test]
    fn blank_attendee_pieces_drop_at_the_parser() {
        let invocation = parse_args(&["session", "record", "2025-01-05", "20.0", " , ,"]).unwrap();

        // An empty list still parses; rejecting it is the worker's call.
        assert!(matches!(
            invocation.command,
            Command::RecordSession { attendees, .. } if attendees.is_empty()
        ));
    }

    #[test]
    fn multi_word_names_join_without_quoting() {
        let invocation = parse_args(&["buddy", "add", "Ana", "Maria"]).unwrap();
        assert_eq!(
            invocation.command,
            Command::AddBuddy { name: "Ana Maria".into() }
        );

        let invocation = parse_args(&["buddy", "remove", "Ana", "Maria"]).unwrap();
        assert_eq!(
            invocation.command,
            Command::RemoveBuddy { name: "Ana Maria".into() }
        );
    }

    #[test]
    fn parses_all_report_commands() {
        assert_eq!(
            parse_args(&["report", "summary", "2025-01"]).unwrap().command,
            Command::MonthlySummary { month: "2025-01".into() }
        );
        assert_eq!(
            parse_args(&["report", "total", "2025-01"]).unwrap().command,
            Command::MonthlyTotal { month: "2025-01".into() }
        );
        assert_eq!(
            parse_args(&["report", "history", "2025-01"]).unwrap().command,
            Command::SessionHistory { month: "2025-01".into() }
        );
    }

    #[test]
    fn parses_session_defaults() {
        assert_eq!(
            parse_args(&["session", "defaults", "2025-01-19"]).unwrap().command,
            Command::SessionDefaults { date: "2025-01-19".parse().unwrap() }
        );
    }

    #[test]
    fn rejects_bad_dates_and_costs() {
        let err = parse_args(&["session", "record", "05.01.2025", "20.0", "Ana"]).unwrap_err();
        assert!(matches!(err, AppError::Parse(msg) if msg.contains("invalid date")));

        let err = parse_args(&["session", "record", "2025-01-05", "twenty", "Ana"]).unwrap_err();
        assert!(matches!(err, AppError::Parse(msg) if msg.contains("invalid cost")));
    }

    #[test]
    fn reports_missing_subcommand_words() {
        assert!(matches!(parse_args(&[]), Err(AppError::MissingCommand)));

        let err = parse_args(&["buddy", "add"]).unwrap_err();
        assert!(matches!(err, AppError::Parse(msg) if msg.starts_with("buddy needs")));

        let err = parse_args(&["session", "record", "2025-01-05"]).unwrap_err();
        assert!(matches!(err, AppError::Parse(msg) if msg.starts_with("session needs")));

        let err = parse_args(&["report"]).unwrap_err();
        assert!(matches!(err, AppError::Parse(msg) if msg.starts_with("report needs")));
    }

    #[test]
    fn reports_unknown_commands_and_flags() {
        let err = parse_args(&["tennis", "report"]).unwrap_err();
        assert!(matches!(err, AppError::UnknownCommand(words) if words == "tennis report"));

        let err = parse_args(&["--verbose", "buddy", "list"]).unwrap_err();
        assert!(matches!(err, AppError::Parse(msg) if msg == "unknown flag: --verbose"));

        let err = parse_args(&["buddy", "list", "--role"]).unwrap_err();
        assert!(matches!(err, AppError::Parse(msg) if msg == "--role needs a value"));
    }

    #[test]
    fn rejects_unknown_roles() {
        let err = parse_args(&["--role", "root", "buddy", "list"]).unwrap_err();
        assert!(matches!(err, AppError::Parse(msg) if msg.contains("unknown role")));
    }
}
