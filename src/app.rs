use std::io::{BufWriter, Write, stdout};

use crate::{
    auth::{self, Role, RoleSecrets},
    common::error::AppError,
    io::{cli, writer},
    store::{DocumentStore, FileMedium},
    worker::processor::{Outcome, Processor},
};

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    let invocation = cli::parse(args.get(1..).unwrap_or_default())?;

    authenticate(&invocation)?;
    if !auth::permits(invocation.role, &invocation.command) {
        return Err(AppError::Forbidden(invocation.role.to_string()));
    }

    let store = DocumentStore::new(FileMedium::new(invocation.store_path));
    let mut processor = Processor::new(store);
    let outcome = processor.process(invocation.command)?;

    // Render only once the command has fully succeeded.
    let stdout = stdout();
    let out = BufWriter::new(stdout.lock());
    render(out, outcome)
}

// Guests skip the password check; the command gate is what stops them.
// The password is required before the secrets are read, so a missing
// --password never turns into a configuration error.
fn authenticate(invocation: &cli::Invocation) -> Result<(), AppError> {
    if invocation.role == Role::Guest {
        return Ok(());
    }

    let password = invocation
        .password
        .as_deref()
        .ok_or_else(|| AppError::MissingPassword(invocation.role.to_string()))?;

    let secrets = RoleSecrets::from_env()?;
    if !secrets.verify(invocation.role, password) {
        return Err(AppError::WrongPassword);
    }
    Ok(())
}

fn render<W: Write>(mut out: W, outcome: Outcome) -> Result<(), AppError> {
    match outcome {
        Outcome::BuddyAdded { name } => writeln!(out, "added {name}")?,
        Outcome::BuddyRemoved { name, past_sessions: 0 } => writeln!(out, "removed {name}")?,
        Outcome::BuddyRemoved { name, past_sessions } => writeln!(
            out,
            "removed {name} (still listed in {past_sessions} past sessions; history kept)"
        )?,
        Outcome::Buddies(names) => {
            for name in names {
                writeln!(out, "{name}")?;
            }
        }
        Outcome::SessionRecorded { date, replaced, cost_per_person } => {
            let verb = if replaced { "updated" } else { "recorded" };
            writeln!(out, "{verb} session for {date}: {cost_per_person} per person")?;
        }
        Outcome::SessionDefaults { date, total_cost, attendees } => {
            writeln!(out, "date: {date}")?;
            writeln!(out, "total_cost: {total_cost}")?;
            writeln!(out, "attendees: {}", attendees.join(", "))?;
        }
        Outcome::Months(months) if months.is_empty() => writeln!(out, "no games played yet")?,
        Outcome::Months(months) => {
            for month in months {
                writeln!(out, "{month}")?;
            }
        }
        Outcome::Summary { month, rows } if rows.is_empty() => {
            writeln!(out, "no sessions found for {month}")?;
        }
        Outcome::Summary { rows, .. } => writer::write_summary(&mut out, &rows)?,
        Outcome::Total { month, total } => {
            writeln!(out, "total court fees for {month}: {total}")?;
        }
        Outcome::History { month, rows } if rows.is_empty() => {
            writeln!(out, "no sessions found for {month}")?;
        }
        Outcome::History { rows, .. } => writer::write_history(&mut out, &rows)?,
    }
    out.flush()?;
    Ok(())
}
