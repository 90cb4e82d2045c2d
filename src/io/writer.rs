use std::io::Write;

use crate::domain::report::{HistoryRow, SummaryRow};

#[derive(serde::Serialize)]
/// Internal CSV output row for the monthly summary table.
///
/// Headers written (in this order): `buddy,games,owed`.
/// The owed amount is formatted to 2 decimal places as a string.
struct SummaryOut<'a> {
    buddy: &'a str,
    games: u32,
    owed: String,
}

#[derive(serde::Serialize)]
/// Internal CSV output row for the session history table.
///
/// Headers written (in this order): `date,total_cost,cost_per_person,attendees`.
/// Monetary fields are formatted to 2 decimal places as strings.
struct HistoryOut<'a> {
    date: String,
    total_cost: String,
    cost_per_person: String,
    attendees: &'a str,
}

/// Writes the monthly summary table to a CSV writer.
///
/// The output includes a header row: `buddy,games,owed`. Rows keep the
/// first-attendance order the report computed; stored amounts stay at full
/// precision and only round here, for display.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use buddy_ledger::common::money::Money;
/// use buddy_ledger::domain::report::SummaryRow;
/// use buddy_ledger::io::writer::write_summary;
///
/// let rows = vec![SummaryRow { buddy: "Ana".into(), games: 2, owed: Money::from_f64(25.0) }];
///
/// let mut out = Vec::new();
/// write_summary(&mut out, &rows).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.starts_with("buddy,games,owed\n"));
/// assert!(s.contains("Ana,2,25.00"));
/// ```
pub fn write_summary<W: Write>(writer: W, rows: &[SummaryRow]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for row in rows {
        wtr.serialize(SummaryOut {
            buddy: &row.buddy,
            games: row.games,
            owed: row.owed.to_string(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the session history table to a CSV writer.
///
/// The output includes a header row: `date,total_cost,cost_per_person,attendees`.
/// Rows arrive in ascending date order; the attendees column carries the
/// names joined with ", ", so the csv writer quotes it.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
pub fn write_history<W: Write>(writer: W, rows: &[HistoryRow]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for row in rows {
        wtr.serialize(HistoryOut {
            date: row.date.to_string(),
            total_cost: row.total_cost.to_string(),
            cost_per_person: row.cost_per_person.to_string(),
            attendees: &row.attendees,
        })?;
    }

    wtr.flush()?;
    Ok(())
}
