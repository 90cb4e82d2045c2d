use chrono::NaiveDate;

use crate::{
    common::{error::AppError, money::Money},
    domain::{ledger::Ledger, session::Session},
};

/// Records or replaces the session for `date`; the date is the natural
/// key. Returns whether a previous record was displaced, plus the stored
/// per-person share for the acknowledgement message.
pub fn handle(
    ledger: &mut Ledger,
    date: NaiveDate,
    total_cost: Money,
    attendees: Vec<String>,
) -> Result<(bool, Money), AppError> {
    let session = Session::new(date, total_cost, attendees)?;
    let cost_per_person = session.cost_per_person.clone();
    let replaced = ledger.upsert_session(session).is_some();
    Ok((replaced, cost_per_person))
}
