use crate::{common::error::AppError, domain::ledger::Ledger};

/// Removes a buddy from the roster. Past sessions keep the name as free
/// text; the returned count says how many of them mention it, so the
/// shell can warn the operator.
pub fn handle(ledger: &mut Ledger, name: &str) -> Result<(String, usize), AppError> {
    let name = name.trim();

    // Count before removing: the question is about the roster member.
    let past_sessions = ledger.sessions_referencing(name);
    ledger.buddies.remove(name)?;
    Ok((name.to_string(), past_sessions))
}
