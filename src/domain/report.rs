use chrono::NaiveDate;

use crate::common::money::Money;
use crate::domain::ledger::Ledger;

/// One row of the monthly summary: games played and money owed by one buddy.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub buddy: String,
    pub games: u32,
    pub owed: Money,
}

/// One row of the session history table.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub date: NaiveDate,
    pub total_cost: Money,
    pub cost_per_person: Money,
    /// Attendees joined with ", " for display.
    pub attendees: String,
}

/// Distinct months with at least one session, most recent first.
pub fn months(ledger: &Ledger) -> Vec<String> {
    let mut months: Vec<String> = Vec::new();
    for session in ledger.sessions() {
        if !months.contains(&session.month) {
            months.push(session.month.clone());
        }
    }
    months.sort_unstable_by(|a, b| b.cmp(a));
    months
}

/// Per-buddy games and owed shares for one month, in first-attendance
/// order. Buddies without a game that month get no row. Owed sums the
/// stored per-person shares at full precision; rounding happens only at
/// display time.
pub fn monthly_summary(ledger: &Ledger, month: &str) -> Vec<SummaryRow> {
    let mut rows: Vec<SummaryRow> = Vec::new();
    for session in ledger.sessions_in_month(month) {
        for name in &session.attendees {
            match rows.iter_mut().find(|r| r.buddy == *name) {
                Some(row) => {
                    row.games += 1;
                    row.owed += session.cost_per_person.clone();
                }
                None => rows.push(SummaryRow {
                    buddy: name.clone(),
                    games: 1,
                    owed: session.cost_per_person.clone(),
                }),
            }
        }
    }
    rows
}

/// Total court fees for one month: the sum of stored session totals, not
/// of per-person shares, so share rounding never leaks into the total.
pub fn monthly_total_cost(ledger: &Ledger, month: &str) -> Money {
    let mut total = Money::zero();
    for session in ledger.sessions_in_month(month) {
        total += session.total_cost.clone();
    }
    total
}

/// Session detail rows for one month, ascending by date.
pub fn session_history(ledger: &Ledger, month: &str) -> Vec<HistoryRow> {
    ledger
        .sessions_in_month(month)
        .map(|s| HistoryRow {
            date: s.date,
            total_cost: s.total_cost.clone(),
            cost_per_person: s.cost_per_person.clone(),
            attendees: s.attendees.join(", "),
        })
        .collect()
}
