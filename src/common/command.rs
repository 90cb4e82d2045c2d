use chrono::NaiveDate;

use crate::common::money::Money;

/// Represents a command that is sent from the shell to the worker for one
/// load-operate-save cycle against the ledger document.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddBuddy { name: String },
    RemoveBuddy { name: String },
    ListBuddies,
    RecordSession { date: NaiveDate, total_cost: Money, attendees: Vec<String> },
    SessionDefaults { date: NaiveDate },
    ListMonths,
    MonthlySummary { month: String },
    MonthlyTotal { month: String },
    SessionHistory { month: String },
}
