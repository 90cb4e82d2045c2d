use chrono::NaiveDate;
use tracing::debug;

use crate::{
    common::{command::Command, error::AppError, money::Money},
    domain::{
        ledger::Ledger,
        report::{self, HistoryRow, SummaryRow},
    },
    store::{DocumentStore, Medium},
    worker::handlers::{add_buddy, record_session, remove_buddy},
};

/// What one processed command produced, for the shell to render.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    BuddyAdded { name: String },
    BuddyRemoved { name: String, past_sessions: usize },
    Buddies(Vec<String>),
    SessionRecorded { date: NaiveDate, replaced: bool, cost_per_person: Money },
    SessionDefaults { date: NaiveDate, total_cost: Money, attendees: Vec<String> },
    Months(Vec<String>),
    Summary { month: String, rows: Vec<SummaryRow> },
    Total { month: String, total: Money },
    History { month: String, rows: Vec<HistoryRow> },
}

/// Runs commands against the stored document: one synchronous load,
/// operate, save cycle per command. Read commands never write the medium
/// back. Nothing locks the medium between load and save; when two cycles
/// overlap the later save wins wholesale.
pub struct Processor<M> {
    store: DocumentStore<M>,
}

impl<M: Medium> Processor<M> {
    pub fn new(store: DocumentStore<M>) -> Self {
        Self { store }
    }

    pub fn process(&mut self, command: Command) -> Result<Outcome, AppError> {
        let mut ledger = self.store.load();

        match command {
            Command::AddBuddy { name } => {
                let name = add_buddy::handle(&mut ledger, &name)?;
                self.persist(&ledger)?;
                Ok(Outcome::BuddyAdded { name })
            }
            Command::RemoveBuddy { name } => {
                let (name, past_sessions) = remove_buddy::handle(&mut ledger, &name)?;
                self.persist(&ledger)?;
                Ok(Outcome::BuddyRemoved { name, past_sessions })
            }
            Command::RecordSession { date, total_cost, attendees } => {
                let (replaced, cost_per_person) =
                    record_session::handle(&mut ledger, date, total_cost, attendees)?;
                self.persist(&ledger)?;
                Ok(Outcome::SessionRecorded { date, replaced, cost_per_person })
            }
            Command::ListBuddies => Ok(Outcome::Buddies(ledger.buddies.names().to_vec())),
            Command::SessionDefaults { date } => {
                let (total_cost, attendees) = ledger.defaults_for(date);
                Ok(Outcome::SessionDefaults { date, total_cost, attendees })
            }
            Command::ListMonths => Ok(Outcome::Months(report::months(&ledger))),
            Command::MonthlySummary { month } => {
                let rows = report::monthly_summary(&ledger, &month);
                Ok(Outcome::Summary { month, rows })
            }
            Command::MonthlyTotal { month } => {
                let total = report::monthly_total_cost(&ledger, &month);
                Ok(Outcome::Total { month, total })
            }
            Command::SessionHistory { month } => {
                let rows = report::session_history(&ledger, &month);
                Ok(Outcome::History { month, rows })
            }
        }
    }

    fn persist(&self, ledger: &Ledger) -> Result<(), AppError> {
        self.store.save(ledger)?;
        debug!(
            buddies = ledger.buddies.len(),
            sessions = ledger.session_count(),
            "ledger document persisted"
        );
        Ok(())
    }
}
