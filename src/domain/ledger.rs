use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::money::Money;
use crate::domain::{roster::Roster, session::Session};

/// Baseline court cost offered when a date has no session yet.
pub const DEFAULT_COURT_COST: f64 = 13.10;

/// The whole persisted document: the buddy roster plus one session per
/// played date.
///
/// Sessions are keyed by date, so "at most one session per date" and
/// "ascending date order" hold by construction. On the wire the map
/// serializes as the session array older deployments wrote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub buddies: Roster,
    #[serde(with = "session_seq")]
    sessions: BTreeMap<NaiveDate, Session>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sessions in ascending date order.
    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.sessions.values()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn session(&self, date: NaiveDate) -> Option<&Session> {
        self.sessions.get(&date)
    }

    /// Inserts the session under its date, returning the record it
    /// displaced if the date was already booked.
    pub fn upsert_session(&mut self, session: Session) -> Option<Session> {
        self.sessions.insert(session.date, session)
    }

    /// Sessions of one `YYYY-MM` month, ascending by date.
    pub fn sessions_in_month<'a>(&'a self, month: &'a str) -> impl Iterator<Item = &'a Session> {
        self.sessions.values().filter(move |s| s.month == month)
    }

    /// How many past sessions list `name` as an attendee. Read only; the
    /// shell uses it to warn before a roster removal.
    pub fn sessions_referencing(&self, name: &str) -> usize {
        self.sessions
            .values()
            .filter(|s| s.attendees.iter().any(|a| a == name))
            .count()
    }

    /// Prefill values for editing `date`: the stored cost and attendees
    /// when the date is already booked, the baseline cost and nobody when
    /// it is not.
    pub fn defaults_for(&self, date: NaiveDate) -> (Money, Vec<String>) {
        match self.sessions.get(&date) {
            Some(s) => (s.total_cost.clone(), s.attendees.clone()),
            None => (Money::from_f64(DEFAULT_COURT_COST), Vec::new()),
        }
    }
}

/// Wire form of the session map: a plain array ordered by date. Reading
/// keys each entry by its own date field; a malformed document carrying
/// two entries for one date keeps the later one.
mod session_seq {
    use std::collections::BTreeMap;

    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::domain::session::Session;

    pub fn serialize<S: Serializer>(
        sessions: &BTreeMap<NaiveDate, Session>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(sessions.values())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<NaiveDate, Session>, D::Error> {
        let listed = Vec::<Session>::deserialize(deserializer)?;
        Ok(listed.into_iter().map(|s| (s.date, s)).collect())
    }
}
