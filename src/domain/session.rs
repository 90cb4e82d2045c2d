use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::{error::AppError, money::Money};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// The day the court was booked. One session per date.
    pub date: NaiveDate,
    /// `YYYY-MM` of `date`, stored redundantly for month filtering.
    pub month: String,
    /// What the court cost in total.
    pub total_cost: Money,
    /// Who played, in the order they were entered.
    pub attendees: Vec<String>,
    /// `total_cost` split evenly across `attendees`, fixed at write time.
    pub cost_per_person: Money,
}

impl Session {
    /// Builds a validated session record. Attendee names are trimmed,
    /// blanks dropped and duplicates collapsed to their first occurrence
    /// before the cost is split.
    pub fn new(
        date: NaiveDate,
        total_cost: Money,
        attendees: Vec<String>,
    ) -> Result<Self, AppError> {
        let attendees = normalize_attendees(attendees);
        if attendees.is_empty() {
            return Err(AppError::EmptyAttendeeList);
        }
        if total_cost.is_negative() {
            return Err(AppError::NegativeCost);
        }

        let cost_per_person = total_cost.split_between(attendees.len());
        Ok(Session {
            date,
            month: month_key(date),
            total_cost,
            attendees,
            cost_per_person,
        })
    }
}

fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

fn normalize_attendees(attendees: Vec<String>) -> Vec<String> {
    let mut kept: Vec<String> = Vec::new();
    for name in attendees {
        let name = name.trim();
        if name.is_empty() || kept.iter().any(|k| k == name) {
            continue;
        }
        kept.push(name.to_string());
    }
    kept
}
