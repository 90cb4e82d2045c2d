use serde::{Deserialize, Serialize};

use crate::common::error::AppError;

/// The buddy roster: participant names in insertion order.
///
/// Insertion order is display order. Names are unique after trimming.
/// Past sessions keep attendee names as free text, so editing the roster
/// never rewrites history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(Vec<String>);

impl Roster {
    pub fn new() -> Self {
        Roster(Vec::new())
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    /// Appends a buddy. The name is trimmed before any check.
    pub fn add(&mut self, name: &str) -> Result<String, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::EmptyName);
        }
        if self.contains(name) {
            return Err(AppError::DuplicateName(name.to_string()));
        }
        self.0.push(name.to_string());
        Ok(name.to_string())
    }

    /// Removes a buddy from the roster only.
    pub fn remove(&mut self, name: &str) -> Result<(), AppError> {
        match self.0.iter().position(|n| n == name) {
            Some(idx) => {
                self.0.remove(idx);
                Ok(())
            }
            None => Err(AppError::NotFound(name.to_string())),
        }
    }
}
