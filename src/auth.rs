use std::env;
use std::fmt;

use crate::common::{command::Command, error::AppError};

pub const ADMIN_SECRET_VAR: &str = "BUDDY_LEDGER_ADMIN_SECRET";
pub const REPORTING_SECRET_VAR: &str = "BUDDY_LEDGER_REPORTING_SECRET";

/// Access roles. The admin manages the roster and records sessions, the
/// reporting viewer reads the monthly reports, the guest gets told to log
/// in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Guest,
    Admin,
    Reporting,
}

impl Role {
    pub fn name(self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Admin => "admin",
            Role::Reporting => "reporting",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "guest" => Ok(Role::Guest),
            "admin" => Ok(Role::Admin),
            "reporting" => Ok(Role::Reporting),
            other => Err(AppError::Parse(format!(
                "unknown role: {other} (expected guest, admin or reporting)"
            ))),
        }
    }
}

/// The two fixed role secrets the verifier compares against. Secrets are
/// injected at construction; the shipped shell takes them from the
/// environment.
#[derive(Debug, Clone)]
pub struct RoleSecrets {
    admin: String,
    reporting: String,
}

impl RoleSecrets {
    pub fn new(admin: impl Into<String>, reporting: impl Into<String>) -> Self {
        Self {
            admin: admin.into(),
            reporting: reporting.into(),
        }
    }

    /// Reads both secrets from the environment.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            admin: read_secret(Role::Admin, ADMIN_SECRET_VAR)?,
            reporting: read_secret(Role::Reporting, REPORTING_SECRET_VAR)?,
        })
    }

    /// Static comparison against the secret of `role`. Guests always pass
    /// here; the command gate is what stops them.
    pub fn verify(&self, role: Role, password: &str) -> bool {
        match role {
            Role::Guest => true,
            Role::Admin => password == self.admin,
            Role::Reporting => password == self.reporting,
        }
    }
}

fn read_secret(role: Role, var: &'static str) -> Result<String, AppError> {
    env::var(var).map_err(|_| AppError::MissingSecret {
        role: role.name().to_string(),
        var,
    })
}

/// The command gate: the admin runs everything, the reporting viewer only
/// the report reads, the guest nothing.
pub fn permits(role: Role, command: &Command) -> bool {
    match role {
        Role::Admin => true,
        Role::Reporting => matches!(
            command,
            Command::ListMonths
                | Command::MonthlySummary { .. }
                | Command::MonthlyTotal { .. }
                | Command::SessionHistory { .. }
        ),
        Role::Guest => false,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::common::money::Money;

    fn sample_commands() -> Vec<Command> {
        vec![
            Command::AddBuddy { name: "Ana".into() },
            Command::RemoveBuddy { name: "Ana".into() },
            Command::ListBuddies,
            Command::RecordSession {
                date: "2025-01-05".parse().unwrap(),
                total_cost: Money::from_f64(20.0),
                attendees: vec!["Ana".into()],
            },
            Command::SessionDefaults {
                date: "2025-01-05".parse().unwrap(),
            },
            Command::ListMonths,
            Command::MonthlySummary { month: "2025-01".into() },
            Command::MonthlyTotal { month: "2025-01".into() },
            Command::SessionHistory { month: "2025-01".into() },
        ]
    }

    fn is_report_read(command: &Command) -> bool {
        matches!(
            command,
            Command::ListMonths
                | Command::MonthlySummary { .. }
                | Command::MonthlyTotal { .. }
                | Command::SessionHistory { .. }
        )
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
        assert_eq!(Role::from_str(" Reporting ").unwrap(), Role::Reporting);
        assert_eq!(Role::from_str("GUEST").unwrap(), Role::Guest);
        assert!(Role::from_str("root").is_err());
    }

    #[test]
    fn verify_checks_the_matching_secret() {
        let secrets = RoleSecrets::new("a-secret", "r-secret");

        assert!(secrets.verify(Role::Admin, "a-secret"));
        assert!(!secrets.verify(Role::Admin, "r-secret"));
        assert!(!secrets.verify(Role::Admin, ""));

        assert!(secrets.verify(Role::Reporting, "r-secret"));
        assert!(!secrets.verify(Role::Reporting, "a-secret"));
    }

    #[test]
    fn guest_passes_verification_but_no_gate() {
        let secrets = RoleSecrets::new("a-secret", "r-secret");
        assert!(secrets.verify(Role::Guest, "anything"));

        for command in sample_commands() {
            assert!(!permits(Role::Guest, &command), "guest ran {command:?}");
        }
    }

    #[test]
    fn admin_runs_everything() {
        for command in sample_commands() {
            assert!(permits(Role::Admin, &command), "admin blocked on {command:?}");
        }
    }

    #[test]
    fn reporting_runs_only_report_reads() {
        for command in sample_commands() {
            assert_eq!(
                permits(Role::Reporting, &command),
                is_report_read(&command),
                "wrong gate for {command:?}"
            );
        }
    }
}
