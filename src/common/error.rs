use crate::store::StoreError;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(
        "missing command. usage: buddy_ledger [--role <name>] [--password <secret>] [--store <path>] <command>"
    )]
    MissingCommand,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("the {0} role requires --password")]
    MissingPassword(String),
    #[error("wrong password")]
    WrongPassword,
    #[error("no secret configured for the {role} role (set {var})")]
    MissingSecret { role: String, var: &'static str },
    #[error("the {0} role cannot run this command; log in as admin or reporting")]
    Forbidden(String),
    #[error("buddy name cannot be empty")]
    EmptyName,
    #[error("'{0}' is already in the buddy list")]
    DuplicateName(String),
    #[error("'{0}' is not in the buddy list")]
    NotFound(String),
    #[error("select at least one attendee")]
    EmptyAttendeeList,
    #[error("total cost cannot be negative")]
    NegativeCost,
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
