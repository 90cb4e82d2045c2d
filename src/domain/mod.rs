pub mod ledger;
pub mod report;
pub mod roster;
pub mod session;
