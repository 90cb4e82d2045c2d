//! Session tracking and cost splitting for a recurring court booking:
//! a buddy roster, one session per played date, and monthly reports of
//! who owes what. The whole ledger lives in a single JSON document
//! behind a pluggable storage medium.

pub mod app;
pub mod auth;
pub mod common;
pub mod domain;
pub mod io;
pub mod store;
pub mod worker;
