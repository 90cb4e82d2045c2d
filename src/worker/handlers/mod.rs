pub mod add_buddy;
pub mod record_session;
pub mod remove_buddy;
