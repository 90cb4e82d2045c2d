pub mod cli;
pub mod writer;
