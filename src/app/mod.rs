pub mod command;
pub mod reports;
