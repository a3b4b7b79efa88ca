//! CLI library components for ticket order reconciliation.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod report;
pub mod summary;
pub mod types;
