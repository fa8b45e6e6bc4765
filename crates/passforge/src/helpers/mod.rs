//! Helpers for the command line.
pub mod messages;
