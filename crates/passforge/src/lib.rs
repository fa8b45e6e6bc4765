/// Target for tracing macros.
///
/// Used so that log messages are succinct rather than
/// including the full module path.
pub const TARGET: &str = "passforge";

pub mod cli;
pub mod commands;
mod error;
pub mod helpers;

pub use error::Error;
pub type Result<T> = std::result::Result<T, error::Error>;
