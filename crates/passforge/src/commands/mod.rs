//! Commands for the program.
pub mod generate;
