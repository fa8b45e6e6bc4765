//! Random password generation from configurable character classes
//! for the passforge command line tool.
#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod charset;
mod error;
pub mod generator;

pub use error::Error;

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

use rand::{rngs::OsRng, CryptoRng, RngCore};

/// Exposes the default cryptographically secure RNG.
pub(crate) fn csprng() -> impl CryptoRng + RngCore {
    OsRng
}
