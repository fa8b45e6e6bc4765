use thiserror::Error;

use crate::charset::CharacterClass;

/// Errors generated by the password library.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested length is below the minimum.
    #[error("password length must be at least {0} characters")]
    PasswordTooShort(usize),

    /// No character class was enabled.
    #[error("at least one character set must be selected")]
    NoClassesSelected,

    /// Requested length cannot fit one character from every
    /// enabled class.
    #[error("password length must be at least {0} for selected character sets")]
    PasswordTooShortForClasses(usize),

    /// An enabled class has no characters left after exclusions.
    #[error("no {0} characters remain after exclusions")]
    EmptyClassPool(CharacterClass),

    /// The system random source failed.
    #[error(transparent)]
    Random(#[from] rand::Error),
}
