//! Utility for generating random passwords.
use rand::{CryptoRng, RngCore};
use secrecy::SecretString;
use zeroize::Zeroize;

use crate::{charset::CharacterClass, csprng, Error, Result};

/// Minimum password length accepted by [PasswordBuilder].
pub const MIN_LENGTH: usize = 8;

/// Generated password result.
#[derive(Debug, Clone)]
pub struct PasswordResult {
    /// The generated password.
    pub password: SecretString,
}

/// Options for password generation.
#[derive(Debug, Clone)]
pub struct PasswordBuilder {
    length: usize,
    classes: Vec<CharacterClass>,
    exclude_similar: bool,
    exclude_ambiguous: bool,
}

impl PasswordBuilder {
    /// Create a new password builder.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            classes: vec![],
            exclude_similar: false,
            exclude_ambiguous: false,
        }
    }

    /// Create with every character class enabled.
    pub fn new_all(length: usize) -> Self {
        Self::new(length).digits().symbols().upper().lower()
    }

    /// Length of the generated password.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Determine if this builder is zero length.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Use numeric digits.
    pub fn digits(self) -> Self {
        self.push_class(CharacterClass::Digits)
    }

    /// Use symbol characters.
    pub fn symbols(self) -> Self {
        self.push_class(CharacterClass::Symbols)
    }

    /// Use uppercase roman letters.
    pub fn upper(self) -> Self {
        self.push_class(CharacterClass::Upper)
    }

    /// Use lowercase roman letters.
    pub fn lower(self) -> Self {
        self.push_class(CharacterClass::Lower)
    }

    /// Remove easily confused characters from every class.
    pub fn exclude_similar(mut self) -> Self {
        self.exclude_similar = true;
        self
    }

    /// Remove characters with syntax meaning from every class.
    pub fn exclude_ambiguous(mut self) -> Self {
        self.exclude_ambiguous = true;
        self
    }

    fn push_class(mut self, class: CharacterClass) -> Self {
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Generate a random password.
    ///
    /// Every enabled class is guaranteed to contribute at least
    /// one character; remaining positions are filled from the
    /// combined pool and the result is shuffled so required
    /// characters are not predictably positioned.
    pub fn one(&self) -> Result<PasswordResult> {
        if self.length < MIN_LENGTH {
            return Err(Error::PasswordTooShort(MIN_LENGTH));
        }
        if self.classes.is_empty() {
            return Err(Error::NoClassesSelected);
        }
        if self.length < self.classes.len() {
            return Err(Error::PasswordTooShortForClasses(
                self.classes.len(),
            ));
        }

        let rng = &mut csprng();
        let mut pool = Vec::new();
        let mut password = Vec::with_capacity(self.length);

        for class in &self.classes {
            let chars = class
                .filtered(self.exclude_similar, self.exclude_ambiguous);
            if chars.is_empty() {
                return Err(Error::EmptyClassPool(*class));
            }
            password.push(chars[random_index(rng, chars.len())?]);
            pool.extend(chars);
        }

        while password.len() < self.length {
            password.push(pool[random_index(rng, pool.len())?]);
        }

        shuffle(rng, &mut password)?;

        let result = PasswordResult {
            password: SecretString::from(
                password.iter().collect::<String>(),
            ),
        };
        password.zeroize();
        pool.zeroize();
        Ok(result)
    }

    /// Generate multiple passwords.
    pub fn many(&self, count: usize) -> Result<Vec<PasswordResult>> {
        let mut results = Vec::new();
        for _ in 0..count {
            results.push(self.one()?);
        }
        Ok(results)
    }
}

/// Unbiased in-place Fisher-Yates shuffle.
fn shuffle(
    rng: &mut (impl CryptoRng + RngCore),
    chars: &mut [char],
) -> Result<()> {
    for i in (1..chars.len()).rev() {
        let j = random_index(rng, i + 1)?;
        chars.swap(i, j);
    }
    Ok(())
}

/// Draw an unbiased index in `[0, bound)` from the secure source.
///
/// Rejection sampling over 32 bit draws avoids modulo bias; the
/// caller must ensure `bound` is non-zero.
fn random_index(
    rng: &mut (impl CryptoRng + RngCore),
    bound: usize,
) -> Result<usize> {
    debug_assert!(bound > 0);
    let bound = bound as u64;
    // Largest multiple of bound representable in 32 bits.
    let zone = ((1u64 << 32) / bound) * bound;
    loop {
        let mut buf = [0u8; 4];
        rng.try_fill_bytes(&mut buf)?;
        let value = u32::from_le_bytes(buf) as u64;
        if value < zone {
            return Ok((value % bound) as usize);
        }
    }
}
