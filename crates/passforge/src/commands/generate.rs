//! Generate passwords to standard output.
use passforge_password::generator::PasswordBuilder;
use secrecy::ExposeSecret;

use crate::{Result, TARGET};

/// Label printed before each generated password.
const LABEL: &str = "Generated password:";

/// Generate passwords and print them to stdout.
pub fn run(builder: PasswordBuilder, count: usize) -> Result<()> {
    tracing::debug!(
        target: TARGET,
        length = builder.len(),
        count = count,
        "generate");

    for result in builder.many(count)? {
        println!("{} {}", LABEL, result.password.expose_secret());
    }

    Ok(())
}
