use clap::Parser;
use passforge_password::generator::PasswordBuilder;

use crate::{commands::generate, Result};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Passforge {
    /// Password length.
    #[clap(long, default_value_t = 16)]
    length: usize,

    /// Include digits.
    #[clap(long, default_value_t = true, action = clap::ArgAction::Set)]
    digits: bool,

    /// Include symbols.
    #[clap(long, default_value_t = true, action = clap::ArgAction::Set)]
    symbols: bool,

    /// Include uppercase letters.
    #[clap(long, default_value_t = true, action = clap::ArgAction::Set)]
    upper: bool,

    /// Include lowercase letters.
    #[clap(long, default_value_t = true, action = clap::ArgAction::Set)]
    lower: bool,

    /// Exclude characters that are easily confused.
    #[clap(long, default_value_t = true, action = clap::ArgAction::Set)]
    exclude_similar: bool,

    /// Exclude characters with syntax meaning in many contexts.
    #[clap(long, default_value_t = true, action = clap::ArgAction::Set)]
    exclude_ambiguous: bool,

    /// Number of passwords to generate.
    #[clap(long, default_value_t = 1)]
    count: usize,
}

pub fn run() -> Result<()> {
    let args = Passforge::parse();

    let mut builder = PasswordBuilder::new(args.length);
    if args.digits {
        builder = builder.digits();
    }
    if args.symbols {
        builder = builder.symbols();
    }
    if args.upper {
        builder = builder.upper();
    }
    if args.lower {
        builder = builder.lower();
    }
    if args.exclude_similar {
        builder = builder.exclude_similar();
    }
    if args.exclude_ambiguous {
        builder = builder.exclude_ambiguous();
    }

    generate::run(builder, args.count)?;

    Ok(())
}
