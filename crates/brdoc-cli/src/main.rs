//! brdoc CLI - validate, format, pad, parse and generate Brazilian identifiers.

use brdoc_core::IdClass;
use clap::{Parser, Subcommand};

mod commands;
mod logging;
mod output;

use commands::{check, check_digits, compose, format, generate, pad, parse, validate};

#[derive(Parser)]
#[command(name = "brdoc")]
#[command(about = "Check-digit tools for CNPJ, CEI, CPF and PIS/PASEP numbers")]
struct Cli {
    /// Log filter (overrides RUST_LOG), e.g. `debug`
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check an identifier's digit count and check digits
    Validate {
        /// Identifier class (cnpj, cei, cpf, pis)
        class: IdClass,
        /// Identifier, formatted or not
        text: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Insert the class's delimiters
    Format {
        /// Identifier class (cnpj, cei, cpf, pis)
        class: IdClass,
        /// Identifier, formatted or not
        text: String,
    },
    /// Strip delimiters
    Clean {
        /// Identifier class (cnpj, cei, cpf, pis)
        class: IdClass,
        /// Identifier, formatted or not
        text: String,
    },
    /// Zero-pad a number to the class width
    Pad {
        /// Identifier class (cnpj, cei, cpf, pis)
        class: IdClass,
        /// Number to pad
        number: String,
        /// Skip check-digit validation of the result
        #[arg(long)]
        no_validate: bool,
    },
    /// Compute check digit(s) for a base
    CheckDigits {
        /// Identifier class (cnpj, cei, cpf, pis)
        class: IdClass,
        /// Base digits (or a full identifier)
        base: String,
    },
    /// Generate random valid identifiers
    Random {
        /// Identifier class (cnpj, cei, cpf, pis)
        class: IdClass,
        /// How many to generate
        #[arg(long, default_value_t = 1)]
        count: u32,
        /// Print canonical digits instead of the formatted form
        #[arg(long)]
        raw: bool,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Split an identifier into its sub-fields
    Parse {
        /// Identifier class (cnpj, cei, cpf, pis)
        class: IdClass,
        /// Identifier, formatted or not
        text: String,
        /// Render fields as integers
        #[arg(long)]
        raw: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build a CNPJ from a firm number and establishment
    Compose {
        /// 8-digit firm number
        firm: String,
        /// 4-digit establishment number
        #[arg(long, default_value = "0001")]
        establishment: String,
        /// Print the formatted form
        #[arg(long)]
        formatted: bool,
    },
    /// Validate one identifier per line from a file or stdin
    Check {
        /// Identifier class (cnpj, cei, cpf, pis)
        class: IdClass,
        /// Input file (or stdin if not provided)
        input: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Exit with error code if any line fails
        #[arg(long)]
        strict: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());

    let result = match cli.command {
        Commands::Validate { class, text, json } => validate::run(class, text, json),
        Commands::Format { class, text } => format::run_format(class, text),
        Commands::Clean { class, text } => format::run_clean(class, text),
        Commands::Pad {
            class,
            number,
            no_validate,
        } => pad::run(class, number, !no_validate),
        Commands::CheckDigits { class, base } => check_digits::run(class, base),
        Commands::Random {
            class,
            count,
            raw,
            seed,
        } => generate::run(class, count, !raw, seed),
        Commands::Parse {
            class,
            text,
            raw,
            json,
        } => parse::run(class, text, !raw, json),
        Commands::Compose {
            firm,
            establishment,
            formatted,
        } => compose::run(firm, establishment, formatted),
        Commands::Check {
            class,
            input,
            json,
            strict,
        } => check::run(class, input, json, strict),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
