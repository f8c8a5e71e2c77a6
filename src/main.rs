use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use env_logger::Env;
use log::info;
use secret_finder::document::ShareDocument;
use secret_finder::reconstruct::{ReconstructionConfig, Reconstructor, DEFAULT_MAX_DIGITS};
use secret_finder::selector::{CrossCheck, SelectionOrder};

#[derive(Parser)]
#[command(name = "find-secret")]
#[command(about = "Recover the constant term of a polynomial from base-encoded shares", long_about = None)]
struct Cli {
    /// Share documents to process
    #[arg(default_values_t = [String::from("TestCase1.json"), String::from("TestCase2.json")])]
    files: Vec<String>,

    /// Use the k shares with the smallest x instead of the first k in the document
    #[arg(long)]
    ascending_x: bool,

    /// Require this many k-subsets of the shares to agree on the secret
    #[arg(long, value_name = "SUBSETS")]
    cross_check: Option<usize>,

    /// Longest accepted digit string per share
    #[arg(long, default_value_t = DEFAULT_MAX_DIGITS)]
    max_digits: usize,

    /// Radix used to print the secret
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(2..=36))]
    radix: u32,

    /// Sets the level of verbosity
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> ReconstructionConfig {
        ReconstructionConfig {
            selection: if self.ascending_x {
                SelectionOrder::AscendingX
            } else {
                SelectionOrder::AsGiven
            },
            cross_check: self
                .cross_check
                .map_or(CrossCheck::Disabled, CrossCheck::Subsets),
            max_digits: self.max_digits,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    let reconstructor = Reconstructor::new(cli.config());
    info!("reconstruction settings: {:?}", reconstructor.config());

    for file in &cli.files {
        let document =
            ShareDocument::load(file).with_context(|| format!("Failed to load {}", file))?;
        let secret = document
            .reconstruct(&reconstructor)
            .with_context(|| format!("Failed to recover the secret for {}", file))?;
        println!("Secret for {}: {}", file, secret.to_str_radix(cli.radix));
    }
    Ok(())
}
