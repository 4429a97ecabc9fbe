use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use payeeforge_core::{BankDefinition, GenerationRequest};
use payeeforge_generate::{CountryCatalog, GenerationEngine, GenerationError, output};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "payeeforge", version, about = "Synthetic beneficiary record generator")]
struct Cli {
    /// Raise the default log level to debug.
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate beneficiary records for a country.
    Generate(GenerateArgs),
    /// List the known country codes and names.
    Countries,
    /// List the banks available for a country.
    Banks(BanksArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// 3-letter country code, e.g. IRL.
    #[arg(long)]
    country: String,
    /// Number of records to generate.
    #[arg(long, default_value_t = 10)]
    count: u32,
    /// Restrict generation to these SWIFT codes (repeatable).
    #[arg(long = "bank", value_name = "SWIFT")]
    banks: Vec<String>,
    /// Extra bank as NAME=SWIFT (repeatable).
    #[arg(long = "custom-bank", value_name = "NAME=SWIFT", value_parser = parse_custom_bank)]
    custom_banks: Vec<BankDefinition>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Seed for reproducible output; OS entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct BanksArgs {
    /// 3-letter country code.
    #[arg(long)]
    country: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Csv,
    Json,
}

fn parse_custom_bank(raw: &str) -> Result<BankDefinition, String> {
    let (name, swift) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=SWIFT, got '{raw}'"))?;
    if name.trim().is_empty() || swift.trim().is_empty() {
        return Err(format!("expected NAME=SWIFT, got '{raw}'"));
    }
    Ok(BankDefinition::new(name.trim(), swift.trim()))
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Countries => run_countries(),
        Command::Banks(args) => run_banks(args),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let request = GenerationRequest::new(args.country, args.count)
        .with_selected(args.banks)
        .with_custom_banks(args.custom_banks);

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };
    debug!(seeded = args.seed.is_some(), "rng initialized");

    let records = GenerationEngine::new().generate(&request, &mut rng)?;

    let mut writer = open_output(args.out.as_deref())?;
    match args.format {
        OutputFormat::Csv => {
            output::csv::write_records(&mut writer, &records).map_err(GenerationError::from)?;
        }
        OutputFormat::Json => {
            output::json::write_records(&mut writer, &records).map_err(GenerationError::from)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn run_countries() -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (code, name) in CountryCatalog::global().available_countries() {
        writeln!(out, "{code}  {name}")?;
    }
    Ok(())
}

fn run_banks(args: BanksArgs) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for bank in CountryCatalog::global().banks_for_country(&args.country) {
        writeln!(out, "{}  {}", bank.swift_code, bank.name)?;
    }
    Ok(())
}

fn open_output(path: Option<&std::path::Path>) -> Result<Box<dyn Write>, CliError> {
    match path {
        Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}
