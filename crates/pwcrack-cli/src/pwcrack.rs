//! Rainbow table password recovery CLI
//!
//! Usage:
//!   pwcrack crack [OPTIONS] [DIGESTS]...
//!   pwcrack hash <PASSWORD> [--hash <HASH>] [--little-endian]
//!
//! Example:
//!   pwcrack crack -l 4 -t 500 -m 5000 e10adc3949ba59abbe56e057f20f883e
//!   pwcrack crack --log rainbow_table_log.txt
//!   Enter a hex digest (or 'q' to quit): 1bc29b36f623ba82aaf6724fd3b16718
//!
//! The table is built in memory at startup and dropped at exit.
//! Set RUST_LOG (e.g. RUST_LOG=debug) to see table hits and false alarms.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pwcrack_rainbow::constants::{
    DEFAULT_CHAIN_LENGTH, DEFAULT_NUM_CHAINS, DEFAULT_PASSWORD_LENGTH,
};
use pwcrack_rainbow::infra::chain_log::create_chain_log;
use pwcrack_rainbow::{
    ByteOrder, Digest, HashFunction, Hasher, NotFound, Password, RainbowTable, TableParams,
    build_table_with_log, build_table_with_progress, crack, crack_parallel, measure_coverage,
};

/// Exit status when a digest given on the command line was not recovered
const EXIT_NOT_FOUND: u8 = 2;

type Cracker = fn(&RainbowTable, &Digest) -> Result<Password, NotFound>;

/// All the hash functions supported.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum HashFunctionArg {
    Md4,
    Md5,
    Sha1,
    Sha2_256,
}

impl From<HashFunctionArg> for HashFunction {
    fn from(arg: HashFunctionArg) -> Self {
        match arg {
            HashFunctionArg::Md4 => HashFunction::Md4,
            HashFunctionArg::Md5 => HashFunction::Md5,
            HashFunctionArg::Sha1 => HashFunction::Sha1,
            HashFunctionArg::Sha2_256 => HashFunction::Sha2_256,
        }
    }
}

/// Rainbow table password recovery for fixed-length `0-9a-z` passwords.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Crack(CrackArgs),
    Hash(HashCmdArgs),
}

#[derive(Args)]
struct HashArgs {
    /// The hash function.
    #[arg(long = "hash", value_enum, default_value_t = HashFunctionArg::Md5)]
    function: HashFunctionArg,

    /// Read digests least significant byte first.
    #[arg(long)]
    little_endian: bool,
}

impl HashArgs {
    fn hasher(&self) -> Hasher {
        let byte_order = if self.little_endian {
            ByteOrder::LittleEndian
        } else {
            ByteOrder::BigEndian
        };
        Hasher::new(self.function.into(), byte_order)
    }
}

/// Build a rainbow table and recover passwords from hex digests.
/// Without digests, digests are read interactively from stdin.
#[derive(Args)]
struct CrackArgs {
    /// The digests to crack, in hexadecimal.
    digests: Vec<String>,

    /// The length of every password in the table.
    #[arg(short = 'l', long, default_value_t = DEFAULT_PASSWORD_LENGTH)]
    password_length: usize,

    /// The chain length.
    /// Longer chains need less memory for the same coverage but make lookups slower.
    #[arg(short = 't', long, default_value_t = DEFAULT_CHAIN_LENGTH)]
    chain_length: u32,

    /// The number of chains.
    #[arg(short = 'm', long = "chains", default_value_t = DEFAULT_NUM_CHAINS)]
    num_chains: u64,

    #[command(flatten)]
    hash: HashArgs,

    /// Write every chain step to this file while building the table.
    #[arg(long)]
    log: Option<PathBuf>,

    /// Report how much of the password space the table covers.
    #[arg(long)]
    coverage: bool,

    /// Search columns one after another instead of in parallel.
    #[arg(long)]
    sequential: bool,
}

/// Print the digest of a password.
#[derive(Args)]
struct HashCmdArgs {
    password: String,

    #[command(flatten)]
    hash: HashArgs,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Crack(args) => run_crack(args),
        Command::Hash(args) => run_hash(args),
    }
}

fn run_hash(args: HashCmdArgs) -> Result<ExitCode> {
    let hasher = args.hash.hasher();
    let digest = hasher.hash(&args.password);
    let width = (hasher.digest_bits() / 4) as usize;
    println!("{digest:0width$x}");
    Ok(ExitCode::SUCCESS)
}

fn run_crack(args: CrackArgs) -> Result<ExitCode> {
    let params = TableParams::new(args.password_length, args.chain_length, args.num_chains)
        .context("Invalid table parameters")?;
    let hasher = args.hash.hasher();

    // Reject malformed digests before spending time on the table
    let targets = args
        .digests
        .iter()
        .map(|hex| {
            hasher
                .parse_hex(hex)
                .with_context(|| format!("Invalid digest '{hex}'"))
                .map(|digest| (hex.as_str(), digest))
        })
        .collect::<Result<Vec<_>>>()?;

    let table = build(params, hasher, args.log.as_ref())?;

    if args.coverage {
        let report = measure_coverage(&table).context("Failed to measure coverage")?;
        eprintln!(
            "Coverage: {} of {} passwords ({:.4}%), {} merged chain(s)",
            report.covered,
            report.space,
            report.ratio() * 100.0,
            report.merged_chains()
        );
    }

    let cracker: Cracker = if args.sequential {
        crack
    } else {
        crack_parallel
    };

    if targets.is_empty() {
        interactive(&table, cracker)?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut all_found = true;
    for (hex, target) in &targets {
        match cracker(&table, target) {
            Ok(password) => println!("{hex}:{password}"),
            Err(NotFound) => {
                eprintln!("No password found for {hex}");
                all_found = false;
            }
        }
    }

    Ok(if all_found {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_NOT_FOUND)
    })
}

fn build(params: TableParams, hasher: Hasher, log: Option<&PathBuf>) -> Result<RainbowTable> {
    let table = match log {
        Some(path) => {
            let mut sink = create_chain_log(path)
                .with_context(|| format!("Failed to create chain log '{}'", path.display()))?;
            build_table_with_log(params, hasher, &mut sink)
                .with_context(|| format!("Failed to build table with log '{}'", path.display()))?
        }
        None => build_table_with_progress(params, hasher, |done, total| {
            debug!(done, total, "chains generated");
        })
        .context("Failed to build table")?,
    };

    Ok(table)
}

fn interactive(table: &RainbowTable, cracker: Cracker) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\nEnter a hex digest (or 'q' to quit): ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line.context("Failed to read input")?;
        let input = line.trim();

        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            println!("Goodbye!");
            break;
        }

        let target = match table.hasher().parse_hex(input) {
            Ok(target) => target,
            Err(e) => {
                eprintln!("Error: {e}. Please try again.");
                continue;
            }
        };

        let start = Instant::now();

        match cracker(table, &target) {
            Ok(password) => println!("Found password: {password}"),
            Err(NotFound) => {
                println!("No password found.");
                println!("This can happen if:");
                println!("  - The digest was entered incorrectly");
                println!("  - The password is not covered by the table");
                println!("Try a longer chain length or more chains.");
            }
        }

        println!("Search completed in {:.2} seconds.", start.elapsed().as_secs_f64());
    }

    Ok(())
}
