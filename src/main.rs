//! Command-line interface for gen-sample
//!
//! # Usage Examples
//!
//! ## Alphabets
//! ```bash
//! # Sixteen alphanumeric characters
//! gen-sample alphabet ascii-alphanumeric --count 16
//!
//! # Reproducible output, seed taken from the environment
//! GEN_SAMPLE_SEED=7 gen-sample alphabet digit
//! ```
//!
//! ## Ranges and Cycles
//! ```bash
//! gen-sample range --lower 945 --upper 969 --count 10
//! gen-sample cycle --values xyz --count 10
//! ```
//!
//! ## Plans
//! ```bash
//! gen-sample plan --file samples.yaml
//! gen-sample plan --file samples.yaml --only file_names
//! ```
//!
//! Logging is controlled with `RUST_LOG`, e.g. `RUST_LOG=debug`.

use anyhow::Context;
use char_gen::SamplePlan;
use clap::{Parser, Subcommand};
use gen_sample::{sample_alphabet, sample_cycle, sample_range, AlphabetArg, SampleOpts};

#[derive(Parser)]
#[command(name = "gen-sample")]
#[command(about = "Sample the character generators used in property-based tests")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw characters uniformly from a named alphabet
    Alphabet {
        /// Alphabet to draw from
        #[arg(value_enum)]
        alphabet: AlphabetArg,

        #[command(flatten)]
        opts: SampleOpts,
    },

    /// Draw code units uniformly from an inclusive range
    Range {
        /// Lowest code unit (inclusive)
        #[arg(long)]
        lower: u16,

        /// Highest code unit (inclusive)
        #[arg(long)]
        upper: u16,

        #[command(flatten)]
        opts: SampleOpts,
    },

    /// Repeat a fixed sequence of characters
    Cycle {
        /// Characters to repeat, in order
        #[arg(long)]
        values: String,

        #[command(flatten)]
        opts: SampleOpts,
    },

    /// Run the samples described in a YAML plan file
    Plan {
        /// Plan file
        #[arg(long, value_name = "PATH")]
        file: std::path::PathBuf,

        /// Only run the sample with this name
        #[arg(long, value_name = "NAME")]
        only: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Alphabet { alphabet, opts } => {
            println!("{}", sample_alphabet(alphabet.into(), &opts));
        }
        Commands::Range { lower, upper, opts } => {
            let sample = sample_range(lower, upper, &opts)
                .with_context(|| format!("Failed to sample range [{lower}, {upper}]"))?;
            println!("{sample}");
        }
        Commands::Cycle { values, opts } => {
            println!("{}", sample_cycle(&values, &opts)?);
        }
        Commands::Plan { file, only } => {
            let plan = SamplePlan::from_file(&file)
                .with_context(|| format!("Failed to load plan: {}", file.display()))?;
            tracing::info!("Loaded {} samples from {}", plan.samples.len(), file.display());

            let outputs = match only {
                Some(name) => vec![plan.run_one(&name)?],
                None => plan.run()?,
            };
            // One JSON object per line, easy to consume from scripts
            for output in outputs {
                println!("{}", serde_json::to_string(&output)?);
            }
        }
    }

    Ok(())
}
