mod logging;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use than_so_hoc::{batch, normalize, EngineConfig, NumerologyEngine};

#[derive(Parser)]
#[command(
    name = "than-so-hoc",
    version,
    about = "Vietnamese numerology reports for CRM customers"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// More logging (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Engine config file (JSON).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Reference "today" for personal year/month cycles (YYYY-MM-DD).
    #[arg(long, value_name = "DATE", global = true)]
    today: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the report for one person.
    Calc {
        /// Full name, Vietnamese diacritics allowed.
        #[arg(long)]
        name: String,

        /// Birth date, YYYY-MM-DD or DD/MM/YYYY.
        #[arg(long)]
        birth_date: String,

        /// Pretty-print the JSON.
        #[arg(long)]
        pretty: bool,
    },

    /// Print the normalized form of a name.
    Normalize { name: String },

    /// Compute reports for a CSV of customers (full_name,birth_date[,customer_id]).
    Batch {
        #[arg(long, value_name = "CSV")]
        input: PathBuf,

        /// JSON Lines output file. Defaults to stdout.
        #[arg(long, value_name = "JSONL")]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(logging::level_from_verbosity(cli.verbose, cli.quiet))?;

    let engine = build_engine(cli.config.as_deref(), cli.today)?;

    match cli.command {
        Command::Calc { name, birth_date, pretty } => run_calc(&engine, &name, &birth_date, pretty),
        Command::Normalize { name } => {
            println!("{}", normalize(&name));
            Ok(())
        }
        Command::Batch { input, output } => run_batch(&engine, &input, output.as_deref()),
    }
}

fn build_engine(config_path: Option<&Path>, today: Option<NaiveDate>) -> Result<NumerologyEngine> {
    let mut config = match config_path {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {:?}", path))?,
        None => EngineConfig::default(),
    };

    if let Some(date) = today {
        config = config.with_reference_date(date);
    }

    Ok(NumerologyEngine::with_config(config))
}

fn run_calc(engine: &NumerologyEngine, name: &str, birth_date: &str, pretty: bool) -> Result<()> {
    let outcome = batch::compute_one(engine, name, birth_date);

    let json = if pretty {
        serde_json::to_string_pretty(&outcome)?
    } else {
        serde_json::to_string(&outcome)?
    };
    println!("{}", json);

    if outcome.is_failed() {
        std::process::exit(1);
    }
    Ok(())
}

fn run_batch(engine: &NumerologyEngine, input: &Path, output: Option<&Path>) -> Result<()> {
    let customers = batch::load_customers(input)?;
    let records = batch::compute_batch(engine, &customers);

    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create output: {:?}", path))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    for record in &records {
        serde_json::to_writer(&mut writer, record).context("Failed to write record")?;
        writeln!(writer)?;
    }
    writer.flush()?;

    let summary = batch::summarize(&records);
    eprintln!("✓ {}", summary.summary());

    Ok(())
}
