//! Batch simulator (default binary).
//!
//! Reads one piece sequence per line from INPUT (or stdin) and writes one
//! height per line to OUTPUT (or stdout). Set `RUST_LOG=debug` for per-line
//! logging.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::info;

use tetris_drop::batch::{run_batch_with, BatchConfig, BatchSummary, OutputFormat};
use tetris_drop::term::GridPrinter;

#[derive(Parser, Debug)]
#[command(name = "tetris-drop", version, about)]
struct Args {
    /// Input file, one comma-separated piece sequence per line (e.g. `Q0,T4`). Defaults to stdin.
    input: Option<PathBuf>,

    /// Output file, one result per input line. Defaults to stdout.
    output: Option<PathBuf>,

    /// Output format: text | json (overrides TETRIS_DROP_FORMAT)
    #[arg(long)]
    format: Option<String>,

    /// Lines simulated concurrently (overrides TETRIS_DROP_JOBS)
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,

    /// Render each final grid to stderr
    #[arg(long)]
    print_grid: bool,
}

impl Args {
    fn apply(&self, mut config: BatchConfig) -> Result<BatchConfig> {
        if let Some(name) = &self.format {
            config.format = OutputFormat::from_str(name)
                .ok_or_else(|| anyhow!("unknown output format {name:?} (expected text or json)"))?;
        }
        if let Some(jobs) = self.jobs {
            if jobs == 0 {
                return Err(anyhow!("--jobs must be at least 1"));
            }
            config.jobs = jobs;
        }
        if self.print_grid {
            config.print_grid = true;
        }
        Ok(config)
    }
}

fn main() -> Result<ExitCode> {
    env_logger::init();

    let args = Args::parse();
    let config = args.apply(BatchConfig::from_env())?;
    info!(
        "format={} jobs={} print_grid={}",
        config.format.as_str(),
        config.jobs,
        config.print_grid
    );

    let summary = run(&args, &config)?;
    Ok(if summary.all_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run(args: &Args, config: &BatchConfig) -> Result<BatchSummary> {
    let input: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let mut printer = config.print_grid.then(GridPrinter::stderr);

    run_batch_with(input, output, config, |outcome| {
        if let (Some(printer), Ok(sim)) = (printer.as_mut(), &outcome.result) {
            printer.print(&format!("line {}", outcome.line), &sim.grid)?;
        }
        Ok(())
    })
}
