//! Out-of-order scheduler simulator CLI.
//!
//! This binary runs one instruction trace through the scheduler. It performs:
//! 1. **Setup:** Reads an optional JSON configuration and the trace header.
//! 2. **Run:** Simulates until every instruction commits, or the pipeline deadlocks.
//! 3. **Report:** Writes one line of stage cycles per instruction to the output file.
//!
//! Exit codes: `0` on success, `1` for unusable input (nothing is written),
//! `2` when the model itself fails (an empty output file is written).

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ooosim_core::config::{Config, GeneralConfig};
use ooosim_core::{SimError, Simulator, TimingReport, TraceReader};

#[derive(Parser, Debug)]
#[command(
    name = "ooosim",
    author,
    version,
    about = "Cycle-accurate out-of-order scheduler simulator",
    long_about = "Schedule an instruction trace through an out-of-order pipeline and write the cycle at which each instruction passed each stage.\n\nThe first trace line is `<physRegCount>,<issueWidth>`; each further line is `<R|I|L|S>,<op0>,<op1>,<op2>`.\n\nExamples:\n  ooosim trace.txt out.txt\n  ooosim trace.txt out.txt --stats\n  RUST_LOG=ooosim_core=trace ooosim trace.txt out.txt"
)]
struct Cli {
    /// Instruction trace to schedule.
    input: PathBuf,

    /// File receiving the per-instruction timing report.
    output: PathBuf,

    /// JSON configuration; only the `general` section applies, machine
    /// parameters always come from the trace header.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every stage transition of every instruction.
    #[arg(long)]
    trace: bool,

    /// Print scheduler statistics after a successful run.
    #[arg(long)]
    stats: bool,
}

/// Reads the `general` section of a JSON configuration file.
fn load_general(path: &Path) -> Result<GeneralConfig, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("could not read config '{}': {e}", path.display()))?;
    let config: Config = serde_json::from_str(&text)
        .map_err(|e| format!("invalid config '{}': {e}", path.display()))?;
    Ok(config.general)
}

/// Installs the log subscriber. `RUST_LOG` takes precedence over `--trace`.
fn init_logging(trace: bool) {
    let default = if trace { "ooosim_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn write_report(path: &Path, report: &TimingReport) -> Result<(), SimError> {
    let file = File::create(path)?;
    report.write_to(&mut BufWriter::new(file))?;
    Ok(())
}

fn run(cli: &Cli, general: GeneralConfig) -> Result<(), SimError> {
    let reader = TraceReader::open(&cli.input)?;
    let mut sim = Simulator::from_trace(reader, general)?;

    if let Err(err) = sim.run() {
        if err.is_model_failure() {
            if let Err(io) = write_report(&cli.output, &TimingReport::empty()) {
                eprintln!("error: could not write '{}': {io}", cli.output.display());
            }
        }
        return Err(err);
    }

    write_report(&cli.output, &sim.report())?;
    if cli.stats {
        sim.stats().print();
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let general = match cli.config.as_deref().map(load_general).transpose() {
        Ok(general) => general.unwrap_or_default(),
        Err(msg) => {
            eprintln!("error: {msg}");
            return ExitCode::from(1);
        }
    };
    init_logging(cli.trace || general.trace_instructions);

    match run(&cli, general) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(if err.is_model_failure() { 2 } else { 1 })
        }
    }
}
