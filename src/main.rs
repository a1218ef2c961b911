//! Command line entry point: reads a load file and prints one line of load
//! IDs per driver.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use u_dispatch::constructive::Dispatcher;
use u_dispatch::evaluation::PlanEvaluator;
use u_dispatch::models::{Load, Shift};
use u_dispatch::text::{read_loads, write_plan};

#[derive(Parser, Debug)]
#[command(
    about = "Assigns delivery loads to drivers within a 12-hour shift",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// Load file: one `<id> (<x1>,<y1>) (<x2>,<y2>)` record per line
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("u_dispatch=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let shift = Shift::default();

    let loads = read_loads(&args.input, &shift)?;
    let expected: Vec<u64> = loads.iter().map(Load::id).collect();

    let plan = Dispatcher::with_shift(loads, shift)?.run()?;

    let (reports, violations) = PlanEvaluator::new(shift).evaluate(&plan, &expected);
    for violation in &violations {
        warn!(kind = ?violation.kind, "plan violation");
    }
    info!(
        drivers = plan.num_drivers(),
        total_time = PlanEvaluator::total_time(&reports),
        "plan evaluated"
    );

    write_plan(io::stdout().lock(), &plan).context("cannot write plan")?;
    Ok(())
}
