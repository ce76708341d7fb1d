use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use floyd_paths::{loader, report, ShortestPaths};
use tools::timer::Stopwatch;

/// Print a shortest path between every pair of nodes of an undirected graph
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Edge list file, one `u v` pair of node ids per line
    graph: PathBuf,
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut stopwatch = Stopwatch::new();

    let graph = loader::read_graph(&args.graph)?;
    stopwatch.click("load");
    tracing::info!(nodes = graph.len(), "loaded graph");

    let paths = ShortestPaths::compute(graph)?;
    stopwatch.click("compute");
    if tracing::enabled!(tracing::Level::TRACE) {
        let mut dump = Vec::new();
        report::print_matrix(&mut dump, &paths)?;
        tracing::trace!("distances:\n{}", String::from_utf8_lossy(&dump));
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let lines = report::write_report(&mut out, &paths)?;
    stopwatch.click("report");
    tracing::info!(pairs = lines, "wrote report");

    stopwatch.report();
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
