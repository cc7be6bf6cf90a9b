use std::io;

use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod repl;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the prompt and reports
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .init();

    let config = args.config();

    if let Some(line) = args.input_line() {
        let report = repl::evaluate(&line, &config.report)
            .with_context(|| format!("cannot compute statistics for {line:?}"))?;
        println!("{}\n{report}", repl::BANNER);
        return Ok(());
    }

    let reports = repl::run(&config, io::stdin().lock(), io::stdout().lock())
        .context("failed to read input or write report")?;
    tracing::debug!(reports, "prompt closed");

    Ok(())
}
