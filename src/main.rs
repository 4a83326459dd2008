//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::fs;
use std::io;
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatstats::cli::Args;
use chatstats::format::{OutputFormat, error_string, to_format_string};
use chatstats::pipeline::ChatAnalyzer;
use chatstats::{ChatStatsError, Report};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args = <Args as ClapParser>::parse();
    let format = args.resolved_format();

    if let Err(e) = run(&args, format) {
        eprintln!("❌ Error: {}", e);
        let body = error_string(&e.to_string(), format);
        if let Err(write_err) = emit(args.output.as_deref(), &body) {
            tracing::warn!(error = %write_err, "could not write error report");
        }
        process::exit(1);
    }
}

fn run(args: &Args, format: OutputFormat) -> Result<(), ChatStatsError> {
    let start = Instant::now();
    let analyzer = ChatAnalyzer::with_config(args.analysis_config());

    eprintln!("📊 chatstats v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("📂 Input:   {}", args.input);
    eprintln!(
        "💾 Output:  {}",
        args.output.as_deref().unwrap_or("<stdout>")
    );
    eprintln!("📄 Format:  {}", format);

    let report = analyze_input(&analyzer, &args.input)?;
    tracing::info!(
        input = %args.input,
        messages = report.total_messages(),
        senders = report.message_counts.len(),
        "analysis finished"
    );

    let rendered = to_format_string(&report, format)?;
    emit(args.output.as_deref(), &rendered)?;

    eprintln!(
        "✅ {} messages from {} senders ({:.2}s)",
        report.total_messages(),
        report.message_counts.len(),
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn analyze_input(analyzer: &ChatAnalyzer, input: &str) -> Result<Report, ChatStatsError> {
    if input == "-" {
        analyzer.analyze_reader(io::stdin().lock())
    } else {
        analyzer.analyze_file(Path::new(input))
    }
}

fn emit(output: Option<&str>, body: &str) -> Result<(), ChatStatsError> {
    match output {
        Some(path) => fs::write(path, body)?,
        None => println!("{}", body),
    }
    Ok(())
}
