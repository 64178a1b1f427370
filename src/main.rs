use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::{error, Level};
use wafreport::config::ReportConfig;

mod cmd;
mod reports;

/// Summarises ModSecurity / OWASP CRS anomaly scores.
///
/// Expects one `INBOUND OUTBOUND` pair per line, e.g. piped from
/// `grep -E -o "[0-9-]+ [0-9-]+$" waf.log`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Score file to read. Reads standard input when omitted.
    input: Option<PathBuf>,

    #[command(flatten)]
    config: ReportConfig,

    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // stdout carries the report, so logs go to stderr.
    let level = if cli.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cmd::report::run(cli.input.as_deref(), &cli.config) {
        error!("❌ {}", e);
        process::exit(1);
    }
}
