use crate::reports;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;
use tracing::{debug, info};
use wafreport::accumulator::ScoreAccumulator;
use wafreport::config::{OutputFormat, ReportConfig};
use wafreport::error::{WafReportError, WrResult};
use wafreport::summary::Report;

pub fn run(input: Option<&Path>, config: &ReportConfig) -> WrResult<()> {
    config.validate()?;
    debug!("Score ceiling: {}", config.max_score);

    let mut accumulator = ScoreAccumulator::with_max_score(config.max_score);

    match input {
        Some(path) => {
            info!("📂 Reading scores from: {}", path.display());
            let file = File::open(path).map_err(|source| WafReportError::Input {
                path: path.display().to_string(),
                source,
            })?;
            accumulator.ingest(BufReader::new(file));
        }
        None => {
            info!("📂 Reading scores from stdin");
            accumulator.ingest(io::stdin().lock());
        }
    }

    let result = accumulator.finish();
    info!(
        "Counted {} lines ({} inbound / {} outbound invalid)",
        result.total,
        result.inbound.invalid(),
        result.outbound.invalid()
    );

    let report = Report::from_result(&result);
    let rendered = match config.format {
        OutputFormat::Table => reports::tables(&report),
        OutputFormat::Plain => reports::plain(&report),
        OutputFormat::Json => reports::json(&report)?,
    };

    write_report(io::stdout().lock(), &rendered)
}

/// A reader closing the pipe early (`| head`) ends output, it is not a failure.
fn write_report<W: Write>(mut out: W, rendered: &str) -> WrResult<()> {
    let written = out
        .write_all(rendered.as_bytes())
        .and_then(|()| out.flush());
    match written {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("Output closed early: {}", e);
            Ok(())
        }
        other => other.map_err(WafReportError::from),
    }
}
