use wafreport::error::WrResult;
use wafreport::summary::Report;

pub fn render(report: &Report) -> WrResult<String> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}
