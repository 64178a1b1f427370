mod json;
mod plain;
mod tables;

pub use self::json::render as json;
pub use self::plain::render as plain;
pub use self::tables::render as tables;

/// Two-decimal statistic, or `n/a` when nothing was read.
fn format_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "n/a".to_string(),
    }
}

fn averages_line(mean: Option<f64>, median: Option<f64>) -> String {
    format!(
        "Mean: {}    Median: {}",
        format_stat(mean),
        format_stat(median)
    )
}
