use std::fmt::Write;
use wafreport::summary::{digit_width, DirectionSummary, Report, Share};

/// Classic aligned layout: one line per row, `|`-separated columns.
pub fn render(report: &Report) -> String {
    let mut out = String::new();
    let count_width = digit_width(report.total);

    for (i, section) in report.sections.iter().enumerate() {
        if i > 0 {
            out.push_str("\n\n\n");
        }
        render_section(&mut out, section, count_width);
    }
    out
}

fn render_section(out: &mut String, s: &DirectionSummary, count_width: usize) {
    let unit = s.direction.unit();
    let score_width = digit_width(s.max_score_seen as u64);
    let plural = s.direction.plural();

    let total_label = format!("Total number of {}", plural);
    let invalid_label = format!("Empty or invalid {} score", s.direction);
    let score_label = |score: usize| {
        format!(
            "{} with {} score of {:>w$}",
            s.direction.row_prefix(),
            s.direction,
            score,
            w = score_width
        )
    };

    let label_width = [
        s.direction.title().len(),
        total_label.len(),
        invalid_label.len(),
        score_label(0).len(),
    ]
    .into_iter()
    .max()
    .unwrap_or(0);
    let count_width = count_width.max(format!("# of {}", unit).len());

    let _ = writeln!(out, "{}", s.direction.title());
    let _ = writeln!(
        out,
        "{:<lw$} | {:>cw$} | % of {} | Cumulative | Outstanding",
        "-".repeat(s.direction.title().len()),
        format!("# of {}", unit),
        unit,
        lw = label_width,
        cw = count_width
    );
    write_row(out, &total_label, &s.total_share(), label_width, count_width);
    out.push('\n');
    write_row(out, &invalid_label, &s.invalid, label_width, count_width);
    for row in &s.rows {
        write_row(out, &score_label(row.score), &row.share, label_width, count_width);
    }
    out.push('\n');
    let _ = writeln!(out, "{}", super::averages_line(s.mean, s.median));
}

fn write_row(out: &mut String, label: &str, share: &Share, label_width: usize, count_width: usize) {
    let _ = writeln!(
        out,
        "{:>lw$} | {:>cw$} | {:8.4}% | {:8.4}%  | {:8.4}%",
        label,
        share.count,
        share.percent,
        share.cumulative,
        share.outstanding,
        lw = label_width,
        cw = count_width
    );
}
