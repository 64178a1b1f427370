use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::fmt::Write;
use wafreport::summary::{DirectionSummary, Report, Share};

pub fn render(report: &Report) -> String {
    let mut out = String::new();
    for section in &report.sections {
        let _ = writeln!(out, "\n{}", section_table(section));
        let _ = writeln!(
            out,
            "{}",
            super::averages_line(section.mean, section.median)
        );
    }
    out
}

fn section_table(s: &DirectionSummary) -> Table {
    let unit = s.direction.unit();
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new(s.direction.title()).add_attribute(Attribute::Bold),
        Cell::new(format!("# of {}", unit)),
        Cell::new(format!("% of {}", unit)),
        Cell::new("Cumulative"),
        Cell::new("Outstanding"),
    ]);

    for i in 1..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.add_row(share_row(
        Cell::new(format!("Total number of {}", s.direction.plural()))
            .add_attribute(Attribute::Bold),
        &s.total_share(),
    ));

    let invalid_label = Cell::new(format!("Empty or invalid {} score", s.direction));
    let invalid_label = if s.invalid.count > 0 {
        invalid_label.fg(Color::Yellow)
    } else {
        invalid_label
    };
    table.add_row(share_row(invalid_label, &s.invalid));

    for row in &s.rows {
        let label = Cell::new(format!(
            "{} with {} score of {}",
            s.direction.row_prefix(),
            s.direction,
            row.score
        ));
        table.add_row(share_row(label, &row.share));
    }

    table
}

fn share_row(label: Cell, share: &Share) -> Vec<Cell> {
    vec![
        label,
        Cell::new(share.count),
        Cell::new(format!("{:.4}%", share.percent)),
        Cell::new(format!("{:.4}%", share.cumulative)).fg(Color::Cyan),
        Cell::new(format!("{:.4}%", share.outstanding)),
    ]
}
