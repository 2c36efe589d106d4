//! Plain-text rendering of the visible rows.

use std::fmt::Write as _;

use catalog_core::{
    presentation::{category_label, sort_indicator, EMPTY_MESSAGE},
    CatalogController, SortColumn,
};

const HEADERS: [(&str, SortColumn); 4] = [
    ("ID", SortColumn::None),
    ("Product", SortColumn::Name),
    ("Category", SortColumn::CategoryTitle),
    ("User", SortColumn::None),
];

pub fn render(controller: &CatalogController) -> String {
    let rows: Vec<[String; 4]> = controller
        .visible_rows()
        .map(|row| {
            [
                row.id.to_string(),
                row.name.clone(),
                row.category.as_ref().map(category_label).unwrap_or_default(),
                row.owner
                    .as_ref()
                    .map(|owner| owner.name.clone())
                    .unwrap_or_default(),
            ]
        })
        .collect();

    if rows.is_empty() {
        return format!("{EMPTY_MESSAGE}\n");
    }

    let header: Vec<String> = HEADERS
        .iter()
        .map(|(title, column)| match column {
            SortColumn::None => (*title).to_string(),
            _ => format!("{title} {}", sort_indicator(controller.state(), *column).glyph()),
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|cell| cell.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    write_line(&mut out, &rule, &widths);
    for row in &rows {
        write_line(&mut out, row, &widths);
    }
    out
}

fn write_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "{}", line.trim_end());
}
