use super::pitch_cell;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Table};
use pitchcaller::layout::{CellView, WristbandSheet, PITCH_OUT_CODES, PITCH_OUT_LABEL};

pub fn print(sheet: &WristbandSheet) {
    println!("\n[ {} ]", sheet.team_name);

    // One table per row of sections; an empty column separates the sections.
    for block_row in &sheet.blocks {
        let mut table = Table::new();
        table.load_preset(ASCII_FULL);

        let mut header = Vec::new();
        for (i, section) in block_row.iter().enumerate() {
            if i > 0 {
                header.push(Cell::new(""));
            }
            header.push(Cell::new(""));
            header.extend(section.col_labels.iter().map(|label| {
                Cell::new(label)
                    .add_attribute(Attribute::Bold)
                    .set_alignment(CellAlignment::Center)
            }));
        }
        table.set_header(header);

        let height = block_row.first().map_or(0, |s| s.rows.len());
        for r in 0..height {
            let mut cells = Vec::new();
            for (i, section) in block_row.iter().enumerate() {
                if i > 0 {
                    cells.push(Cell::new(""));
                }
                let row = &section.rows[r];
                cells.push(Cell::new(&row.label).add_attribute(Attribute::Bold));
                cells.extend(row.cells.iter().map(signal_cell));
            }
            table.add_row(cells);
        }

        println!("{}", table);
    }

    println!("{}: {}", PITCH_OUT_LABEL.to_uppercase(), PITCH_OUT_CODES.join("  "));
}

fn signal_cell(cell: &CellView) -> Cell {
    match cell.pitch {
        Some(p) => pitch_cell(p, &p.label()).set_alignment(CellAlignment::Center),
        None => Cell::new(" "),
    }
}
