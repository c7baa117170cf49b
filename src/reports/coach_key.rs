use super::pitch_cell;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use pitchcaller::layout::{CoachKey, COACH_KEY_TITLE, NO_SIGNALS, PITCH_OUT_CODES, PITCH_OUT_LABEL};

pub fn print(key: &CoachKey) {
    println!("\n{}", COACH_KEY_TITLE.to_uppercase());

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    for row in &key.rows {
        let mut cells = vec![pitch_cell(row.pitch, &row.pitch.name)];
        if row.codes.is_empty() {
            cells.push(
                Cell::new(NO_SIGNALS)
                    .fg(Color::DarkGrey)
                    .add_attribute(Attribute::Italic),
            );
        } else {
            cells.extend(
                row.codes
                    .iter()
                    .map(|code| Cell::new(code).set_alignment(CellAlignment::Center)),
            );
        }
        table.add_row(cells);
    }

    let mut pitch_out = vec![Cell::new(PITCH_OUT_LABEL).add_attribute(Attribute::Bold)];
    pitch_out.extend(
        PITCH_OUT_CODES
            .iter()
            .map(|code| Cell::new(code).set_alignment(CellAlignment::Center)),
    );
    table.add_row(pitch_out);

    println!("{}", table);
}
