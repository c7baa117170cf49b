pub mod coach_key;
pub mod wristband;

use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use pitchcaller::color::{contrast_tone, Rgb};
use pitchcaller::distribution::apportion::SHARE_TOLERANCE;
use pitchcaller::distribution::SlotAllocation;
use pitchcaller::pitches::PitchDefinition;

pub fn to_table_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Cell painted in the pitch color with contrasting text.
pub fn pitch_cell(pitch: &PitchDefinition, text: &str) -> Cell {
    let cell = Cell::new(text).add_attribute(Attribute::Bold);
    match Rgb::from_hex(&pitch.color) {
        Ok(bg) => cell
            .bg(to_table_color(bg))
            .fg(to_table_color(contrast_tone(&pitch.color).rgb())),
        Err(_) => cell,
    }
}

pub fn print_cut_line() {
    println!("\n- - - - - - - - - - Cut Here - - - - - - - - - -");
}

pub fn print_allocation_report(pitches: &[PitchDefinition], allocations: &[SlotAllocation]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Pitch").add_attribute(Attribute::Bold),
        Cell::new("Abbr"),
        Cell::new("Share %").fg(Color::Cyan),
        Cell::new("Exact"),
        Cell::new("Slots").add_attribute(Attribute::Bold),
    ]);

    for i in 2..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let mut total_share = 0.0;
    let mut total_slots = 0;
    for (p, a) in pitches.iter().zip(allocations) {
        total_share += p.percentage;
        total_slots += a.count;

        let count_cell = if a.count == 0 {
            Cell::new(a.count).fg(Color::Red)
        } else {
            Cell::new(a.count)
        };

        table.add_row(vec![
            pitch_cell(p, &p.name),
            Cell::new(p.label()),
            Cell::new(format!("{:.1}", p.percentage)).fg(Color::Cyan),
            Cell::new(format!("{:.2}", a.exact)),
            count_cell,
        ]);
    }

    let total_color = if (total_share - 100.0f64).abs() <= SHARE_TOLERANCE {
        Color::Green
    } else {
        Color::Red
    };
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(format!("{:.1}", total_share)).fg(total_color),
        Cell::new(""),
        Cell::new(total_slots).add_attribute(Attribute::Bold),
    ]);

    println!("\n{}", table);
}
