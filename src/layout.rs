use crate::color::{contrast_tone, TextTone};
use crate::config::WristbandConfig;
use crate::grid::sections;
use crate::lookup::SignalIndex;
use crate::pitches::PitchDefinition;

/// Reserved codes printed on both cards, never assigned by the generator.
pub const PITCH_OUT_CODES: [&str; 2] = ["333", "999"];
pub const PITCH_OUT_LABEL: &str = "Pitch Out";
pub const COACH_KEY_TITLE: &str = "Coaches Key";
pub const NO_SIGNALS: &str = "No signals";

#[derive(Debug, Clone)]
pub struct CellView<'a> {
    pub code: String,
    pub pitch: Option<&'a PitchDefinition>,
}

impl CellView<'_> {
    pub fn tone(&self) -> Option<TextTone> {
        self.pitch.map(|p| contrast_tone(&p.color))
    }
}

#[derive(Debug, Clone)]
pub struct SectionRow<'a> {
    pub label: String,
    pub cells: Vec<CellView<'a>>,
}

#[derive(Debug, Clone)]
pub struct SectionView<'a> {
    pub col_labels: Vec<String>,
    pub rows: Vec<SectionRow<'a>>,
}

/// Player card: team header, blocks of sections, pitch-out footer.
#[derive(Debug, Clone)]
pub struct WristbandSheet<'a> {
    pub team_name: String,
    pub blocks: Vec<Vec<SectionView<'a>>>,
}

impl<'a> WristbandSheet<'a> {
    pub fn build(config: &WristbandConfig, index: &SignalIndex<'a>) -> Self {
        let grid = &config.grid;
        let col_labels = grid.col_labels();
        let row_labels = grid.row_labels();

        let blocks = sections(grid, config.section_size)
            .into_iter()
            .map(|block_row| {
                block_row
                    .into_iter()
                    .map(|section| {
                        let cols = &col_labels[section.cols.clone()];
                        let rows = row_labels[section.rows.clone()]
                            .iter()
                            .map(|row_label| SectionRow {
                                label: row_label.clone(),
                                cells: cols
                                    .iter()
                                    .map(|col_label| {
                                        let code = format!("{}{}", row_label, col_label);
                                        let pitch = index.pitch_for_code(&code);
                                        CellView { code, pitch }
                                    })
                                    .collect(),
                            })
                            .collect();

                        SectionView {
                            col_labels: cols.to_vec(),
                            rows,
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            team_name: config.team_name.to_uppercase(),
            blocks,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CoachKeyRow<'a> {
    pub pitch: &'a PitchDefinition,
    pub tone: TextTone,
    pub codes: Vec<&'a str>,
}

/// Coach card: one row per pitch listing every code that calls it.
#[derive(Debug, Clone)]
pub struct CoachKey<'a> {
    pub rows: Vec<CoachKeyRow<'a>>,
}

impl<'a> CoachKey<'a> {
    pub fn build(pitches: &'a [PitchDefinition], index: &SignalIndex<'a>) -> Self {
        let rows = pitches
            .iter()
            .map(|pitch| CoachKeyRow {
                pitch,
                tone: contrast_tone(&pitch.color),
                codes: index.codes_for_pitch(&pitch.id),
            })
            .collect();
        Self { rows }
    }
}

pub fn print_footer(config: &WristbandConfig) -> String {
    format!(
        "PitchCaller \u{2022} Generated Wristband \u{2022} {}\" x {}\"",
        config.print_width, config.print_height
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::SignalEntry;
    use crate::pitches::default_pitches;

    #[test]
    fn footer_uses_print_dimensions() {
        let config = WristbandConfig::default();
        assert_eq!(
            print_footer(&config),
            "PitchCaller \u{2022} Generated Wristband \u{2022} 3.75\" x 2.25\""
        );
    }

    #[test]
    fn unknown_pitch_leaves_cell_blank() {
        let pitches = default_pitches();
        let signals = vec![SignalEntry {
            code: "110".into(),
            pitch_id: "gone".into(),
        }];
        let index = SignalIndex::new(&signals, &pitches);
        let sheet = WristbandSheet::build(&WristbandConfig::default(), &index);
        let first = &sheet.blocks[0][0].rows[0].cells[0];
        assert_eq!(first.code, "110");
        assert!(first.pitch.is_none());
        assert!(first.tone().is_none());
    }
}
