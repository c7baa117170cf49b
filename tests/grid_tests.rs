use pitchcaller::error::PitchCallerError;
use pitchcaller::grid::{label_grid, sections, GridSpec};
use rstest::rstest;

fn grid(columns: usize, rows: usize) -> GridSpec {
    GridSpec {
        columns,
        rows,
        ..GridSpec::default()
    }
}

#[test]
fn test_labels_are_row_major_row_first() {
    let spec = GridSpec {
        columns: 2,
        rows: 2,
        col_start: 10,
        col_step: 10,
        row_start: 1,
        row_step: 1,
    };
    assert_eq!(label_grid(&spec), vec!["110", "120", "210", "220"]);
}

#[test]
fn test_axis_labels_follow_start_and_step() {
    let spec = GridSpec {
        columns: 3,
        rows: 3,
        col_start: 5,
        col_step: 5,
        row_start: 2,
        row_step: 2,
    };
    assert_eq!(spec.col_labels(), vec!["5", "10", "15"]);
    assert_eq!(spec.row_labels(), vec!["2", "4", "6"]);
    assert_eq!(spec.slot_label(2, 1), "610");
}

#[test]
fn test_single_cell_grid() {
    assert_eq!(label_grid(&grid(1, 1)), vec!["110"]);
}

#[test]
fn test_collision_is_reported_with_both_cells() {
    // "1" + "11" and "11" + "1" both read "111".
    let spec = GridSpec {
        columns: 11,
        rows: 11,
        col_start: 1,
        col_step: 1,
        row_start: 1,
        row_step: 1,
    };
    match spec.validate() {
        Err(PitchCallerError::DuplicateSlotLabel {
            label,
            first_row,
            first_col,
            second_row,
            second_col,
        }) => {
            assert_eq!(label, "111");
            assert_eq!((first_row, first_col), (0, 10));
            assert_eq!((second_row, second_col), (10, 0));
        }
        other => panic!("Expected a label collision, got {:?}", other),
    }
}

#[rstest]
#[case(0, 6)]
#[case(9, 0)]
fn test_empty_grid_is_rejected(#[case] columns: usize, #[case] rows: usize) {
    assert!(matches!(
        grid(columns, rows).validate(),
        Err(PitchCallerError::Grid(_))
    ));
}

#[rstest]
#[case(GridSpec { columns: 2, rows: 1, col_start: i64::MAX, col_step: 1, ..GridSpec::default() })]
#[case(GridSpec { columns: 3, rows: 1, col_start: 0, col_step: i64::MAX, ..GridSpec::default() })]
#[case(GridSpec { columns: 1, rows: 2, row_start: i64::MIN, row_step: -1, ..GridSpec::default() })]
#[case(GridSpec { columns: usize::MAX, rows: 2, ..GridSpec::default() })]
fn test_overflowing_grid_is_rejected(#[case] spec: GridSpec) {
    assert!(matches!(spec.validate(), Err(PitchCallerError::Grid(_))));
}

#[test]
fn test_extreme_but_representable_labels() {
    let spec = GridSpec {
        columns: 1,
        rows: 1,
        col_start: i64::MAX,
        col_step: 1,
        ..GridSpec::default()
    };
    assert!(spec.validate().is_ok());
    assert_eq!(spec.col_label(0), i64::MAX.to_string());
}

// --- SECTIONS ---
#[rstest]
#[case(9, 6, 3, 2, 3)] // Standard
#[case(12, 8, 4, 2, 3)] // Dense
#[case(15, 10, 5, 2, 3)] // Pro
#[case(7, 5, 3, 2, 3)] // ragged edges
#[case(2, 2, 5, 1, 1)] // smaller than one section
fn test_section_block_counts(
    #[case] columns: usize,
    #[case] rows: usize,
    #[case] size: usize,
    #[case] block_rows: usize,
    #[case] block_cols: usize,
) {
    let blocks = sections(&grid(columns, rows), size);
    assert_eq!(blocks.len(), block_rows);
    assert!(blocks.iter().all(|row| row.len() == block_cols));
}

#[test]
fn test_sections_partition_every_cell_once() {
    let spec = grid(7, 5);
    let mut seen = vec![0u8; spec.total_slots()];
    for block_row in sections(&spec, 3) {
        for section in block_row {
            for r in section.rows.clone() {
                for c in section.cols.clone() {
                    seen[r * spec.columns + c] += 1;
                }
            }
        }
    }
    assert!(seen.iter().all(|&n| n == 1));
}

#[test]
fn test_ragged_section_is_truncated() {
    let blocks = sections(&grid(7, 5), 3);
    let corner = &blocks[1][2];
    assert_eq!(corner.rows, 3..5);
    assert_eq!(corner.cols, 6..7);
}
