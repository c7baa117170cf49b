use crate::error::{PcResult, PitchCallerError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::Range;

/// Grid dimensions plus the arithmetic label scheme for each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    pub columns: usize,
    pub rows: usize,
    pub col_start: i64,
    pub col_step: i64,
    pub row_start: i64,
    pub row_step: i64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            columns: 9,
            rows: 6,
            col_start: 10,
            col_step: 10,
            row_start: 1,
            row_step: 1,
        }
    }
}

impl GridSpec {
    /// Saturates for grids that `validate` would reject.
    pub fn total_slots(&self) -> usize {
        self.columns.saturating_mul(self.rows)
    }

    pub fn row_label(&self, r: usize) -> String {
        axis_value(self.row_start, self.row_step, r).to_string()
    }

    pub fn col_label(&self, c: usize) -> String {
        axis_value(self.col_start, self.col_step, c).to_string()
    }

    pub fn row_labels(&self) -> Vec<String> {
        (0..self.rows).map(|r| self.row_label(r)).collect()
    }

    pub fn col_labels(&self) -> Vec<String> {
        (0..self.columns).map(|c| self.col_label(c)).collect()
    }

    /// Row label followed by column label.
    pub fn slot_label(&self, r: usize, c: usize) -> String {
        format!("{}{}", self.row_label(r), self.col_label(c))
    }

    /// Rejects empty grids and label schemes whose concatenations collide.
    pub fn validate(&self) -> PcResult<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(PitchCallerError::Grid(format!(
                "Grid must have at least one row and one column (got {}x{})",
                self.columns, self.rows
            )));
        }
        if self.columns.checked_mul(self.rows).is_none() {
            return Err(PitchCallerError::Grid(format!(
                "Grid of {}x{} cells is too large",
                self.columns, self.rows
            )));
        }
        check_axis("row", self.row_start, self.row_step, self.rows)?;
        check_axis("column", self.col_start, self.col_step, self.columns)?;

        let mut seen: HashMap<String, (usize, usize)> = HashMap::with_capacity(self.total_slots());
        for r in 0..self.rows {
            for c in 0..self.columns {
                let label = self.slot_label(r, c);
                if let Some(&(first_row, first_col)) = seen.get(&label) {
                    return Err(PitchCallerError::DuplicateSlotLabel {
                        label,
                        first_row,
                        first_col,
                        second_row: r,
                        second_col: c,
                    });
                }
                seen.insert(label, (r, c));
            }
        }
        Ok(())
    }
}

/// `start + index * step`, saturating at the i64 bounds.
fn axis_value(start: i64, step: i64, index: usize) -> i64 {
    let index = i64::try_from(index).unwrap_or(i64::MAX);
    start.saturating_add(index.saturating_mul(step))
}

/// Every label on an axis of `len` cells must fit in an i64.
fn check_axis(axis: &str, start: i64, step: i64, len: usize) -> PcResult<()> {
    let last = i64::try_from(len - 1)
        .ok()
        .and_then(|n| n.checked_mul(step))
        .and_then(|offset| start.checked_add(offset));
    match last {
        Some(_) => Ok(()),
        None => Err(PitchCallerError::Grid(format!(
            "{} labels overflow: start {} with step {} over {} cells",
            axis, start, step, len
        ))),
    }
}

/// Slot labels in row-major order: all columns of row 0, then row 1, ...
pub fn label_grid(grid: &GridSpec) -> Vec<String> {
    let mut labels = Vec::with_capacity(grid.total_slots());
    for r in 0..grid.rows {
        for c in 0..grid.columns {
            labels.push(grid.slot_label(r, c));
        }
    }
    labels
}

/// One printed block of the wristband, in row/column index ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub section_row: usize,
    pub section_col: usize,
    pub rows: Range<usize>,
    pub cols: Range<usize>,
}

/// Splits the grid into `section_size` squares, row of blocks by row of blocks.
/// Edge blocks are truncated when the grid is not a multiple of the size.
pub fn sections(grid: &GridSpec, section_size: usize) -> Vec<Vec<Section>> {
    let size = section_size.max(1);
    let block_rows = grid.rows.div_ceil(size);
    let block_cols = grid.columns.div_ceil(size);

    (0..block_rows)
        .map(|sr| {
            (0..block_cols)
                .map(|sc| Section {
                    section_row: sr,
                    section_col: sc,
                    rows: sr * size..(sr + 1).saturating_mul(size).min(grid.rows),
                    cols: sc * size..(sc + 1).saturating_mul(size).min(grid.columns),
                })
                .collect()
        })
        .collect()
}
