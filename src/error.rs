use thiserror::Error;

#[derive(Error, Debug)]
pub enum PitchCallerError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    /// Pitch percentages do not add up to 100 (within tolerance).
    #[error("Percentages must equal 100%. Current: {total}%")]
    UnbalancedShares { total: f64 },

    /// Two grid cells concatenate to the same slot label.
    #[error("Slot label '{label}' is produced by both row {first_row}/col {first_col} and row {second_row}/col {second_col}")]
    DuplicateSlotLabel {
        label: String,
        first_row: usize,
        first_col: usize,
        second_row: usize,
        second_col: usize,
    },

    #[error("Grid Error: {0}")]
    Grid(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Failed to generate signals: {0}")]
    Generation(String),
}

pub type PcResult<T> = Result<T, PitchCallerError>;
