use crate::error::{PcResult, PitchCallerError};
use crate::grid::GridSpec;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Stock wristband sizes: six square sections in a 3x2 block layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, EnumString, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GridPreset {
    #[default]
    Standard,
    Dense,
    Pro,
}

impl GridPreset {
    pub fn section_size(&self) -> usize {
        match self {
            Self::Standard => 3,
            Self::Dense => 4,
            Self::Pro => 5,
        }
    }

    /// (columns, rows)
    pub fn dimensions(&self) -> (usize, usize) {
        let s = self.section_size();
        (s * 3, s * 2)
    }

    pub fn description(&self) -> String {
        let s = self.section_size();
        let (cols, rows) = self.dimensions();
        let name = match self {
            Self::Standard => "Standard",
            Self::Dense => "Dense",
            Self::Pro => "Pro",
        };
        format!("{} ({}x{} Sections - {} calls)", name, s, s, cols * rows)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WristbandConfig {
    pub title: String,
    pub team_name: String,
    pub grid: GridSpec,
    pub section_size: usize,
    pub font_size: FontSize,
    /// Inches.
    pub print_width: f64,
    pub print_height: f64,
    pub coach_print_width: f64,
    pub coach_print_height: f64,
}

impl Default for WristbandConfig {
    fn default() -> Self {
        let preset = GridPreset::default();
        let (columns, rows) = preset.dimensions();
        Self {
            title: "Game Day".to_string(),
            team_name: "SOFTBALL".to_string(),
            grid: GridSpec {
                columns,
                rows,
                ..GridSpec::default()
            },
            section_size: preset.section_size(),
            font_size: FontSize::default(),
            print_width: 3.75,
            print_height: 2.25,
            coach_print_width: 6.0,
            coach_print_height: 4.0,
        }
    }
}

impl WristbandConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PcResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Switches grid size and section size; axis label schemes are kept.
    pub fn with_preset(mut self, preset: GridPreset) -> Self {
        let (columns, rows) = preset.dimensions();
        self.grid.columns = columns;
        self.grid.rows = rows;
        self.section_size = preset.section_size();
        self
    }

    pub fn validate(&self) -> PcResult<()> {
        self.grid.validate()?;
        if self.section_size == 0 {
            return Err(PitchCallerError::Validation(
                "Section size must be at least 1".to_string(),
            ));
        }
        let dims = [
            ("print_width", self.print_width),
            ("print_height", self.print_height),
            ("coach_print_width", self.coach_print_width),
            ("coach_print_height", self.coach_print_height),
        ];
        for (name, value) in dims {
            if !value.is_finite() || value <= 0.0 {
                return Err(PitchCallerError::Validation(format!(
                    "{} must be a positive number of inches (got {})",
                    name, value
                )));
            }
        }
        Ok(())
    }

    pub fn apply_overrides(&mut self, o: &ConfigOverrides) {
        if let Some(preset) = o.preset {
            *self = self.clone().with_preset(preset);
        }
        if let Some(ref v) = o.title {
            self.title = v.clone();
        }
        if let Some(ref v) = o.team_name {
            self.team_name = v.clone();
        }
        if let Some(v) = o.columns {
            self.grid.columns = v;
        }
        if let Some(v) = o.rows {
            self.grid.rows = v;
        }
        if let Some(v) = o.col_start {
            self.grid.col_start = v;
        }
        if let Some(v) = o.col_step {
            self.grid.col_step = v;
        }
        if let Some(v) = o.row_start {
            self.grid.row_start = v;
        }
        if let Some(v) = o.row_step {
            self.grid.row_step = v;
        }
        if let Some(v) = o.section_size {
            self.section_size = v;
        }
        if let Some(v) = o.print_width {
            self.print_width = v;
        }
        if let Some(v) = o.print_height {
            self.print_height = v;
        }
    }
}

/// Command-line overrides layered on top of the file (or default) config.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Grid preset: standard, dense or pro
    #[arg(long)]
    pub preset: Option<GridPreset>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(short = 't', long)]
    pub team_name: Option<String>,
    #[arg(long)]
    pub columns: Option<usize>,
    #[arg(long)]
    pub rows: Option<usize>,
    #[arg(long, allow_negative_numbers = true)]
    pub col_start: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    pub col_step: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    pub row_start: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    pub row_step: Option<i64>,
    #[arg(long)]
    pub section_size: Option<usize>,
    #[arg(long)]
    pub print_width: Option<f64>,
    #[arg(long)]
    pub print_height: Option<f64>,
}
