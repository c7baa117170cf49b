use crate::config::WristbandConfig;
use crate::distribution::{self, total_share, SignalEntry};
use crate::error::{PcResult, PitchCallerError};
use crate::lookup::SignalIndex;
use crate::pitches::{self, default_pitches, validate_pitch_set, PitchDefinition, MAX_ABBREVIATION_LEN};
use fastrand::Rng;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const GENERATED_NOTICE: &str = "Signal grid generated successfully!";

/// A single field change on one pitch.
#[derive(Debug, Clone, PartialEq)]
pub enum PitchEdit {
    Name(String),
    Color(String),
    Abbreviation(String),
    Percentage(f64),
}

/// Immutable snapshot of everything one wristband session holds.
///
/// Every action returns a new snapshot and leaves `self` untouched, so a
/// failed action simply means the caller keeps the snapshot it had.
#[derive(Debug, Clone)]
pub struct Session {
    config: Arc<WristbandConfig>,
    pitches: Arc<[PitchDefinition]>,
    signals: Arc<[SignalEntry]>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            config: Arc::new(WristbandConfig::default()),
            pitches: default_pitches().into(),
            signals: Arc::from(Vec::new()),
        }
    }
}

impl Session {
    pub fn new(config: WristbandConfig, pitches: Vec<PitchDefinition>) -> PcResult<Self> {
        config.validate()?;
        validate_pitch_set(&pitches)?;
        Ok(Self {
            config: Arc::new(config),
            pitches: pitches.into(),
            signals: Arc::from(Vec::new()),
        })
    }

    pub fn config(&self) -> &WristbandConfig {
        &self.config
    }

    pub fn pitches(&self) -> &[PitchDefinition] {
        &self.pitches
    }

    pub fn signals(&self) -> &[SignalEntry] {
        &self.signals
    }

    pub fn has_signals(&self) -> bool {
        !self.signals.is_empty()
    }

    pub fn total_percentage(&self) -> f64 {
        total_share(&self.pitches)
    }

    pub fn index(&self) -> SignalIndex<'_> {
        SignalIndex::new(&self.signals, &self.pitches)
    }

    /// Fresh assignment for the current config and pitches.
    pub fn generate(&self, rng: &mut Rng) -> PcResult<Self> {
        let signals = distribution::generate(&self.pitches, &self.config.grid, rng)
            .inspect_err(|e| warn!("Generation rejected: {}", e))?;

        info!(
            "{} ({} calls on {}x{})",
            GENERATED_NOTICE,
            signals.len(),
            self.config.grid.columns,
            self.config.grid.rows
        );

        Ok(Self {
            signals: signals.into(),
            ..self.clone()
        })
    }

    /// Clears the assignment; config and pitches are kept.
    pub fn reset(&self) -> Self {
        Self {
            signals: Arc::from(Vec::new()),
            ..self.clone()
        }
    }

    pub fn with_config(&self, config: WristbandConfig) -> PcResult<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            ..self.clone()
        })
    }

    pub fn with_pitches(&self, pitches: Vec<PitchDefinition>) -> PcResult<Self> {
        validate_pitch_set(&pitches)?;
        Ok(Self {
            pitches: pitches.into(),
            ..self.clone()
        })
    }

    pub fn add_pitch(&self) -> Self {
        let mut next = self.pitches.to_vec();
        let fresh = pitches::new_pitch(&next);
        debug!("Adding pitch '{}'", fresh.id);
        next.push(fresh);
        Self {
            pitches: next.into(),
            ..self.clone()
        }
    }

    /// The last remaining pitch cannot be removed.
    pub fn remove_pitch(&self, id: &str) -> PcResult<Self> {
        if self.pitches.len() <= 1 {
            return Err(PitchCallerError::Validation(
                "At least one pitch is required".to_string(),
            ));
        }
        if !self.pitches.iter().any(|p| p.id == id) {
            return Err(unknown_pitch(id));
        }

        let next: Vec<PitchDefinition> =
            self.pitches.iter().filter(|p| p.id != id).cloned().collect();
        Ok(Self {
            pitches: next.into(),
            ..self.clone()
        })
    }

    pub fn update_pitch(&self, id: &str, edit: PitchEdit) -> PcResult<Self> {
        let mut next = self.pitches.to_vec();
        let pitch = next
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| unknown_pitch(id))?;

        match edit {
            PitchEdit::Name(name) => pitch.name = name,
            PitchEdit::Color(color) => pitch.color = color,
            PitchEdit::Abbreviation(abbr) => {
                pitch.abbreviation = abbr.chars().take(MAX_ABBREVIATION_LEN).collect()
            }
            PitchEdit::Percentage(pct) => pitch.percentage = pct,
        }
        pitch.validate()?;

        Ok(Self {
            pitches: next.into(),
            ..self.clone()
        })
    }
}

fn unknown_pitch(id: &str) -> PitchCallerError {
    PitchCallerError::Validation(format!("Unknown pitch id '{}'", id))
}
