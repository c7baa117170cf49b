use crate::color::Rgb;
use crate::error::{PcResult, PitchCallerError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumString};

pub const MAX_ABBREVIATION_LEN: usize = 3;

/// Colors handed out to new pitches, cycling by position.
pub const PALETTE: [&str; 8] = [
    "#cd1c18", // Red
    "#FF8000", // Orange
    "#ffde21", // Yellow
    "#008000", // Green
    "#0077b6", // Blue
    "#c41dc2", // Purple
    "#FFA6C9", // Pink
    "#64748b", // Slate
];

#[derive(
    Debug, Clone, Copy, Default, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum PitchKind {
    #[default]
    #[strum(serialize = "FB")]
    #[serde(rename = "FB")]
    Fastball,
    #[strum(serialize = "CH")]
    #[serde(rename = "CH")]
    Changeup,
    #[strum(serialize = "CU")]
    #[serde(rename = "CU")]
    Curveball,
    #[strum(serialize = "SC")]
    #[serde(rename = "SC")]
    Screwball,
    #[strum(serialize = "RI")]
    #[serde(rename = "RI")]
    Riseball,
    #[strum(serialize = "DR")]
    #[serde(rename = "DR")]
    Dropball,
    #[strum(serialize = "SL")]
    #[serde(rename = "SL")]
    Slider,
    #[strum(serialize = "KN")]
    #[serde(rename = "KN")]
    Knuckle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchDefinition {
    pub id: String,
    #[serde(default, rename = "type")]
    pub kind: PitchKind,
    pub name: String,
    pub color: String,
    pub abbreviation: String,
    #[serde(default)]
    pub percentage: f64,
}

impl PitchDefinition {
    pub fn new(
        id: &str,
        kind: PitchKind,
        name: &str,
        color: &str,
        abbreviation: &str,
        percentage: f64,
    ) -> Self {
        Self {
            id: id.to_string(),
            kind,
            name: name.to_string(),
            color: color.to_string(),
            abbreviation: abbreviation.to_string(),
            percentage,
        }
    }

    /// Checks a single definition; set-level checks live in [`validate_pitch_set`].
    pub fn validate(&self) -> PcResult<()> {
        if self.id.trim().is_empty() {
            return Err(PitchCallerError::Validation(
                "Pitch id must not be empty".to_string(),
            ));
        }
        if !self.percentage.is_finite() || self.percentage < 0.0 {
            return Err(PitchCallerError::Validation(format!(
                "Pitch '{}' has invalid percentage {}",
                self.name, self.percentage
            )));
        }
        if self.abbreviation.chars().count() > MAX_ABBREVIATION_LEN {
            return Err(PitchCallerError::Validation(format!(
                "Abbreviation '{}' is longer than {} characters",
                self.abbreviation, MAX_ABBREVIATION_LEN
            )));
        }
        Rgb::from_hex(&self.color)?;
        Ok(())
    }

    /// Abbreviation as printed on the wristband.
    pub fn label(&self) -> String {
        self.abbreviation.to_uppercase()
    }
}

/// The stock softball pitch mix.
pub fn default_pitches() -> Vec<PitchDefinition> {
    vec![
        PitchDefinition::new("p1", PitchKind::Fastball, "Fastball", "#cd1c18", "FB", 35.0),
        PitchDefinition::new("p2", PitchKind::Changeup, "Changeup", "#FF8000", "CH", 20.0),
        PitchDefinition::new("p3", PitchKind::Curveball, "Curveball", "#ffde21", "CU", 15.0),
        PitchDefinition::new("p4", PitchKind::Riseball, "Riseball", "#008000", "RI", 10.0),
        PitchDefinition::new("p5", PitchKind::Dropball, "Dropball", "#0077b6", "DR", 10.0),
        PitchDefinition::new("p6", PitchKind::Screwball, "Screwball", "#c41dc2", "SC", 10.0),
    ]
}

/// Blank pitch appended by "add pitch": 0%, palette color by position.
pub fn new_pitch(existing: &[PitchDefinition]) -> PitchDefinition {
    let taken: HashSet<&str> = existing.iter().map(|p| p.id.as_str()).collect();
    let mut n = existing.len() + 1;
    while taken.contains(format!("p-{}", n).as_str()) {
        n += 1;
    }

    PitchDefinition::new(
        &format!("p-{}", n),
        PitchKind::Fastball,
        "New Pitch",
        PALETTE[existing.len() % PALETTE.len()],
        "NP",
        0.0,
    )
}

pub fn validate_pitch_set(pitches: &[PitchDefinition]) -> PcResult<()> {
    let mut seen = HashSet::new();
    for p in pitches {
        p.validate()?;
        if !seen.insert(p.id.as_str()) {
            return Err(PitchCallerError::Validation(format!(
                "Duplicate pitch id '{}'",
                p.id
            )));
        }
    }
    Ok(())
}

pub fn load_from_file<P: AsRef<Path>>(path: P) -> PcResult<Vec<PitchDefinition>> {
    let content = fs::read_to_string(path)?;
    let pitches: Vec<PitchDefinition> = serde_json::from_str(&content)?;
    validate_pitch_set(&pitches)?;
    Ok(pitches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn default_set_is_valid_and_balanced() {
        let pitches = default_pitches();
        validate_pitch_set(&pitches).unwrap();
        let total: f64 = pitches.iter().map(|p| p.percentage).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn kind_codes_round_trip_through_strum() {
        assert_eq!(PitchKind::from_str("DR").unwrap(), PitchKind::Dropball);
        assert_eq!(PitchKind::Knuckle.to_string(), "KN");
    }

    #[test]
    fn new_pitch_skips_taken_ids() {
        let mut pitches = default_pitches();
        pitches.push(PitchDefinition::new(
            "p-7",
            PitchKind::Slider,
            "Slider",
            "#64748b",
            "SL",
            0.0,
        ));
        let fresh = new_pitch(&pitches);
        assert_eq!(fresh.id, "p-8");
        assert_eq!(fresh.color, PALETTE[7]);
        assert_eq!(fresh.percentage, 0.0);
    }
}
