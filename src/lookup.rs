use crate::distribution::SignalEntry;
use crate::pitches::PitchDefinition;
use std::collections::HashMap;

/// Read-side index over one assignment, shared by both renderers.
///
/// Label collisions are rejected by `GridSpec::validate` before generation;
/// if an assignment built elsewhere still carries duplicates, the entry that
/// comes later wins here.
pub struct SignalIndex<'a> {
    pitches: &'a [PitchDefinition],
    by_code: HashMap<&'a str, &'a str>,
    by_id: HashMap<&'a str, usize>,
    signals: &'a [SignalEntry],
}

impl<'a> SignalIndex<'a> {
    pub fn new(signals: &'a [SignalEntry], pitches: &'a [PitchDefinition]) -> Self {
        let by_code = signals
            .iter()
            .map(|s| (s.code.as_str(), s.pitch_id.as_str()))
            .collect();
        let by_id = pitches
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.as_str(), i))
            .collect();

        Self {
            pitches,
            by_code,
            by_id,
            signals,
        }
    }

    pub fn pitch(&self, id: &str) -> Option<&'a PitchDefinition> {
        self.by_id.get(id).map(|&i| &self.pitches[i])
    }

    /// Pitch called by a slot label, if the slot is assigned to a known pitch.
    pub fn pitch_for_code(&self, code: &str) -> Option<&'a PitchDefinition> {
        self.by_code.get(code).and_then(|id| self.pitch(id))
    }

    /// All codes calling `pitch_id`, sorted as strings.
    pub fn codes_for_pitch(&self, pitch_id: &str) -> Vec<&'a str> {
        let mut codes: Vec<&str> = self
            .signals
            .iter()
            .filter(|s| s.pitch_id == pitch_id)
            .map(|s| s.code.as_str())
            .collect();
        codes.sort_unstable();
        codes
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}
