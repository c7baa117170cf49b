pub mod apportion;
pub mod deck;

pub use self::apportion::{allocate_counts, apportion, total_share, validate_shares, SlotAllocation};
pub use self::deck::{build_deck, shuffle};

use crate::error::{PcResult, PitchCallerError};
use crate::grid::{label_grid, GridSpec};
use crate::pitches::PitchDefinition;
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One grid cell and the pitch called by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalEntry {
    pub code: String,
    pub pitch_id: String,
}

/// Builds a complete, shuffled assignment of pitches to grid slots.
///
/// Fails before doing any work if the percentages are off by more than the
/// tolerance or the grid labels are not unique. On success the result has
/// exactly `grid.total_slots()` entries in row-major label order.
pub fn generate(
    pitches: &[PitchDefinition],
    grid: &GridSpec,
    rng: &mut Rng,
) -> PcResult<Vec<SignalEntry>> {
    if !validate_shares(pitches) {
        return Err(PitchCallerError::UnbalancedShares {
            total: total_share(pitches),
        });
    }
    grid.validate()?;

    let total_slots = grid.total_slots();
    let allocations = allocate_counts(pitches, total_slots);
    debug!(
        "Allocated {} slots: {:?}",
        total_slots,
        allocations
            .iter()
            .map(|a| (a.pitch_id.as_str(), a.count))
            .collect::<Vec<_>>()
    );

    let mut deck = build_deck(&allocations);
    shuffle(&mut deck, rng);

    let labels = label_grid(grid);
    if deck.len() != labels.len() {
        return Err(PitchCallerError::Generation(format!(
            "deck holds {} calls for {} slots",
            deck.len(),
            labels.len()
        )));
    }

    Ok(labels
        .into_iter()
        .zip(deck)
        .map(|(code, pitch_id)| SignalEntry { code, pitch_id })
        .collect())
}
