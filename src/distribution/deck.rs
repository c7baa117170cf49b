use super::apportion::SlotAllocation;
use fastrand::Rng;

/// Each pitch id repeated by its count, in allocation order.
pub fn build_deck(allocations: &[SlotAllocation]) -> Vec<String> {
    let size = allocations.iter().map(|a| a.count).sum();
    let mut deck = Vec::with_capacity(size);
    for a in allocations {
        deck.extend(std::iter::repeat(a.pitch_id.clone()).take(a.count));
    }
    deck
}

/// Fisher–Yates shuffle in place.
pub fn shuffle<T>(deck: &mut [T], rng: &mut Rng) {
    for i in (1..deck.len()).rev() {
        let j = rng.usize(0..=i);
        deck.swap(i, j);
    }
}
