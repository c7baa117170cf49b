use crate::pitches::PitchDefinition;
use serde::Serialize;

/// Allowed deviation of the percentage total from 100.
pub const SHARE_TOLERANCE: f64 = 0.1;

/// Sum of all percentages. Non-finite entries count as zero.
pub fn total_share(pitches: &[PitchDefinition]) -> f64 {
    pitches
        .iter()
        .map(|p| sanitize(p.percentage))
        .sum()
}

/// True iff the percentages add up to 100 within [`SHARE_TOLERANCE`].
pub fn validate_shares(pitches: &[PitchDefinition]) -> bool {
    (total_share(pitches) - 100.0).abs() <= SHARE_TOLERANCE
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotAllocation {
    pub pitch_id: String,
    /// `total_slots * percentage / 100` before rounding.
    pub exact: f64,
    pub count: usize,
}

/// Per-pitch slot counts for `total_slots`, in input order.
pub fn allocate_counts(pitches: &[PitchDefinition], total_slots: usize) -> Vec<SlotAllocation> {
    let shares: Vec<f64> = pitches.iter().map(|p| p.percentage).collect();
    let counts = apportion(&shares, total_slots);

    pitches
        .iter()
        .zip(counts)
        .map(|(p, count)| SlotAllocation {
            pitch_id: p.id.clone(),
            exact: exact_share(total_slots, p.percentage),
            count,
        })
        .collect()
}

struct Quota {
    count: usize,
    remainder: f64,
}

/// Largest remainder (Hare quota) apportionment of `total_slots` over
/// percentage `shares`.
///
/// Each share gets the floor of its exact quota; the leftover units go to the
/// largest fractional remainders, ties resolved by input position. The result
/// always sums to `total_slots` as long as at least one share exists. A share
/// too small to survive rounding gets zero slots.
pub fn apportion(shares: &[f64], total_slots: usize) -> Vec<usize> {
    let mut quotas: Vec<Quota> = shares
        .iter()
        .map(|&share| {
            let exact = exact_share(total_slots, share);
            let floor = exact.floor();
            Quota {
                count: floor as usize,
                remainder: exact - floor,
            }
        })
        .collect();

    if quotas.is_empty() {
        return Vec::new();
    }

    // Stable sort: equal remainders keep input order.
    let mut order: Vec<usize> = (0..quotas.len()).collect();
    order.sort_by(|&a, &b| quotas[b].remainder.total_cmp(&quotas[a].remainder));

    let assigned: usize = quotas.iter().map(|q| q.count).sum();

    if assigned < total_slots {
        // Below 100% (inside tolerance) the deficit can exceed the pitch count.
        let deficit = total_slots - assigned;
        for k in 0..deficit {
            quotas[order[k % order.len()]].count += 1;
        }
    } else if assigned > total_slots {
        // Above 100%: take back from the smallest remainders first.
        let mut surplus = assigned - total_slots;
        while surplus > 0 {
            for &i in order.iter().rev() {
                if surplus == 0 {
                    break;
                }
                if quotas[i].count > 0 {
                    quotas[i].count -= 1;
                    surplus -= 1;
                }
            }
        }
    }

    quotas.into_iter().map(|q| q.count).collect()
}

fn exact_share(total_slots: usize, percentage: f64) -> f64 {
    total_slots as f64 * sanitize(percentage) / 100.0
}

fn sanitize(percentage: f64) -> f64 {
    if percentage.is_finite() {
        percentage.max(0.0)
    } else {
        0.0
    }
}
