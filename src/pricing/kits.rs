//! Least-cost kit selection.
//!
//! Kits come in fixed lengths with a fixed price and can be bought in any
//! quantity. Covering a footage at minimum cost is an unbounded knapsack over
//! reachable lengths: `best[len]` holds the cheapest way to reach exactly
//! `len` feet for every `len` short of the footage. A cover ends with the
//! kit that first crosses the footage, so finished covers are kept apart,
//! keyed by their exact total length. Memory grows with footage times the
//! number of kits, never with kit length.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::models::KitCover;

/// Cheapest known way to reach a length: (cost, previous length, kit used)
type Step = (Decimal, u64, u32);

/// Find the cheapest multiset of kits whose total length is at least `footage`.
///
/// Among lengths with equal minimum cost the shortest wins. Zero-length kits
/// are ignored. With `footage == 0` or no usable kits the cover is empty.
pub fn cheapest_cover(footage: u32, kit_costs: &BTreeMap<u32, Decimal>) -> KitCover {
    if footage == 0 {
        return KitCover::default();
    }

    let kits: Vec<(u32, Decimal)> = kit_costs
        .iter()
        .filter(|(len, _)| **len > 0)
        .map(|(len, cost)| (*len, *cost))
        .collect();

    if kits.is_empty() {
        return KitCover::default();
    }

    let target = u64::from(footage);
    let mut best: Vec<Option<Step>> = vec![None; footage as usize];
    best[0] = Some((Decimal::ZERO, 0, 0));
    let mut finished: BTreeMap<u64, Option<Step>> = BTreeMap::new();

    // Every edge moves strictly forward, so one ascending pass settles the table.
    for len in 0..target {
        let Some((base, _, _)) = best[len as usize] else {
            continue;
        };
        for &(kit, price) in &kits {
            let Some(candidate) = base.checked_add(price) else {
                continue;
            };
            let next = len + u64::from(kit);
            let slot = if next < target {
                &mut best[next as usize]
            } else {
                finished.entry(next).or_insert(None)
            };
            if slot.map_or(true, |(current, _, _)| candidate < current) {
                *slot = Some((candidate, len, kit));
            }
        }
    }

    // Ascending keys, strict `<`: the shortest length wins a cost tie.
    let mut chosen: Option<(u64, Step)> = None;
    for (len, step) in &finished {
        let Some(step) = step else {
            continue;
        };
        if chosen.map_or(true, |(_, (lowest, _, _))| step.0 < lowest) {
            chosen = Some((*len, *step));
        }
    }

    let Some((end, (cost, mut at, last_kit))) = chosen else {
        return KitCover::default();
    };

    let mut counts: BTreeMap<u32, u32> = BTreeMap::from([(last_kit, 1)]);
    while at > 0 {
        let Some((_, prev, kit)) = best[at as usize] else {
            break;
        };
        *counts.entry(kit).or_insert(0) += 1;
        at = prev;
    }

    KitCover {
        counts,
        total_footage: u32::try_from(end).unwrap_or(u32::MAX),
        cost,
    }
}
