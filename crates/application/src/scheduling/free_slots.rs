//! Free-slot sweep
//!
//! Given the day's busy intervals, computes every gap long enough to hold a
//! meeting. The computation is pure. Busy input may be unsorted,
//! overlapping, duplicated, or reach outside the day window; calendar
//! backends differ in how much of that they clean up, so intervals are
//! clipped on ingest and re-clipped during the sweep.

use chrono::{DateTime, Utc};
use domain::TimeWindow;
use tracing::trace;

/// Minimum slot length offered to callers that don't configure one
pub const DEFAULT_MIN_SLOT_MINUTES: i64 = 60;

/// Compute the ordered free slots of at least `min_slot_minutes` inside
/// `day`
///
/// Guarantees on the output:
/// - slots are pairwise disjoint and strictly ascending by start
/// - every slot is at least `min_slot_minutes` long
/// - every slot lies inside `day`
/// - together with the (merged, clipped) busy intervals the slots cover
///   `day` exactly, minus gaps shorter than the minimum
///
/// An empty busy set yields the whole day as one slot (if long enough); a
/// busy interval covering the day yields no slots. The sweep never fails,
/// and feeding its own output back through changes nothing.
#[must_use]
pub fn compute_free_slots(
    day: &TimeWindow,
    busy: &[TimeWindow],
    min_slot_minutes: i64,
) -> Vec<TimeWindow> {
    let mut intervals: Vec<TimeWindow> = busy
        .iter()
        .filter_map(|interval| interval.clip_to(day))
        .collect();
    // Stable sort: ties keep their original order, which the sweep merges
    // away anyway
    intervals.sort_by_key(TimeWindow::start);

    let mut slots = Vec::new();
    let mut cursor = day.start();

    for interval in &intervals {
        if cursor >= day.end() {
            break;
        }
        // Re-clip inside the sweep as well; tolerates adversarial input
        let Some(interval) = interval.clip_to(day) else {
            continue;
        };
        if interval.end() <= cursor {
            // Fully subsumed by earlier coverage
            trace!(%interval, "Skipping subsumed busy interval");
            continue;
        }
        push_if_long_enough(&mut slots, cursor, interval.start(), min_slot_minutes);
        cursor = cursor.max(interval.end());
    }

    if cursor < day.end() {
        push_if_long_enough(&mut slots, cursor, day.end(), min_slot_minutes);
    }

    // Final validation pass: nothing below the minimum or outside the day
    // survives, whatever the sweep did
    slots.retain(|slot| slot.duration_minutes() >= min_slot_minutes && slot.contained_in(day));
    slots
}

fn push_if_long_enough(
    slots: &mut Vec<TimeWindow>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    min_slot_minutes: i64,
) {
    if (end - start).num_minutes() >= min_slot_minutes {
        if let Ok(slot) = TimeWindow::new(start, end) {
            slots.push(slot);
        }
    }
}
