//! Midnight-spanning shift merging.
//!
//! Overnight shifts come off the clock as two rows: one ending at midnight
//! and a follower starting at 00:00 the next day. Merging rejoins them so
//! the aggregator sees a single shift with the combined hours.

use chrono::Timelike;

use crate::models::NormalizedShift;

/// Merges midnight-spanning shift pairs.
///
/// `shifts` must already be sorted by (employee id, name, start). A shift
/// whose adjusted end crossed into the next date is merged with the
/// immediately following record when that record belongs to the same
/// employee and starts at exactly 00:00: the end extends to the follower's
/// end, the hours sum, and the follower is dropped.
pub fn merge_midnight_pairs(shifts: Vec<NormalizedShift>) -> Vec<NormalizedShift> {
    let mut merged = Vec::with_capacity(shifts.len());
    let mut iter = shifts.into_iter().peekable();

    while let Some(mut shift) = iter.next() {
        let crossed_midnight = shift.end.date() > shift.start.date();
        if crossed_midnight {
            let follower_matches = iter.peek().is_some_and(|next| {
                next.employee_id == shift.employee_id
                    && next.first_name == shift.first_name
                    && next.last_name == shift.last_name
                    && next.start.time().hour() == 0
                    && next.start.time().minute() == 0
            });
            if follower_matches {
                if let Some(follower) = iter.next() {
                    shift.end = follower.end;
                    shift.working_hours += follower.working_hours;
                }
            }
        }
        merged.push(shift);
    }

    merged
}
