//! In-place selection over a private work buffer.
//!
//! The partition step chooses the midpoint element of the live range as the
//! pivot, swaps it to the front and splits the range into three bands:
//! less than, equal to, and greater than the pivot. Positions in the equal
//! band are final. Only the band that still holds an unresolved target is
//! kept, so at most one range is live at a time and the loop never recurses.
//!
//! The equal band always contains the pivot itself, so every round shrinks
//! the live range. Inputs made of a single repeated value resolve in one
//! round.

use std::cmp::Ordering;

use crate::ordered::total_order;

/// Reorders `buffer` so that every index in `first..=last` holds the element
/// a full ascending sort would place there.
///
/// Targets must be adjacent (`last - first <= 1`) and in bounds.
pub(crate) fn select<T: PartialOrd + Clone>(buffer: &mut [T], mut first: usize, mut last: usize) {
    debug_assert!(first <= last && last < buffer.len());
    debug_assert!(last - first <= 1);

    let mut low = 0;
    let mut high = buffer.len();
    let mut rounds = 0_usize;

    while high - low > 1 {
        rounds += 1;
        let (less_end, greater_start) = partition(&mut buffer[low..high]);
        let less_end = low + less_end;
        let greater_start = low + greater_start;

        if first < less_end {
            high = less_end;
            last = last.min(less_end - 1);
        } else if last >= greater_start {
            low = greater_start;
            first = first.max(greater_start);
        } else {
            break;
        }
    }

    tracing::trace!(length = buffer.len(), rounds, "selection finished");
}

/// Three-way partition of `range` around its midpoint element.
///
/// Returns `(less_end, greater_start)`: `range[..less_end]` is less than the
/// pivot, `range[less_end..greater_start]` is equal to it and
/// `range[greater_start..]` is greater.
fn partition<T: PartialOrd + Clone>(range: &mut [T]) -> (usize, usize) {
    range.swap(0, range.len() / 2);
    let pivot = range[0].clone();

    let mut less_end = 0;
    let mut index = 0;
    let mut greater_start = range.len();

    while index < greater_start {
        match total_order(&range[index], &pivot) {
            Ordering::Less => {
                range.swap(less_end, index);
                less_end += 1;
                index += 1;
            }
            Ordering::Greater => {
                greater_start -= 1;
                range.swap(index, greater_start);
            }
            Ordering::Equal => index += 1,
        }
    }

    (less_end, greater_start)
}
