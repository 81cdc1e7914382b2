use chrono::FixedOffset;

use super::event::Event;

/// Sort events in place so start instants are non-decreasing. All-day
/// events sort as midnight in the given offset. Not a stable sort; events
/// with equal start instants may appear in any order.
pub fn sort_by_start(events: &mut [Event], offset: FixedOffset) {
    if events.len() < 2 {
        return;
    }
    let end = events.len() - 1;
    quicksort(events, 0, end, &|event| event.start_instant(offset));
}

/// In-place quicksort over the inclusive range [start, end], first element
/// as pivot. Worst case O(N^2) on pre-sorted input, which is fine for the
/// few dozen events an agenda ever holds.
fn quicksort<T, K, F>(items: &mut [T], start: usize, end: usize, key: &F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    if start >= end {
        return;
    }

    let pivot = partition(items, start, end, key);
    if pivot > start {
        quicksort(items, start, pivot - 1, key);
    }
    if pivot < end {
        quicksort(items, pivot + 1, end, key);
    }
}

/// Partition [start, end] around the key of its first element. The left
/// cursor walks right past keys <= pivot, the right cursor walks left past
/// keys >= pivot; once they cross, the pivot lands at the right cursor.
fn partition<T, K, F>(items: &mut [T], start: usize, end: usize, key: &F) -> usize
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let pivot = key(&items[start]);
    let mut left = start + 1;
    let mut right = end;

    loop {
        while left <= end && key(&items[left]) <= pivot {
            left += 1;
        }
        while right >= left && key(&items[right]) >= pivot {
            right -= 1;
        }
        if right < left {
            break;
        }
        items.swap(left, right);
    }

    items.swap(start, right);
    right
}
