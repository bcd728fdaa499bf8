//! Top-down merge sort.

use std::fmt::Display;

use crate::step::{Action, Bounds, Step};
use crate::trace::Trace;

/// Split in half, sort each half, merge.
///
/// A `Divide` step is emitted before recursing into the halves and a `Merge`
/// step after both return. The merge is stable: on ties the element from the
/// left half goes first.
pub fn merge_sort<T>(items: &[T]) -> Trace<Vec<T>>
where
    T: Ord + Clone + Display,
{
    if items.is_empty() {
        return super::empty();
    }

    let mut arr = items.to_vec();
    let last = arr.len() - 1;

    let mut steps = vec![Step::new(
        arr.clone(),
        Action::Start,
        format!("{} scattered papers wait to be organized", arr.len()),
    )
    .with_bounds(Bounds::range(0, last))];
    steps.extend(divide(&mut arr, 0, last, 0));

    super::finish(steps, arr, "Every paper is in order")
}

/// Sort `arr[left..=right]` and return the steps taken.
fn divide<T>(arr: &mut [T], left: usize, right: usize, depth: usize) -> Vec<Step<Vec<T>>>
where
    T: Ord + Clone + Display,
{
    if left >= right {
        return Vec::new();
    }

    let mid = (left + right) / 2;
    let mut steps = vec![Step::new(
        arr.to_vec(),
        Action::Divide,
        format!(
            "Split positions {}..={} after position {} (depth {})",
            left + 1,
            right + 1,
            mid + 1,
            depth + 1
        ),
    )
    .with_focus(left..=right)
    .with_bounds(Bounds::split(left, right, mid))];

    steps.extend(divide(arr, left, mid, depth + 1));
    steps.extend(divide(arr, mid + 1, right, depth + 1));

    merge(arr, left, mid, right);
    steps.push(
        Step::new(
            arr.to_vec(),
            Action::Merge,
            format!("Merge the sorted piles into positions {}..={}", left + 1, right + 1),
        )
        .with_focus(left..=right)
        .with_bounds(Bounds::split(left, right, mid)),
    );

    steps
}

/// Merge the sorted runs `arr[left..=mid]` and `arr[mid+1..=right]`.
fn merge<T: Ord + Clone>(arr: &mut [T], left: usize, mid: usize, right: usize) {
    let left_run = arr[left..=mid].to_vec();
    let right_run = arr[mid + 1..=right].to_vec();

    let (mut i, mut j) = (0, 0);
    for slot in &mut arr[left..=right] {
        let take_left = match (left_run.get(i), right_run.get(j)) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            _ => false,
        };
        if take_left {
            *slot = left_run[i].clone();
            i += 1;
        } else {
            *slot = right_run[j].clone();
            j += 1;
        }
    }
}
