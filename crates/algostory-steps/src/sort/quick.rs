//! Quick sort with Lomuto partitioning.

use std::fmt::Display;

use crate::step::{Action, Bounds, Step};
use crate::trace::Trace;

/// Partition around the last element of each range, then recurse on both
/// sides of the placed pivot.
///
/// Per partition: one `Partition` step when the pivot is chosen, one `Swap`
/// step per swap that moves a smaller element left (self-swaps included),
/// and one `Partition` step when the pivot lands in its final position.
pub fn quick_sort<T>(items: &[T]) -> Trace<Vec<T>>
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
        format!("The commander surveys {} troops", arr.len()),
    )
    .with_bounds(Bounds::range(0, last))];
    steps.extend(sort_range(&mut arr, 0, last));

    super::finish(steps, arr, "Every troop stands in formation")
}

/// Sort `arr[low..=high]` and return the steps taken.
fn sort_range<T>(arr: &mut [T], low: usize, high: usize) -> Vec<Step<Vec<T>>>
where
    T: Ord + Clone + Display,
{
    if low >= high {
        return Vec::new();
    }

    let (mut steps, pivot) = partition(arr, low, high);
    if pivot > low {
        steps.extend(sort_range(arr, low, pivot - 1));
    }
    steps.extend(sort_range(arr, pivot + 1, high));
    steps
}

/// Lomuto partition of `arr[low..=high]`; returns the steps and the pivot's
/// final index.
fn partition<T>(arr: &mut [T], low: usize, high: usize) -> (Vec<Step<Vec<T>>>, usize)
where
    T: Ord + Clone + Display,
{
    let pivot = arr[high].clone();
    let mut steps = vec![Step::new(
        arr.to_vec(),
        Action::Partition,
        format!("Position {} (value {pivot}) becomes the pivot", high + 1),
    )
    .with_focus([high])
    .with_bounds(Bounds::pivoted(low, high, high))];

    let mut boundary = low;
    for j in low..high {
        if arr[j] < pivot {
            arr.swap(boundary, j);
            steps.push(
                Step::new(
                    arr.to_vec(),
                    Action::Swap,
                    format!(
                        "Swap positions {} and {}: smaller troops move left",
                        boundary + 1,
                        j + 1
                    ),
                )
                .with_focus([boundary, j])
                .with_bounds(Bounds::pivoted(low, high, high)),
            );
            boundary += 1;
        }
    }

    arr.swap(boundary, high);
    steps.push(
        Step::new(
            arr.to_vec(),
            Action::Partition,
            format!("Pivot {pivot} settles at position {}", boundary + 1),
        )
        .with_focus([boundary])
        .with_bounds(Bounds::pivoted(low, high, boundary)),
    );

    (steps, boundary)
}
