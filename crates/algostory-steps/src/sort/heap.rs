//! Heap sort on an implicit binary max-heap.

use std::fmt::Display;

use crate::step::{Action, Bounds, Step};
use crate::trace::Trace;

/// Build a max-heap bottom-up, then repeatedly move the root to the end of
/// the shrinking heap.
///
/// `Heapify` steps record every sift-down swap plus the moment the heap is
/// complete; `Extract` steps record each root-to-tail move. While the heap is
/// active, `bounds` covers `0..=heap_size-1`.
pub fn heap_sort<T>(items: &[T]) -> Trace<Vec<T>>
where
    T: Ord + Clone + Display,
{
    if items.is_empty() {
        return super::empty();
    }

    let n = items.len();
    let mut arr = items.to_vec();
    let mut steps = vec![Step::new(
        arr.clone(),
        Action::Start,
        format!("The climber studies a mountain of {n} stones"),
    )
    .with_bounds(Bounds::range(0, n - 1))];

    for parent in (0..n / 2).rev() {
        steps.extend(sift_down(&mut arr, n, parent));
    }
    steps.push(
        Step::new(
            arr.clone(),
            Action::Heapify,
            format!("The mountain is formed: {} sits on the peak", arr[0]),
        )
        .with_focus([0])
        .with_bounds(Bounds::range(0, n - 1)),
    );

    for end in (1..n).rev() {
        arr.swap(0, end);
        steps.push(
            Step::new(
                arr.clone(),
                Action::Extract,
                format!("Peak {} moves to its final position {}", arr[end], end + 1),
            )
            .with_focus([0, end])
            .with_bounds(Bounds::range(0, end - 1)),
        );
        steps.extend(sift_down(&mut arr, end, 0));
    }

    super::finish(steps, arr, "The whole mountain is conquered")
}

/// Sift `arr[root]` down within the first `heap_size` elements.
fn sift_down<T>(arr: &mut [T], heap_size: usize, root: usize) -> Vec<Step<Vec<T>>>
where
    T: Ord + Clone + Display,
{
    let left = 2 * root + 1;
    let right = 2 * root + 2;
    let mut largest = root;

    if left < heap_size && arr[left] > arr[largest] {
        largest = left;
    }
    if right < heap_size && arr[right] > arr[largest] {
        largest = right;
    }
    if largest == root {
        return Vec::new();
    }

    arr.swap(root, largest);
    let mut steps = vec![Step::new(
        arr.to_vec(),
        Action::Heapify,
        format!(
            "Stone {} climbs above stone {} (positions {} and {})",
            arr[root],
            arr[largest],
            root + 1,
            largest + 1
        ),
    )
    .with_focus([root, largest])
    .with_bounds(Bounds::range(0, heap_size - 1))];

    steps.extend(sift_down(arr, heap_size, largest));
    steps
}
