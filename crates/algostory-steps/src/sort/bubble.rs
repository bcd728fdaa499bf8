//! Bubble sort.

use std::fmt::Display;

use crate::step::{Action, Bounds, Step};
use crate::trace::Trace;

/// Tuning for [`bubble_sort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BubbleOptions {
    /// Stop after a pass that made no swaps.
    ///
    /// Off by default so the trace always shows the full n(n-1)/2 sweep.
    pub early_exit: bool,
}

impl BubbleOptions {
    /// Options with early exit enabled.
    pub const fn with_early_exit() -> Self {
        Self { early_exit: true }
    }
}

/// Adjacent compare-and-swap passes; the largest remaining value rises to the
/// end of the unsorted prefix on every pass.
///
/// Emits a `Compare` step for every (pass, j) pair and an extra `Swap` step
/// only when the pair was out of order.
pub fn bubble_sort<T>(items: &[T], options: BubbleOptions) -> Trace<Vec<T>>
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
        format!("{n} bubbles wait at the bottom of the ocean"),
    )];

    for pass in 0..n - 1 {
        let mut swapped = false;
        let unsorted_end = n - 1 - pass;

        for j in 0..unsorted_end {
            steps.push(
                Step::new(
                    arr.clone(),
                    Action::Compare,
                    format!("Bubble {} meets bubble {}", arr[j], arr[j + 1]),
                )
                .with_focus([j, j + 1])
                .with_bounds(Bounds::range(0, unsorted_end)),
            );

            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
                steps.push(
                    Step::new(
                        arr.clone(),
                        Action::Swap,
                        format!("Bubble {} floats up past bubble {}", arr[j + 1], arr[j]),
                    )
                    .with_focus([j, j + 1])
                    .with_bounds(Bounds::range(0, unsorted_end)),
                );
            }
        }

        if options.early_exit && !swapped {
            break;
        }
    }

    super::finish(steps, arr, "Every bubble has reached its place")
}
