//! Sorting traces.
//!
//! All four sorts share the same shape: an optional `Start` step holding the
//! untouched input, the algorithm's own steps, and a `Done(Sorted)` step.
//! Empty input short-circuits to a lone `Done` step.
//!
//! The recursive sorts (merge, quick, heap) build their traces bottom-up:
//! each recursive call returns the steps it produced and the caller appends
//! them in traversal order.

mod bubble;
mod heap;
mod merge;
mod quick;

pub use bubble::{bubble_sort, BubbleOptions};
pub use heap::heap_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;

use crate::step::{Action, Outcome, Step};
use crate::trace::Trace;

/// Append the terminal step to a sort trace.
fn finish<T>(mut steps: Vec<Step<Vec<T>>>, sorted: Vec<T>, description: &str) -> Trace<Vec<T>> {
    let focus = 0..sorted.len();
    steps.push(Step::new(sorted, Action::Done(Outcome::Sorted), description).with_focus(focus));
    Trace::from_generator(steps)
}

/// The lone `Done` step for empty input.
fn empty<T>() -> Trace<Vec<T>> {
    Trace::from_generator(vec![Step::new(
        Vec::new(),
        Action::Done(Outcome::Sorted),
        "Nothing to sort",
    )])
}
