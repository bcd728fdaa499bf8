//! Algostory Step Traces
//!
//! Every walkthrough in Algostory is replayed from a trace computed up front:
//! an ordered, immutable list of [`Step`]s, each holding its own copy of the
//! working data plus the action that produced it.
//!
//! # Generators
//!
//! - **Searching**: [`linear_search`], [`binary_search`]
//! - **Sorting**: [`bubble_sort`], [`merge_sort`], [`quick_sort`], [`heap_sort`]
//! - **Graphs**: [`shortest_path`] over an undirected weighted [`Graph`]
//!
//! Generators are pure. They borrow their input, never touch a clock or an
//! RNG, and always return a [`Trace`] that ends in exactly one
//! [`Action::Done`] step.
//!
//! # Example
//!
//! ```
//! use algostory_steps::{bubble_sort, BubbleOptions, Outcome};
//!
//! let trace = bubble_sort(&[3, 1, 2], BubbleOptions::default());
//! assert_eq!(trace.outcome(), Outcome::Sorted);
//! assert_eq!(trace.terminal().sequence, vec![1, 2, 3]);
//! ```

mod error;
mod graph;
mod search;
mod sort;
mod step;
mod trace;

pub use error::{Error, Result};
pub use graph::{shortest_path, Edge, Graph, GraphState, Node};
pub use search::{binary_search, linear_search};
pub use sort::{bubble_sort, heap_sort, merge_sort, quick_sort, BubbleOptions};
pub use step::{Action, Bounds, Outcome, Step};
pub use trace::Trace;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sort_agrees_on_the_result() {
        let input = [5, 2, 9, 1, 5, 6];
        let expected = vec![1, 2, 5, 5, 6, 9];

        assert_eq!(bubble_sort(&input, BubbleOptions::default()).terminal().sequence, expected);
        assert_eq!(merge_sort(&input).terminal().sequence, expected);
        assert_eq!(quick_sort(&input).terminal().sequence, expected);
        assert_eq!(heap_sort(&input).terminal().sequence, expected);
    }

    #[test]
    fn searches_agree_on_sorted_input() {
        let items = [2, 4, 6, 8, 10];
        for (index, value) in items.iter().enumerate() {
            assert_eq!(linear_search(&items, value).outcome(), Outcome::Found { index });
            assert_eq!(binary_search(&items, value).outcome(), Outcome::Found { index });
        }
        assert_eq!(linear_search(&items, &5).outcome(), Outcome::NotFound);
        assert_eq!(binary_search(&items, &5).outcome(), Outcome::NotFound);
    }
}
