//! The step record shared by every generator.

use std::fmt;

/// How a trace ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Outcome {
    /// The sequence is in ascending order.
    Sorted,
    /// The search target sits at `index`.
    Found { index: usize },
    /// Every candidate was ruled out.
    NotFound,
    /// The graph target was selected at this total distance.
    Reached { distance: u64 },
    /// No remaining node is reachable from the source.
    Unreachable,
}

impl Outcome {
    /// Whether the search or path query succeeded.
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::NotFound | Outcome::Unreachable)
    }
}

/// What happened to produce a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Action {
    /// Untouched input, before any work.
    Start,
    /// Two elements (or a probe and the target) were compared.
    Compare,
    /// Two elements traded places.
    Swap,
    /// A range was split in two (merge sort).
    Divide,
    /// Two sorted halves were merged (merge sort).
    Merge,
    /// A pivot was chosen or placed (quick sort).
    Partition,
    /// A sift-down swap, or the completed heap (heap sort).
    Heapify,
    /// The heap root moved to the sorted tail (heap sort).
    Extract,
    /// A node was selected and marked visited (graphs).
    Visit,
    /// A tentative distance was lowered (graphs).
    Relax,
    /// Terminal step.
    Done(Outcome),
}

impl Action {
    /// Whether this is the terminal action.
    pub fn is_done(&self) -> bool {
        matches!(self, Action::Done(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Start => "start",
            Action::Compare => "compare",
            Action::Swap => "swap",
            Action::Divide => "divide",
            Action::Merge => "merge",
            Action::Partition => "partition",
            Action::Heapify => "heapify",
            Action::Extract => "extract",
            Action::Visit => "visit",
            Action::Relax => "relax",
            Action::Done(_) => "done",
        };
        f.write_str(name)
    }
}

/// Inclusive sub-range markers for divide-and-conquer and heap steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// First index of the active range
    pub left: usize,
    /// Last index of the active range
    pub right: usize,
    /// Midpoint (binary search probe, merge sort split)
    pub mid: Option<usize>,
    /// Current pivot position (quick sort)
    pub pivot: Option<usize>,
}

impl Bounds {
    /// A plain `left..=right` range.
    pub const fn range(left: usize, right: usize) -> Self {
        Self {
            left,
            right,
            mid: None,
            pivot: None,
        }
    }

    /// A range with a midpoint.
    pub const fn split(left: usize, right: usize, mid: usize) -> Self {
        Self {
            left,
            right,
            mid: Some(mid),
            pivot: None,
        }
    }

    /// A range with a pivot position.
    pub const fn pivoted(left: usize, right: usize, pivot: usize) -> Self {
        Self {
            left,
            right,
            mid: None,
            pivot: Some(pivot),
        }
    }

    /// Whether `index` falls inside the range.
    pub fn contains(&self, index: usize) -> bool {
        (self.left..=self.right).contains(&index)
    }
}

/// One point in an algorithm's execution.
///
/// `sequence` is owned: each step keeps its own copy of the working data, so
/// later steps can never change what an earlier step shows.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step<S> {
    /// Snapshot of the working data
    pub sequence: S,
    /// What produced this step
    pub action: Action,
    /// Indices (or node positions) to highlight
    pub focus: Vec<usize>,
    /// Narration for display
    pub description: String,
    /// Optional range markers
    pub bounds: Option<Bounds>,
}

impl<S> Step<S> {
    /// Create a step with no focus and no bounds.
    pub fn new(sequence: S, action: Action, description: impl Into<String>) -> Self {
        Self {
            sequence,
            action,
            focus: Vec::new(),
            description: description.into(),
            bounds: None,
        }
    }

    /// Set the highlighted indices.
    pub fn with_focus(mut self, focus: impl IntoIterator<Item = usize>) -> Self {
        self.focus = focus.into_iter().collect();
        self
    }

    /// Set the range markers.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// The outcome, if this is the terminal step.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.action {
            Action::Done(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Convert the snapshot, keeping everything else.
    pub fn map<U>(self, f: impl FnOnce(S) -> U) -> Step<U> {
        Step {
            sequence: f(self.sequence),
            action: self.action,
            focus: self.focus,
            description: self.description,
            bounds: self.bounds,
        }
    }
}
