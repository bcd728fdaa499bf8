//! Validated step sequences.

use std::ops::Deref;

use crate::error::{Error, Result};
use crate::step::{Action, Outcome, Step};

/// A precomputed, non-empty step sequence ending in exactly one `Done` step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Trace<S> {
    steps: Vec<Step<S>>,
}

impl<S> Trace<S> {
    /// Validate an arbitrary step list.
    pub fn new(steps: Vec<Step<S>>) -> Result<Self> {
        let last = steps.len().checked_sub(1).ok_or(Error::EmptyTrace)?;

        if let Some(index) = steps[..last].iter().position(|s| s.action.is_done()) {
            return Err(Error::MisplacedDone { index });
        }
        if !steps[last].action.is_done() {
            return Err(Error::UnterminatedTrace);
        }

        Ok(Self { steps })
    }

    /// Wrap steps produced by a generator in this crate.
    pub(crate) fn from_generator(steps: Vec<Step<S>>) -> Self {
        debug_assert!(Self::is_well_formed(&steps), "generator produced a malformed trace");
        Self { steps }
    }

    fn is_well_formed(steps: &[Step<S>]) -> bool {
        match steps.split_last() {
            Some((last, rest)) => last.action.is_done() && !rest.iter().any(|s| s.action.is_done()),
            None => false,
        }
    }

    /// The untouched starting state.
    pub fn initial(&self) -> &Step<S> {
        &self.steps[0]
    }

    /// The `Done` step.
    pub fn terminal(&self) -> &Step<S> {
        &self.steps[self.steps.len() - 1]
    }

    /// How the algorithm ended.
    pub fn outcome(&self) -> Outcome {
        match self.terminal().action {
            Action::Done(outcome) => outcome,
            // Construction guarantees the last step is Done.
            _ => unreachable!("trace must end with a done step"),
        }
    }

    /// Number of steps with the given action.
    pub fn count(&self, action: Action) -> usize {
        self.steps.iter().filter(|s| s.action == action).count()
    }

    /// Convert every snapshot.
    pub fn map<U>(self, mut f: impl FnMut(S) -> U) -> Trace<U> {
        Trace {
            steps: self.steps.into_iter().map(|s| s.map(&mut f)).collect(),
        }
    }

    /// Take the steps back out.
    pub fn into_steps(self) -> Vec<Step<S>> {
        self.steps
    }
}

impl<S> Deref for Trace<S> {
    type Target = [Step<S>];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

impl<'a, S> IntoIterator for &'a Trace<S> {
    type Item = &'a Step<S>;
    type IntoIter = std::slice::Iter<'a, Step<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
