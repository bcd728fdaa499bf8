//! Interactive stack and queue demos.
//!
//! These have no trace. The user drives them directly and each successful
//! mutation holds an [`AnimationLatch`] until the host calls `settle()`,
//! normally [`ANIMATION_HOLD`] later. Failed operations leave the structure
//! and its narration untouched.

use std::collections::VecDeque;
use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::presets::{CUSTOMER_NAMES, PLATE_TYPES, STARTING_CUSTOMERS, STARTING_PLATES};

/// How long a mutation animates before the next one is accepted.
pub const ANIMATION_HOLD: Duration = Duration::from_millis(300);

/// Rejects mutations while the previous one is still on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnimationLatch {
    held: bool,
}

impl AnimationLatch {
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Fail with [`Error::Busy`] while held.
    pub fn check(&self) -> Result<()> {
        if self.held {
            Err(Error::Busy)
        } else {
            Ok(())
        }
    }

    pub fn arm(&mut self) {
        self.held = true;
    }

    pub fn settle(&mut self) {
        self.held = false;
    }
}

fn trimmed(item: &str) -> Result<String> {
    let item = item.trim();
    if item.is_empty() {
        return Err(Error::BlankItem);
    }
    Ok(item.to_string())
}

fn pick(pool: &'static [&'static str], rng: &mut impl Rng) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// A tower of plates: last in, first out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlateStack {
    plates: Vec<String>,
    latch: AnimationLatch,
    last_action: Option<String>,
}

impl Default for PlateStack {
    fn default() -> Self {
        Self::with_items(STARTING_PLATES)
    }
}

impl PlateStack {
    /// The kitchen's starting tower.
    pub fn new() -> Self {
        Self::default()
    }

    /// A tower holding `items`, bottom first.
    pub fn with_items<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            plates: items.into_iter().map(Into::into).collect(),
            latch: AnimationLatch::default(),
            last_action: None,
        }
    }

    /// Put a plate on top.
    pub fn push(&mut self, item: &str) -> Result<()> {
        self.latch.check()?;
        let item = trimmed(item)?;
        debug!(plate = %item, "push");
        self.last_action = Some(format!("Pushed: {item}"));
        self.plates.push(item);
        self.latch.arm();
        Ok(())
    }

    /// Take the top plate off.
    pub fn pop(&mut self) -> Result<String> {
        self.latch.check()?;
        let item = self.plates.pop().ok_or(Error::Empty)?;
        debug!(plate = %item, "pop");
        self.last_action = Some(format!("Popped: {item}"));
        self.latch.arm();
        Ok(item)
    }

    /// Look at the top plate without removing it.
    pub fn peek(&mut self) -> Option<&str> {
        self.last_action = Some(match self.plates.last() {
            Some(top) => format!("Peeked: {top} (top item)"),
            None => "Stack is empty - nothing to peek".to_string(),
        });
        self.plates.last().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.plates.clear();
        self.last_action = Some("Stack cleared - ready for new plates".to_string());
    }

    /// Release the latch once the animation has played.
    pub fn settle(&mut self) {
        self.latch.settle();
    }

    pub fn is_animating(&self) -> bool {
        self.latch.is_held()
    }

    /// Plates from bottom to top.
    pub fn items(&self) -> &[String] {
        &self.plates
    }

    pub fn len(&self) -> usize {
        self.plates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }

    pub fn last_action(&self) -> Option<&str> {
        self.last_action.as_deref()
    }

    /// A random plate name to prefill the input with.
    pub fn suggest(rng: &mut impl Rng) -> &'static str {
        pick(&PLATE_TYPES, rng)
    }
}

/// The line at the village bakery: first in, first out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BakeryQueue {
    customers: VecDeque<String>,
    latch: AnimationLatch,
    last_action: Option<String>,
}

impl Default for BakeryQueue {
    fn default() -> Self {
        Self::with_items(STARTING_CUSTOMERS)
    }
}

impl BakeryQueue {
    /// The morning's starting line.
    pub fn new() -> Self {
        Self::default()
    }

    /// A line holding `items`, front first.
    pub fn with_items<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            customers: items.into_iter().map(Into::into).collect(),
            latch: AnimationLatch::default(),
            last_action: None,
        }
    }

    /// Add a customer to the back of the line.
    pub fn enqueue(&mut self, name: &str) -> Result<()> {
        self.latch.check()?;
        let name = trimmed(name)?;
        debug!(customer = %name, "enqueue");
        self.last_action = Some(format!("{name} joined the queue"));
        self.customers.push_back(name);
        self.latch.arm();
        Ok(())
    }

    /// Serve the customer at the front.
    pub fn dequeue(&mut self) -> Result<String> {
        self.latch.check()?;
        let name = self.customers.pop_front().ok_or(Error::Empty)?;
        debug!(customer = %name, "dequeue");
        self.last_action = Some(format!("{name} was served and left the queue"));
        self.latch.arm();
        Ok(name)
    }

    /// Who is served next.
    pub fn front(&mut self) -> Option<&str> {
        self.last_action = Some(match self.customers.front() {
            Some(next) => format!("Next to be served: {next}"),
            None => "Queue is empty - no customers waiting".to_string(),
        });
        self.customers.front().map(String::as_str)
    }

    /// The most recent arrival. Does not change the narration.
    pub fn back(&self) -> Option<&str> {
        self.customers.back().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.customers.clear();
        self.last_action = Some("Queue cleared - bakery is closing".to_string());
    }

    pub fn settle(&mut self) {
        self.latch.settle();
    }

    pub fn is_animating(&self) -> bool {
        self.latch.is_held()
    }

    /// Customers from front to back.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.customers.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn last_action(&self) -> Option<&str> {
        self.last_action.as_deref()
    }

    pub fn suggest(rng: &mut impl Rng) -> &'static str {
        pick(&CUSTOMER_NAMES, rng)
    }
}
