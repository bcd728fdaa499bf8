//! Linear and binary search traces.

use std::cmp::Ordering;
use std::fmt::Display;

use crate::step::{Action, Bounds, Outcome, Step};
use crate::trace::Trace;

/// Check each item in order until the target turns up.
///
/// One `Compare` step per examined index. The trace stops at the first match,
/// so later duplicates are never examined.
pub fn linear_search<T>(items: &[T], target: &T) -> Trace<Vec<T>>
where
    T: PartialEq + Clone + Display,
{
    if items.is_empty() {
        return Trace::from_generator(vec![Step::new(
            Vec::new(),
            Action::Done(Outcome::NotFound),
            format!("There is nothing to examine, so {target} cannot be here"),
        )]);
    }

    let sequence = items.to_vec();
    let mut steps = vec![Step::new(
        sequence.clone(),
        Action::Start,
        format!("The detective lines up {} clues, looking for {target}", items.len()),
    )];

    for (index, item) in items.iter().enumerate() {
        steps.push(
            Step::new(
                sequence.clone(),
                Action::Compare,
                format!("Clue {}: {item}. Is it {target}?", index + 1),
            )
            .with_focus([index]),
        );

        if item == target {
            steps.push(
                Step::new(
                    sequence,
                    Action::Done(Outcome::Found { index }),
                    format!("Found {target} at position {} after {} checks", index + 1, index + 1),
                )
                .with_focus([index]),
            );
            return Trace::from_generator(steps);
        }
    }

    steps.push(Step::new(
        sequence,
        Action::Done(Outcome::NotFound),
        format!("All {} clues examined; {target} is not among them", items.len()),
    ));
    Trace::from_generator(steps)
}

/// Halve a sorted range until the target is found or the range is empty.
///
/// `items` must be sorted by `Ord`. Bounds are inclusive and
/// `mid = (left + right) / 2`; each probe is one `Compare` step.
pub fn binary_search<T>(items: &[T], target: &T) -> Trace<Vec<T>>
where
    T: Ord + Clone + Display,
{
    if items.is_empty() {
        return Trace::from_generator(vec![Step::new(
            Vec::new(),
            Action::Done(Outcome::NotFound),
            format!("The shelf is empty, so {target} cannot be on it"),
        )]);
    }

    let sequence = items.to_vec();
    let mut left = 0usize;
    let mut right = items.len() - 1;

    let mut steps = vec![Step::new(
        sequence.clone(),
        Action::Start,
        format!("The librarian searches {} sorted books for {target}", items.len()),
    )
    .with_bounds(Bounds::range(left, right))];

    loop {
        let mid = (left + right) / 2;
        let probe = &items[mid];

        steps.push(
            Step::new(
                sequence.clone(),
                Action::Compare,
                format!("Middle of positions {}..={}: {probe}", left + 1, right + 1),
            )
            .with_focus([mid])
            .with_bounds(Bounds::split(left, right, mid)),
        );

        match probe.cmp(target) {
            Ordering::Equal => {
                steps.push(
                    Step::new(
                        sequence,
                        Action::Done(Outcome::Found { index: mid }),
                        format!("Found {target} at position {}", mid + 1),
                    )
                    .with_focus([mid])
                    .with_bounds(Bounds::split(left, right, mid)),
                );
                return Trace::from_generator(steps);
            }
            Ordering::Less => left = mid + 1,
            Ordering::Greater => match mid.checked_sub(1) {
                Some(r) => right = r,
                None => break,
            },
        }

        if left > right {
            break;
        }
    }

    steps.push(Step::new(
        sequence,
        Action::Done(Outcome::NotFound),
        format!("The search range is empty; {target} is not on the shelf"),
    ));
    Trace::from_generator(steps)
}
