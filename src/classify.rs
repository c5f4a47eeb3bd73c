//! Past/current/future classification of steps.
//!
//! For `n` steps and a current index `c`:
//!
//! | `c`            | classes                                 |
//! |----------------|-----------------------------------------|
//! | `c < 0`        | all future (nothing started)            |
//! | `0 <= c < n`   | past below `c`, current at `c`, future above |
//! | `c >= n`       | all past (everything complete), no current |
//!
//! The three ranges are filled in a fixed order: future, then current, then
//! past. They cannot overlap, but the order is part of the contract.

use std::fmt;
use std::ops::Range;

/// Temporal status of a step relative to the current step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepClass {
    Past,
    Current,
    Future,
}

impl fmt::Display for StepClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StepClass::Past => "past",
            StepClass::Current => "current",
            StepClass::Future => "future",
        })
    }
}

/// Index ranges of each class, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRanges {
    pub future: Range<usize>,
    pub current: Option<usize>,
    pub past: Range<usize>,
}

impl ClassRanges {
    pub fn new(current_step: i64, n: usize) -> Self {
        let len = n as i64;
        let future_start = (current_step.saturating_add(1)).clamp(0, len) as usize;
        let current = (0..len).contains(&current_step).then_some(current_step as usize);
        let past_end = current_step.clamp(0, len) as usize;
        ClassRanges {
            future: future_start..n,
            current,
            past: 0..past_end,
        }
    }
}

/// Whether `current_step` designates an actual step
pub fn is_valid_current(current_step: i64, n: usize) -> bool {
    current_step >= 0 && (current_step as u64) < n as u64
}

/// Classify every index in `0..n`.
pub fn classify(current_step: i64, n: usize) -> Vec<StepClass> {
    let ranges = ClassRanges::new(current_step, n);
    // Placeholder value; every slot is overwritten by exactly one range below.
    let mut classes = vec![StepClass::Future; n];
    for i in ranges.future {
        classes[i] = StepClass::Future;
    }
    if let Some(i) = ranges.current {
        classes[i] = StepClass::Current;
    }
    for i in ranges.past {
        classes[i] = StepClass::Past;
    }
    classes
}
