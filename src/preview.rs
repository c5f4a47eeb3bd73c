//! Design-time sample content for visual tooling. Not used at runtime.

use crate::progress::StepProgress;

pub const STEPS: [&str; 4] = ["First step", "Second step", "This step", "Last step"];
pub const DETAILS: [(i64, &str); 2] = [
    (0, "The preferred size accounts for details"),
    (2, "Current step, drawn with the tint color"),
];
pub const CURRENT_STEP: i64 = 2;

/// Seed `progress` with the sample steps. Passes are armed, not run.
pub fn seed(progress: &mut StepProgress) {
    progress.set_steps(STEPS);
    progress.set_details(DETAILS);
    progress.set_current_step(CURRENT_STEP);
}

impl StepProgress {
    /// A settled container showing the sample steps.
    pub fn preview() -> Self {
        let mut progress = StepProgress::new();
        seed(&mut progress);
        progress.settle();
        progress
    }
}
