//! Step progression state and the per-step view model derived from it.

use std::collections::BTreeSet;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Rejected stepper transitions. The state is left untouched when one is returned.
pub enum StepperError {
    /// The step id does not exist.
    #[error("step {step} is out of range for a stepper with {step_count} steps")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of steps in the stepper.
        step_count: usize,
    },
    /// `back` was requested on the first step.
    #[error("the first step has no previous step")]
    NoPreviousStep,
    /// `next` was requested on the last step.
    #[error("step {step} is the last step and can only be completed")]
    NoNextStep {
        /// Requested step.
        step: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Which step is active and which steps are done.
pub struct StepperState {
    current: Option<usize>,
    completed: BTreeSet<usize>,
    step_count: usize,
}

impl StepperState {
    /// Starts at the first step with nothing completed.
    pub fn new(step_count: usize) -> Self {
        Self {
            current: (step_count > 0).then_some(0),
            completed: BTreeSet::new(),
            step_count,
        }
    }

    /// Active step; `None` once the flow has been completed without errors.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Number of steps.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Whether `step` has been marked completed.
    pub fn is_completed(&self, step: usize) -> bool {
        self.completed.contains(&step)
    }

    /// Completed step ids in ascending order.
    pub fn completed(&self) -> impl Iterator<Item = usize> + '_ {
        self.completed.iter().copied()
    }

    /// Whether no step is active any more.
    pub fn is_finished(&self) -> bool {
        self.current.is_none()
    }

    /// Returns from `step` to the previous step, un-completing both.
    pub fn back(&mut self, step: usize) -> Result<(), StepperError> {
        self.check(step)?;
        let previous = step.checked_sub(1).ok_or(StepperError::NoPreviousStep)?;
        self.completed.remove(&previous);
        self.completed.remove(&step);
        self.current = Some(previous);
        Ok(())
    }

    /// Completes `step` and advances to the following one.
    pub fn next(&mut self, step: usize) -> Result<(), StepperError> {
        self.check(step)?;
        if step + 1 == self.step_count {
            return Err(StepperError::NoNextStep { step });
        }
        self.completed.insert(step);
        self.current = Some(step + 1);
        Ok(())
    }

    /// Marks every step completed; the flow finishes only when no step reports errors.
    pub fn complete(&mut self, has_any_errors: bool) {
        self.completed = (0..self.step_count).collect();
        if !has_any_errors {
            self.current = None;
        }
    }

    /// Makes `step` the active step.
    pub fn select(&mut self, step: usize) -> Result<(), StepperError> {
        self.check(step)?;
        self.current = Some(step);
        Ok(())
    }

    /// Returns to the first step and clears completion.
    pub fn reset(&mut self) {
        *self = Self::new(self.step_count);
    }

    fn check(&self, step: usize) -> Result<(), StepperError> {
        if step < self.step_count {
            Ok(())
        } else {
            Err(StepperError::StepOutOfRange {
                step,
                step_count: self.step_count,
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Content of the round step badge.
pub enum StepIndicator {
    /// One-based step number.
    Number(usize),
    /// Completed without errors.
    Check,
    /// Completed with errors.
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Badge color tone.
pub enum StepTone {
    /// Active, or completed without errors.
    Primary,
    /// Completed with errors.
    Error,
    /// Not reached yet.
    Neutral,
}

impl StepTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Error => "error",
            Self::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Vertical connector drawn below a step badge.
pub enum StepDivider {
    /// Last step: no connector.
    None,
    /// Active step: spans the step's content.
    Tall,
    /// Inactive step: short stub.
    Short,
}

impl StepDivider {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Tall => "tall",
            Self::Short => "short",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Controls rendered under the active step.
pub struct StepControls {
    /// "Back" button.
    pub back: bool,
    /// "Next" button.
    pub next: bool,
    /// "Complete" button.
    pub complete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Presentation of one step derived from [`StepperState`].
pub struct StepView {
    /// Step id.
    pub step: usize,
    /// Whether this is the active step.
    pub active: bool,
    /// Whether this step has been completed.
    pub completed: bool,
    /// Whether this is the final step.
    pub last: bool,
    /// Badge content.
    pub indicator: StepIndicator,
    /// Badge tone.
    pub tone: StepTone,
    /// Connector below the badge.
    pub divider: StepDivider,
    /// Connector uses the primary color.
    pub divider_highlighted: bool,
    /// Label drawn in the emphasized weight.
    pub emphasized: bool,
    /// Visible controls.
    pub controls: StepControls,
}

impl StepView {
    /// Derives the view of `step`; `has_errors` is that step's own validation state.
    pub fn derive(state: &StepperState, step: usize, has_errors: bool) -> Self {
        let active = state.current == Some(step);
        let completed = state.is_completed(step);
        let last = step + 1 >= state.step_count;

        let indicator = match (completed, has_errors) {
            (false, _) => StepIndicator::Number(step + 1),
            (true, false) => StepIndicator::Check,
            (true, true) => StepIndicator::Warning,
        };
        let tone = if active || (completed && !has_errors) {
            StepTone::Primary
        } else if completed {
            StepTone::Error
        } else {
            StepTone::Neutral
        };
        let divider = if last {
            StepDivider::None
        } else if active {
            StepDivider::Tall
        } else {
            StepDivider::Short
        };
        let controls = if active {
            StepControls {
                back: state.current.is_some_and(|current| current > 0),
                next: !last,
                complete: last,
            }
        } else {
            StepControls::default()
        };

        Self {
            step,
            active,
            completed,
            last,
            indicator,
            tone,
            divider,
            divider_highlighted: active || completed,
            emphasized: active || completed,
            controls,
        }
    }

    /// Stable state token for the step container.
    pub(crate) fn state_token(&self) -> &'static str {
        if self.active {
            "active"
        } else if self.completed {
            "complete"
        } else {
            "pending"
        }
    }
}
