//! Vertical multi-step flow with per-step back/next/complete controls.

mod state;
mod view;

pub use state::{
    StepControls, StepDivider, StepIndicator, StepTone, StepView, StepperError, StepperState,
};
pub use view::{Step, StepContent, Stepper, StepperAction};
