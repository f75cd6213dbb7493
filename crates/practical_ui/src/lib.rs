//! Practical UI component library.
//!
//! The crate owns the shared Leptos primitives (buttons, icons), the keyboard-driven [`Menu`]
//! widget, and the multi-step [`Stepper`] widget. Widget behavior lives in pure state reducers
//! ([`reduce_menu`], [`StepperState`]) so it can be tested without a browser; the components
//! only translate DOM events into actions and execute the returned effects.
//!
//! Every primitive emits the stable `data-ui-*` DOM contract consumed by the stylesheet layer.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod dom;
mod escape;
mod focus;
mod icon;
mod menu;
mod primitives;
mod stepper;

pub use escape::{register_escape_listener, EscapeId, EscapeRegistration, EscapeStack};
pub use focus::VisibleFocus;
pub use icon::Icon;
pub use menu::{
    reduce_menu, Menu, MenuAction, MenuAlign, MenuButton, MenuEffect, MenuEntry, MenuItem,
    MenuItemState, MenuKey, MenuState, MenuSurface, MENU_MAX_HEIGHT_PX, MENU_MIN_WIDTH_PX,
};
pub use practical_icons::{IconData, IconSize};
pub use primitives::{Button, ButtonShape, ButtonSize, ButtonVariant};
pub use stepper::{
    Step, StepContent, StepControls, StepDivider, StepIndicator, StepTone, StepView, Stepper,
    StepperAction, StepperError, StepperState,
};

/// Convenience imports for application crates consuming the widget set.
pub mod prelude {
    pub use crate::{
        Button, ButtonShape, ButtonSize, ButtonVariant, Icon, IconData, IconSize, Menu, MenuAlign,
        MenuEntry, StepContent, Stepper, StepperAction,
    };
}
