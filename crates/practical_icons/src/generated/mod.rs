// @generated by icon-codegen. Do not edit by hand.

use crate::IconData;

mod arrow_back;
mod check;
mod chevron_down;
mod close;
mod more_vert;
mod warning;

pub use arrow_back::*;
pub use check::*;
pub use chevron_down::*;
pub use close::*;
pub use more_vert::*;
pub use warning::*;

/// Every generated icon, sorted by source file name.
pub const ALL_ICONS: &[IconData] = &[
    arrow_back::ARROW_BACK,
    check::CHECK,
    chevron_down::CHEVRON_DOWN,
    close::CLOSE,
    more_vert::MORE_VERT,
    warning::WARNING,
];
