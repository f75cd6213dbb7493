//! Dropdown menu: pure transition logic plus the Leptos widget that drives it.

mod state;
mod view;

pub use state::{reduce_menu, MenuAction, MenuEffect, MenuItemState, MenuKey, MenuState};
pub use view::{
    Menu, MenuAlign, MenuButton, MenuEntry, MenuItem, MenuSurface, MENU_MAX_HEIGHT_PX,
    MENU_MIN_WIDTH_PX,
};
