//! Icon set for the practical UI component library.
//!
//! Every icon is a generated module under `src/generated/` exposing an [`IconData`] constant and
//! a Leptos component. Regenerate them from `svg/` with
//! `cargo run -p icon_codegen -- crates/practical_icons/svg crates/practical_icons/src/generated`
//! instead of editing the generated files.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;

mod generated;

pub use generated::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Vector data for one icon.
pub struct IconData {
    /// Stable token taken from the source file name, used for CSS hooks and lookup.
    pub name: &'static str,
    /// SVG `viewBox` of the source document.
    pub view_box: &'static str,
    /// Inner SVG markup.
    pub body: &'static str,
}

impl IconData {
    /// Create icon data; used by generated modules.
    pub const fn new(name: &'static str, view_box: &'static str, body: &'static str) -> Self {
        Self {
            name,
            view_box,
            body,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 14px compact icon (dense controls).
    Xs,
    /// 16px standard icon (menus, step badges).
    #[default]
    Sm,
    /// 20px medium icon (menu buttons, prominent controls).
    Md,
    /// 24px large icon.
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

/// Looks up a generated icon by its file-name token.
pub fn find_icon(name: &str) -> Option<IconData> {
    ALL_ICONS.iter().copied().find(|icon| icon.name == name)
}

#[component]
/// Renders icon data as an inline SVG that inherits the surrounding text color.
pub fn SvgIcon(
    /// Icon to render.
    icon: IconData,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.name
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox=icon.view_box
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.body
        />
    }
}
