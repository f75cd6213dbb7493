// @generated by icon-codegen from `more-vert.svg`. Do not edit by hand.

use leptos::*;

use crate::{IconData, IconSize, SvgIcon};

/// `more-vert` icon data.
pub const MORE_VERT: IconData = IconData::new(
    "more-vert",
    "0 0 24 24",
    r#"<path fill="currentColor" d="M12 8c1.1 0 2-.9 2-2s-.9-2-2-2-2 .9-2 2 .9 2 2 2zm0 2c-1.1 0-2 .9-2 2s.9 2 2 2 2-.9 2-2-.9-2-2-2zm0 6c-1.1 0-2 .9-2 2s.9 2 2 2 2-.9 2-2-.9-2-2-2z"/>"#,
);

#[component]
/// Renders the `more-vert` icon.
pub fn MoreVertIcon(#[prop(default = IconSize::Sm)] size: IconSize) -> impl IntoView {
    view! { <SvgIcon icon=MORE_VERT size=size /> }
}
