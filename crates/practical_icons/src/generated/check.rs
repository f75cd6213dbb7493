// @generated by icon-codegen from `check.svg`. Do not edit by hand.

use leptos::*;

use crate::{IconData, IconSize, SvgIcon};

/// `check` icon data.
pub const CHECK: IconData = IconData::new(
    "check",
    "0 0 24 24",
    r#"<path fill="currentColor" d="M9 16.17 4.83 12l-1.42 1.41L9 19 21 7l-1.41-1.41z"/>"#,
);

#[component]
/// Renders the `check` icon.
pub fn CheckIcon(#[prop(default = IconSize::Sm)] size: IconSize) -> impl IntoView {
    view! { <SvgIcon icon=CHECK size=size /> }
}
