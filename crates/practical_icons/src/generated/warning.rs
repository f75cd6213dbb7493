// @generated by icon-codegen from `warning.svg`. Do not edit by hand.

use leptos::*;

use crate::{IconData, IconSize, SvgIcon};

/// `warning` icon data.
pub const WARNING: IconData = IconData::new(
    "warning",
    "0 0 24 24",
    r#"<path fill="currentColor" d="M1 21h22L12 2 1 21zm12-3h-2v-2h2v2zm0-4h-2v-4h2v4z"/>"#,
);

#[component]
/// Renders the `warning` icon.
pub fn WarningIcon(#[prop(default = IconSize::Sm)] size: IconSize) -> impl IntoView {
    view! { <SvgIcon icon=WARNING size=size /> }
}
