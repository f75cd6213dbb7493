// @generated by icon-codegen from `chevron-down.svg`. Do not edit by hand.

use leptos::*;

use crate::{IconData, IconSize, SvgIcon};

/// `chevron-down` icon data.
pub const CHEVRON_DOWN: IconData = IconData::new(
    "chevron-down",
    "0 0 24 24",
    r#"<path fill="currentColor" d="M7.41 8.59 12 13.17l4.59-4.58L18 10l-6 6-6-6 1.41-1.41z"/>"#,
);

#[component]
/// Renders the `chevron-down` icon.
pub fn ChevronDownIcon(#[prop(default = IconSize::Sm)] size: IconSize) -> impl IntoView {
    view! { <SvgIcon icon=CHEVRON_DOWN size=size /> }
}
