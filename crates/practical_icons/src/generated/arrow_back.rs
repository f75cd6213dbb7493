// @generated by icon-codegen from `arrow-back.svg`. Do not edit by hand.

use leptos::*;

use crate::{IconData, IconSize, SvgIcon};

/// `arrow-back` icon data.
pub const ARROW_BACK: IconData = IconData::new(
    "arrow-back",
    "0 0 24 24",
    r#"<path fill="currentColor" d="M20 11H7.83l5.59-5.59L12 4l-8 8 8 8 1.41-1.41L7.83 13H20v-2z"/>"#,
);

#[component]
/// Renders the `arrow-back` icon.
pub fn ArrowBackIcon(#[prop(default = IconSize::Sm)] size: IconSize) -> impl IntoView {
    view! { <SvgIcon icon=ARROW_BACK size=size /> }
}
