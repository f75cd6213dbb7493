// @generated by icon-codegen from `close.svg`. Do not edit by hand.

use leptos::*;

use crate::{IconData, IconSize, SvgIcon};

/// `close` icon data.
pub const CLOSE: IconData = IconData::new(
    "close",
    "0 0 24 24",
    r#"<path fill="currentColor" d="M19 6.41 17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z"/>"#,
);

#[component]
/// Renders the `close` icon.
pub fn CloseIcon(#[prop(default = IconSize::Sm)] size: IconSize) -> impl IntoView {
    view! { <SvgIcon icon=CLOSE size=size /> }
}
