//! Icon primitive bridging generated icon data into the `data-ui-*` contract.

use leptos::*;
use practical_icons::SvgIcon;

use crate::{IconData, IconSize};

#[component]
/// Renders generated icon data inside a decorative wrapper span.
pub fn Icon(
    /// Generated icon data, e.g. [`practical_icons::CHECK`].
    icon: IconData,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
    /// Optional slot token for styling inside composite widgets.
    #[prop(optional)]
    ui_slot: Option<&'static str>,
) -> impl IntoView {
    view! {
        <span
            class="ui-icon-frame"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-slot=ui_slot
        >
            <SvgIcon icon=icon size=size />
        </span>
    }
}
