use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;
use practical_icons::MORE_VERT;

use super::state::{reduce_menu, MenuAction, MenuEffect, MenuItemState, MenuKey, MenuState};
use crate::dom::{blur_active_element, event_within};
use crate::escape::{register_escape_listener, EscapeRegistration};
use crate::focus::VisibleFocus;
use crate::primitives::{bool_token, merge_layout_class, ButtonShape};
use crate::{Icon, IconData, IconSize};

/// Minimum width of an open menu surface.
pub const MENU_MIN_WIDTH_PX: u32 = 232;
/// Maximum height of an open menu surface before it scrolls.
pub const MENU_MAX_HEIGHT_PX: u32 = 360;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Horizontal alignment of the menu surface relative to its trigger.
pub enum MenuAlign {
    /// Surface starts at the trigger's left edge.
    #[default]
    Left,
    /// Surface ends at the trigger's right edge.
    Right,
}

impl MenuAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Clone)]
/// One row of a [`Menu`].
pub struct MenuEntry {
    /// Row content.
    pub label: ViewFn,
    /// Invoked when the row is activated by click or keyboard.
    pub on_click: Callback<()>,
    /// Disabled rows render dimmed and ignore activation.
    pub disabled: bool,
}

impl MenuEntry {
    /// Creates an enabled entry.
    pub fn new(label: impl Into<ViewFn>, on_click: impl Fn() + 'static) -> Self {
        Self {
            label: label.into(),
            on_click: Callback::new(move |_: ()| on_click()),
            disabled: false,
        }
    }

    /// Sets whether the entry is disabled.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[component]
/// Anchor with a round trigger button that toggles a keyboard-navigable item list.
///
/// Escape, a click outside the anchor, page scroll, and focus leaving the anchor all close the
/// list.
pub fn Menu(
    /// Rows to render, in order.
    items: Vec<MenuEntry>,
    /// Trigger icon.
    #[prop(default = MORE_VERT)]
    icon: IconData,
    /// Surface alignment.
    #[prop(default = MenuAlign::Left)]
    align: MenuAlign,
    /// Disables the trigger and keyboard handling.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Called when focus leaves the anchor.
    #[prop(optional)]
    on_blur: Option<Callback<FocusEvent>>,
    /// Accessible name for the trigger and the list.
    #[prop(optional, into)]
    aria_label: MaybeSignal<String>,
    /// Extra layout class for the anchor.
    #[prop(optional)]
    layout_class: Option<&'static str>,
) -> impl IntoView {
    let item_states = store_value(
        items
            .iter()
            .map(|entry| MenuItemState {
                disabled: entry.disabled,
            })
            .collect::<Vec<_>>(),
    );
    let entries = store_value(items);
    let state = create_rw_signal(MenuState::default());
    let anchor_ref = create_node_ref::<html::Div>();
    let escape_registration = store_value(None::<EscapeRegistration>);
    let aria_label = Signal::derive(move || aria_label.get());
    let disabled = Signal::derive(move || disabled.get());

    let dispatch = move |action: MenuAction, ev: Option<&web_sys::Event>| {
        let mut next = state.get_untracked();
        let effects = item_states
            .with_value(|items| reduce_menu(&mut next, items, disabled.get_untracked(), action));
        if next != state.get_untracked() {
            state.set(next);
        }

        for effect in effects {
            match effect {
                MenuEffect::PreventDefault => {
                    if let Some(ev) = ev {
                        ev.prevent_default();
                    }
                }
                MenuEffect::StopPropagation => {
                    if let Some(ev) = ev {
                        ev.stop_propagation();
                    }
                }
                MenuEffect::ActivateItem(index) => {
                    let on_click = entries
                        .with_value(|entries| entries.get(index).map(|entry| entry.on_click));
                    if let Some(on_click) = on_click {
                        on_click.call(());
                    }
                }
                MenuEffect::BlurActiveElement => blur_active_element(),
            }
        }
    };

    create_effect(move |_| {
        if state.with(|state| state.open) {
            if escape_registration.with_value(Option::is_none) {
                let registration =
                    register_escape_listener(move || dispatch(MenuAction::Close, None));
                escape_registration.set_value(Some(registration));
            }
        } else {
            escape_registration.set_value(None);
        }
    });

    let outside_listener = window_event_listener(ev::pointerdown, move |ev| {
        if !state.get_untracked().open {
            return;
        }
        let inside = anchor_ref
            .get_untracked()
            .is_some_and(|anchor| event_within(ev.as_ref(), &anchor));
        if !inside {
            dispatch(MenuAction::OutsidePointerDown, None);
        }
    });
    on_cleanup(move || outside_listener.remove());

    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        if state.get_untracked().open {
            dispatch(MenuAction::Scroll, None);
        }
    });
    on_cleanup(move || scroll_listener.remove());

    view! {
        <div
            node_ref=anchor_ref
            class=merge_layout_class("ui-menu", layout_class)
            data-ui-primitive="true"
            data-ui-kind="menu"
            data-ui-align=align.token()
            data-ui-state=move || if state.with(|state| state.open) { "open" } else { "closed" }
            on:keydown=move |ev: KeyboardEvent| {
                if let Some(key) = MenuKey::from_key(&ev.key()) {
                    dispatch(MenuAction::Key(key), Some(ev.as_ref()));
                }
            }
            on:focusout=move |ev: FocusEvent| {
                if let Some(on_blur) = on_blur.as_ref() {
                    on_blur.call(ev);
                }
                dispatch(MenuAction::Blur, None);
            }
        >
            <MenuButton
                icon=icon
                aria_label=aria_label
                expanded=Signal::derive(move || state.with(|state| state.open))
                disabled=disabled
                on_click=Callback::new(move |ev: MouseEvent| {
                    dispatch(MenuAction::ToggleByPointer, Some(ev.as_ref()));
                })
            />
            <Show when=move || state.with(|state| state.open) fallback=|| ()>
                <MenuSurface align=align aria_label=aria_label>
                    {move || {
                        entries
                            .with_value(|entries| entries.clone())
                            .into_iter()
                            .enumerate()
                            .map(|(index, entry)| {
                                view! {
                                    <MenuItem
                                        disabled=entry.disabled
                                        highlighted=Signal::derive(move || {
                                            state.with(|state| state.highlighted == Some(index))
                                        })
                                        on_click=Callback::new(move |ev: MouseEvent| {
                                            dispatch(MenuAction::ItemClicked(index), Some(ev.as_ref()));
                                        })
                                    >
                                        {entry.label.run()}
                                    </MenuItem>
                                }
                            })
                            .collect_view()
                    }}
                </MenuSurface>
            </Show>
        </div>
    }
}

#[component]
/// Round icon trigger that only draws its focus ring for keyboard focus.
pub fn MenuButton(
    /// Icon shown inside the button.
    icon: IconData,
    /// Accessible name.
    #[prop(optional, into)]
    aria_label: MaybeSignal<String>,
    /// Whether the controlled menu is open.
    #[prop(optional, into)]
    expanded: MaybeSignal<bool>,
    /// Disables the button.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Click handler.
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let focus = create_rw_signal(VisibleFocus::default());

    view! {
        <button
            type="button"
            class="ui-menu-button"
            aria-label=move || aria_label.get()
            aria-haspopup="menu"
            aria-expanded=move || bool_token(expanded.get())
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="menu-button"
            data-ui-shape=ButtonShape::Circle.token()
            data-ui-disabled=move || bool_token(disabled.get())
            data-ui-focus-visible=move || bool_token(focus.with(VisibleFocus::visible))
            on:pointerdown=move |_| focus.update(VisibleFocus::pointer_down)
            on:pointerup=move |_| focus.update(VisibleFocus::pointer_up)
            on:focus=move |_| focus.update(VisibleFocus::focus)
            on:blur=move |_| focus.update(VisibleFocus::blur)
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Icon icon=icon size=IconSize::Md ui_slot="icon" />
            <span data-ui-slot="halo" aria-hidden="true"></span>
        </button>
    }
}

#[component]
/// Overlay surface listing menu rows.
pub fn MenuSurface(
    /// Alignment relative to the anchor.
    #[prop(default = MenuAlign::Left)]
    align: MenuAlign,
    /// Accessible name of the list.
    #[prop(optional, into)]
    aria_label: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-menu-surface"
            role="menu"
            aria-label=move || aria_label.get()
            style=format!(
                "min-width: {MENU_MIN_WIDTH_PX}px; max-height: {MENU_MAX_HEIGHT_PX}px; overflow: auto;"
            )
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
            data-ui-align=align.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Menu row; pointer-down is suppressed so the trigger keeps focus while clicking.
pub fn MenuItem(
    /// Disabled rows render dimmed.
    #[prop(optional)]
    disabled: bool,
    /// Keyboard selection marker.
    #[prop(optional, into)]
    highlighted: MaybeSignal<bool>,
    /// Click handler.
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-menu-item"
            role="menuitem"
            aria-disabled=bool_token(disabled)
            data-ui-primitive="true"
            data-ui-kind="menu-item"
            data-ui-disabled=bool_token(disabled)
            data-ui-keyboard-select=move || bool_token(highlighted.get())
            on:pointerdown=|ev: web_sys::PointerEvent| ev.prevent_default()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}
