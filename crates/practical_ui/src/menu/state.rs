//! Menu visibility and keyboard-selection transitions.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Visibility and keyboard selection of a menu.
pub struct MenuState {
    /// Whether the item list is shown.
    pub open: bool,
    /// Keyboard-selected item; `None` when the menu was opened with a pointer.
    pub highlighted: Option<usize>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// What the reducer needs to know about one item.
pub struct MenuItemState {
    /// Disabled items cannot be activated.
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Keys the menu reacts to.
pub enum MenuKey {
    /// Space bar.
    Space,
    /// Enter.
    Enter,
    /// Escape (`"Esc"` on legacy browsers).
    Escape,
    /// Home.
    Home,
    /// End.
    End,
    /// Arrow up.
    ArrowUp,
    /// Arrow down.
    ArrowDown,
    /// Arrow left.
    ArrowLeft,
    /// Arrow right.
    ArrowRight,
}

impl MenuKey {
    /// Maps a DOM `KeyboardEvent.key` value; unhandled keys return `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Some(match key {
            " " | "Spacebar" => Self::Space,
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            "Home" => Self::Home,
            "End" => Self::End,
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Actions accepted by [`reduce_menu`].
pub enum MenuAction {
    /// The trigger button was clicked.
    ToggleByPointer,
    /// A handled key was pressed while focus was inside the menu anchor.
    Key(MenuKey),
    /// An item row was clicked.
    ItemClicked(usize),
    /// Focus left the menu anchor.
    Blur,
    /// Close request from the escape stack.
    Close,
    /// The page scrolled underneath the open menu.
    Scroll,
    /// A pointer went down outside the menu anchor.
    OutsidePointerDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side effects the component executes after a transition, in order.
pub enum MenuEffect {
    /// Suppress the browser default for the triggering event.
    PreventDefault,
    /// Stop the triggering event from reaching outer handlers.
    StopPropagation,
    /// Run the item's click handler.
    ActivateItem(usize),
    /// Blur the focused element so the trigger does not keep focus.
    BlurActiveElement,
}

/// Applies `action` to `state` and returns the effects to run.
///
/// `items` describes the current item list; a stale highlight pointing past its end is dropped
/// before the action is handled. A `disabled` menu ignores pointer toggles and keys but still
/// closes on blur, scroll, and outside clicks.
pub fn reduce_menu(
    state: &mut MenuState,
    items: &[MenuItemState],
    disabled: bool,
    action: MenuAction,
) -> Vec<MenuEffect> {
    let count = items.len();
    if state.highlighted.is_some_and(|index| index >= count) {
        state.highlighted = None;
    }

    let mut effects = Vec::new();
    match action {
        MenuAction::ToggleByPointer => {
            if disabled {
                return effects;
            }
            effects.push(MenuEffect::StopPropagation);
            if state.open {
                close(state);
                effects.push(MenuEffect::BlurActiveElement);
            } else {
                state.open = true;
                state.highlighted = None;
            }
        }
        MenuAction::Key(key) => {
            if disabled {
                return effects;
            }
            effects.push(MenuEffect::PreventDefault);
            reduce_key(state, items, key, &mut effects);
        }
        MenuAction::ItemClicked(index) => {
            if !state.open || index >= count {
                return effects;
            }
            effects.push(MenuEffect::StopPropagation);
            if !items[index].disabled {
                effects.push(MenuEffect::ActivateItem(index));
                effects.push(MenuEffect::BlurActiveElement);
                close(state);
            }
        }
        MenuAction::Scroll => {
            if state.open {
                close(state);
                effects.push(MenuEffect::BlurActiveElement);
            }
        }
        MenuAction::Blur | MenuAction::Close | MenuAction::OutsidePointerDown => close(state),
    }
    effects
}

fn reduce_key(
    state: &mut MenuState,
    items: &[MenuItemState],
    key: MenuKey,
    effects: &mut Vec<MenuEffect>,
) {
    let count = items.len();
    match key {
        MenuKey::Enter | MenuKey::Space if state.open => {
            let Some(index) = state.highlighted else {
                return;
            };
            if !items[index].disabled {
                effects.push(MenuEffect::ActivateItem(index));
                close(state);
            }
        }
        MenuKey::Enter | MenuKey::Space | MenuKey::ArrowUp | MenuKey::ArrowDown
            if !state.open =>
        {
            state.open = true;
            state.highlighted = (count > 0).then_some(0);
        }
        MenuKey::ArrowDown => state.highlighted = step(state.highlighted, 1, count),
        MenuKey::ArrowUp => state.highlighted = step(state.highlighted, -1, count),
        MenuKey::Home if state.open => state.highlighted = (count > 0).then_some(0),
        MenuKey::End if state.open => state.highlighted = count.checked_sub(1),
        MenuKey::Home | MenuKey::End => {}
        MenuKey::Escape | MenuKey::ArrowLeft | MenuKey::ArrowRight => close(state),
        MenuKey::Enter | MenuKey::Space => {}
    }
}

/// Moves the highlight by `delta`, wrapping; no highlight counts as index `-1`.
fn step(current: Option<usize>, delta: i64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let current = current.map_or(-1, |index| index as i64);
    Some((current + delta).rem_euclid(count as i64) as usize)
}

fn close(state: &mut MenuState) {
    state.open = false;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn items(count: usize) -> Vec<MenuItemState> {
        vec![MenuItemState::default(); count]
    }

    fn open_at(highlighted: Option<usize>) -> MenuState {
        MenuState {
            open: true,
            highlighted,
        }
    }

    fn key(state: &mut MenuState, items: &[MenuItemState], key: MenuKey) -> Vec<MenuEffect> {
        reduce_menu(state, items, false, MenuAction::Key(key))
    }

    #[test]
    fn key_names_map_including_legacy_aliases() {
        assert_eq!(MenuKey::from_key(" "), Some(MenuKey::Space));
        assert_eq!(MenuKey::from_key("Spacebar"), Some(MenuKey::Space));
        assert_eq!(MenuKey::from_key("Esc"), Some(MenuKey::Escape));
        assert_eq!(MenuKey::from_key("ArrowLeft"), Some(MenuKey::ArrowLeft));
        assert_eq!(MenuKey::from_key("Tab"), None);
        assert_eq!(MenuKey::from_key("a"), None);
    }

    #[test]
    fn pointer_toggle_opens_without_highlight_and_closes_with_blur() {
        let list = items(3);
        let mut state = MenuState {
            open: false,
            highlighted: Some(2),
        };

        let effects = reduce_menu(&mut state, &list, false, MenuAction::ToggleByPointer);
        assert_eq!(state, open_at(None));
        assert_eq!(effects, vec![MenuEffect::StopPropagation]);

        let effects = reduce_menu(&mut state, &list, false, MenuAction::ToggleByPointer);
        assert!(!state.open);
        assert_eq!(
            effects,
            vec![MenuEffect::StopPropagation, MenuEffect::BlurActiveElement]
        );
    }

    #[test]
    fn opening_keys_highlight_the_first_item() {
        let list = items(3);
        for opener in [
            MenuKey::Enter,
            MenuKey::Space,
            MenuKey::ArrowDown,
            MenuKey::ArrowUp,
        ] {
            let mut state = MenuState::default();
            let effects = key(&mut state, &list, opener);
            assert_eq!(state, open_at(Some(0)), "{opener:?}");
            assert_eq!(effects, vec![MenuEffect::PreventDefault]);
        }
    }

    #[test]
    fn arrows_wrap_around_the_item_list() {
        let list = items(3);
        let mut state = open_at(Some(2));
        key(&mut state, &list, MenuKey::ArrowDown);
        assert_eq!(state.highlighted, Some(0));
        key(&mut state, &list, MenuKey::ArrowUp);
        assert_eq!(state.highlighted, Some(2));
        key(&mut state, &list, MenuKey::ArrowUp);
        assert_eq!(state.highlighted, Some(1));
    }

    #[test]
    fn arrows_from_pointer_opened_menu_start_before_the_first_item() {
        let list = items(4);
        let mut state = open_at(None);
        key(&mut state, &list, MenuKey::ArrowDown);
        assert_eq!(state.highlighted, Some(0));

        let mut state = open_at(None);
        key(&mut state, &list, MenuKey::ArrowUp);
        assert_eq!(state.highlighted, Some(2));

        let single = items(1);
        let mut state = open_at(None);
        key(&mut state, &single, MenuKey::ArrowUp);
        assert_eq!(state.highlighted, Some(0));
    }

    #[test]
    fn home_and_end_jump_only_when_open() {
        let list = items(5);
        let mut state = open_at(Some(2));
        key(&mut state, &list, MenuKey::End);
        assert_eq!(state.highlighted, Some(4));
        key(&mut state, &list, MenuKey::Home);
        assert_eq!(state.highlighted, Some(0));

        let mut closed = MenuState::default();
        let effects = key(&mut closed, &list, MenuKey::End);
        assert_eq!(closed, MenuState::default());
        assert_eq!(effects, vec![MenuEffect::PreventDefault]);
    }

    #[test]
    fn enter_activates_enabled_highlight_and_closes() {
        let list = items(3);
        let mut state = open_at(Some(1));
        let effects = key(&mut state, &list, MenuKey::Enter);
        assert!(!state.open);
        assert_eq!(
            effects,
            vec![MenuEffect::PreventDefault, MenuEffect::ActivateItem(1)]
        );
    }

    #[test]
    fn enter_on_disabled_or_missing_highlight_keeps_menu_open() {
        let list = vec![
            MenuItemState::default(),
            MenuItemState { disabled: true },
        ];
        let mut state = open_at(Some(1));
        let effects = key(&mut state, &list, MenuKey::Space);
        assert_eq!(state, open_at(Some(1)));
        assert_eq!(effects, vec![MenuEffect::PreventDefault]);

        let mut state = open_at(None);
        let effects = key(&mut state, &list, MenuKey::Enter);
        assert_eq!(state, open_at(None));
        assert_eq!(effects, vec![MenuEffect::PreventDefault]);
    }

    #[test]
    fn escape_and_horizontal_arrows_close() {
        let list = items(2);
        for closer in [MenuKey::Escape, MenuKey::ArrowLeft, MenuKey::ArrowRight] {
            let mut state = open_at(Some(1));
            let effects = key(&mut state, &list, closer);
            assert!(!state.open, "{closer:?}");
            assert_eq!(effects, vec![MenuEffect::PreventDefault]);
        }
    }

    #[test]
    fn item_click_activates_then_blurs_and_closes() {
        let list = items(3);
        let mut state = open_at(None);
        let effects = reduce_menu(&mut state, &list, false, MenuAction::ItemClicked(2));
        assert!(!state.open);
        assert_eq!(
            effects,
            vec![
                MenuEffect::StopPropagation,
                MenuEffect::ActivateItem(2),
                MenuEffect::BlurActiveElement,
            ]
        );
    }

    #[test]
    fn disabled_item_click_keeps_menu_open() {
        let list = vec![MenuItemState { disabled: true }];
        let mut state = open_at(None);
        let effects = reduce_menu(&mut state, &list, false, MenuAction::ItemClicked(0));
        assert_eq!(state, open_at(None));
        assert_eq!(effects, vec![MenuEffect::StopPropagation]);

        let effects = reduce_menu(&mut state, &list, false, MenuAction::ItemClicked(7));
        assert!(effects.is_empty());
    }

    #[test]
    fn empty_menu_never_highlights() {
        let list = items(0);
        let mut state = MenuState::default();
        key(&mut state, &list, MenuKey::ArrowDown);
        assert_eq!(state, open_at(None));
        for nav in [MenuKey::ArrowDown, MenuKey::ArrowUp, MenuKey::Home, MenuKey::End] {
            key(&mut state, &list, nav);
            assert_eq!(state.highlighted, None, "{nav:?}");
        }
        let effects = key(&mut state, &list, MenuKey::Enter);
        assert_eq!(effects, vec![MenuEffect::PreventDefault]);
        assert!(state.open);
    }

    #[test]
    fn stale_highlight_is_dropped_when_items_shrink() {
        let list = items(2);
        let mut state = open_at(Some(4));
        let effects = key(&mut state, &list, MenuKey::Enter);
        assert_eq!(state, open_at(None));
        assert_eq!(effects, vec![MenuEffect::PreventDefault]);
    }

    #[test]
    fn disabled_menu_ignores_toggle_and_keys_but_still_closes() {
        let list = items(2);
        let mut state = MenuState::default();
        assert!(reduce_menu(&mut state, &list, true, MenuAction::ToggleByPointer).is_empty());
        assert!(reduce_menu(&mut state, &list, true, MenuAction::Key(MenuKey::Enter)).is_empty());
        assert_eq!(state, MenuState::default());

        let mut state = open_at(Some(0));
        reduce_menu(&mut state, &list, true, MenuAction::Blur);
        assert!(!state.open);
    }

    #[test]
    fn scroll_closes_open_menu_and_blurs() {
        let list = items(2);
        let mut state = open_at(Some(0));
        let effects = reduce_menu(&mut state, &list, false, MenuAction::Scroll);
        assert!(!state.open);
        assert_eq!(effects, vec![MenuEffect::BlurActiveElement]);

        let effects = reduce_menu(&mut state, &list, false, MenuAction::Scroll);
        assert!(effects.is_empty());
    }

    #[test]
    fn outside_pointer_and_escape_stack_close_quietly() {
        let list = items(2);
        for action in [MenuAction::OutsidePointerDown, MenuAction::Close, MenuAction::Blur] {
            let mut state = open_at(Some(1));
            let effects = reduce_menu(&mut state, &list, false, action);
            assert!(!state.open, "{action:?}");
            assert!(effects.is_empty());
        }
    }
}
