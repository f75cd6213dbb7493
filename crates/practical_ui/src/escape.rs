//! Stack of Escape-key listeners where only the most recent registration reacts.
//!
//! Nested overlays (a menu opened from inside a dialog, for instance) each register a close
//! handler while they are visible. A single document-level keydown listener dispatches Escape to
//! the top of the stack, so one key press closes exactly one layer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Identifier handed out for each registered listener.
pub struct EscapeId(u64);

#[derive(Debug)]
/// Ordered listener registrations; the last pushed entry is the active one.
pub struct EscapeStack<H> {
    next_id: u64,
    entries: Vec<(EscapeId, H)>,
}

impl<H> Default for EscapeStack<H> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<H> EscapeStack<H> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` on top of the stack.
    pub fn push(&mut self, handler: H) -> EscapeId {
        let id = EscapeId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, handler));
        id
    }

    /// Removes a registration wherever it sits in the stack.
    pub fn remove(&mut self, id: EscapeId) -> Option<H> {
        let index = self.entries.iter().position(|(entry, _)| *entry == id)?;
        Some(self.entries.remove(index).1)
    }

    /// Handler that should receive the next Escape press.
    pub fn top(&self) -> Option<&H> {
        self.entries.last().map(|(_, handler)| handler)
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

type EscapeHandler = Rc<dyn Fn()>;

thread_local! {
    static ESCAPE_LISTENERS: RefCell<EscapeStack<EscapeHandler>> = RefCell::new(EscapeStack::new());
    static DOCUMENT_LISTENER_INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// Guard for a registered Escape listener; dropping it unregisters the handler.
#[must_use = "dropping the registration removes the listener immediately"]
#[derive(Debug)]
pub struct EscapeRegistration {
    id: EscapeId,
}

impl EscapeRegistration {
    /// Identifier of the underlying registration.
    pub fn id(&self) -> EscapeId {
        self.id
    }

    /// Unregisters the handler now.
    pub fn dispose(self) {}
}

impl Drop for EscapeRegistration {
    fn drop(&mut self) {
        let id = self.id;
        ESCAPE_LISTENERS.with(|listeners| {
            listeners.borrow_mut().remove(id);
        });
    }
}

/// Registers `handler` as the active Escape listener until the returned guard is dropped.
pub fn register_escape_listener(handler: impl Fn() + 'static) -> EscapeRegistration {
    install_document_listener();
    let id = ESCAPE_LISTENERS.with(|listeners| listeners.borrow_mut().push(Rc::new(handler)));
    EscapeRegistration { id }
}

fn install_document_listener() {
    if DOCUMENT_LISTENER_INSTALLED.with(|installed| installed.replace(true)) {
        return;
    }

    // Lives for the whole page; never removed.
    let _listener = window_event_listener(ev::keydown, |ev| {
        if ev.default_prevented() || !matches!(ev.key().as_str(), "Escape" | "Esc") {
            return;
        }
        let handler = ESCAPE_LISTENERS.with(|listeners| listeners.borrow().top().cloned());
        if let Some(handler) = handler {
            ev.prevent_default();
            handler();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn most_recent_registration_is_on_top() {
        let mut stack = EscapeStack::new();
        let dialog = stack.push("dialog");
        let menu = stack.push("menu");

        assert_eq!(stack.top(), Some(&"menu"));
        assert_eq!(stack.remove(menu), Some("menu"));
        assert_eq!(stack.top(), Some(&"dialog"));
        assert_eq!(stack.remove(dialog), Some("dialog"));
        assert!(stack.is_empty());
    }

    #[test]
    fn removing_a_buried_registration_keeps_the_top() {
        let mut stack = EscapeStack::new();
        let first = stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.remove(first), Some(1));
        assert_eq!(stack.top(), Some(&3));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.remove(first), None);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut stack = EscapeStack::new();
        let first = stack.push(());
        stack.remove(first);
        let second = stack.push(());
        assert_ne!(first, second);
    }

    #[test]
    fn dropping_a_guard_unregisters_it() {
        let handler: EscapeHandler = Rc::new(|| {});
        let id = ESCAPE_LISTENERS.with(|listeners| listeners.borrow_mut().push(handler));
        let guard = EscapeRegistration { id };
        assert_eq!(ESCAPE_LISTENERS.with(|listeners| listeners.borrow().len()), 1);

        guard.dispose();
        assert_eq!(ESCAPE_LISTENERS.with(|listeners| listeners.borrow().len()), 0);
    }
}
