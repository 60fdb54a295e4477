//! The window side of the input bridge: subscription contract and an
//! in-process dispatcher.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use super::event::{EventKind, WindowEvent};

/// Snapshot of the window taken when an event is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowStatus {
    /// Whether the window had input focus at dispatch time.
    pub focused: bool,
}

/// Callback registered against a window.
pub type EventHandler = Box<dyn FnMut(&WindowEvent, WindowStatus)>;

/// Token returned by [`InputWindow::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A window that raises input notifications.
///
/// Subscription takes `&self` so several drivers can borrow the same
/// window; implementations use interior mutability.
pub trait InputWindow {
    /// Whether the window currently has input focus.
    fn focused(&self) -> bool;

    /// Register `handler` for every event of `kind`.
    fn subscribe(&self, kind: EventKind, handler: EventHandler)
        -> SubscriptionId;

    /// Remove a subscription. Returns `false` if `id` was not registered.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

struct Subscription {
    id: SubscriptionId,
    kind: EventKind,
    handler: Rc<RefCell<EventHandler>>,
}

/// Single-threaded window event source.
///
/// Platform bridges translate native events and hand them to
/// [`dispatch`](Self::dispatch); tests drive it directly.
pub struct EventWindow {
    focused: Cell<bool>,
    next_id: Cell<u64>,
    subscriptions: RefCell<Vec<Subscription>>,
}

impl EventWindow {
    /// Create a focused window with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            focused: Cell::new(true),
            next_id: Cell::new(0),
            subscriptions: RefCell::new(Vec::new()),
        }
    }

    /// Deliver `event` to every subscriber of its kind, in subscription
    /// order.
    ///
    /// Handlers may subscribe or unsubscribe while running. A handler
    /// that is already running (re-entrant dispatch) is skipped.
    pub fn dispatch(&self, event: &WindowEvent) {
        let kind = event.kind();
        let handlers: Vec<_> = self
            .subscriptions
            .borrow()
            .iter()
            .filter(|sub| sub.kind == kind)
            .map(|sub| Rc::clone(&sub.handler))
            .collect();
        let status = WindowStatus {
            focused: self.focused.get(),
        };

        log::trace!(
            "dispatching {event:?} to {} handler(s)",
            handlers.len()
        );
        for handler in handlers {
            let Ok(mut handler) = handler.try_borrow_mut() else {
                log::warn!("skipping re-entrant {kind:?} handler");
                continue;
            };
            let callback: &mut EventHandler = &mut handler;
            callback(event, status);
        }
    }

    /// Update the focus state, raising [`WindowEvent::FocusChanged`] when
    /// it actually changes.
    pub fn set_focused(&self, focused: bool) {
        if self.focused.replace(focused) != focused {
            log::debug!("window focus changed: focused={focused}");
            self.dispatch(&WindowEvent::FocusChanged);
        }
    }

    /// Number of live subscriptions for `kind`.
    #[must_use]
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.subscriptions
            .borrow()
            .iter()
            .filter(|sub| sub.kind == kind)
            .count()
    }
}

impl Default for EventWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl InputWindow for EventWindow {
    fn focused(&self) -> bool {
        self.focused.get()
    }

    fn subscribe(
        &self,
        kind: EventKind,
        handler: EventHandler,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscriptions.borrow_mut().push(Subscription {
            id,
            kind,
            handler: Rc::new(RefCell::new(handler)),
        });
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subs = self.subscriptions.borrow_mut();
        let before = subs.len();
        subs.retain(|sub| sub.id != id);
        subs.len() != before
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::input::event::MouseButton;

    fn counter(window: &EventWindow, kind: EventKind) -> Rc<Cell<u32>> {
        let hits = Rc::new(Cell::new(0));
        let seen = Rc::clone(&hits);
        let _ = window.subscribe(
            kind,
            Box::new(move |_, _| seen.set(seen.get() + 1)),
        );
        hits
    }

    #[test]
    fn dispatch_reaches_matching_kind_only() {
        let window = EventWindow::new();
        let downs = counter(&window, EventKind::MouseDown);
        let moves = counter(&window, EventKind::MouseMove);

        window.dispatch(&WindowEvent::MouseDown {
            button: MouseButton::Left,
        });
        window.dispatch(&WindowEvent::MouseMove {
            position: Vec2::new(1.0, 2.0),
        });
        window.dispatch(&WindowEvent::MouseMove {
            position: Vec2::new(3.0, 4.0),
        });

        assert_eq!(downs.get(), 1);
        assert_eq!(moves.get(), 2);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let window = EventWindow::new();
        let hits = Rc::new(Cell::new(0));
        let seen = Rc::clone(&hits);
        let id = window.subscribe(
            EventKind::FocusChanged,
            Box::new(move |_, _| seen.set(seen.get() + 1)),
        );

        assert!(window.unsubscribe(id));
        assert!(!window.unsubscribe(id));
        window.dispatch(&WindowEvent::FocusChanged);
        assert_eq!(hits.get(), 0);
        assert_eq!(window.subscriber_count(EventKind::FocusChanged), 0);
    }

    #[test]
    fn focus_event_only_on_change() {
        let window = EventWindow::new();
        let states = Rc::new(RefCell::new(Vec::new()));
        let record = Rc::clone(&states);
        let _ = window.subscribe(
            EventKind::FocusChanged,
            Box::new(move |_, status| {
                record.borrow_mut().push(status.focused);
            }),
        );

        window.set_focused(true);
        window.set_focused(false);
        window.set_focused(false);
        window.set_focused(true);

        assert_eq!(*states.borrow(), vec![false, true]);
        assert!(window.focused());
    }

    #[test]
    fn handler_may_subscribe_during_dispatch() {
        let window = Rc::new(EventWindow::new());
        let inner = Rc::clone(&window);
        let _ = window.subscribe(
            EventKind::FocusChanged,
            Box::new(move |_, _| {
                let _ =
                    inner.subscribe(EventKind::KeyDown, Box::new(|_, _| {}));
            }),
        );

        window.dispatch(&WindowEvent::FocusChanged);
        assert_eq!(window.subscriber_count(EventKind::KeyDown), 1);
    }
}
