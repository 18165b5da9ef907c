//! Document-level pointer event dispatch.
//!
//! The host owns one [`EventTarget`] and feeds it every pointer event.
//! Components subscribe with [`EventTarget::listen`] and hold the returned
//! [`Listener`] for as long as they are mounted. Dropping the guard detaches
//! the handler, so a component cannot leak a subscription across remounts.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace;

use crate::layout::Point;

/// A pointer interaction at a terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub position: Point,
}

impl PointerEvent {
    pub fn at(col: u16, row: u16) -> Self {
        Self {
            position: Point::new(col, row),
        }
    }
}

type Handler = Rc<dyn Fn(&PointerEvent)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

impl Registry {
    fn is_registered(&self, id: u64) -> bool {
        self.handlers.iter().any(|(h, _)| *h == id)
    }
}

/// Shared pointer event source. Cloning yields another handle to the same
/// set of listeners.
#[derive(Clone, Default)]
pub struct EventTarget {
    registry: Rc<RefCell<Registry>>,
}

impl EventTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `handler`; it stays attached until the returned guard is dropped.
    #[must_use = "dropping the Listener detaches the handler immediately"]
    pub fn listen(&self, handler: impl Fn(&PointerEvent) + 'static) -> Listener {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        let handler: Handler = Rc::new(handler);
        registry.handlers.push((id, handler));
        trace!(id, "Pointer listener attached");
        Listener {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver `event` to every attached handler and return how many ran.
    ///
    /// Handlers run against a snapshot taken before delivery, so they may
    /// attach or detach listeners. A handler detached mid-dispatch is skipped.
    pub fn dispatch(&self, event: PointerEvent) -> usize {
        let snapshot: Vec<(u64, Handler)> = self.registry.borrow().handlers.clone();
        let mut delivered = 0;
        for (id, handler) in snapshot {
            if !self.registry.borrow().is_registered(id) {
                continue;
            }
            handler(&event);
            delivered += 1;
        }
        trace!(?event, delivered, "Pointer event dispatched");
        delivered
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().handlers.len()
    }
}

impl fmt::Debug for EventTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventTarget")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Guard for an attached handler.
#[derive(Debug)]
pub struct Listener {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .handlers
                .retain(|(id, _)| *id != self.id);
            trace!(id = self.id, "Pointer listener detached");
        }
    }
}
