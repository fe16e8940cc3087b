//! Input event fan-out
//!
//! The embedding platform owns the real event sources (windowing, DOM,
//! whatever hosts the scene) and pushes [`InputEvent`]s into an
//! [`EventHub`]. Consumers subscribe with a closure and get back a
//! [`HandlerId`]; dropping a subscription is an explicit, exactly-once
//! `unsubscribe` so teardown can prove nothing is left attached.
//!
//! Events carry the geometry they were measured against (viewport state,
//! target rects) because layout may shift between events; consumers must
//! not cache it.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};

use crate::geometry::{Point, Rect};

new_key_type! {
    /// Identifier of a registered event handler
    pub struct HandlerId;
}

/// Viewport state as seen by the scroll source
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Current vertical scroll offset of the document
    pub scroll_y: f32,
    /// Visible height of the viewport
    pub height: f32,
}

impl Viewport {
    pub const fn new(scroll_y: f32, height: f32) -> Self {
        Self { scroll_y, height }
    }
}

/// An input event, with the geometry current at the time it fired
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Pointer moved; `container` is the scene's bounding rect in the same
    /// coordinate space as `position`.
    PointerMove { position: Point, container: Rect },
    /// Document scrolled; `target` is the tracked element's rect in
    /// document coordinates.
    Scroll { viewport: Viewport, target: Rect },
    /// Viewport resized; handled like a scroll (geometry changed).
    Resize { viewport: Viewport, target: Rect },
}

/// Event handler function type
pub type Handler = Box<dyn FnMut(&InputEvent)>;

/// Dispatches input events to subscribed handlers
pub struct EventHub {
    handlers: SlotMap<HandlerId, Handler>,
}

impl EventHub {
    pub fn new() -> Self {
        Self {
            handlers: SlotMap::with_key(),
        }
    }

    /// Register a handler; the returned id must be passed to
    /// [`EventHub::unsubscribe`] at teardown.
    pub fn subscribe<F>(&mut self, handler: F) -> HandlerId
    where
        F: FnMut(&InputEvent) + 'static,
    {
        self.handlers.insert(Box::new(handler))
    }

    /// Remove a handler. Returns false if the id was already removed.
    pub fn unsubscribe(&mut self, id: HandlerId) -> bool {
        self.handlers.remove(id).is_some()
    }

    /// Deliver an event to every subscribed handler.
    pub fn dispatch(&mut self, event: &InputEvent) {
        for (_, handler) in self.handlers.iter_mut() {
            handler(event);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared hub handle; the engine is single-threaded and frame-driven, so
/// `Rc<RefCell<_>>` is the ownership model throughout.
pub type SharedEventHub = Rc<RefCell<EventHub>>;

/// Create a hub ready to be shared between the embedder and scenes.
pub fn shared_hub() -> SharedEventHub {
    Rc::new(RefCell::new(EventHub::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn subscribe_dispatch_unsubscribe() {
        let mut hub = EventHub::new();
        let seen = Rc::new(Cell::new(0));

        let seen_in = seen.clone();
        let id = hub.subscribe(move |_| seen_in.set(seen_in.get() + 1));
        assert_eq!(hub.handler_count(), 1);

        let event = InputEvent::PointerMove {
            position: Point::new(1.0, 2.0),
            container: Rect::new(0.0, 0.0, 10.0, 10.0),
        };
        hub.dispatch(&event);
        hub.dispatch(&event);
        assert_eq!(seen.get(), 2);

        assert!(hub.unsubscribe(id));
        assert!(!hub.unsubscribe(id));
        hub.dispatch(&event);
        assert_eq!(seen.get(), 2);
        assert_eq!(hub.handler_count(), 0);
    }
}
