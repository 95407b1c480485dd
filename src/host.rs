//! Host environment events.
//!
//! The windowing layer reports scroll and resize changes through an
//! [`EventBus`]. Listeners register a handler and hold the returned
//! [`Subscription`]; dropping it detaches the handler, so a torn-down view
//! can never leak one.
//!
//! Everything runs on the UI thread. Handlers must not subscribe or drop a
//! subscription of the same bus while they are being dispatched to.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Document scroll offset changed.
    Scroll { offset: f32 },
    /// Viewport size changed.
    Resize { width: f32, height: f32 },
}

type Handler = Box<dyn FnMut(&HostEvent)>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

/// Fan-out of host events to live handlers.
#[derive(Default)]
pub struct EventBus {
    listeners: Rc<RefCell<Listeners>>,
}

/// Scoped listener handle. Detaches its handler on drop.
pub struct Subscription {
    id: u64,
    bus: Weak<RefCell<Listeners>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&HostEvent) + 'static,
    {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.handlers.push((id, Box::new(handler)));
        log::debug!("host listener {} attached", id);
        Subscription {
            id,
            bus: Rc::downgrade(&self.listeners),
        }
    }

    /// Call every live handler with `event`, in subscription order.
    pub fn dispatch(&self, event: &HostEvent) {
        for (_, handler) in self.listeners.borrow_mut().handlers.iter_mut() {
            handler(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().handlers.len()
    }
}

impl Subscription {
    /// Whether the bus still exists and holds this handler.
    pub fn is_attached(&self) -> bool {
        let Some(listeners) = self.bus.upgrade() else {
            return false;
        };
        let attached = listeners
            .borrow()
            .handlers
            .iter()
            .any(|(id, _)| *id == self.id);
        attached
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.bus.upgrade() {
            listeners
                .borrow_mut()
                .handlers
                .retain(|(id, _)| *id != self.id);
            log::debug!("host listener {} detached", self.id);
        }
    }
}

/// Turns per-frame viewport readings into change events.
#[derive(Debug, Clone, Default)]
pub struct ViewportWatcher {
    last_offset: Option<f32>,
    last_size: Option<(f32, f32)>,
}

impl ViewportWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare this frame's reading with the last one. The first reading
    /// always produces both events.
    pub fn observe(&mut self, offset: f32, width: f32, height: f32) -> Vec<HostEvent> {
        let mut events = Vec::new();
        if self.last_size != Some((width, height)) {
            self.last_size = Some((width, height));
            events.push(HostEvent::Resize { width, height });
        }
        if self.last_offset != Some(offset) {
            self.last_offset = Some(offset);
            events.push(HostEvent::Scroll { offset });
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder(bus: &EventBus) -> (Subscription, Rc<RefCell<Vec<HostEvent>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let sub = bus.subscribe(move |e| sink.borrow_mut().push(*e));
        (sub, seen)
    }

    #[test]
    fn dispatch_reaches_all_listeners() {
        let bus = EventBus::new();
        let (_a, seen_a) = recorder(&bus);
        let (_b, seen_b) = recorder(&bus);
        bus.dispatch(&HostEvent::Scroll { offset: 12.0 });
        assert_eq!(*seen_a.borrow(), vec![HostEvent::Scroll { offset: 12.0 }]);
        assert_eq!(*seen_b.borrow(), vec![HostEvent::Scroll { offset: 12.0 }]);
    }

    #[test]
    fn handlers_run_in_subscription_order() {
        let bus = EventBus::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let subs: Vec<Subscription> = (0..3)
            .map(|n| {
                let order = Rc::clone(&order);
                bus.subscribe(move |_| order.borrow_mut().push(n))
            })
            .collect();
        bus.dispatch(&HostEvent::Resize { width: 1.0, height: 1.0 });
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
        drop(subs);
    }

    #[test]
    fn dropping_subscription_detaches() {
        let bus = EventBus::new();
        let (a, seen_a) = recorder(&bus);
        {
            let (b, seen_b) = recorder(&bus);
            assert_eq!(bus.listener_count(), 2);
            assert!(b.is_attached());
            drop(b);
            bus.dispatch(&HostEvent::Scroll { offset: 1.0 });
            assert!(seen_b.borrow().is_empty());
        }
        assert_eq!(bus.listener_count(), 1);
        assert_eq!(seen_a.borrow().len(), 1);
        drop(a);
        assert_eq!(bus.listener_count(), 0);
        // nothing to deliver to; must not panic
        bus.dispatch(&HostEvent::Resize { width: 1.0, height: 1.0 });
    }

    #[test]
    fn subscription_outliving_bus_is_fine() {
        let bus = EventBus::new();
        let (sub, _) = recorder(&bus);
        drop(bus);
        assert!(!sub.is_attached());
        drop(sub);
    }

    #[test]
    fn events_keep_order() {
        let bus = EventBus::new();
        let (_sub, seen) = recorder(&bus);
        for i in 0..5 {
            bus.dispatch(&HostEvent::Scroll { offset: i as f32 });
        }
        let offsets: Vec<f32> = seen
            .borrow()
            .iter()
            .map(|e| match e {
                HostEvent::Scroll { offset } => *offset,
                HostEvent::Resize { .. } => -1.0,
            })
            .collect();
        assert_eq!(offsets, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn watcher_reports_only_changes() {
        let mut w = ViewportWatcher::new();
        assert_eq!(
            w.observe(0.0, 800.0, 600.0),
            vec![
                HostEvent::Resize { width: 800.0, height: 600.0 },
                HostEvent::Scroll { offset: 0.0 },
            ]
        );
        assert!(w.observe(0.0, 800.0, 600.0).is_empty());
        assert_eq!(w.observe(40.0, 800.0, 600.0), vec![HostEvent::Scroll { offset: 40.0 }]);
        assert_eq!(
            w.observe(40.0, 1024.0, 600.0),
            vec![HostEvent::Resize { width: 1024.0, height: 600.0 }]
        );
    }
}
