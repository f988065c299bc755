//! Broadcast of window events to any number of subscriptions.

use std::cell::{Cell, RefCell};

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use log::{debug, info};
use thiserror::Error;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

#[derive(Clone, Debug, PartialEq)]
pub enum EngineEvent {
    CloseRequested,
    Resized { width: u32, height: u32 },
    Key { code: KeyCode, pressed: bool },
    Focused(bool),
}

impl EngineEvent {
    /// Translate a window event. Events scripts do not subscribe to map to `None`.
    pub fn from_window_event(event: &WindowEvent) -> Option<Self> {
        match event {
            WindowEvent::CloseRequested => Some(Self::CloseRequested),
            WindowEvent::Resized(size) => Some(Self::Resized {
                width: size.width,
                height: size.height,
            }),
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(code) => Some(Self::Key {
                    code,
                    pressed: event.state == ElementState::Pressed,
                }),
                PhysicalKey::Unidentified(_) => None,
            },
            WindowEvent::Focused(focused) => Some(Self::Focused(*focused)),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::CloseRequested => "close",
            Self::Resized { .. } => "resized",
            Self::Key { .. } => "key",
            Self::Focused(_) => "focused",
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeError {
    #[error("event hub is shut down")]
    HubClosed,
}

#[derive(Default)]
pub struct EventHub {
    senders: RefCell<Vec<Sender<EngineEvent>>>,
    closed: Cell<bool>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new queue. Fails once the hub has been shut down.
    pub fn subscribe(&self) -> Result<Subscription, SubscribeError> {
        if self.closed.get() {
            return Err(SubscribeError::HubClosed);
        }
        let (tx, rx) = unbounded();
        self.senders.borrow_mut().push(tx);
        debug!("Subscription opened ({} live)", self.senders.borrow().len());
        Ok(Subscription { rx: Some(rx) })
    }

    /// Queue `event` on every live subscription. Subscriptions that were
    /// dropped or closed are removed here.
    pub fn publish(&self, event: &EngineEvent) {
        let mut senders = self.senders.borrow_mut();
        let before = senders.len();
        senders.retain(|tx| tx.send(event.clone()).is_ok());
        if senders.len() != before {
            debug!("Pruned {} released subscriptions", before - senders.len());
        }
    }

    pub fn publish_window_event(&self, event: &WindowEvent) {
        if let Some(event) = EngineEvent::from_window_event(event) {
            self.publish(&event);
        }
    }

    /// Disconnect every subscription and refuse new ones.
    pub fn shutdown(&self) {
        self.closed.set(true);
        let dropped = self.senders.borrow_mut().drain(..).count();
        info!("Event hub shut down, released {} subscriptions", dropped);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }

    pub fn subscriber_count(&self) -> usize {
        self.senders.borrow().len()
    }
}

/// Receiving end of a hub queue. The queue is released when the subscription
/// is closed or dropped.
#[derive(Debug)]
pub struct Subscription {
    rx: Option<Receiver<EngineEvent>>,
}

impl Subscription {
    /// Next queued event, without blocking.
    pub fn poll(&self) -> Option<EngineEvent> {
        let rx = self.rx.as_ref()?;
        match rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    pub fn close(&mut self) {
        self.rx = None;
    }

    pub fn is_open(&self) -> bool {
        self.rx.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;

    #[test]
    fn maps_window_events() {
        let resized = WindowEvent::Resized(PhysicalSize::new(800, 600));
        assert_eq!(
            EngineEvent::from_window_event(&resized),
            Some(EngineEvent::Resized { width: 800, height: 600 })
        );
        assert_eq!(
            EngineEvent::from_window_event(&WindowEvent::Focused(false)),
            Some(EngineEvent::Focused(false))
        );
        assert_eq!(
            EngineEvent::from_window_event(&WindowEvent::CloseRequested),
            Some(EngineEvent::CloseRequested)
        );
        assert_eq!(EngineEvent::from_window_event(&WindowEvent::RedrawRequested), None);
    }

    #[test]
    fn subscription_sees_events_after_subscribing() {
        let hub = EventHub::new();
        hub.publish(&EngineEvent::Focused(true));
        let sub = hub.subscribe().unwrap();
        hub.publish(&EngineEvent::CloseRequested);
        assert_eq!(sub.poll(), Some(EngineEvent::CloseRequested));
        assert_eq!(sub.poll(), None);
    }

    #[test]
    fn each_subscription_gets_its_own_copy() {
        let hub = EventHub::new();
        let a = hub.subscribe().unwrap();
        let b = hub.subscribe().unwrap();
        hub.publish(&EngineEvent::Key { code: KeyCode::KeyW, pressed: true });
        assert_eq!(a.poll(), b.poll());
        assert_eq!(a.poll(), None);
    }

    #[test]
    fn dropped_and_closed_subscriptions_are_pruned() {
        let hub = EventHub::new();
        let mut kept = hub.subscribe().unwrap();
        let dropped = hub.subscribe().unwrap();
        drop(dropped);
        assert_eq!(hub.subscriber_count(), 2);
        hub.publish(&EngineEvent::Focused(true));
        assert_eq!(hub.subscriber_count(), 1);

        kept.close();
        assert!(!kept.is_open());
        assert_eq!(kept.poll(), None);
        hub.publish(&EngineEvent::Focused(false));
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn shutdown_refuses_new_subscriptions() {
        let hub = EventHub::new();
        let sub = hub.subscribe().unwrap();
        hub.shutdown();
        assert!(hub.is_closed());
        assert_eq!(sub.poll(), None);
        assert_eq!(hub.subscribe().unwrap_err(), SubscribeError::HubClosed);
    }
}
