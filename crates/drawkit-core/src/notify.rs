//! Synchronous observer registry.
//!
//! A [`Notifier`] keeps `(interest, observer)` pairs in registration order.
//! [`Notifier::notify`] calls every observer registered for the given
//! interest, in that order, before returning. There is no queueing and no
//! cross-thread delivery.

use std::sync::mpsc::Sender;

/// Something that wants to hear about payloads of type `P`.
pub trait Observer<P> {
    fn observe(&mut self, payload: &P);
}

impl<P, F> Observer<P> for F
where
    F: FnMut(&P),
{
    fn observe(&mut self, payload: &P) {
        self(payload)
    }
}

/// Forwards payloads into a channel. A dropped receiver is not an error for
/// the notifier.
#[derive(Debug, Clone)]
pub struct ChannelObserver<P>(pub Sender<P>);

impl<P: Clone> Observer<P> for ChannelObserver<P> {
    fn observe(&mut self, payload: &P) {
        if self.0.send(payload.clone()).is_err() {
            log::debug!("Observer channel closed, payload dropped");
        }
    }
}

/// Handle returned by [`Notifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

struct Registration<I, P> {
    id: ObserverId,
    interest: I,
    observer: Box<dyn Observer<P>>,
}

/// Typed publish/subscribe fan-out keyed by interest.
pub struct Notifier<I, P> {
    registrations: Vec<Registration<I, P>>,
    next_id: u64,
}

impl<I, P> Default for Notifier<I, P> {
    fn default() -> Self {
        Self {
            registrations: Vec::new(),
            next_id: 0,
        }
    }
}

impl<I, P> std::fmt::Debug for Notifier<I, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("observers", &self.registrations.len())
            .finish()
    }
}

impl<I: PartialEq, P> Notifier<I, P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `observer` for `interest`.
    pub fn subscribe(&mut self, interest: I, observer: impl Observer<P> + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.registrations.push(Registration {
            id,
            interest,
            observer: Box::new(observer),
        });
        id
    }

    /// Remove a registration. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.registrations.len();
        self.registrations.retain(|r| r.id != id);
        self.registrations.len() != before
    }

    /// Call every observer registered for `interest`, in registration order.
    /// Returns how many observers were called.
    pub fn notify(&mut self, interest: &I, payload: &P) -> usize {
        let mut called = 0;
        for registration in &mut self.registrations {
            if registration.interest == *interest {
                registration.observer.observe(payload);
                called += 1;
            }
        }
        called
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::mpsc;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Topic {
        Done,
        Cancelled,
    }

    #[test]
    fn test_notify_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut notifier: Notifier<Topic, i32> = Notifier::new();
        for tag in ["a", "b", "c"] {
            let log = Rc::clone(&log);
            notifier.subscribe(Topic::Done, move |v: &i32| log.borrow_mut().push((tag, *v)));
        }
        assert_eq!(notifier.notify(&Topic::Done, &7), 3);
        assert_eq!(*log.borrow(), vec![("a", 7), ("b", 7), ("c", 7)]);
    }

    #[test]
    fn test_only_matching_interest_is_called() {
        let hits = Rc::new(RefCell::new(0));
        let mut notifier: Notifier<Topic, ()> = Notifier::new();
        let counter = Rc::clone(&hits);
        notifier.subscribe(Topic::Cancelled, move |_: &()| *counter.borrow_mut() += 1);
        assert_eq!(notifier.notify(&Topic::Done, &()), 0);
        assert_eq!(*hits.borrow(), 0);
        notifier.notify(&Topic::Cancelled, &());
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let mut notifier: Notifier<Topic, ()> = Notifier::new();
        let id = notifier.subscribe(Topic::Done, |_: &()| {});
        assert_eq!(notifier.len(), 1);
        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
        assert!(notifier.is_empty());
        assert_eq!(notifier.notify(&Topic::Done, &()), 0);
    }

    #[test]
    fn test_channel_observer() {
        let (tx, rx) = mpsc::channel();
        let mut notifier: Notifier<Topic, String> = Notifier::new();
        notifier.subscribe(Topic::Done, ChannelObserver(tx));
        notifier.notify(&Topic::Done, &"finished".to_string());
        assert_eq!(rx.try_recv().unwrap(), "finished");
    }

    #[test]
    fn test_closed_channel_is_ignored() {
        let (tx, rx) = mpsc::channel::<u8>();
        drop(rx);
        let mut notifier: Notifier<Topic, u8> = Notifier::new();
        notifier.subscribe(Topic::Done, ChannelObserver(tx));
        assert_eq!(notifier.notify(&Topic::Done, &1), 1);
    }
}
