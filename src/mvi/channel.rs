//! Observable state channel.
//!
//! Holds the single current snapshot and fans every published snapshot out
//! to the registered observers, synchronously and in subscription order.

use std::cell::Cell;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, ReentrantMutex, RwLock};
use thiserror::Error;

use super::state::UiState;

/// When a new observer receives its first snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubscribeMode {
    /// First delivery is the next publish after subscribing.
    #[default]
    NextPublish,
    /// The current snapshot is delivered once, immediately, on subscribe.
    ReplayLatest,
}

/// Errors raised by misuse of a [`StateChannel`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    /// An observer tried to publish while it was being notified.
    #[error("Cannot publish from inside an observer callback")]
    ReentrantPublish,
}

/// Identifies one registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Observer<S> = Arc<dyn Fn(&S) + Send + Sync>;

struct Inner<S> {
    current: RwLock<S>,
    observers: Mutex<Vec<(SubscriptionId, Observer<S>)>>,
    /// Serializes publishers. The flag is set while observers run so a
    /// publish from the notifying thread can be told apart from a wait.
    publish_lock: ReentrantMutex<Cell<bool>>,
    next_id: AtomicU64,
    mode: SubscribeMode,
}

impl<S> Inner<S> {
    fn remove(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.lock();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        let removed = observers.len() != before;
        if removed {
            tracing::debug!(
                subscription = id.0,
                observers = observers.len(),
                "Observer removed"
            );
        }
        removed
    }
}

/// Shared handle to the current snapshot and its observers.
///
/// Cloning the handle is cheap; all clones see the same state.
pub struct StateChannel<S: UiState> {
    inner: Arc<Inner<S>>,
}

impl<S: UiState> Clone for StateChannel<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: UiState> Default for StateChannel<S> {
    fn default() -> Self {
        Self::new(SubscribeMode::default())
    }
}

impl<S: UiState + fmt::Debug> fmt::Debug for StateChannel<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateChannel")
            .field("current", &*self.inner.current.read())
            .field("observers", &self.observer_count())
            .field("mode", &self.inner.mode)
            .finish()
    }
}

impl<S: UiState> StateChannel<S> {
    /// Create a channel holding `S::default()`.
    pub fn new(mode: SubscribeMode) -> Self {
        Self::with_state(S::default(), mode)
    }

    /// Create a channel holding `initial`.
    pub fn with_state(initial: S, mode: SubscribeMode) -> Self {
        Self {
            inner: Arc::new(Inner {
                current: RwLock::new(initial),
                observers: Mutex::new(Vec::new()),
                publish_lock: ReentrantMutex::new(Cell::new(false)),
                next_id: AtomicU64::new(1),
                mode,
            }),
        }
    }

    pub fn mode(&self) -> SubscribeMode {
        self.inner.mode
    }

    /// Latest published snapshot.
    pub fn current(&self) -> S {
        self.inner.current.read().clone()
    }

    pub fn observer_count(&self) -> usize {
        self.inner.observers.lock().len()
    }

    /// Register `observer` for every future publish.
    ///
    /// With [`SubscribeMode::ReplayLatest`] the observer is also called once
    /// with the current snapshot before this returns. Registration and replay
    /// happen under the publish lock, so no concurrent publish is missed or
    /// delivered twice.
    pub fn subscribe<F>(&self, observer: F) -> Subscription<S>
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        let publishing = self.inner.publish_lock.lock();
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let observer: Observer<S> = Arc::new(observer);

        let count = {
            let mut observers = self.inner.observers.lock();
            observers.push((id, Arc::clone(&observer)));
            observers.len()
        };
        tracing::debug!(subscription = id.0, observers = count, "Observer registered");

        if self.inner.mode == SubscribeMode::ReplayLatest {
            let snapshot = self.current();
            let _notifying = NotifyingFlag::set(&publishing);
            observer(&snapshot);
        }

        Subscription {
            id,
            channel: Arc::downgrade(&self.inner),
        }
    }

    /// Stop delivering to `id`. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.remove(id)
    }

    /// Replace the current snapshot and notify every observer.
    pub fn publish(&self, next: S) -> Result<(), ChannelError> {
        self.update(|_| (next, ()))
    }

    /// Atomically derive the next snapshot from the current one and publish it.
    ///
    /// `f` receives the current snapshot and returns the next snapshot plus a
    /// value handed back to the caller. No other publish can interleave
    /// between the read and the notification of every observer.
    ///
    /// # Errors
    /// Returns [`ChannelError::ReentrantPublish`] when called from inside an
    /// observer callback on the notifying thread. State is unchanged.
    pub fn update<O, F>(&self, f: F) -> Result<O, ChannelError>
    where
        F: FnOnce(&S) -> (S, O),
    {
        let publishing = self.inner.publish_lock.lock();
        if publishing.get() {
            tracing::warn!("Rejected publish from inside an observer callback");
            return Err(ChannelError::ReentrantPublish);
        }

        let snapshot = self.current();
        let (next, outcome) = f(&snapshot);
        *self.inner.current.write() = next.clone();

        // Observers may subscribe or unsubscribe while being notified, so
        // the list lock is released before any of them runs.
        let observers: Vec<Observer<S>> = self
            .inner
            .observers
            .lock()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        let _notifying = NotifyingFlag::set(&publishing);
        for observer in &observers {
            observer(&next);
        }

        Ok(outcome)
    }
}

/// Marks the notifying section and restores the previous flag on drop,
/// even if an observer panics. Nested sections (a replay triggered from
/// inside a notification) keep the outer section marked.
struct NotifyingFlag<'a> {
    flag: &'a Cell<bool>,
    previous: bool,
}

impl<'a> NotifyingFlag<'a> {
    fn set(flag: &'a Cell<bool>) -> Self {
        let previous = flag.replace(true);
        Self { flag, previous }
    }
}

impl Drop for NotifyingFlag<'_> {
    fn drop(&mut self) {
        self.flag.set(self.previous);
    }
}

/// Handle returned by [`StateChannel::subscribe`].
///
/// Dropping the handle keeps the observer registered; call
/// [`Subscription::cancel`] or [`StateChannel::unsubscribe`] to stop it.
pub struct Subscription<S> {
    id: SubscriptionId,
    channel: Weak<Inner<S>>,
}

impl<S> Subscription<S> {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Unregister the observer. Returns false if the channel is gone or the
    /// observer was already removed.
    pub fn cancel(self) -> bool {
        match self.channel.upgrade() {
            Some(inner) => inner.remove(self.id),
            None => false,
        }
    }
}

impl<S> fmt::Debug for Subscription<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
