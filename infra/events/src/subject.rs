use parking_lot::{Mutex, ReentrantMutex, RwLock};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tokio::sync::watch;
use tracing::trace;

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Identifier of a single registered callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Type-erased removal hook held by a [`Subscription`].
trait Detach: Send + Sync {
    fn detach(&self, id: SubscriptionId) -> bool;
    fn contains(&self, id: SubscriptionId) -> bool;
}

struct SubjectInner<T> {
    current: RwLock<Arc<T>>,
    subscribers: Mutex<Vec<(SubscriptionId, Callback<T>)>>,
    // Serialises emissions across threads; re-entrant so a callback may emit.
    emitting: ReentrantMutex<()>,
    next_id: AtomicU64,
    watch: watch::Sender<Arc<T>>,
}

impl<T: Send + Sync + 'static> Detach for SubjectInner<T> {
    fn detach(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.lock();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        before != subscribers.len()
    }

    fn contains(&self, id: SubscriptionId) -> bool {
        self.subscribers.lock().iter().any(|(existing, _)| *existing == id)
    }
}

/// A replay-latest observable value.
///
/// Every subscriber is called once with the current value at subscription time and then
/// once per [`Subject::emit`], synchronously on the emitting thread and in emission order.
/// Callbacks run outside the subscriber lock, so they may subscribe, unsubscribe or emit.
/// A subscriber removed while an emission is in flight still sees that emission.
///
/// # Examples
/// ```rust
/// use folio_event_bus::Subject;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let subject = Subject::new(1_u32);
/// let seen = Arc::new(AtomicUsize::new(0));
///
/// let counter = Arc::clone(&seen);
/// let subscription = subject.subscribe(move |value: &u32| {
///     counter.fetch_add(*value as usize, Ordering::SeqCst);
/// });
///
/// subject.emit(2);
/// assert_eq!(seen.load(Ordering::SeqCst), 3);
///
/// drop(subscription);
/// subject.emit(10);
/// assert_eq!(seen.load(Ordering::SeqCst), 3);
/// ```
pub struct Subject<T> {
    inner: Arc<SubjectInner<T>>,
}

impl<T> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T: fmt::Debug> fmt::Debug for Subject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("current", &*self.inner.current.read())
            .field("subscribers", &self.inner.subscribers.lock().len())
            .finish()
    }
}

impl<T: Send + Sync + 'static> Subject<T> {
    /// Creates a subject holding `initial` as its current value.
    #[must_use]
    pub fn new(initial: T) -> Self {
        let initial = Arc::new(initial);
        let (watch, _) = watch::channel(Arc::clone(&initial));
        Self {
            inner: Arc::new(SubjectInner {
                current: RwLock::new(initial),
                subscribers: Mutex::new(Vec::new()),
                emitting: ReentrantMutex::new(()),
                next_id: AtomicU64::new(0),
                watch,
            }),
        }
    }

    /// Registers `callback` and immediately replays the current value to it.
    ///
    /// The callback stays registered until the returned [`Subscription`] is dropped or
    /// explicitly unsubscribed.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let _emitting = self.inner.emitting.lock();

        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let callback: Callback<T> = Arc::new(callback);
        self.inner.subscribers.lock().push((id, Arc::clone(&callback)));

        let current = Arc::clone(&self.inner.current.read());
        trace!(subject = std::any::type_name::<T>(), id = id.0, "Subscriber registered");
        callback(&current);

        let source: Weak<dyn Detach> = Arc::downgrade(&self.inner) as Weak<dyn Detach>;
        Subscription { id, source: Some(source) }
    }

    /// Replaces the current value and delivers it to every subscriber.
    ///
    /// Returns the number of callbacks invoked.
    pub fn emit(&self, value: T) -> usize {
        self.emit_arc(Arc::new(value))
    }

    /// Same as [`Subject::emit`] for an already shared value.
    pub fn emit_arc(&self, value: Arc<T>) -> usize {
        let _emitting = self.inner.emitting.lock();

        *self.inner.current.write() = Arc::clone(&value);
        self.inner.watch.send_replace(Arc::clone(&value));

        let callbacks: Vec<Callback<T>> =
            self.inner.subscribers.lock().iter().map(|(_, cb)| Arc::clone(cb)).collect();
        for callback in &callbacks {
            callback(&value);
        }

        trace!(
            subject = std::any::type_name::<T>(),
            delivered = callbacks.len(),
            "Value emitted"
        );
        callbacks.len()
    }

    /// Returns the latest emitted (or initial) value.
    #[must_use]
    pub fn current(&self) -> Arc<T> {
        Arc::clone(&self.inner.current.read())
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().len()
    }

    /// Async view of the same value stream; the receiver starts at the current value.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<Arc<T>> {
        self.inner.watch.subscribe()
    }

    /// Drops every registered callback. Returns how many were removed.
    ///
    /// Outstanding [`Subscription`] handles become inactive.
    pub fn close(&self) -> usize {
        let mut subscribers = self.inner.subscribers.lock();
        let count = subscribers.len();
        subscribers.clear();
        count
    }
}

/// Handle for a registered callback. Dropping it unsubscribes.
#[must_use = "dropping a Subscription immediately unsubscribes the callback"]
pub struct Subscription {
    id: SubscriptionId,
    source: Option<Weak<dyn Detach>>,
}

impl Subscription {
    #[must_use]
    pub const fn id(&self) -> SubscriptionId {
        self.id
    }

    /// `true` while the callback is still registered on a live subject.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.source.as_ref().and_then(Weak::upgrade).is_some_and(|source| source.contains(self.id))
    }

    /// Removes the callback now. Returns `false` if it was already gone.
    pub fn unsubscribe(mut self) -> bool {
        self.release()
    }

    fn release(&mut self) -> bool {
        let removed = self
            .source
            .take()
            .and_then(|source| source.upgrade())
            .is_some_and(|source| source.detach(self.id));
        if removed {
            trace!(id = self.id.0, "Subscriber released");
        }
        removed
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex as StdMutex;

    fn recorder<T: Clone + Send + 'static>() -> (Arc<StdMutex<Vec<T>>>, impl Fn(&T) + Send + Sync) {
        let seen = Arc::new(StdMutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |value: &T| sink.lock().unwrap().push(value.clone()))
    }

    #[test]
    fn subscribe_replays_current_value() {
        let subject = Subject::new("en");
        let (seen, callback) = recorder::<&str>();

        let _sub = subject.subscribe(callback);

        assert_eq!(*seen.lock().unwrap(), vec!["en"]);
    }

    #[test]
    fn emissions_arrive_in_order() {
        let subject = Subject::new(0);
        let (seen, callback) = recorder::<i32>();
        let _sub = subject.subscribe(callback);

        for i in 1..=5 {
            assert_eq!(subject.emit(i), 1);
        }

        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(*subject.current(), 5);
    }

    #[test]
    fn dropping_subscription_detaches_callback() {
        let subject = Subject::new(0);
        let (seen, callback) = recorder::<i32>();

        let sub = subject.subscribe(callback);
        assert!(sub.is_active());
        assert_eq!(subject.subscriber_count(), 1);

        drop(sub);
        assert_eq!(subject.subscriber_count(), 0);
        assert_eq!(subject.emit(1), 0);
        assert_eq!(*seen.lock().unwrap(), vec![0]);
    }

    #[test]
    fn unsubscribe_reports_whether_it_removed_anything() {
        let subject = Subject::new(());
        let sub = subject.subscribe(|_| {});
        let other = subject.subscribe(|_| {});

        assert_eq!(subject.close(), 2);
        assert!(!other.is_active());
        assert!(!sub.unsubscribe());
    }

    #[test]
    fn subscription_outliving_subject_is_inert() {
        let subject = Subject::new(1);
        let sub = subject.subscribe(|_| {});
        drop(subject);

        assert!(!sub.is_active());
        assert!(!sub.unsubscribe());
    }

    #[test]
    fn callback_may_emit_reentrantly() {
        let subject = Subject::new(0);
        let (seen, callback) = recorder::<i32>();
        let _recording = subject.subscribe(callback);

        let echo = subject.clone();
        let _bouncing = subject.subscribe(move |value: &i32| {
            if *value == 1 {
                echo.emit(2);
            }
        });

        subject.emit(1);

        assert_eq!(*subject.current(), 2);
        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn watch_bridge_observes_emissions() {
        let subject = Subject::new(String::from("en"));
        let mut rx = subject.watch();
        assert_eq!(rx.borrow().as_str(), "en");

        subject.emit(String::from("fr"));
        rx.changed().await.unwrap();

        assert_eq!(rx.borrow_and_update().as_str(), "fr");
    }
}
