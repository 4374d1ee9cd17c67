use crate::bus::Event;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

/// Ergonomic helpers for the async side of a [`Subject`](crate::Subject).
pub trait EventReceiverExt<T> {
    /// Waits for the next change and returns the new value, or `None` once the subject is gone.
    fn recv(&mut self) -> impl Future<Output = Option<Arc<T>>> + Send;

    /// Returns the value currently held, marking it as seen.
    fn latest(&mut self) -> Arc<T>;
}

impl<T: Event> EventReceiverExt<T> for watch::Receiver<Arc<T>> {
    async fn recv(&mut self) -> Option<Arc<T>> {
        match self.changed().await {
            Ok(()) => Some(Arc::clone(&self.borrow_and_update())),
            Err(_) => None,
        }
    }

    fn latest(&mut self) -> Arc<T> {
        Arc::clone(&self.borrow_and_update())
    }
}
