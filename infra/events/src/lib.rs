//! # Event Bus
//!
//! Replay-latest subjects for sharing application-wide state between decoupled modules.
//!
//! ## Overview
//!
//! A [`Subject`] holds a current value and calls its subscribers synchronously: once on
//! subscription with the current value and once per emission. Every subscription returns
//! a [`Subscription`] guard that detaches the callback when dropped. The [`EventBus`]
//! keeps one subject per value type so a composition root can own and hand out the
//! shared streams explicitly.
//!
//! ## Features
//!
//! * **Type-Safe**: Subjects are identified by the Rust type of their value.
//! * **Replay latest**: New subscribers always see the current value first.
//! * **Scoped**: Dropping the [`Subscription`] releases the callback.
//! * **Async bridge**: [`Subject::watch`] exposes a `tokio` watch receiver.
//!
//! # Example
//!
//! ```rust
//! use folio_event_bus::{EventBus, EventBusError};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Zoom(u32);
//!
//! fn main() -> Result<(), EventBusError> {
//!     let bus = EventBus::new();
//!     let zoom = bus.subject(|| Zoom(100))?;
//!
//!     let last = Arc::new(AtomicU32::new(0));
//!     let sink = Arc::clone(&last);
//!     let _guard = zoom.subscribe(move |z: &Zoom| sink.store(z.0, Ordering::SeqCst));
//!     assert_eq!(last.load(Ordering::SeqCst), 100);
//!
//!     bus.publish(Zoom(150))?;
//!     assert_eq!(last.load(Ordering::SeqCst), 150);
//!     Ok(())
//! }
//! ```

mod bus;
mod error;
mod receiver;
mod subject;

pub use bus::{Event, EventBus};
pub use error::{EventBusError, EventBusErrorExt};
pub use receiver::EventReceiverExt;
pub use subject::{Subject, Subscription, SubscriptionId};
pub use tokio::sync::watch::Receiver as WatchReceiver;
