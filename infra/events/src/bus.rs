use crate::error::EventBusError;
use crate::subject::Subject;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::sync::Arc;
use tracing::{debug, trace};

/// Marker trait for types that can be carried by the [`EventBus`].
///
/// Any type that is `Send + Sync + 'static` automatically implements this trait.
pub trait Event: Any + Send + Sync + 'static {}
impl<T: Any + Send + Sync + 'static> Event for T {}

/// Object-safe view over a `Subject<T>` of any `T`.
trait ErasedSubject: Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn close(&self) -> usize;
}

impl<T: Event> ErasedSubject for Subject<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn close(&self) -> usize {
        Subject::close(self)
    }
}

/// Registry of replay-latest subjects keyed by the [`TypeId`] of their value.
///
/// The bus is owned by the application root and handed to whoever needs a shared stream;
/// cloning it is cheap and every clone sees the same subjects.
#[derive(Clone, Default)]
pub struct EventBus {
    subjects: Arc<RwLock<FxHashMap<TypeId, Box<dyn ErasedSubject>>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus").field("subjects", &self.subjects.read().len()).finish()
    }
}

impl EventBus {
    /// Creates a new, empty `EventBus`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the subject for `T`, creating it with `initial()` if absent.
    ///
    /// # Errors
    /// Returns [`EventBusError::TypeMismatch`] if the stored subject cannot be downcast,
    /// which indicates a broken registry invariant.
    ///
    /// # Examples
    /// ```rust
    /// use folio_event_bus::EventBus;
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// struct Theme(&'static str);
    ///
    /// # fn main() -> Result<(), folio_event_bus::EventBusError> {
    /// let bus = EventBus::new();
    /// let theme = bus.subject(|| Theme("light"))?;
    /// bus.publish(Theme("dark"))?;
    /// assert_eq!(*theme.current(), Theme("dark"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn subject<T: Event>(&self, initial: impl FnOnce() -> T) -> Result<Subject<T>, EventBusError> {
        if let Ok(existing) = self.get::<T>() {
            return Ok(existing);
        }

        let mut subjects = self.subjects.write();
        let entry = subjects.entry(TypeId::of::<T>()).or_insert_with(|| {
            trace!(event = std::any::type_name::<T>(), "Initializing new subject");
            let subject: Box<dyn ErasedSubject> = Box::new(Subject::new(initial()));
            subject
        });
        downcast::<T>(entry.as_ref())
    }

    /// Returns the subject for `T` if one was created.
    ///
    /// # Errors
    /// Returns [`EventBusError::ChannelNotFound`] when no subject exists for `T`.
    pub fn get<T: Event>(&self) -> Result<Subject<T>, EventBusError> {
        let subjects = self.subjects.read();
        let entry = subjects.get(&TypeId::of::<T>()).ok_or_else(|| {
            EventBusError::ChannelNotFound {
                message: std::any::type_name::<T>().into(),
                context: None,
            }
        })?;
        downcast::<T>(entry.as_ref())
    }

    /// Emits `event` on the existing subject for `T`.
    ///
    /// Returns the number of callbacks invoked.
    ///
    /// # Errors
    /// Returns [`EventBusError::ChannelNotFound`] when no subject exists for `T`.
    pub fn publish<T: Event>(&self, event: T) -> Result<usize, EventBusError> {
        let subject = self.get::<T>()?;
        Ok(subject.emit(event))
    }

    #[must_use]
    pub fn contains<T: Event>(&self) -> bool {
        self.subjects.read().contains_key(&TypeId::of::<T>())
    }

    /// Closes every subject and forgets them.
    ///
    /// Returns the number of subscribers that were detached.
    #[must_use]
    pub fn shutdown(&self) -> usize {
        let drained: Vec<Box<dyn ErasedSubject>> =
            self.subjects.write().drain().map(|(_, subject)| subject).collect();
        let detached: usize = drained.iter().map(|subject| subject.close()).sum();
        debug!(subjects = drained.len(), detached, "Event bus shut down");
        detached
    }
}

fn downcast<T: Event>(subject: &dyn ErasedSubject) -> Result<Subject<T>, EventBusError> {
    subject.as_any().downcast_ref::<Subject<T>>().cloned().ok_or_else(|| {
        EventBusError::TypeMismatch {
            message: std::any::type_name::<T>().into(),
            context: Some("Unexpected subject type".into()),
        }
    })
}
