//! Object identity, container links and the record traits

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, trace};

use crate::catalog::TypeInfo;
use crate::notify::{self, Feature, Notification, ObjectRef, Observer, ToValue, Value};

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

// =============================================================================
// Identity
// =============================================================================

/// Process-unique identity of a record instance.
///
/// Ids are never reused, so a detached record can still be recognised in
/// notifications that were delivered before it was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ObjectId(u64);

impl ObjectId {
    pub(crate) fn next() -> Self {
        Self(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Link from a contained record to its owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Container {
    pub parent: ObjectRef,
    pub feature: Feature,
}

// =============================================================================
// Object Header
// =============================================================================

/// Per-instance bookkeeping shared by every record: identity, the link to
/// the owning record, and the registered observers.
///
/// The header is not part of a record's value: two headers always compare
/// equal, so record equality is structural.
pub struct ObjectHeader {
    id: ObjectId,
    kind: &'static str,
    container: Option<Container>,
    observers: Vec<Arc<dyn Observer>>,
    deliver: bool,
}

impl ObjectHeader {
    pub fn new(kind: &'static str) -> Self {
        Self {
            id: ObjectId::next(),
            kind,
            container: None,
            observers: Vec::new(),
            deliver: notify::deliver_by_default(),
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn object_ref(&self) -> ObjectRef {
        ObjectRef {
            id: self.id,
            kind: self.kind,
        }
    }

    pub fn container(&self) -> Option<Container> {
        self.container
    }

    pub fn add_observer(&mut self, observer: Arc<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Remove a previously added observer. Returns false if it was not registered.
    pub fn remove_observer(&mut self, observer: &Arc<dyn Observer>) -> bool {
        let before = self.observers.len();
        self.observers.retain(|o| !Arc::ptr_eq(o, observer));
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn deliver(&self) -> bool {
        self.deliver
    }

    pub fn set_deliver(&mut self, deliver: bool) {
        self.deliver = deliver;
    }

    pub(crate) fn attach(&mut self, parent: ObjectRef, feature: Feature) {
        if let Some(previous) = self.container {
            if previous.parent.id != parent.id || previous.feature != feature {
                debug!(
                    object = %self.id,
                    kind = self.kind,
                    from = %previous.feature,
                    to = %feature,
                    "moving record to a new container"
                );
            }
        }
        self.container = Some(Container { parent, feature });
    }

    pub(crate) fn detach(&mut self) {
        self.container = None;
    }

    /// Build and deliver a notification, if anyone is listening
    pub(crate) fn notify(&self, build: impl FnOnce(ObjectRef) -> Notification) {
        if !self.deliver || self.observers.is_empty() {
            return;
        }
        let notification = build(self.object_ref());
        if notify::trace_enabled() {
            trace!(
                object = %self.id,
                feature = %notification.feature,
                kind = ?notification.kind,
                "notify"
            );
        }
        for observer in &self.observers {
            observer.notify_changed(&notification);
        }
    }
}

impl fmt::Debug for ObjectHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectHeader")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("container", &self.container)
            .field("observers", &self.observers.len())
            .field("deliver", &self.deliver)
            .finish()
    }
}

impl PartialEq for ObjectHeader {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

// =============================================================================
// Record
// =============================================================================

/// A contained child as reported by [`Record::children`]
#[derive(Clone, Copy)]
pub struct Child<'a> {
    pub feature: Feature,
    pub record: &'a dyn Record,
}

impl fmt::Debug for Child<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Child")
            .field("feature", &self.feature)
            .field("record", &self.record.object_ref())
            .finish()
    }
}

/// Builder used by record types to list their contained children
pub(crate) struct Children<'a>(Vec<Child<'a>>);

impl<'a> Children<'a> {
    pub(crate) fn new() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn one<T: Contained>(mut self, feature: Feature, slot: &'a Option<T>) -> Self {
        if let Some(record) = slot.as_ref().and_then(Contained::as_record) {
            self.0.push(Child { feature, record });
        }
        self
    }

    pub(crate) fn many<T: Contained>(mut self, feature: Feature, items: &'a [T]) -> Self {
        self.0.extend(
            items
                .iter()
                .filter_map(Contained::as_record)
                .map(|record| Child { feature, record }),
        );
        self
    }

    pub(crate) fn finish(self) -> Vec<Child<'a>> {
        self.0
    }
}

/// Common surface of every schema record type
pub trait Record: fmt::Debug + Send + Sync {
    /// Static catalog entry for this record's schema type
    fn type_info(&self) -> &'static TypeInfo;

    fn header(&self) -> &ObjectHeader;

    fn header_mut(&mut self) -> &mut ObjectHeader;

    /// Directly contained records, in feature order then list order
    fn children(&self) -> Vec<Child<'_>>;

    fn id(&self) -> ObjectId {
        self.header().id()
    }

    fn kind(&self) -> &'static str {
        self.header().kind()
    }

    fn object_ref(&self) -> ObjectRef {
        self.header().object_ref()
    }

    fn container(&self) -> Option<Container> {
        self.header().container()
    }

    fn add_observer(&mut self, observer: Arc<dyn Observer>) {
        self.header_mut().add_observer(observer);
    }

    fn remove_observer(&mut self, observer: &Arc<dyn Observer>) -> bool {
        self.header_mut().remove_observer(observer)
    }

    fn set_deliver(&mut self, deliver: bool) {
        self.header_mut().set_deliver(deliver);
    }
}

impl<T: ?Sized + Record> ToValue for T {
    fn to_value(&self) -> Value {
        Value::Object(self.object_ref())
    }
}

// =============================================================================
// Contained
// =============================================================================

/// Anything that can sit in a feature slot or list of a record.
///
/// Records expose themselves; choice group entries expose the record they
/// wrap (if any); plain values such as strings and wildcards expose none.
pub trait Contained: ToValue {
    fn as_record(&self) -> Option<&dyn Record>;

    fn as_record_mut(&mut self) -> Option<&mut dyn Record>;
}

impl<T: Record> Contained for T {
    fn as_record(&self) -> Option<&dyn Record> {
        Some(self)
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        Some(self)
    }
}

impl Contained for String {
    fn as_record(&self) -> Option<&dyn Record> {
        None
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        None
    }
}

pub(crate) fn attach<T: Contained>(child: &mut T, parent: ObjectRef, feature: Feature) {
    if let Some(record) = child.as_record_mut() {
        record.header_mut().attach(parent, feature);
    }
}

pub(crate) fn detach<T: Contained>(child: &mut T) {
    if let Some(record) = child.as_record_mut() {
        record.header_mut().detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_object_renders_as_object_ref() {
        let literal = crate::fes::LiteralType::new();
        let record: &dyn Record = &literal;
        assert_eq!(record.to_value(), Value::Object(literal.object_ref()));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = ObjectHeader::new("A");
        let b = ObjectHeader::new("A");
        assert_ne!(a.id(), b.id());
        assert_eq!(a, b);
    }

    #[test]
    fn test_attach_and_detach() {
        let parent = ObjectHeader::new("Parent");
        let mut child = ObjectHeader::new("Child");
        let feature = Feature::new("Parent", "child");

        child.attach(parent.object_ref(), feature);
        let container = child.container().unwrap();
        assert_eq!(container.parent.id, parent.id());
        assert_eq!(container.feature, feature);

        child.detach();
        assert!(child.container().is_none());
    }

    #[test]
    fn test_observer_removal() {
        let mut header = ObjectHeader::new("A");
        let observer: Arc<dyn Observer> = Arc::new(|_: &Notification| {});
        header.add_observer(observer.clone());
        assert_eq!(header.observer_count(), 1);
        assert!(header.remove_observer(&observer));
        assert!(!header.remove_observer(&observer));
    }
}
