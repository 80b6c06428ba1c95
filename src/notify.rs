//! Change Notification
//!
//! A synchronous observer side channel for record mutations. Every mutator
//! on a record builds a [`Notification`] and hands it to the observers
//! registered on that record, on the calling thread, in mutation order.
//!
//! Nothing in the model depends on notifications being delivered. Records
//! without observers never build a notification at all.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use serde::Serialize;

use crate::datatypes::{QName, XsdDateTime};
use crate::model::ObjectId;

// =============================================================================
// Process-wide defaults
// =============================================================================

static DELIVER_BY_DEFAULT: AtomicBool = AtomicBool::new(true);
static TRACE_NOTIFICATIONS: AtomicBool = AtomicBool::new(false);

/// Whether newly constructed records deliver notifications
pub fn deliver_by_default() -> bool {
    DELIVER_BY_DEFAULT.load(Ordering::Relaxed)
}

/// Set whether newly constructed records deliver notifications.
///
/// Existing records keep their own setting.
pub fn set_deliver_by_default(deliver: bool) {
    DELIVER_BY_DEFAULT.store(deliver, Ordering::Relaxed);
}

/// Whether every delivered notification is logged at trace level
pub fn trace_enabled() -> bool {
    TRACE_NOTIFICATIONS.load(Ordering::Relaxed)
}

/// Enable or disable trace logging of delivered notifications
pub fn set_trace(enabled: bool) {
    TRACE_NOTIFICATIONS.store(enabled, Ordering::Relaxed);
}

// =============================================================================
// Feature
// =============================================================================

/// Identifies one named field of one schema type.
///
/// Every record type exposes its features as associated constants, e.g.
/// `SortPropertyType::SORT_ORDER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Feature {
    /// Rust name of the owning record type
    pub owner: &'static str,
    /// Rust name of the field
    pub name: &'static str,
}

impl Feature {
    pub const fn new(owner: &'static str, name: &'static str) -> Self {
        Self { owner, name }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.owner, self.name)
    }
}

// =============================================================================
// Values
// =============================================================================

/// Reference to a record, as carried in notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ObjectRef {
    pub id: ObjectId,
    pub kind: &'static str,
}

/// Old or new value of a feature, rendered for observers.
///
/// Enumerations and unions are rendered through their lexical form.
/// Records appear as [`ObjectRef`]s, choice group entries keep their tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    None,
    Bool(bool),
    Double(f64),
    Text(String),
    QName(QName),
    DateTime(XsdDateTime),
    Object(ObjectRef),
    Entry { tag: &'static str, value: Box<Value> },
    List(Vec<Value>),
}

impl Value {
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Tagged entry of a choice group
    pub fn entry(tag: &'static str, value: Value) -> Self {
        Value::Entry {
            tag,
            value: Box::new(value),
        }
    }

    pub fn as_object(&self) -> Option<ObjectRef> {
        match self {
            Value::Object(r) => Some(*r),
            Value::Entry { value, .. } => value.as_object(),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<QName> for Value {
    fn from(v: QName) -> Self {
        Value::QName(v)
    }
}

impl From<&QName> for Value {
    fn from(v: &QName) -> Self {
        Value::QName(v.clone())
    }
}

impl From<XsdDateTime> for Value {
    fn from(v: XsdDateTime) -> Self {
        Value::DateTime(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::None, Into::into)
    }
}

/// Render a field value by reference, for notifications
pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Double(*self)
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl ToValue for QName {
    fn to_value(&self) -> Value {
        Value::QName(self.clone())
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::None, ToValue::to_value)
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

// =============================================================================
// Notification
// =============================================================================

/// What happened to a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChangeKind {
    Set,
    Unset,
    Add,
    AddMany,
    Remove,
    RemoveMany,
}

/// Set/unset transition of a feature that carries an explicit set flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SetTransition {
    pub was_set: bool,
    pub is_set: bool,
}

/// One change to one feature of one record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub notifier: ObjectRef,
    pub feature: Feature,
    pub kind: ChangeKind,
    pub old_value: Value,
    pub new_value: Value,
    /// List index for `Add` and `Remove`
    pub position: Option<usize>,
    /// Present only for unsettable features
    pub transition: Option<SetTransition>,
}

impl Notification {
    pub fn new(
        notifier: ObjectRef,
        feature: Feature,
        kind: ChangeKind,
        old_value: Value,
        new_value: Value,
    ) -> Self {
        Self {
            notifier,
            feature,
            kind,
            old_value,
            new_value,
            position: None,
            transition: None,
        }
    }

    pub fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_transition(mut self, was_set: bool, is_set: bool) -> Self {
        self.transition = Some(SetTransition { was_set, is_set });
        self
    }

    /// Whether the feature was explicitly set before this change.
    ///
    /// Features without a set flag count as set when the old value is present.
    pub fn was_set(&self) -> bool {
        match self.transition {
            Some(t) => t.was_set,
            None => !self.old_value.is_none(),
        }
    }

    /// True when the new value equals the old one and the set state did not move
    pub fn is_touch(&self) -> bool {
        let same_state = self.transition.map_or(true, |t| t.was_set == t.is_set);
        same_state && self.old_value == self.new_value
    }
}

// =============================================================================
// Observers
// =============================================================================

/// Receives notifications from the records it is registered on
pub trait Observer: Send + Sync {
    fn notify_changed(&self, notification: &Notification);
}

impl<F> Observer for F
where
    F: Fn(&Notification) + Send + Sync,
{
    fn notify_changed(&self, notification: &Notification) {
        self(notification)
    }
}

/// Observer that keeps every notification it receives, in order
#[derive(Debug, Default)]
pub struct ChangeRecorder {
    received: Mutex<Vec<Notification>>,
}

impl ChangeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the notifications received so far
    pub fn notifications(&self) -> Vec<Notification> {
        self.received
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Drain the recorded notifications
    pub fn take(&self) -> Vec<Notification> {
        self.received
            .lock()
            .map(|mut guard| std::mem::take(&mut *guard))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.received.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Observer for ChangeRecorder {
    fn notify_changed(&self, notification: &Notification) {
        if let Ok(mut guard) = self.received.lock() {
            guard.push(notification.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notifier() -> ObjectRef {
        ObjectRef {
            id: ObjectId::next(),
            kind: "SortPropertyType",
        }
    }

    #[test]
    fn test_touch_detection() {
        let feature = Feature::new("SortPropertyType", "sort_order");
        let touch = Notification::new(
            notifier(),
            feature,
            ChangeKind::Set,
            Value::from("ASC"),
            Value::from("ASC"),
        )
        .with_transition(true, true);
        assert!(touch.is_touch());

        let first_set = Notification::new(
            notifier(),
            feature,
            ChangeKind::Set,
            Value::from("ASC"),
            Value::from("ASC"),
        )
        .with_transition(false, true);
        assert!(!first_set.is_touch());
        assert!(!first_set.was_set());
    }

    #[test]
    fn test_recorder_take_drains() {
        let recorder = ChangeRecorder::new();
        let n = Notification::new(
            notifier(),
            Feature::new("FunctionType", "name"),
            ChangeKind::Set,
            Value::None,
            Value::from("abs"),
        );
        recorder.notify_changed(&n);
        recorder.notify_changed(&n);
        assert_eq!(recorder.len(), 2);
        assert_eq!(recorder.take().len(), 2);
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_option_into_value() {
        let none: Option<String> = None;
        assert_eq!(Value::from(none), Value::None);
        assert_eq!(Value::from(Some(true)), Value::Bool(true));
    }
}
