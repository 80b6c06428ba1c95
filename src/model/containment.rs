//! Field mutation: single slots, unsettable attributes and lists
//!
//! Every mutator in the `fes` records funnels through the helpers here so
//! that container links are maintained and notifications are emitted the
//! same way for every type.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::model::object::{attach, detach, Contained, ObjectHeader};
use crate::model::Settable;
use crate::notify::{ChangeKind, Feature, Notification, ToValue, Value};

// =============================================================================
// Single-valued fields
// =============================================================================

/// Replace a plain attribute slot and notify
pub(crate) fn set_attribute<T: ToValue>(
    header: &ObjectHeader,
    feature: Feature,
    slot: &mut Option<T>,
    value: Option<T>,
) -> Option<T> {
    let old = std::mem::replace(slot, value);
    header.notify(|notifier| {
        Notification::new(
            notifier,
            feature,
            ChangeKind::Set,
            old.to_value(),
            slot.to_value(),
        )
    });
    old
}

pub(crate) fn set_settable<T: Clone + ToValue>(
    header: &ObjectHeader,
    feature: Feature,
    slot: &mut Settable<T>,
    value: T,
) {
    let (old, was_set) = slot.set(value);
    header.notify(|notifier| {
        Notification::new(
            notifier,
            feature,
            ChangeKind::Set,
            old.to_value(),
            slot.get().to_value(),
        )
        .with_transition(was_set, true)
    });
}

pub(crate) fn unset_settable<T: Clone + ToValue>(
    header: &ObjectHeader,
    feature: Feature,
    slot: &mut Settable<T>,
) {
    let (old, was_set) = slot.unset();
    header.notify(|notifier| {
        Notification::new(
            notifier,
            feature,
            ChangeKind::Unset,
            old.to_value(),
            slot.get().to_value(),
        )
        .with_transition(was_set, false)
    });
}

/// Swap the child held in a containment slot.
///
/// The incoming child is attached to `header`'s record under `feature`; the
/// outgoing child is detached and handed back to the caller.
pub(crate) fn replace_child<T: Contained>(
    header: &ObjectHeader,
    feature: Feature,
    slot: &mut Option<T>,
    value: Option<T>,
) -> Option<T> {
    let mut value = value;
    if let Some(child) = value.as_mut() {
        attach(child, header.object_ref(), feature);
    }
    let mut old = std::mem::replace(slot, value);
    if let Some(child) = old.as_mut() {
        detach(child);
    }
    header.notify(|notifier| {
        Notification::new(
            notifier,
            feature,
            ChangeKind::Set,
            old.to_value(),
            slot.to_value(),
        )
    });
    old
}

/// Hand out a guarded `&mut` to the child in a containment slot
pub(crate) fn child_mut<'a, T: Contained>(
    header: &'a ObjectHeader,
    feature: Feature,
    slot: &'a mut Option<T>,
) -> Option<ChildMut<'a, T>> {
    slot.as_mut().map(|child| ChildMut::new(header, feature, None, child))
}

/// Mutable access to a contained child.
///
/// Edits through the child's own setters notify on the child as usual. If
/// the child is overwritten as a whole (`*guard = other`), the replacement
/// is attached to the owner and a `Set` is emitted when the guard drops.
pub struct ChildMut<'a, T: Contained> {
    owner: &'a ObjectHeader,
    feature: Feature,
    position: Option<usize>,
    before: Value,
    child: &'a mut T,
}

impl<'a, T: Contained> ChildMut<'a, T> {
    fn new(
        owner: &'a ObjectHeader,
        feature: Feature,
        position: Option<usize>,
        child: &'a mut T,
    ) -> Self {
        Self {
            owner,
            feature,
            position,
            before: child.to_value(),
            child,
        }
    }
}

impl<T: Contained> Deref for ChildMut<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.child
    }
}

impl<T: Contained> DerefMut for ChildMut<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.child
    }
}

impl<T: Contained + fmt::Debug> fmt::Debug for ChildMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildMut")
            .field("feature", &self.feature)
            .field("child", &self.child)
            .finish()
    }
}

impl<T: Contained> Drop for ChildMut<'_, T> {
    fn drop(&mut self) {
        let after = self.child.to_value();
        if after == self.before {
            return;
        }
        attach(&mut *self.child, self.owner.object_ref(), self.feature);
        let before = std::mem::replace(&mut self.before, Value::None);
        let feature = self.feature;
        let position = self.position;
        self.owner.notify(|notifier| {
            let notification =
                Notification::new(notifier, feature, ChangeKind::Set, before, after);
            match position {
                Some(index) => notification.at(index),
                None => notification,
            }
        });
    }
}

// =============================================================================
// Lists
// =============================================================================

/// Mutation guard over a list-valued field of a record.
///
/// Entries pushed through the guard are attached to the owning record;
/// entries removed are detached and returned. The guard derefs to a slice
/// for reading.
pub struct ContainmentListMut<'a, T: Contained> {
    owner: &'a ObjectHeader,
    feature: Feature,
    items: &'a mut Vec<T>,
}

impl<'a, T: Contained> ContainmentListMut<'a, T> {
    pub(crate) fn new(owner: &'a ObjectHeader, feature: Feature, items: &'a mut Vec<T>) -> Self {
        Self {
            owner,
            feature,
            items,
        }
    }

    pub fn feature(&self) -> Feature {
        self.feature
    }

    pub fn get_mut(&mut self, index: usize) -> Option<ChildMut<'_, T>> {
        let owner = self.owner;
        let feature = self.feature;
        self.items
            .get_mut(index)
            .map(|child| ChildMut::new(owner, feature, Some(index), child))
    }

    pub fn push(&mut self, item: T) {
        let index = self.items.len();
        self.insert(index, item);
    }

    /// Append `item` and keep editing it through the returned guard
    pub fn push_mut(mut self, item: T) -> ChildMut<'a, T> {
        self.push(item);
        let index = self.items.len() - 1;
        let ContainmentListMut {
            owner,
            feature,
            items,
        } = self;
        ChildMut::new(owner, feature, Some(index), &mut items[index])
    }

    /// Insert at `index`, shifting later entries.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`, like [`Vec::insert`].
    pub fn insert(&mut self, index: usize, mut item: T) {
        attach(&mut item, self.owner.object_ref(), self.feature);
        self.items.insert(index, item);
        let feature = self.feature;
        let items = &*self.items;
        self.owner.notify(|notifier| {
            Notification::new(
                notifier,
                feature,
                ChangeKind::Add,
                Value::None,
                items[index].to_value(),
            )
            .at(index)
        });
    }

    /// Append every item in iteration order, with a single notification
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let start = self.items.len();
        for mut item in items {
            attach(&mut item, self.owner.object_ref(), self.feature);
            self.items.push(item);
        }
        let added = self.items.len() - start;
        if added == 0 {
            return;
        }
        if added == 1 {
            let feature = self.feature;
            let items = &*self.items;
            self.owner.notify(|notifier| {
                Notification::new(
                    notifier,
                    feature,
                    ChangeKind::Add,
                    Value::None,
                    items[start].to_value(),
                )
                .at(start)
            });
            return;
        }
        self.notify_many(ChangeKind::AddMany, start, Value::None, start..start + added);
    }

    /// Remove and detach the entry at `index`, or `None` if out of range
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        let mut item = self.items.remove(index);
        detach(&mut item);
        let feature = self.feature;
        self.owner.notify(|notifier| {
            Notification::new(
                notifier,
                feature,
                ChangeKind::Remove,
                item.to_value(),
                Value::None,
            )
            .at(index)
        });
        Some(item)
    }

    pub fn pop(&mut self) -> Option<T> {
        match self.items.len() {
            0 => None,
            len => self.remove(len - 1),
        }
    }

    /// Replace the entry at `index`, returning the detached previous entry.
    ///
    /// If `index` is out of range the item is handed back as `Err`.
    pub fn set(&mut self, index: usize, mut item: T) -> Result<T, T> {
        if index >= self.items.len() {
            return Err(item);
        }
        attach(&mut item, self.owner.object_ref(), self.feature);
        let mut old = std::mem::replace(&mut self.items[index], item);
        detach(&mut old);
        let feature = self.feature;
        let items = &*self.items;
        self.owner.notify(|notifier| {
            Notification::new(
                notifier,
                feature,
                ChangeKind::Set,
                old.to_value(),
                items[index].to_value(),
            )
            .at(index)
        });
        Ok(old)
    }

    /// Remove and detach every entry, returning them in order
    pub fn clear(&mut self) -> Vec<T> {
        let mut removed = std::mem::take(self.items);
        for item in removed.iter_mut() {
            detach(item);
        }
        self.notify_removed(&removed);
        removed
    }

    /// Remove and detach the entries for which `keep` returns false
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) -> Vec<T> {
        let mut kept = Vec::with_capacity(self.items.len());
        let mut removed = Vec::new();
        for item in std::mem::take(self.items) {
            if keep(&item) {
                kept.push(item);
            } else {
                removed.push(item);
            }
        }
        *self.items = kept;
        for item in removed.iter_mut() {
            detach(item);
        }
        self.notify_removed(&removed);
        removed
    }

    /// Clear the list, then append `items`
    pub fn replace_all<I: IntoIterator<Item = T>>(&mut self, items: I) -> Vec<T> {
        let removed = self.clear();
        self.extend(items);
        removed
    }

    fn notify_removed(&self, removed: &[T]) {
        match removed {
            [] => {}
            [only] => {
                let feature = self.feature;
                self.owner.notify(|notifier| {
                    Notification::new(
                        notifier,
                        feature,
                        ChangeKind::Remove,
                        only.to_value(),
                        Value::None,
                    )
                })
            }
            many => {
                let feature = self.feature;
                self.owner.notify(|notifier| {
                    Notification::new(
                        notifier,
                        feature,
                        ChangeKind::RemoveMany,
                        Value::List(many.iter().map(ToValue::to_value).collect()),
                        Value::None,
                    )
                })
            }
        }
    }

    fn notify_many(
        &self,
        kind: ChangeKind,
        position: usize,
        old_value: Value,
        range: std::ops::Range<usize>,
    ) {
        let feature = self.feature;
        let items = &*self.items;
        self.owner.notify(|notifier| {
            Notification::new(
                notifier,
                feature,
                kind,
                old_value,
                Value::List(items[range].iter().map(ToValue::to_value).collect()),
            )
            .at(position)
        });
    }
}

impl<T: Contained> Deref for ContainmentListMut<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ChangeRecorder;
    use std::sync::Arc;

    fn owner_with_recorder() -> (ObjectHeader, Arc<ChangeRecorder>) {
        let mut header = ObjectHeader::new("Owner");
        let recorder = Arc::new(ChangeRecorder::new());
        header.add_observer(recorder.clone());
        (header, recorder)
    }

    const NAMES: Feature = Feature::new("Owner", "names");

    #[test]
    fn test_extend_emits_one_add_many() {
        let (header, recorder) = owner_with_recorder();
        let mut names: Vec<String> = Vec::new();
        let mut list = ContainmentListMut::new(&header, NAMES, &mut names);
        list.extend(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(list.len(), 2);

        let seen = recorder.take();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].kind, ChangeKind::AddMany);
        assert_eq!(seen[0].position, Some(0));
    }

    #[test]
    fn test_remove_out_of_range() {
        let (header, recorder) = owner_with_recorder();
        let mut names = vec!["a".to_string()];
        let mut list = ContainmentListMut::new(&header, NAMES, &mut names);
        assert!(list.remove(3).is_none());
        assert!(recorder.is_empty());
        assert_eq!(list.pop().as_deref(), Some("a"));
        assert!(list.pop().is_none());
    }

    #[test]
    fn test_set_out_of_range_returns_item() {
        let (header, _recorder) = owner_with_recorder();
        let mut names: Vec<String> = Vec::new();
        let mut list = ContainmentListMut::new(&header, NAMES, &mut names);
        assert_eq!(list.set(0, "x".to_string()), Err("x".to_string()));
    }

    #[test]
    fn test_get_mut_reports_overwrites_on_drop() {
        let (header, recorder) = owner_with_recorder();
        let mut names = vec!["a".to_string(), "b".to_string()];
        let mut list = ContainmentListMut::new(&header, NAMES, &mut names);

        *list.get_mut(1).unwrap() = "c".to_string();
        assert!(list.get_mut(2).is_none());
        if let Some(unchanged) = list.get_mut(0) {
            assert_eq!(unchanged.as_str(), "a");
        }

        let seen = recorder.take();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].kind, ChangeKind::Set);
        assert_eq!(seen[0].position, Some(1));
        assert_eq!(seen[0].old_value, Value::Text("b".to_string()));
        assert_eq!(seen[0].new_value, Value::Text("c".to_string()));
    }

    #[test]
    fn test_attribute_notification_values() {
        let (header, recorder) = owner_with_recorder();
        let feature = Feature::new("Owner", "handle");
        let mut slot: Option<String> = None;
        set_attribute(&header, feature, &mut slot, Some("q1".to_string()));

        let seen = recorder.take();
        assert_eq!(seen[0].old_value, Value::None);
        assert_eq!(seen[0].new_value, Value::Text("q1".to_string()));
    }
}
