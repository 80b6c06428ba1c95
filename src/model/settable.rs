//! Attributes with an explicit "is set" flag

use serde::Serialize;

/// An attribute value that tracks whether it was explicitly set.
///
/// Reading an unset attribute yields the schema default. Setting a value
/// equal to the default still marks the attribute as set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settable<T> {
    value: T,
    default: T,
    is_set: bool,
}

impl<T: Clone> Settable<T> {
    pub fn new(default: T) -> Self {
        Self {
            value: default.clone(),
            default,
            is_set: false,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn is_set(&self) -> bool {
        self.is_set
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Store a value and mark it set. Returns the previous value and set flag.
    pub fn set(&mut self, value: T) -> (T, bool) {
        let old = std::mem::replace(&mut self.value, value);
        let was_set = std::mem::replace(&mut self.is_set, true);
        (old, was_set)
    }

    /// Restore the default and clear the flag. Returns the previous value and set flag.
    pub fn unset(&mut self) -> (T, bool) {
        let old = std::mem::replace(&mut self.value, self.default.clone());
        let was_set = std::mem::replace(&mut self.is_set, false);
        (old, was_set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_value_is_default() {
        let s = Settable::new(true);
        assert!(!s.is_set());
        assert!(*s.get());
    }

    #[test]
    fn test_set_default_value_marks_set() {
        let mut s = Settable::new(0.0_f64);
        let (old, was_set) = s.set(0.0);
        assert_eq!(old, 0.0);
        assert!(!was_set);
        assert!(s.is_set());
    }

    #[test]
    fn test_unset_restores_default() {
        let mut s = Settable::new(String::from("ASC"));
        s.set("DESC".to_string());
        let (old, was_set) = s.unset();
        assert_eq!(old, "DESC");
        assert!(was_set);
        assert_eq!(s.get(), "ASC");
        assert!(!s.is_set());
    }
}
