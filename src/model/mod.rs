//! Object Core
//!
//! Identity, ownership and mutation machinery shared by every FES record.
//!
//! A record owns its children by value. Each child additionally carries a
//! [`Container`] link (parent id and feature) in its [`ObjectHeader`], set
//! when the child is attached and cleared when it is detached. Both sides
//! change inside the same `&mut` call on the parent, so the link can only
//! disagree with the tree if a caller bypasses the record accessors.

mod containment;
mod object;
mod settable;
mod tree;

pub use containment::{ChildMut, ContainmentListMut};
pub use object::{Child, Contained, Container, ObjectHeader, ObjectId, Record};
pub use settable::Settable;
pub use tree::{all_contents, verify_containment, ContainmentIssue, ContainmentReport};

pub(crate) use containment::{child_mut, replace_child, set_attribute, set_settable, unset_settable};
pub(crate) use object::Children;

/// Implement [`Record`] and `Default` for a record type.
///
/// The field list names every containment feature, in schema order:
/// `one FEATURE => field` for single children, `many FEATURE => field` for
/// lists and groups.
macro_rules! impl_record {
    ($ty:ident, $info:ident, [$($arity:ident $feature:ident => $field:ident),* $(,)?]) => {
        impl $crate::model::Record for $ty {
            fn type_info(&self) -> &'static $crate::catalog::TypeInfo {
                &$info
            }

            fn header(&self) -> &$crate::model::ObjectHeader {
                &self.header
            }

            fn header_mut(&mut self) -> &mut $crate::model::ObjectHeader {
                &mut self.header
            }

            fn children(&self) -> Vec<$crate::model::Child<'_>> {
                $crate::model::Children::new()
                    $( .$arity(Self::$feature, &self.$field) )*
                    .finish()
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

pub(crate) use impl_record;
