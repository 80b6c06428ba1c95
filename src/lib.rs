//! FES Model
//!
//! A typed, containment-aware object model for the OGC Filter Encoding 2.0
//! schema: filters, sort specifications, filter capabilities and ad hoc
//! query expressions.
//!
//! ## Features
//!
//! - **Typed records**: one struct per schema type, substitution groups as enums
//! - **Containment**: every child knows its parent and the feature holding it
//! - **Set flags**: unsettable features report their default until set
//! - **Change notification**: observers receive one notification per mutation
//! - **Catalog**: static XML names and cardinalities, with a SHA256 fingerprint
//!
//! ## Layout
//!
//! ```text
//! FilterType
//! └── predicates: [FilterPredicate]
//!     ├── Comparison(PropertyIsEqualTo(BinaryComparisonOpType))
//!     │   └── expressions: [ValueReference, Literal]
//!     └── Logic(And(BinaryLogicOpType))
//!         └── predicates: [...]
//! ```
//!
//! Parsing and writing XML is left to a codec; it reads [`catalog`] to map
//! features to element and attribute names.

pub mod catalog;
pub mod checksum;
pub mod config;
pub mod datatypes;
pub mod error;
pub mod fes;
pub mod model;
pub mod notify;
pub mod wildcard;

pub use catalog::{FeatureInfo, FeatureKind, TypeInfo};
pub use checksum::Checksum;
pub use config::{ModelConfig, NotificationConfig};
pub use error::{ModelError, Result};
pub use model::{ObjectId, Record};
pub use notify::{ChangeKind, ChangeRecorder, Feature, Notification, Observer, Value};
pub use wildcard::{AnyElement, MixedEntry};
