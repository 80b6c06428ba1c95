//! Walking and checking record trees

use std::collections::HashSet;

use serde::Serialize;
use tracing::warn;

use crate::model::object::{Child, Container, ObjectId, Record};
use crate::notify::{Feature, ObjectRef};

/// Every record below `root`, depth-first in pre-order. `root` itself is not included.
pub fn all_contents(root: &dyn Record) -> Vec<&dyn Record> {
    let mut out = Vec::new();
    let mut stack: Vec<&dyn Record> = root
        .children()
        .into_iter()
        .rev()
        .map(|c| c.record)
        .collect();
    while let Some(record) = stack.pop() {
        out.push(record);
        stack.extend(record.children().into_iter().rev().map(|c| c.record));
    }
    out
}

/// A child whose container link disagrees with where it actually sits
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainmentIssue {
    pub child: ObjectRef,
    pub expected_parent: ObjectRef,
    pub expected_feature: Feature,
    pub found: Option<Container>,
}

/// Result of [`verify_containment`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContainmentReport {
    /// Number of contained records checked
    pub checked: usize,
    pub issues: Vec<ContainmentIssue>,
    /// Ids reported more than once in the tree
    pub duplicate_ids: Vec<ObjectId>,
}

impl ContainmentReport {
    pub fn is_consistent(&self) -> bool {
        self.issues.is_empty() && self.duplicate_ids.is_empty()
    }
}

/// Check that every record under `root` links back to the record and
/// feature that actually holds it
pub fn verify_containment(root: &dyn Record) -> ContainmentReport {
    let mut report = ContainmentReport::default();
    let mut seen = HashSet::new();
    seen.insert(root.id());
    check(root, &mut report, &mut seen);
    report
}

fn check(parent: &dyn Record, report: &mut ContainmentReport, seen: &mut HashSet<ObjectId>) {
    for Child { feature, record } in parent.children() {
        report.checked += 1;
        if !seen.insert(record.id()) {
            warn!(object = %record.id(), "record reachable twice in one tree");
            report.duplicate_ids.push(record.id());
        }
        let found = record.container();
        let linked = found.map_or(false, |c| c.parent.id == parent.id() && c.feature == feature);
        if !linked {
            warn!(
                object = %record.id(),
                kind = record.kind(),
                expected = %feature,
                "container link does not match position in tree"
            );
            report.issues.push(ContainmentIssue {
                child: record.object_ref(),
                expected_parent: parent.object_ref(),
                expected_feature: feature,
                found,
            });
        }
        check(record, report, seen);
    }
}
