//! Boxing analysis for recursive types.
//!
//! A struct or enum cannot contain itself by value. Records and unions form
//! a graph whose edges are the inline occurrences of one type inside another
//! (directly, through `Optional`, or as a union member). A `Sequence` is
//! already heap-allocated and contributes no edge. An occurrence of `target`
//! inside `owner` must be boxed iff `target` can reach `owner` again through
//! inline edges.

use crate::ir::{RecordDef, UnionDef};
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::debug;

/// Set of `(owner, target)` pairs stored behind a `Box`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Indirections {
    boxed: BTreeSet<(String, String)>,
}

impl Indirections {
    /// Computes the boxed occurrences for a set of records and unions.
    #[must_use]
    pub fn compute(records: &[RecordDef], unions: &[UnionDef]) -> Self {
        let mut graph: HashMap<&str, Vec<&str>> = HashMap::new();

        for record in records {
            let edges = graph.entry(record.name.as_str()).or_default();
            for field in &record.fields {
                edges.extend(field.ty.inline_targets());
            }
        }
        for union in unions {
            let edges = graph.entry(union.name.as_str()).or_default();
            for member in &union.members {
                edges.extend(member.inline_targets());
            }
        }

        let mut boxed = BTreeSet::new();
        for (&owner, targets) in &graph {
            for &target in targets {
                if reaches(&graph, target, owner) {
                    debug!(owner, target, "boxing recursive reference");
                    boxed.insert((owner.to_string(), target.to_string()));
                }
            }
        }

        Self { boxed }
    }

    /// Returns true if `target` must be boxed where `owner` stores it inline.
    #[must_use]
    pub fn needs_box(&self, owner: &str, target: &str) -> bool {
        self.boxed
            .contains(&(owner.to_string(), target.to_string()))
    }

    /// Returns the number of boxed occurrences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxed.len()
    }

    /// Returns true if nothing needs boxing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxed.is_empty()
    }

    /// Iterates over the boxed `(owner, target)` pairs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.boxed.iter().map(|(o, t)| (o.as_str(), t.as_str()))
    }
}

/// Depth-first search from `from` looking for `to`.
fn reaches(graph: &HashMap<&str, Vec<&str>>, from: &str, to: &str) -> bool {
    let mut stack = vec![from];
    let mut seen = HashSet::new();

    while let Some(node) = stack.pop() {
        if node == to {
            return true;
        }
        if !seen.insert(node) {
            continue;
        }
        if let Some(next) = graph.get(node) {
            stack.extend(next.iter().copied());
        }
    }
    false
}
