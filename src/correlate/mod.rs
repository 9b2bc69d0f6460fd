//! Node-to-line correlation
//!
//! [`correlate`] walks a Clang JSON AST dump and records, for every line of the
//! target file, which node kinds begin or end there:
//!
//! - a node's `loc` registers its kind at that line
//! - a node's `range` registers its kind at `begin` and at `end` (once when
//!   both are the same line); the lines in between are not filled in
//! - the active [`FilterProfile`] is applied per node, never as a traversal
//!   cutoff, so the children of a hidden node are still visited
//!
//! The dump is treated as an untyped [`serde_json::Value`]: every mapping value
//! and list element is visited, whatever field it hangs off. Real dumps nest
//! hundreds of levels deep, so the walk uses an explicit work-list instead of
//! recursion.

pub mod location;

use crate::catalog::NodeKind;
use crate::filter::FilterProfile;
use location::{Location, TargetFile};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::debug;

/// Node kinds found on each 1-based source line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineTagMap {
    lines: BTreeMap<usize, BTreeSet<NodeKind>>,
}

impl LineTagMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `kind` on `line`; repeats are ignored
    pub fn insert(&mut self, line: usize, kind: NodeKind) {
        self.lines.entry(line).or_default().insert(kind);
    }

    /// Kinds on `line`, sorted by tag text
    pub fn get(&self, line: usize) -> Option<&BTreeSet<NodeKind>> {
        self.lines.get(&line)
    }

    pub fn contains_line(&self, line: usize) -> bool {
        self.lines.contains_key(&line)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines carrying at least one kind
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total number of (line, kind) annotations
    pub fn tag_count(&self) -> usize {
        self.lines.values().map(BTreeSet::len).sum()
    }

    /// Lines in ascending order with their kinds
    pub fn iter(&self) -> impl Iterator<Item = (usize, &BTreeSet<NodeKind>)> {
        self.lines.iter().map(|(line, kinds)| (*line, kinds))
    }
}

/// Correlate a dump with the lines of `target`, keeping only kinds the
/// profile includes
pub fn correlate(tree: &Value, target: &Path, profile: FilterProfile) -> LineTagMap {
    let target = TargetFile::new(target);
    let mut map = LineTagMap::new();
    let mut visited = 0usize;

    debug!(file = %target.path().display(), %profile, "correlating AST dump");

    let mut work: Vec<&Value> = vec![tree];
    while let Some(value) = work.pop() {
        match value {
            Value::Object(fields) => {
                visited += 1;
                if let Some(kind) = fields.get("kind").and_then(Value::as_str) {
                    let kind = NodeKind::from_tag(kind);
                    if profile.includes(&kind) {
                        for line in node_lines(fields, &target) {
                            map.insert(line, kind.clone());
                        }
                    }
                }
                // Reverse so siblings are visited in document order
                work.extend(fields.values().rev());
            }
            Value::Array(items) => work.extend(items.iter().rev()),
            _ => {}
        }
    }

    debug!(
        nodes = visited,
        lines = map.line_count(),
        tags = map.tag_count(),
        "correlation finished"
    );
    map
}

/// Lines of the target owned by a node's `loc` and `range` endpoints
fn node_lines(fields: &serde_json::Map<String, Value>, target: &TargetFile) -> Vec<usize> {
    let mut lines = Vec::with_capacity(3);

    let loc = fields.get("loc").and_then(Location::from_value);
    lines.extend(target.owned_line(loc.as_ref()));

    if let Some(range) = fields.get("range").and_then(Value::as_object) {
        let begin = range.get("begin").and_then(Location::from_value);
        let end = range.get("end").and_then(Location::from_value);

        let begin_line = target.owned_line(begin.as_ref());
        let end_line = target.owned_line(end.as_ref());

        lines.extend(begin_line);
        if end_line != begin_line {
            lines.extend(end_line);
        }
    }

    lines
}
