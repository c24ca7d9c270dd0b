//! Statement snapshots and change classification between two parses.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parse::{BlockQuery, LeanDocument, DECLARATION_KEYS};

/// Map from declaration name to its statement text.
pub type StatementMap = BTreeMap<String, String>;

/// Extract all `theorem`/`lemma` statements from a file, keyed by name.
/// A later duplicate name overwrites an earlier one; unnamed declarations
/// are skipped. Each call is a fresh snapshot.
pub fn statement_map(code: &str) -> StatementMap {
    let doc = LeanDocument::new(code);
    let query = BlockQuery::for_keys(DECLARATION_KEYS).without_overlap();
    let mut statements = StatementMap::new();
    for block in doc.blocks(&query) {
        if let Some(name) = block.info.name {
            statements.insert(name, block.info.statement);
        }
    }
    statements
}

/// Collapse whitespace for comparison.
pub fn normalize_statement(statement: &str) -> String {
    statement.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// How a statement changed between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Modified,
    Added,
    Removed,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Modified => write!(f, "modified"),
            Self::Added => write!(f, "added"),
            Self::Removed => write!(f, "removed"),
        }
    }
}

/// One statement whose normalized text differs between two snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementChange {
    pub name: String,
    pub original: String,
    pub current: String,
    pub kind: ChangeKind,
}

impl fmt::Display for StatementChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.name)
    }
}

/// Compare two snapshots with whitespace-collapsed statement comparison.
/// Unchanged names produce no record; output is sorted by name.
pub fn diff_statement_maps(
    initial: &StatementMap,
    current: &StatementMap,
) -> Vec<StatementChange> {
    let names: BTreeSet<&String> = initial.keys().chain(current.keys()).collect();

    let mut changes = Vec::new();
    for name in names {
        let original = initial.get(name).map_or("", String::as_str);
        let latest = current.get(name).map_or("", String::as_str);
        if normalize_statement(original) == normalize_statement(latest) {
            continue;
        }
        let kind = if original.is_empty() {
            ChangeKind::Added
        } else if latest.is_empty() {
            ChangeKind::Removed
        } else {
            ChangeKind::Modified
        };
        changes.push(StatementChange {
            name: name.clone(),
            original: original.to_string(),
            current: latest.to_string(),
            kind,
        });
    }
    changes
}
