// SPDX-License-Identifier: PMPL-1.0-or-later

//! Recursive translation tree.
//!
//! A locale file is a nested JSON/YAML object whose terminal values are
//! strings. Each node is either a [`Tree::Leaf`] holding display text or a
//! [`Tree::Node`] holding named children, so key-path walks are an explicit
//! match on the two shapes.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Named children of a node. A namespace is one of these.
pub type Namespace = BTreeMap<String, Tree>;

/// One position in a translation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tree {
    Leaf(String),
    Node(Namespace),
}

impl Tree {
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Tree::Leaf(text) => Some(text.as_str()),
            Tree::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&Namespace> {
        match self {
            Tree::Leaf(_) => None,
            Tree::Node(children) => Some(children),
        }
    }

    /// Collect the dotted paths of every leaf under this node into `out`.
    pub(crate) fn collect_leaf_paths(&self, prefix: &str, out: &mut BTreeSet<String>) {
        match self {
            Tree::Leaf(_) => {
                out.insert(prefix.to_string());
            }
            Tree::Node(children) => {
                for (name, child) in children {
                    child.collect_leaf_paths(&join_path(prefix, name), out);
                }
            }
        }
    }
}

/// Walk `segments` from `root`, descending only through nodes.
///
/// Returns `None` as soon as a segment is absent or the walk would have to
/// descend into a leaf.
pub fn walk<'a>(root: &'a Namespace, segments: &[&str]) -> Option<&'a Tree> {
    let (first, rest) = segments.split_first()?;
    let mut current = root.get(*first)?;
    for segment in rest {
        match current {
            Tree::Node(children) => current = children.get(*segment)?,
            Tree::Leaf(_) => return None,
        }
    }
    Some(current)
}

/// Split a key path into its segments. An empty path is one empty segment.
pub fn split_key_path(key_path: &str) -> Vec<&str> {
    key_path.split('.').collect()
}

pub(crate) fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}
