//! Script trees: the nested trigger/effect structures attached to entities.
//!
//! A [`ScriptNode`] is either a scalar leaf, a list, or a named subtree. Keys
//! may repeat in game scripts, so a [`ScriptTree`] stores repeated keys as a
//! list under one key, the way the JSON dump encodes them.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A scalar leaf value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(true) => write!(f, "yes"),
            Scalar::Bool(false) => write!(f, "no"),
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Text(v) => write!(f, "{}", v),
        }
    }
}

impl Scalar {
    /// The text of a string leaf.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Whether the value counts as "set" (non-empty, non-zero, not `no`).
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Bool(b) => *b,
            Scalar::Int(v) => *v != 0,
            Scalar::Float(v) => *v != 0.0,
            Scalar::Text(s) => !s.is_empty(),
        }
    }
}

/// One node of a script tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptNode {
    Scalar(Scalar),
    List(Vec<ScriptNode>),
    Tree(ScriptTree),
}

impl ScriptNode {
    /// Depth-first search for the first value stored under `key`.
    pub fn find_key(&self, key: &str) -> Option<&ScriptNode> {
        match self {
            ScriptNode::Scalar(_) => None,
            ScriptNode::List(items) => items.iter().find_map(|item| item.find_key(key)),
            ScriptNode::Tree(tree) => tree.find_key(key),
        }
    }

    /// The scalar leaf, if this node is one.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            ScriptNode::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Copy of this node with every `key` entry removed; `None` when nothing
    /// is left.
    fn without_key(&self, key: &str) -> Option<ScriptNode> {
        match self {
            ScriptNode::Scalar(_) => Some(self.clone()),
            ScriptNode::List(items) => {
                let kept: Vec<ScriptNode> =
                    items.iter().filter_map(|item| item.without_key(key)).collect();
                (!kept.is_empty()).then_some(ScriptNode::List(kept))
            }
            ScriptNode::Tree(tree) => {
                let pruned = tree.without_key(key);
                (!pruned.is_empty()).then_some(ScriptNode::Tree(pruned))
            }
        }
    }
}

impl From<&str> for ScriptNode {
    fn from(value: &str) -> Self {
        ScriptNode::Scalar(Scalar::Text(value.to_string()))
    }
}

impl From<bool> for ScriptNode {
    fn from(value: bool) -> Self {
        ScriptNode::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for ScriptNode {
    fn from(value: i64) -> Self {
        ScriptNode::Scalar(Scalar::Int(value))
    }
}

impl From<ScriptTree> for ScriptNode {
    fn from(value: ScriptTree) -> Self {
        ScriptNode::Tree(value)
    }
}

/// An ordered key/value script block (`potential = { ... }`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScriptTree(IndexMap<String, ScriptNode>);

impl ScriptTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for constructing trees in code.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ScriptNode>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ScriptNode>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ScriptNode> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ScriptNode)> {
        self.0.iter()
    }

    /// Top-level keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Depth-first, declaration-order search for the first value under `key`
    /// at any nesting level.
    pub fn find_key(&self, key: &str) -> Option<&ScriptNode> {
        self.0.iter().find_map(|(k, v)| {
            if k == key {
                Some(v)
            } else {
                v.find_key(key)
            }
        })
    }

    /// Copy of the tree with every `key` entry removed at any depth.
    ///
    /// Subtrees and lists emptied by the removal are dropped as well, so a
    /// block that only held the removed key disappears entirely.
    pub fn without_key(&self, key: &str) -> ScriptTree {
        ScriptTree(
            self.0
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .filter_map(|(k, v)| v.without_key(key).map(|v| (k.clone(), v)))
                .collect(),
        )
    }
}

impl FromIterator<(String, ScriptNode)> for ScriptTree {
    fn from_iter<I: IntoIterator<Item = (String, ScriptNode)>>(iter: I) -> Self {
        ScriptTree(iter.into_iter().collect())
    }
}
