//! Hierarchical key/value document model.
//!
//! A `ConfigNode` holds an ordered list of named scalar values and an ordered
//! list of child nodes. Value names are unique within a node; child names are
//! not, so siblings sharing a name form a repeated group (`WHEEL`, `PART`, ...).
//! The tree is only ever walked top-down, so nodes carry no parent link.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// A single `name = value` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValue {
    pub name: String,
    pub value: String,
}

/// A document node: named container of values and child nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigNode {
    /// Group name. Not unique among siblings.
    pub name: String,
    /// Direct values, in insertion order.
    pub values: SmallVec<[ConfigValue; 4]>,
    /// Child nodes, in insertion order.
    pub nodes: Vec<ConfigNode>,
}

impl ConfigNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: SmallVec::new(),
            nodes: Vec::new(),
        }
    }

    // ─── Values ──────────────────────────────────────────────────────────

    pub fn has_value(&self, name: &str) -> bool {
        self.values.iter().any(|v| v.name == name)
    }

    pub fn get_value(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.value.as_str())
    }

    /// Overwrite an existing value. Returns `false` (and does nothing) when
    /// no value of that name exists.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.values.iter_mut().find(|v| v.name == name) {
            Some(entry) => {
                entry.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Insert a value, replacing an existing entry of the same name so that
    /// value names stay unique.
    pub fn add_value(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.values.iter_mut().find(|v| v.name == name) {
            Some(entry) => entry.value = value,
            None => self.values.push(ConfigValue {
                name: name.to_string(),
                value,
            }),
        }
    }

    /// Remove a value, returning its text if it was present.
    pub fn remove_value(&mut self, name: &str) -> Option<String> {
        let pos = self.values.iter().position(|v| v.name == name)?;
        Some(self.values.remove(pos).value)
    }

    // ─── Child nodes ─────────────────────────────────────────────────────

    pub fn has_node(&self, name: &str) -> bool {
        self.nodes.iter().any(|n| n.name == name)
    }

    /// First child with the given name.
    pub fn get_node(&self, name: &str) -> Option<&ConfigNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn get_node_mut(&mut self, name: &str) -> Option<&mut ConfigNode> {
        self.nodes.iter_mut().find(|n| n.name == name)
    }

    /// Append a child and return a handle to it.
    pub fn add_node(&mut self, node: ConfigNode) -> &mut ConfigNode {
        self.nodes.push(node);
        let last = self.nodes.len() - 1;
        &mut self.nodes[last]
    }

    /// Remove the first child with the given name.
    pub fn remove_node(&mut self, name: &str) -> Option<ConfigNode> {
        let pos = self.nodes.iter().position(|n| n.name == name)?;
        Some(self.nodes.remove(pos))
    }

    pub fn nodes(&self) -> &[ConfigNode] {
        &self.nodes
    }

    /// Indexable child sequence, used for reordering repeated groups.
    pub fn nodes_mut(&mut self) -> &mut Vec<ConfigNode> {
        &mut self.nodes
    }

    /// Child names with duplicates removed, in first-seen order.
    pub fn distinct_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !names.contains(&node.name.as_str()) {
                names.push(&node.name);
            }
        }
        names
    }

    /// True when the node has neither values nor children.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.nodes.is_empty()
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "\t".repeat(depth);
        writeln!(f, "{pad}{}", self.name)?;
        writeln!(f, "{pad}{{")?;
        for v in &self.values {
            writeln!(f, "{pad}\t{} = {}", v.name, v.value)?;
        }
        for child in &self.nodes {
            child.write_indented(f, depth + 1)?;
        }
        writeln!(f, "{pad}}}")
    }
}

impl fmt::Display for ConfigNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
