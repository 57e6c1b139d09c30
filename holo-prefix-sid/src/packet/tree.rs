//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use enum_as_inner::EnumAsInner;
use serde::ser::{Serialize, SerializeMap, Serializer};

// Ordered tree of decoded attribute data.
//
// Entries keep their insertion order and keys may repeat, so that sibling
// TLVs of the same type each get their own child.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Node {
    entries: Vec<(String, Value)>,
}

#[derive(Clone, Debug, EnumAsInner, Eq, PartialEq)]
pub enum Value {
    Uint(u64),
    Str(String),
    Node(Node),
}

// ===== impl Node =====

impl Node {
    pub fn new() -> Node {
        Node::default()
    }

    /// Appends a scalar or child entry.
    pub fn put(&mut self, key: &str, value: impl Into<Value>) {
        self.entries.push((key.to_owned(), value.into()));
    }

    /// Appends a child node.
    pub fn add_child(&mut self, key: &str, child: Node) {
        self.put(key, child);
    }

    /// Moves all entries of `other` to the end of `self`.
    pub fn append(&mut self, other: Node) {
        self.entries.extend(other.entries);
    }

    /// Returns the first value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, value)| value)
    }

    /// Returns the value found by following a dot-separated path of keys,
    /// taking the first match at each level.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut keys = path.split('.');
        let mut value = self.get(keys.next()?)?;
        for key in keys {
            value = value.as_node()?.get(key)?;
        }
        Some(value)
    }

    /// Returns the first child node stored under `key`.
    pub fn child(&self, key: &str) -> Option<&Node> {
        self.get(key).and_then(Value::as_node)
    }

    /// Returns all child nodes stored under `key`, in insertion order.
    pub fn children<'a>(
        &'a self,
        key: &'a str,
    ) -> impl Iterator<Item = &'a Node> + 'a {
        self.entries
            .iter()
            .filter(move |(entry_key, _)| entry_key == key)
            .filter_map(|(_, value)| value.as_node())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// ===== impl Value =====

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Uint(value) => serializer.serialize_u64(*value),
            Value::Str(value) => serializer.serialize_str(value),
            Value::Node(node) => node.serialize(serializer),
        }
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Value {
        Value::Uint(value.into())
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Value {
        Value::Uint(value.into())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Value {
        Value::Uint(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Value {
        Value::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Value {
        Value::Str(value)
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Value {
        Value::Node(node)
    }
}
