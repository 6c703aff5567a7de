//! Common test utilities for integration tests
//!
//! This module provides:
//! - An in-memory hierarchical record implementing `QualityRecord`
//! - A deterministic random generator for wire values
//! - Pre-built traffic record scenarios

#![allow(dead_code)]

use std::collections::BTreeMap;

use qindex_core::{QualityError, QualityRecord, QualityResult};

pub mod scenarios;

/// Node of an in-memory record
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Inner item
    Item(BTreeMap<String, Node>),
    /// Integer leaf
    Leaf(i64),
}

/// Hierarchical record backed by nested maps
#[derive(Debug, Clone, PartialEq)]
pub struct MapRecord {
    root: BTreeMap<String, Node>,
}

impl MapRecord {
    pub fn new() -> Self {
        Self { root: BTreeMap::new() }
    }

    /// Set a leaf, creating items along the way
    pub fn set(&mut self, path: &[&str], value: i64) -> &mut Self {
        let (leaf, items) = path.split_last().expect("path must not be empty");
        let mut current = &mut self.root;
        for segment in items {
            let node = current
                .entry((*segment).to_string())
                .or_insert_with(|| Node::Item(BTreeMap::new()));
            current = match node {
                Node::Item(children) => children,
                Node::Leaf(_) => panic!("{} is a leaf", segment),
            };
        }
        current.insert((*leaf).to_string(), Node::Leaf(value));
        self
    }

    /// Add a measurement with its quality below `attribute`
    pub fn measurement(&mut self, attribute: &str, wert: i64, index: i64, procedure: i64) -> &mut Self {
        self.set(&[attribute, "Wert"], wert)
            .set(&[attribute, "Güte", "Index"], index)
            .set(&[attribute, "Güte", "Verfahren"], procedure)
    }

    fn node(&self, path: &[&str]) -> Option<&Node> {
        let (first, rest) = path.split_first()?;
        let mut node = self.root.get(*first)?;
        for segment in rest {
            node = match node {
                Node::Item(children) => children.get(*segment)?,
                Node::Leaf(_) => return None,
            };
        }
        Some(node)
    }
}

impl Default for MapRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl QualityRecord for MapRecord {
    fn contains(&self, path: &[&str]) -> bool {
        self.node(path).is_some()
    }

    fn read_unscaled(&self, path: &[&str]) -> Option<i64> {
        match self.node(path)? {
            Node::Leaf(value) => Some(*value),
            Node::Item(_) => None,
        }
    }

    fn write_unscaled(&mut self, path: &[&str], value: i64) -> QualityResult<()> {
        if path.is_empty() {
            return Err(QualityError::RecordRejected { reason: "empty path" });
        }
        if let Some(Node::Item(_)) = self.node(path) {
            return Err(QualityError::RecordRejected { reason: "path names an item" });
        }
        self.set(path, value);
        Ok(())
    }
}

/// Deterministic random number generator for tests
pub struct TestRng {
    state: u32,
}

impl TestRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        // Xorshift algorithm
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// Wire index in `[0, 10000]`
    pub fn wire_index(&mut self) -> i64 {
        i64::from(self.next_u32() % 10_001)
    }

    /// Index in `[0, 1]`
    pub fn index(&mut self) -> f64 {
        self.wire_index() as f64 / 10_000.0
    }
}

/// Compare floats with a fixed tolerance
pub fn approx_eq(expected: f64, actual: f64) -> bool {
    (expected - actual).abs() < 1e-9
}
