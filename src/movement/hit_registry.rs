//! Movement domain: per-dash record of targets already struck.

use std::collections::HashSet;
use std::hash::Hash;

/// Targets registered during one dash, each at most once, in the order they
/// were first hit.
#[derive(Debug, Clone)]
pub struct HitRegistry<T> {
    order: Vec<T>,
    seen: HashSet<T>,
}

impl<T> Default for HitRegistry<T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            seen: HashSet::new(),
        }
    }
}

impl<T: Copy + Eq + Hash> HitRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the target was already registered.
    pub fn register(&mut self, target: T) -> bool {
        if !self.seen.insert(target) {
            return false;
        }
        self.order.push(target);
        true
    }

    pub fn contains(&self, target: &T) -> bool {
        self.seen.contains(target)
    }

    pub fn targets(&self) -> &[T] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
