// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// Sweep status for the monotone decomposition.
//
// A sorted doubly-linked list of the polygon edges currently crossed by the
// sweep line, left to right. Each node carries the edge's helper: the lowest
// processed vertex that can see the edge to its left. Keys are half-edge
// indices; INVALID marks the sentinel and deleted nodes.

use crate::mesh::{EdgeIdx, VertIdx, INVALID};

/// Index into Dict::nodes
pub type NodeIdx = u32;

#[derive(Clone, Debug)]
pub struct DictNode {
    pub key: EdgeIdx,
    pub helper: VertIdx,
    pub next: NodeIdx,
    pub prev: NodeIdx,
}

impl Default for DictNode {
    fn default() -> Self {
        DictNode {
            key: INVALID,
            helper: INVALID,
            next: INVALID,
            prev: INVALID,
        }
    }
}

// The "head" sentinel node is always at index 0.
// It forms a circular list: head.prev == head.next == head when empty.
pub struct Dict {
    pub nodes: Vec<DictNode>,
    /// Node holding each half-edge, indexed by half-edge.
    lookup: Vec<NodeIdx>,
}

/// Index of the head sentinel node.
pub const DICT_HEAD: NodeIdx = 0;

impl Dict {
    pub fn new() -> Self {
        let head = DictNode {
            next: DICT_HEAD,
            prev: DICT_HEAD,
            ..DictNode::default()
        };
        Dict {
            nodes: vec![head],
            lookup: Vec::new(),
        }
    }

    /// Drop every node but the sentinel, keeping capacity.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[DICT_HEAD as usize].next = DICT_HEAD;
        self.nodes[DICT_HEAD as usize].prev = DICT_HEAD;
        self.lookup.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes[DICT_HEAD as usize].next == DICT_HEAD
    }

    /// Insert `key` walking backward from the tail until `leq(node_key, key)`.
    pub fn insert<F>(&mut self, key: EdgeIdx, helper: VertIdx, leq: &F) -> NodeIdx
    where
        F: Fn(EdgeIdx, EdgeIdx) -> bool,
    {
        let mut node = DICT_HEAD;
        loop {
            node = self.nodes[node as usize].prev;
            let node_key = self.nodes[node as usize].key;
            if node_key == INVALID || leq(node_key, key) {
                break;
            }
        }

        let new_idx = self.nodes.len() as NodeIdx;
        let next_node = self.nodes[node as usize].next;
        self.nodes.push(DictNode {
            key,
            helper,
            next: next_node,
            prev: node,
        });
        self.nodes[node as usize].next = new_idx;
        self.nodes[next_node as usize].prev = new_idx;

        if key as usize >= self.lookup.len() {
            self.lookup.resize(key as usize + 1, INVALID);
        }
        self.lookup[key as usize] = new_idx;
        new_idx
    }

    pub fn delete(&mut self, node: NodeIdx) {
        let next = self.nodes[node as usize].next;
        let prev = self.nodes[node as usize].prev;
        self.nodes[next as usize].prev = prev;
        self.nodes[prev as usize].next = next;

        let key = self.nodes[node as usize].key;
        if let Some(slot) = self.lookup.get_mut(key as usize) {
            *slot = INVALID;
        }
        // Mark as deleted
        let dead = &mut self.nodes[node as usize];
        dead.next = INVALID;
        dead.prev = INVALID;
        dead.key = INVALID;
    }

    /// The live node holding half-edge `key`.
    #[inline]
    pub fn find(&self, key: EdgeIdx) -> Option<NodeIdx> {
        self.lookup
            .get(key as usize)
            .copied()
            .filter(|&n| n != INVALID)
    }

    #[inline]
    pub fn key(&self, node: NodeIdx) -> EdgeIdx {
        self.nodes[node as usize].key
    }

    #[inline]
    pub fn helper(&self, node: NodeIdx) -> VertIdx {
        self.nodes[node as usize].helper
    }

    #[inline]
    pub fn set_helper(&mut self, node: NodeIdx, helper: VertIdx) {
        self.nodes[node as usize].helper = helper;
    }

    /// Leftmost node.
    #[inline]
    pub fn min(&self) -> NodeIdx {
        self.nodes[DICT_HEAD as usize].next
    }

    /// Rightmost node.
    #[inline]
    pub fn max(&self) -> NodeIdx {
        self.nodes[DICT_HEAD as usize].prev
    }

    #[inline]
    pub fn succ(&self, node: NodeIdx) -> NodeIdx {
        self.nodes[node as usize].next
    }

    #[inline]
    pub fn pred(&self, node: NodeIdx) -> NodeIdx {
        self.nodes[node as usize].prev
    }

    /// Live nodes from right to left.
    pub fn iter_rev(&self) -> impl Iterator<Item = NodeIdx> + '_ {
        let mut node = self.max();
        std::iter::from_fn(move || {
            if node == DICT_HEAD {
                return None;
            }
            let current = node;
            node = self.pred(node);
            Some(current)
        })
    }

    /// Keys from left to right.
    pub fn keys(&self) -> impl Iterator<Item = EdgeIdx> + '_ {
        let mut node = self.min();
        std::iter::from_fn(move || {
            if node == DICT_HEAD {
                return None;
            }
            let key = self.key(node);
            node = self.succ(node);
            Some(key)
        })
    }
}

impl Default for Dict {
    fn default() -> Self {
        Self::new()
    }
}
