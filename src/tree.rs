//! Arena-backed binary tree addressed by [`Treecode`] path.
//!
//! Nodes are stored in a flat `Vec` and addressed by index; a `Treecode ->
//! index` map lets lookups start from a path instead of a walk from the
//! root. Children can be wired in before their parent is known — see
//! `put` — which is why parent linkage is patched up lazily rather than
//! required at insertion time.

use crate::treecode::{LorR, Treecode};
use std::collections::HashMap;

/// Opaque handle to a node in a [`BinaryTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeIndex(usize);

#[derive(Debug, Clone)]
struct Node<T> {
    code: Treecode,
    data: T,
    parent: Option<NodeIndex>,
    children: [Option<NodeIndex>; 2],
}

/// A binary tree whose nodes are addressed by [`Treecode`] path, carrying
/// payload `T`.
#[derive(Debug, Clone)]
pub struct BinaryTree<T> {
    nodes: Vec<Node<T>>,
    by_code: HashMap<Treecode, NodeIndex>,
    root: Option<NodeIndex>,
}

impl<T> BinaryTree<T> {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), by_code: HashMap::new(), root: None }
    }

    /// Insert a node at `code`, wiring it to a parent/child if one is
    /// already present in the tree. Insertion order is not required to
    /// follow tree order: a child may be inserted before its parent, in
    /// which case the parent link is patched once the parent itself is
    /// inserted.
    pub fn put(&mut self, code: Treecode, data: T) -> NodeIndex {
        let index = NodeIndex(self.nodes.len());
        self.nodes.push(Node { code: code.clone(), data, parent: None, children: [None, None] });

        if code.code_length() == 0 {
            self.root = Some(index);
        }

        for (existing_code, &existing_index) in self.by_code.iter() {
            if existing_code.code_length() + 1 != code.code_length() {
                continue;
            }
            if !existing_code.is_prefix_of(&code) {
                continue;
            }
            let branch = existing_code.next_step_towards(&code);
            self.nodes[existing_index.0].children[branch_slot(branch)] = Some(index);
            self.nodes[index.0].parent = Some(existing_index);
        }

        for (existing_code, &existing_index) in self.by_code.iter() {
            if code.code_length() + 1 != existing_code.code_length() {
                continue;
            }
            if !code.is_prefix_of(existing_code) {
                continue;
            }
            let branch = code.next_step_towards(existing_code);
            self.nodes[index.0].children[branch_slot(branch)] = Some(existing_index);
            self.nodes[existing_index.0].parent = Some(index);
        }

        self.by_code.insert(code, index);
        index
    }

    #[inline]
    pub fn root_node(&self) -> Option<NodeIndex> {
        self.root
    }

    #[inline]
    pub fn index_for_node(&self, code: &Treecode) -> Option<NodeIndex> {
        self.by_code.get(code).copied()
    }

    #[inline]
    pub fn code_from_node(&self, index: NodeIndex) -> &Treecode {
        &self.nodes[index.0].code
    }

    #[inline]
    pub fn data(&self, index: NodeIndex) -> &T {
        &self.nodes[index.0].data
    }

    #[inline]
    pub fn data_mut(&mut self, index: NodeIndex) -> &mut T {
        &mut self.nodes[index.0].data
    }

    #[inline]
    pub fn parent(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.nodes[index.0].parent
    }

    /// Shared path between `from` and `to`. If `to` is a descendant of
    /// `from` the path runs root-ward to leaf-ward (`from` first); if
    /// `from` is a descendant of `to` the path is reversed (deepest node
    /// first), matching the ancestor-to-descendant construction used
    /// internally.
    pub fn path(&self, from: NodeIndex, to: NodeIndex) -> Vec<NodeIndex> {
        if from == to {
            return vec![from];
        }

        let from_code = &self.nodes[from.0].code;
        let to_code = &self.nodes[to.0].code;

        if from_code.is_prefix_of(to_code) {
            self.path_from_ancestor(from, to)
        } else {
            let mut reversed = self.path_from_ancestor(to, from);
            reversed.reverse();
            reversed
        }
    }

    fn path_from_ancestor(&self, ancestor: NodeIndex, descendant: NodeIndex) -> Vec<NodeIndex> {
        let mut rev = vec![descendant];
        let mut cur = descendant;
        while cur != ancestor {
            let parent = self.nodes[cur.0]
                .parent
                .expect("descendant must reach ancestor by following parent links");
            rev.push(parent);
            cur = parent;
        }
        rev.reverse();
        rev
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn branch_slot(branch: LorR) -> usize {
    match branch {
        LorR::Left => 0,
        LorR::Right => 1,
    }
}
