//! Node arena shared by every heap of a [`FibHeaps`](crate::heaps::fib::FibHeaps).
//!
//! Nodes are addressed by [`Idx`]; [`EMPTY`] stands for "no node". Each node sits in
//! exactly one circular doubly-linked ring (a root ring or a child ring).

use std::fmt::{Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use debug_tree::TreeBuilder;
use derivative::Derivative;

pub type Idx = usize;

/// Sentinel for a missing parent, child, sibling or extremum.
pub const EMPTY: Idx = usize::MAX;

pub(crate) fn idx_fmt(u: &Idx, f: &mut Formatter) -> std::fmt::Result {
    if *u == EMPTY {
        write!(f, "∅")
    } else {
        write!(f, "{u}")
    }
}

/// Used to pretty print a Idx, outputting ∅ if it is EMPTY.
pub struct PrettyIdx(pub Idx);

impl Display for PrettyIdx {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        idx_fmt(&self.0, f)
    }
}

impl Debug for PrettyIdx {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

#[derive(Derivative)]
#[derivative(Debug)]
pub(crate) struct Node<R> {
    /// None iff the slot is vacant (on the free list).
    record: Option<R>,
    /// Number of children.
    pub(crate) degree: usize,
    /// Lost a child since it last became a child.
    pub(crate) marked: bool,
    #[derivative(Debug(format_with = "idx_fmt"))]
    pub(crate) parent: Idx,
    /// Any one of the children.
    #[derivative(Debug(format_with = "idx_fmt"))]
    pub(crate) child: Idx,
    #[derivative(Debug(format_with = "idx_fmt"))]
    pub(crate) left: Idx,
    #[derivative(Debug(format_with = "idx_fmt"))]
    pub(crate) right: Idx,
}

impl<R> Node<R> {
    fn singleton(u: Idx, record: R) -> Self {
        Self {
            record: Some(record),
            degree: 0,
            marked: false,
            parent: EMPTY,
            child: EMPTY,
            left: u,
            right: u,
        }
    }
}

pub(crate) struct Forest<R> {
    nodes: Vec<Node<R>>,
    free: Vec<Idx>,
}

impl<R> Index<Idx> for Forest<R> {
    type Output = Node<R>;
    fn index(&self, u: Idx) -> &Node<R> {
        &self.nodes[u]
    }
}

impl<R> IndexMut<Idx> for Forest<R> {
    fn index_mut(&mut self, u: Idx) -> &mut Node<R> {
        &mut self.nodes[u]
    }
}

impl<R> Forest<R> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free: vec![],
        }
    }

    /// Number of slots, live or vacant.
    pub fn slots(&self) -> usize {
        self.nodes.len()
    }

    pub fn live(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    pub fn is_live(&self, u: Idx) -> bool {
        self.nodes.get(u).is_some_and(|n| n.record.is_some())
    }

    pub fn record(&self, u: Idx) -> Option<&R> {
        self.nodes.get(u).and_then(|n| n.record.as_ref())
    }

    /// Record of a node reached through the links of a live ring.
    pub fn data(&self, u: Idx) -> &R {
        match &self.nodes[u].record {
            Some(record) => record,
            None => unreachable!(
                "vacant node {u} still linked from a heap, was it used with another heap?"
            ),
        }
    }

    pub fn data_mut(&mut self, u: Idx) -> &mut R {
        match &mut self.nodes[u].record {
            Some(record) => record,
            None => unreachable!(
                "vacant node {u} still linked from a heap, was it used with another heap?"
            ),
        }
    }

    /// New singleton ring holding `record`. Reuses vacant slots first.
    pub fn alloc(&mut self, record: R) -> Idx {
        match self.free.pop() {
            Some(u) => {
                self.nodes[u] = Node::singleton(u, record);
                u
            }
            None => {
                let u = self.nodes.len();
                self.nodes.push(Node::singleton(u, record));
                u
            }
        }
    }

    /// Frees the slot of `u`, which must already be detached from every ring.
    pub fn release(&mut self, u: Idx) -> R {
        let n = &mut self.nodes[u];
        let Some(record) = n.record.take() else {
            unreachable!("node {u} released twice");
        };
        n.degree = 0;
        n.marked = false;
        n.parent = EMPTY;
        n.child = EMPTY;
        n.left = EMPTY;
        n.right = EMPTY;
        self.free.push(u);
        record
    }

    /// Merges the disjoint rings containing `a` and `b` into one.
    pub fn splice(&mut self, a: Idx, b: Idx) {
        let a_right = self.nodes[a].right;
        let b_right = self.nodes[b].right;
        log::trace!("splice({a}, {b})");
        self.nodes[a].right = b_right;
        self.nodes[b_right].left = a;
        self.nodes[b].right = a_right;
        self.nodes[a_right].left = b;
    }

    /// Takes `u` out of its ring, leaving it a singleton. Parent links are untouched.
    pub fn unlink(&mut self, u: Idx) {
        let Node { left, right, .. } = self.nodes[u];
        self.nodes[left].right = right;
        self.nodes[right].left = left;
        self.nodes[u].left = u;
        self.nodes[u].right = u;
    }

    /// Orphans every child of `u` and returns their ring, which is no longer
    /// reachable from `u` (degree drops to 0).
    pub fn take_children(&mut self, u: Idx) -> Idx {
        let first = std::mem::replace(&mut self.nodes[u].child, EMPTY);
        self.nodes[u].degree = 0;
        if first != EMPTY {
            let mut c = first;
            loop {
                self.nodes[c].parent = EMPTY;
                c = self.nodes[c].right;
                if c == first {
                    break;
                }
            }
        }
        first
    }

    /// Every node on the ring containing `start`, beginning with `start`.
    pub fn ring(&self, start: Idx) -> Ring<'_, R> {
        Ring {
            forest: self,
            start,
            next: start,
        }
    }

    /// Frees every node reachable from the ring containing `start`, descendants
    /// included. Returns how many nodes were freed.
    pub fn release_all(&mut self, start: Idx) -> usize {
        let mut freed = 0;
        let mut rings = vec![start];
        while let Some(first) = rings.pop() {
            let mut u = first;
            loop {
                let Node { right, child, .. } = self.nodes[u];
                if child != EMPTY {
                    rings.push(child);
                }
                self.release(u);
                freed += 1;
                if right == first {
                    break;
                }
                u = right;
            }
        }
        freed
    }
}

impl<R: Debug> Forest<R> {
    pub fn ring_dbg(&self, start: Idx, tree: &TreeBuilder) {
        for u in self.ring(start) {
            let n = &self.nodes[u];
            let _b = tree.add_branch(&format!("[{u}] {n:?}"));
            if n.child != EMPTY {
                self.ring_dbg(n.child, tree);
            }
        }
    }
}

pub(crate) struct Ring<'a, R> {
    forest: &'a Forest<R>,
    start: Idx,
    next: Idx,
}

impl<R> Iterator for Ring<'_, R> {
    type Item = Idx;

    fn next(&mut self) -> Option<Idx> {
        if self.next == EMPTY {
            return None;
        }
        let u = self.next;
        self.next = self.forest[u].right;
        if self.next == self.start {
            self.next = EMPTY;
        }
        Some(u)
    }
}
