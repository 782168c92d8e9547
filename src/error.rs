use std::fmt;

use crate::heaps::{HeapHandle, NodeHandle};

/// Contract violations reported by heap operations. Nothing is mutated when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// A heap must be able to hold at least one node.
    ZeroCapacity,
    /// The heap already holds as many nodes as it was created for.
    CapacityExceeded { capacity: usize },
    /// The heap was never created here, or was destroyed or absorbed by a union.
    UnknownHeap(HeapHandle),
    /// The node was already extracted, deleted or destroyed.
    InvalidHandle(NodeHandle),
    /// A heap cannot be unioned with itself.
    SelfUnion,
    /// The two heaps order their records differently.
    IncompatibleComparators,
    /// The replacement record ranks below the one it replaces.
    PriorityWorsened,
    /// A structural audit failed.
    Corrupted(Violation),
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::ZeroCapacity => write!(f, "heap capacity has to be positive"),
            HeapError::CapacityExceeded { capacity } => {
                write!(f, "heap overflow: capacity is {capacity} nodes")
            }
            HeapError::UnknownHeap(h) => write!(f, "{h} does not exist"),
            HeapError::InvalidHandle(u) => write!(f, "{u} is not in the heap"),
            HeapError::SelfUnion => write!(f, "cannot union a heap with itself"),
            HeapError::IncompatibleComparators => {
                write!(f, "cannot union heaps with different orderings")
            }
            HeapError::PriorityWorsened => {
                write!(f, "new record has lower priority than the current one")
            }
            HeapError::Corrupted(v) => write!(f, "heap is corrupted: {v}"),
        }
    }
}

impl std::error::Error for HeapError {}

/// First broken invariant found by a structural audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// A link leads to a freed slot.
    VacantNode(NodeHandle),
    /// `left` and `right` are not inverse at this node, or its ring never closes.
    BrokenRing(NodeHandle),
    /// The node's parent link disagrees with the ring it is in.
    BrokenParent(NodeHandle),
    /// The child ring length differs from the recorded degree.
    WrongDegree {
        node: NodeHandle,
        expected: usize,
        found: usize,
    },
    /// The node ranks strictly above its parent.
    HeapOrder(NodeHandle),
    /// The cached extremum is not a root, or a root ranks strictly above it.
    WrongExtremum(NodeHandle),
    /// Reachable nodes differ from the recorded size.
    WrongCount { expected: usize, found: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::VacantNode(u) => write!(f, "link to freed {u}"),
            Violation::BrokenRing(u) => write!(f, "sibling ring broken at {u}"),
            Violation::BrokenParent(u) => write!(f, "wrong parent link at {u}"),
            Violation::WrongDegree {
                node,
                expected,
                found,
            } => write!(f, "{node} has degree {expected} but {found} children"),
            Violation::HeapOrder(u) => write!(f, "{u} ranks above its parent"),
            Violation::WrongExtremum(u) => write!(f, "{u} is not the extremum"),
            Violation::WrongCount { expected, found } => {
                write!(f, "expected {expected} nodes, reached {found}")
            }
        }
    }
}
