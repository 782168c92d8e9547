use std::fmt::{Display, Formatter};

use crate::comparator::Comparator;
use crate::error::HeapError;
use crate::forest::{Idx, PrettyIdx};

pub mod fib;

/// Identifies one heap inside a [`Heaps`] collection. Never reused once the heap is gone,
/// so every `init` adds a slot to the collection for good, destroyed heaps included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeapHandle(pub Idx);

/// Identifies one node, returned by [`Heaps::insert`].
///
/// Valid until the node is extracted, deleted or destroyed. After that the slot may be
/// reused by a later insert, and a stale handle then refers to the new node. Not
/// holding on to stale handles is up to the caller.
///
/// A node must only be passed along with the heap it currently belongs to. Using it
/// with another heap is not detected: it corrupts both heaps, and later operations on
/// them may panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeHandle(pub Idx);

impl Display for HeapHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "heap {}", PrettyIdx(self.0))
    }
}

impl Display for NodeHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "node {}", PrettyIdx(self.0))
    }
}

/// A collection of priority queues over records of type `R`, each ordered by its own
/// comparator of type `C`. Records are moved in by `insert` and handed back by
/// `extract` and `delete`.
pub trait Heaps<R, C>
where
    C: Comparator<R>,
{
    /// New empty collection with room for `node_capacity` nodes before reallocating.
    fn new(node_capacity: usize) -> Self;
    /// Creates an empty heap that holds at most `capacity` records.
    fn init(&mut self, capacity: usize, cmp: C) -> Result<HeapHandle, HeapError>;
    /// Adds a record, returning a handle for later priority changes or deletion.
    fn insert(&mut self, heap: HeapHandle, record: R) -> Result<NodeHandle, HeapError>;
    /// The highest priority record, None if the heap is empty.
    fn read(&self, heap: HeapHandle) -> Result<Option<&R>, HeapError>;
    /// Removes and returns the highest priority record, None if the heap is empty.
    fn extract(&mut self, heap: HeapHandle) -> Result<Option<R>, HeapError>;
    /// Moves all records of one heap into the other and returns the survivor: the one
    /// with the larger capacity, or `a` if they are equal. The other handle dies.
    fn union(&mut self, a: HeapHandle, b: HeapHandle) -> Result<HeapHandle, HeapError>;
    /// Applies `update` to the node's record. `update` must not lower its priority.
    fn improve_priority(
        &mut self,
        heap: HeapHandle,
        node: NodeHandle,
        update: impl FnOnce(&mut R),
    ) -> Result<(), HeapError>;
    /// Applies `update` to the node's record, which may move its priority either way.
    /// Slower than [`Heaps::improve_priority`].
    fn change_priority(
        &mut self,
        heap: HeapHandle,
        node: NodeHandle,
        update: impl FnOnce(&mut R),
    ) -> Result<(), HeapError>;
    /// Removes the node, returning its record.
    fn delete(&mut self, heap: HeapHandle, node: NodeHandle) -> Result<R, HeapError>;
    /// Drops the heap and every record still in it.
    fn destroy(&mut self, heap: HeapHandle) -> Result<(), HeapError>;

    /// Number of records in the heap.
    fn len(&self, heap: HeapHandle) -> Result<usize, HeapError>;
    /// Maximum number of records the heap may hold.
    fn capacity(&self, heap: HeapHandle) -> Result<usize, HeapError>;
    /// Record held by a node.
    fn record(&self, node: NodeHandle) -> Result<&R, HeapError>;
    fn comparator(&self, heap: HeapHandle) -> Result<&C, HeapError>;

    fn is_empty(&self, heap: HeapHandle) -> Result<bool, HeapError> {
        Ok(self.len(heap)? == 0)
    }
    /// Replaces the node's record with one of no lower priority, returning the old record.
    fn promote(&mut self, heap: HeapHandle, node: NodeHandle, record: R) -> Result<R, HeapError> {
        let cmp = self.comparator(heap)?;
        if cmp.ranks_higher(self.record(node)?, &record) {
            return Err(HeapError::PriorityWorsened);
        }
        let mut record = record;
        self.improve_priority(heap, node, |r| std::mem::swap(r, &mut record))?;
        Ok(record)
    }
    /// Full structural audit of the heap, linear in its size.
    fn verify(&self, heap: HeapHandle) -> Result<(), HeapError> {
        self.len(heap).map(|_| ())
    }
}
