//! Fibonacci heaps: forests of heap-ordered trees with amortized O(1) insert, union and
//! improve-priority, and amortized O(log n) extract and delete.

use std::fmt::{Debug, Formatter};

use debug_tree::TreeBuilder;
use derivative::Derivative;

use super::{HeapHandle, Heaps, NodeHandle};
use crate::comparator::Comparator;
use crate::error::HeapError;
use crate::forest::{idx_fmt, Forest, Idx, PrettyIdx as I, EMPTY};

mod consolidate;
mod cut;
mod verify;

#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
struct Heap<C> {
    /// Root with the highest priority, EMPTY iff the heap is empty.
    #[derivative(Debug(format_with = "idx_fmt"))]
    the_one: Idx,
    total_nodes: usize,
    max_nodes: usize,
    /// Scratch degree table for consolidation.
    #[derivative(Debug = "ignore")]
    buckets: Vec<Idx>,
    #[derivative(Debug = "ignore")]
    cmp: C,
}

/// Any number of Fibonacci heaps sharing one node arena.
///
/// Not thread safe: every operation takes `&mut self` or `&self` and callers sharing a
/// `FibHeaps` between threads must lock it as a whole.
pub struct FibHeaps<R, C> {
    forest: Forest<R>,
    heaps: Vec<Option<Heap<C>>>,
}

impl<R: Debug, C> Debug for FibHeaps<R, C> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let builder = TreeBuilder::new();
        let _b = builder.add_branch("FibHeaps");
        for (h, heap) in self.heaps.iter().enumerate() {
            if let Some(heap) = heap {
                let _hb = builder.add_branch(&format!("heap {h} {heap:?}"));
                if heap.the_one != EMPTY {
                    self.forest.ring_dbg(heap.the_one, &builder);
                }
            }
        }
        writeln!(f, "{}", builder.string())
    }
}

impl<R, C: Comparator<R>> Default for FibHeaps<R, C> {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Mutable access to one heap together with the shared arena.
struct HeapMut<'a, R, C> {
    forest: &'a mut Forest<R>,
    heap: &'a mut Heap<C>,
}

impl<R, C: Comparator<R>> HeapMut<'_, R, C> {
    fn ranks_higher(&self, u: Idx, v: Idx) -> bool {
        self.heap
            .cmp
            .ranks_higher(self.forest.data(u), self.forest.data(v))
    }

    /// Splices the ring containing `u` into the root ring.
    fn add_roots(&mut self, u: Idx) {
        if self.heap.the_one == EMPTY {
            self.heap.the_one = u;
        } else {
            self.forest.splice(self.heap.the_one, u);
        }
    }

    fn insert(&mut self, record: R) -> Idx {
        let u = self.forest.alloc(record);
        self.add_roots(u);
        if self.ranks_higher(u, self.heap.the_one) {
            self.heap.the_one = u;
        }
        self.heap.total_nodes += 1;
        u
    }

    fn extract(&mut self) -> Option<R> {
        let z = self.heap.the_one;
        (z != EMPTY).then(|| self.extract_root(z))
    }

    /// Removes `z`, which must be `the_one`.
    fn extract_root(&mut self, z: Idx) -> R {
        let children = self.forest.take_children(z);
        if children != EMPTY {
            self.forest.splice(z, children);
        }
        self.heap.total_nodes -= 1;
        self.consolidate(z);
        self.forest.release(z)
    }

    fn improve(&mut self, x: Idx) {
        let y = self.forest[x].parent;
        if y != EMPTY && self.ranks_higher(x, y) {
            self.cut(x, y);
            self.cascading_cut(y);
        }
        if self.ranks_higher(x, self.heap.the_one) {
            self.heap.the_one = x;
        }
    }

    fn change(&mut self, x: Idx) {
        let was_extremum = x == self.heap.the_one;
        let children = self.forest.take_children(x);
        if children != EMPTY {
            self.add_roots(children);
        }
        let y = self.forest[x].parent;
        if y != EMPTY {
            self.cut(x, y);
            self.cascading_cut(y);
        }
        if was_extremum {
            self.heap.the_one = self.best_root();
        } else if self.ranks_higher(x, self.heap.the_one) {
            self.heap.the_one = x;
        }
    }

    /// Linear scan of the root ring.
    fn best_root(&self) -> Idx {
        let start = self.heap.the_one;
        self.forest.ring(start).fold(start, |best, u| {
            if self.ranks_higher(u, best) {
                u
            } else {
                best
            }
        })
    }

    fn delete(&mut self, x: Idx) -> R {
        let y = self.forest[x].parent;
        if y != EMPTY {
            self.cut(x, y);
            self.cascading_cut(y);
        }
        self.heap.the_one = x;
        self.extract_root(x)
    }

    fn absorb(&mut self, other: Heap<C>) {
        if other.the_one == EMPTY {
            return;
        }
        if self.heap.the_one == EMPTY {
            self.heap.the_one = other.the_one;
        } else {
            self.forest.splice(self.heap.the_one, other.the_one);
            if self.ranks_higher(other.the_one, self.heap.the_one) {
                self.heap.the_one = other.the_one;
            }
        }
        self.heap.total_nodes += other.total_nodes;
    }
}

impl<R, C: Comparator<R>> FibHeaps<R, C> {
    fn heap(&self, h: HeapHandle) -> Result<&Heap<C>, HeapError> {
        self.heaps
            .get(h.0)
            .and_then(Option::as_ref)
            .ok_or(HeapError::UnknownHeap(h))
    }

    fn heap_mut(&mut self, h: HeapHandle) -> Result<HeapMut<'_, R, C>, HeapError> {
        let heap = self
            .heaps
            .get_mut(h.0)
            .and_then(Option::as_mut)
            .ok_or(HeapError::UnknownHeap(h))?;
        Ok(HeapMut {
            forest: &mut self.forest,
            heap,
        })
    }

    /// Checks that `node` can belong to `h`. Only liveness is checked: a live node of
    /// another heap is the caller's mistake.
    fn node(&self, h: HeapHandle, node: NodeHandle) -> Result<Idx, HeapError> {
        let heap = self.heap(h)?;
        if heap.total_nodes > 0 && self.forest.is_live(node.0) {
            Ok(node.0)
        } else {
            Err(HeapError::InvalidHandle(node))
        }
    }

    /// Live heaps in this arena. Linear in the number of heaps ever created.
    pub fn heap_count(&self) -> usize {
        self.heaps.iter().flatten().count()
    }

    /// Live nodes across all heaps.
    pub fn node_count(&self) -> usize {
        self.forest.live()
    }
}

impl<R, C: Comparator<R>> Heaps<R, C> for FibHeaps<R, C> {
    fn new(node_capacity: usize) -> Self {
        Self {
            forest: Forest::with_capacity(node_capacity),
            heaps: vec![],
        }
    }

    fn init(&mut self, capacity: usize, cmp: C) -> Result<HeapHandle, HeapError> {
        if capacity == 0 {
            return Err(HeapError::ZeroCapacity);
        }
        let h = HeapHandle(self.heaps.len());
        self.heaps.push(Some(Heap {
            the_one: EMPTY,
            total_nodes: 0,
            max_nodes: capacity,
            buckets: Vec::with_capacity(capacity.ilog2() as usize + 2),
            cmp,
        }));
        log::debug!("init {h} with capacity {capacity}");
        Ok(h)
    }

    fn insert(&mut self, h: HeapHandle, record: R) -> Result<NodeHandle, HeapError> {
        let mut heap = self.heap_mut(h)?;
        if heap.heap.total_nodes >= heap.heap.max_nodes {
            return Err(HeapError::CapacityExceeded {
                capacity: heap.heap.max_nodes,
            });
        }
        let u = heap.insert(record);
        log::trace!("insert into {h}: [{u}], extremum {}", I(heap.heap.the_one));
        Ok(NodeHandle(u))
    }

    fn read(&self, h: HeapHandle) -> Result<Option<&R>, HeapError> {
        let heap = self.heap(h)?;
        Ok((heap.the_one != EMPTY).then(|| self.forest.data(heap.the_one)))
    }

    fn extract(&mut self, h: HeapHandle) -> Result<Option<R>, HeapError> {
        Ok(self.heap_mut(h)?.extract())
    }

    fn union(&mut self, a: HeapHandle, b: HeapHandle) -> Result<HeapHandle, HeapError> {
        let (ha, hb) = (self.heap(a)?, self.heap(b)?);
        if a == b {
            return Err(HeapError::SelfUnion);
        }
        if !ha.cmp.is_compatible(&hb.cmp) {
            return Err(HeapError::IncompatibleComparators);
        }
        let (keep, gone) = if hb.max_nodes > ha.max_nodes {
            (b, a)
        } else {
            (a, b)
        };
        let capacity = ha.max_nodes.max(hb.max_nodes);
        if ha.total_nodes + hb.total_nodes > capacity {
            return Err(HeapError::CapacityExceeded { capacity });
        }
        let other = self.heaps[gone.0]
            .take()
            .ok_or(HeapError::UnknownHeap(gone))?;
        log::debug!(
            "union: {gone} ({} nodes) into {keep}",
            other.total_nodes
        );
        self.heap_mut(keep)?.absorb(other);
        Ok(keep)
    }

    fn improve_priority(
        &mut self,
        h: HeapHandle,
        node: NodeHandle,
        update: impl FnOnce(&mut R),
    ) -> Result<(), HeapError> {
        let x = self.node(h, node)?;
        let mut heap = self.heap_mut(h)?;
        update(heap.forest.data_mut(x));
        heap.improve(x);
        Ok(())
    }

    fn change_priority(
        &mut self,
        h: HeapHandle,
        node: NodeHandle,
        update: impl FnOnce(&mut R),
    ) -> Result<(), HeapError> {
        let x = self.node(h, node)?;
        let mut heap = self.heap_mut(h)?;
        update(heap.forest.data_mut(x));
        heap.change(x);
        Ok(())
    }

    fn delete(&mut self, h: HeapHandle, node: NodeHandle) -> Result<R, HeapError> {
        let x = self.node(h, node)?;
        Ok(self.heap_mut(h)?.delete(x))
    }

    fn destroy(&mut self, h: HeapHandle) -> Result<(), HeapError> {
        let heap = self
            .heaps
            .get_mut(h.0)
            .and_then(Option::take)
            .ok_or(HeapError::UnknownHeap(h))?;
        let freed = if heap.the_one == EMPTY {
            0
        } else {
            self.forest.release_all(heap.the_one)
        };
        debug_assert_eq!(freed, heap.total_nodes);
        log::debug!("destroy {h}: freed {freed} nodes");
        Ok(())
    }

    fn len(&self, h: HeapHandle) -> Result<usize, HeapError> {
        Ok(self.heap(h)?.total_nodes)
    }

    fn capacity(&self, h: HeapHandle) -> Result<usize, HeapError> {
        Ok(self.heap(h)?.max_nodes)
    }

    fn record(&self, node: NodeHandle) -> Result<&R, HeapError> {
        self.forest
            .record(node.0)
            .ok_or(HeapError::InvalidHandle(node))
    }

    fn comparator(&self, h: HeapHandle) -> Result<&C, HeapError> {
        Ok(&self.heap(h)?.cmp)
    }

    fn verify(&self, h: HeapHandle) -> Result<(), HeapError> {
        verify::verify(&self.forest, self.heap(h)?).map_err(HeapError::Corrupted)
    }
}
