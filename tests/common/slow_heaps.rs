use std::fmt::Debug;

use fib_heaps::{Comparator, HeapError, HeapHandle, Heaps, NodeHandle};

/// Dummy implementation, reading and extracting take linear time.
pub struct SlowHeaps<R, C> {
    /// Indexed by node, slots are never reused.
    records: Vec<Option<R>>,
    heaps: Vec<Option<SlowHeap<C>>>,
}

struct SlowHeap<C> {
    nodes: Vec<usize>,
    capacity: usize,
    cmp: C,
}

impl<R: Debug, C> Debug for SlowHeaps<R, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SlowHeaps:")?;
        for (h, heap) in self.heaps.iter().enumerate() {
            if let Some(heap) = heap {
                write!(f, " heap {h} [")?;
                for &u in &heap.nodes {
                    write!(f, "{u}({:?}) ", self.records[u])?;
                }
                writeln!(f, "]")?;
            }
        }
        Ok(())
    }
}

impl<R, C: Comparator<R>> SlowHeaps<R, C> {
    fn heap(&self, h: HeapHandle) -> Result<&SlowHeap<C>, HeapError> {
        self.heaps
            .get(h.0)
            .and_then(Option::as_ref)
            .ok_or(HeapError::UnknownHeap(h))
    }
    fn heap_mut(&mut self, h: HeapHandle) -> Result<&mut SlowHeap<C>, HeapError> {
        self.heaps
            .get_mut(h.0)
            .and_then(Option::as_mut)
            .ok_or(HeapError::UnknownHeap(h))
    }
    fn data(&self, u: usize) -> &R {
        self.records[u].as_ref().unwrap()
    }
    /// Position of the best node in the heap's node list.
    fn best(&self, h: HeapHandle) -> Result<Option<usize>, HeapError> {
        let heap = self.heap(h)?;
        let mut best: Option<usize> = None;
        for (i, &u) in heap.nodes.iter().enumerate() {
            match best {
                Some(b) if !heap.cmp.ranks_higher(self.data(u), self.data(heap.nodes[b])) => {}
                _ => best = Some(i),
            }
        }
        Ok(best)
    }
    fn position(&self, h: HeapHandle, node: NodeHandle) -> Result<usize, HeapError> {
        let heap = self.heap(h)?;
        if self.records.get(node.0).is_some_and(Option::is_some) {
            if let Some(i) = heap.nodes.iter().position(|&u| u == node.0) {
                return Ok(i);
            }
        }
        Err(HeapError::InvalidHandle(node))
    }
    fn remove_at(&mut self, h: HeapHandle, i: usize) -> Result<R, HeapError> {
        let u = self.heap_mut(h)?.nodes.swap_remove(i);
        Ok(self.records[u].take().unwrap())
    }
}

impl<R, C: Comparator<R>> Heaps<R, C> for SlowHeaps<R, C> {
    fn new(node_capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(node_capacity),
            heaps: vec![],
        }
    }

    fn init(&mut self, capacity: usize, cmp: C) -> Result<HeapHandle, HeapError> {
        if capacity == 0 {
            return Err(HeapError::ZeroCapacity);
        }
        self.heaps.push(Some(SlowHeap {
            nodes: vec![],
            capacity,
            cmp,
        }));
        Ok(HeapHandle(self.heaps.len() - 1))
    }

    fn insert(&mut self, h: HeapHandle, record: R) -> Result<NodeHandle, HeapError> {
        let u = self.records.len();
        let heap = self.heap_mut(h)?;
        if heap.nodes.len() >= heap.capacity {
            return Err(HeapError::CapacityExceeded {
                capacity: heap.capacity,
            });
        }
        heap.nodes.push(u);
        self.records.push(Some(record));
        Ok(NodeHandle(u))
    }

    fn read(&self, h: HeapHandle) -> Result<Option<&R>, HeapError> {
        let best = self.best(h)?;
        Ok(best.map(|i| self.data(self.heaps[h.0].as_ref().unwrap().nodes[i])))
    }

    fn extract(&mut self, h: HeapHandle) -> Result<Option<R>, HeapError> {
        match self.best(h)? {
            Some(i) => self.remove_at(h, i).map(Some),
            None => Ok(None),
        }
    }

    fn union(&mut self, a: HeapHandle, b: HeapHandle) -> Result<HeapHandle, HeapError> {
        let (ha, hb) = (self.heap(a)?, self.heap(b)?);
        if a == b {
            return Err(HeapError::SelfUnion);
        }
        if !ha.cmp.is_compatible(&hb.cmp) {
            return Err(HeapError::IncompatibleComparators);
        }
        let (keep, gone) = if hb.capacity > ha.capacity {
            (b, a)
        } else {
            (a, b)
        };
        let capacity = ha.capacity.max(hb.capacity);
        if ha.nodes.len() + hb.nodes.len() > capacity {
            return Err(HeapError::CapacityExceeded { capacity });
        }
        let gone = self.heaps[gone.0].take().unwrap();
        self.heap_mut(keep)?.nodes.extend(gone.nodes);
        Ok(keep)
    }

    fn improve_priority(
        &mut self,
        h: HeapHandle,
        node: NodeHandle,
        update: impl FnOnce(&mut R),
    ) -> Result<(), HeapError> {
        self.position(h, node)?;
        update(self.records[node.0].as_mut().unwrap());
        Ok(())
    }

    fn change_priority(
        &mut self,
        h: HeapHandle,
        node: NodeHandle,
        update: impl FnOnce(&mut R),
    ) -> Result<(), HeapError> {
        self.improve_priority(h, node, update)
    }

    fn delete(&mut self, h: HeapHandle, node: NodeHandle) -> Result<R, HeapError> {
        let i = self.position(h, node)?;
        self.remove_at(h, i)
    }

    fn destroy(&mut self, h: HeapHandle) -> Result<(), HeapError> {
        let heap = self
            .heaps
            .get_mut(h.0)
            .and_then(Option::take)
            .ok_or(HeapError::UnknownHeap(h))?;
        for u in heap.nodes {
            self.records[u] = None;
        }
        Ok(())
    }

    fn len(&self, h: HeapHandle) -> Result<usize, HeapError> {
        Ok(self.heap(h)?.nodes.len())
    }

    fn capacity(&self, h: HeapHandle) -> Result<usize, HeapError> {
        Ok(self.heap(h)?.capacity)
    }

    fn record(&self, node: NodeHandle) -> Result<&R, HeapError> {
        self.records
            .get(node.0)
            .and_then(Option::as_ref)
            .ok_or(HeapError::InvalidHandle(node))
    }

    fn comparator(&self, h: HeapHandle) -> Result<&C, HeapError> {
        Ok(&self.heap(h)?.cmp)
    }
}
