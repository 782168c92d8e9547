use super::HeapMut;
use crate::comparator::Comparator;
use crate::forest::{Idx, EMPTY};

impl<R, C: Comparator<R>> HeapMut<'_, R, C> {
    /// Links roots of equal degree until all degrees differ, then picks the new extremum.
    ///
    /// `sentinel` is the root being extracted. Its children are already in the root
    /// ring and it stays there while the ring is walked, marking where the walk ends.
    pub(super) fn consolidate(&mut self, sentinel: Idx) {
        if self.heap.total_nodes == 0 {
            debug_assert_eq!(self.forest[sentinel].right, sentinel);
            self.heap.the_one = EMPTY;
            return;
        }
        let mut buckets = std::mem::take(&mut self.heap.buckets);
        buckets.clear();
        buckets.resize(self.heap.total_nodes.ilog2() as usize + 2, EMPTY);

        let (mut roots, mut links) = (0, 0);
        let mut w = self.forest[sentinel].right;
        let mut best = w;
        while w != sentinel {
            roots += 1;
            let mut x = w;
            let mut d = self.forest[x].degree;
            loop {
                if d >= buckets.len() {
                    buckets.resize(d + 1, EMPTY);
                }
                let mut y = buckets[d];
                if y == EMPTY {
                    break;
                }
                if self.ranks_higher(y, x) {
                    std::mem::swap(&mut x, &mut y);
                }
                if w == y {
                    // The walker is about to leave the root ring.
                    w = self.forest[w].left;
                }
                self.link(y, x);
                links += 1;
                buckets[d] = EMPTY;
                d += 1;
            }
            buckets[d] = x;
            if !self.ranks_higher(best, x) {
                best = x;
            }
            w = self.forest[w].right;
        }

        self.forest.unlink(sentinel);
        self.heap.the_one = best;
        self.heap.buckets = buckets;
        log::trace!(
            "consolidate: {roots} roots, {links} links, extremum {best}, {} nodes",
            self.heap.total_nodes
        );
    }

    /// Makes root `y` a child of root `x`.
    fn link(&mut self, y: Idx, x: Idx) {
        log::trace!("link {y} under {x}");
        let f = &mut *self.forest;
        f.unlink(y);
        f[y].parent = x;
        f[y].marked = false;
        let c = f[x].child;
        if c == EMPTY {
            f[x].child = y;
        } else {
            f.splice(c, y);
        }
        f[x].degree += 1;
    }
}
