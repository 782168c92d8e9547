use super::HeapMut;
use crate::comparator::Comparator;
use crate::forest::{Idx, EMPTY};

impl<R, C: Comparator<R>> HeapMut<'_, R, C> {
    /// Moves `x`, a child of `y`, to the root ring.
    pub(super) fn cut(&mut self, x: Idx, y: Idx) {
        log::trace!("cut {x} from {y}");
        let f = &mut *self.forest;
        if f[y].child == x {
            f[y].child = if f[x].right == x { EMPTY } else { f[x].right };
        }
        f.unlink(x);
        f[y].degree -= 1;
        f[x].parent = EMPTY;
        f[x].marked = false;
        self.add_roots(x);
    }

    /// Walks up from `y`, cutting marked ancestors until reaching a root or an unmarked
    /// node, which gets marked.
    pub(super) fn cascading_cut(&mut self, mut y: Idx) {
        loop {
            let z = self.forest[y].parent;
            if z == EMPTY {
                return;
            }
            if !self.forest[y].marked {
                log::trace!("mark {y}");
                self.forest[y].marked = true;
                return;
            }
            self.cut(y, z);
            y = z;
        }
    }
}
