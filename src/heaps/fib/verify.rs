use super::Heap;
use crate::comparator::Comparator;
use crate::error::Violation;
use crate::forest::{Forest, Idx, EMPTY};
use crate::heaps::NodeHandle as N;

/// Walks every ring of the heap with an explicit worklist, checking ring links, parent
/// links, degrees, heap order, the cached extremum and the node count.
pub(super) fn verify<R, C: Comparator<R>>(
    forest: &Forest<R>,
    heap: &Heap<C>,
) -> Result<(), Violation> {
    let root = heap.the_one;
    if root == EMPTY {
        return match heap.total_nodes {
            0 => Ok(()),
            expected => Err(Violation::WrongCount { expected, found: 0 }),
        };
    }
    if !forest.is_live(root) {
        return Err(Violation::VacantNode(N(root)));
    }
    if forest[root].parent != EMPTY {
        return Err(Violation::WrongExtremum(N(root)));
    }
    let cmp = &heap.cmp;
    let mut found = 0;
    // (first node of a ring, parent of that ring)
    let mut rings: Vec<(Idx, Idx)> = vec![(root, EMPTY)];
    while let Some((first, parent)) = rings.pop() {
        let mut ring_len = 0;
        let mut u = first;
        loop {
            let n = &forest[u];
            if !forest.is_live(n.left) || !forest.is_live(n.right) {
                return Err(Violation::BrokenRing(N(u)));
            }
            if forest[n.right].left != u || forest[n.left].right != u {
                return Err(Violation::BrokenRing(N(u)));
            }
            if n.parent != parent {
                return Err(Violation::BrokenParent(N(u)));
            }
            if parent == EMPTY {
                if cmp.ranks_higher(forest.data(u), forest.data(root)) {
                    return Err(Violation::WrongExtremum(N(root)));
                }
            } else if cmp.ranks_higher(forest.data(u), forest.data(parent)) {
                return Err(Violation::HeapOrder(N(u)));
            }
            match n.child {
                EMPTY if n.degree != 0 => {
                    return Err(Violation::WrongDegree {
                        node: N(u),
                        expected: n.degree,
                        found: 0,
                    })
                }
                EMPTY => {}
                c if !forest.is_live(c) => return Err(Violation::VacantNode(N(c))),
                c => rings.push((c, u)),
            }
            found += 1;
            ring_len += 1;
            if found > forest.slots() {
                // Some ring never closes, or a tree loops back onto itself.
                return Err(Violation::BrokenRing(N(first)));
            }
            u = n.right;
            if u == first {
                break;
            }
        }
        if parent != EMPTY && ring_len != forest[parent].degree {
            return Err(Violation::WrongDegree {
                node: N(parent),
                expected: forest[parent].degree,
                found: ring_len,
            });
        }
    }
    if found != heap.total_nodes {
        return Err(Violation::WrongCount {
            expected: heap.total_nodes,
            found,
        });
    }
    Ok(())
}
