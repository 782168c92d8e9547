use std::cmp::Ordering;

/// Ordering strategy of a heap, fixed when the heap is created.
pub trait Comparator<R> {
    /// `Greater` iff `a` has the higher priority, that is, `a` leaves the heap before `b`.
    /// Must be a total preorder that never changes while a heap uses it.
    fn compare(&self, a: &R, b: &R) -> Ordering;

    /// Whether a heap ordered by `self` and one ordered by `other` may be unioned.
    fn is_compatible(&self, other: &Self) -> bool;

    fn ranks_higher(&self, a: &R, b: &R) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
}

/// Smallest record first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinFirst;

/// Largest record first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxFirst;

impl<R: Ord> Comparator<R> for MinFirst {
    fn compare(&self, a: &R, b: &R) -> Ordering {
        b.cmp(a)
    }
    fn is_compatible(&self, _: &Self) -> bool {
        true
    }
}

impl<R: Ord> Comparator<R> for MaxFirst {
    fn compare(&self, a: &R, b: &R) -> Ordering {
        a.cmp(b)
    }
    fn is_compatible(&self, _: &Self) -> bool {
        true
    }
}

/// A plain comparison function. Two heaps are compatible iff they use the same function.
pub type CompareFn<R> = fn(&R, &R) -> Ordering;

impl<R> Comparator<R> for CompareFn<R> {
    fn compare(&self, a: &R, b: &R) -> Ordering {
        self(a, b)
    }
    fn is_compatible(&self, other: &Self) -> bool {
        *self as usize == *other as usize
    }
}
