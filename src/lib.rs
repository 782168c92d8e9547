//! Fibonacci heaps over caller-owned records, ordered by a caller-supplied comparator.
//!
//! ```
//! use fib_heaps::{FibHeaps, Heaps, MinFirst};
//!
//! let mut heaps: FibHeaps<i32, MinFirst> = FibHeaps::new(8);
//! let h = heaps.init(8, MinFirst).unwrap();
//! let seven = heaps.insert(h, 7).unwrap();
//! heaps.insert(h, 5).unwrap();
//! heaps.improve_priority(h, seven, |k| *k = 1).unwrap();
//! assert_eq!(heaps.extract(h).unwrap(), Some(1));
//! assert_eq!(heaps.read(h).unwrap(), Some(&5));
//! ```

pub mod comparator;
pub mod error;
pub mod forest;
pub mod heaps;

pub use comparator::{CompareFn, Comparator, MaxFirst, MinFirst};
pub use error::{HeapError, Violation};
pub use heaps::fib::FibHeaps;
pub use heaps::{HeapHandle, Heaps, NodeHandle};
