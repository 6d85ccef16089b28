//! This crate provides a string queue backed by a doubly-linked cyclic
//! list with owned nodes.
//!
//! The [`Queue`] inserts and removes byte-string payloads at either end in
//! constant time, counts its elements by traversal, and rearranges itself
//! in place with a family of link-splicing algorithms: middle deletion,
//! adjacent-duplicate collapsing, pairwise swapping, reversal and a stable
//! merge sort. None of the algorithms allocates or copies a payload; they
//! work on the node links alone.
//!
//! Here is a quick example showing how the queue works.
//!
//! ```
//! use cyclic_queue::Queue;
//!
//! let mut queue = Queue::new();
//! queue.insert_tail("pear");
//! queue.insert_tail("apple");
//! queue.insert_head("fig");
//!
//! assert_eq!(queue.len(), 3);
//!
//! queue.sort(); // [apple, fig, pear]
//!
//! let element = queue.remove_head(None).unwrap();
//! assert_eq!(element.value(), b"apple");
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the queue is like the following graph:
//! ```text
//!          ┌────────────────────────────────────────────────────────────┐
//!          ↓                                               Sentinel     │
//!    ╔═══════════╗           ╔═══════════╗              ┌───────────┐   │
//!    ║   next    ║ ────────→ ║   next    ║ ──→ ┄┄ ────→ │   next    │ ──┘
//!    ╟───────────╢           ╟───────────╢              ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←── ┄┄ ←──── │   prev    │
//! │  ╟───────────╢           ╟───────────╢              ├───────────┤
//! │  ║  payload  ║           ║  payload  ║              ┊ no payload┊
//! │  ╚═══════════╝           ╚═══════════╝              └╌╌╌╌╌╌╌╌╌╌╌┘
//! │    Element 0               Element 1                     ↑  ↑
//! └──────────────────────────────────────────────────────────┘  │
//! ╔═══════════╗                                                 │
//! ║ sentinel  ║ ────────────────────────────────────────────────┘
//! ╚═══════════╝
//!     Queue
//! ```
//! The `Queue` owns a *sentinel* node that closes the ring. The sentinel
//! carries no payload (its payload slot is the empty boxed slice, which
//! owns no heap memory) and is never removed. Initially the sentinel's
//! `next` and `prev` point to itself; as elements are inserted,
//! `sentinel.next` points to the first element and `sentinel.prev` to the
//! last.
//!
//! Each element node is allocated on the heap and contains the `next` and
//! `prev` links plus an owned copy of the payload bytes handed to the
//! insertion call. For every node `n` in the ring, sentinel included,
//! `n.next.prev == n` and `n.prev.next == n`; every operation of this
//! crate restores that invariant before returning.
//!
//! # Remove vs. Delete
//!
//! Two families of operations take elements out of the ring, and they
//! differ in who releases the memory:
//! - the *remove* operations ([`remove_head`], [`remove_tail`]) unlink an
//!   element and hand it back as an owned [`Element`]; nothing is freed
//!   inside the call, and the element lives until the caller drops it;
//! - the *delete* operations ([`delete_middle`], [`delete_duplicates`])
//!   unlink and release internally.
//!
//! ```
//! use cyclic_queue::Queue;
//!
//! let mut queue = Queue::new();
//! queue.insert_tail("kept around");
//!
//! let element = queue.remove_head(None).unwrap();
//! assert!(queue.is_empty());
//! // The payload survives the removal, owned by `element`.
//! assert_eq!(element.value(), b"kept around");
//! ```
//!
//! # Iteration
//!
//! Iterating over a queue is by the [`Iter`] iterator, a double-ended,
//! fused, non-cyclic iterator over `&[u8]` payloads, and by [`IntoIter`],
//! which consumes the queue and yields owned payloads.
//!
//! ## Examples
//!
//! ```
//! use cyclic_queue::Queue;
//! use std::iter::FromIterator;
//!
//! let queue = Queue::from_iter(["a", "b", "c"]);
//! let mut iter = queue.iter();
//! assert_eq!(iter.next(), Some(&b"a"[..]));
//! assert_eq!(iter.next_back(), Some(&b"c"[..]));
//! assert_eq!(iter.next(), Some(&b"b"[..]));
//! assert_eq!(iter.next(), None);
//! ```
//!
//! # Algorithms
//!
//! The rearrangement operations are all pure link surgery over the ring:
//! - [`delete_middle`] finds the ⌊*n*/2⌋-th element with a slow/fast
//!   two-pointer traversal and deletes it;
//! - [`delete_duplicates`] collapses adjacent equal runs of an
//!   already-sorted ring, keeping the first of each run;
//! - [`swap_pairs`] exchanges every two adjacent elements;
//! - [`reverse`] reverses the ring without touching a payload;
//! - [`sort`] is a stable merge sort that views the ring as a
//!   sentinel-terminated chain, splits it recursively, merges by `next`
//!   relinking only, and then rebuilds the `prev` links in one pass.
//!
//! [`remove_head`]: Queue::remove_head
//! [`remove_tail`]: Queue::remove_tail
//! [`delete_middle`]: Queue::delete_middle
//! [`delete_duplicates`]: Queue::delete_duplicates
//! [`swap_pairs`]: Queue::swap_pairs
//! [`reverse`]: Queue::reverse
//! [`sort`]: Queue::sort

#[doc(inline)]
pub use queue::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use queue::{AllocError, Element, Queue};

pub mod queue;

mod experiments;
