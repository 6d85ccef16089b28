//! Merge sort over the ring viewed as a chain.
//!
//! For the duration of the sort, the ring is treated as a finite sequence
//! of nodes linked by `next` only, running from the first element to the
//! sentinel — the sentinel plays the role of the end-of-chain marker, so
//! no half-linked state ever needs a null pointer. The chain is split
//! recursively at its midpoint (slow/fast traversal) and sorted halves are
//! merged by relinking `next` pointers alone; `prev` pointers go stale
//! while this happens. A single final pass rebuilds every `prev` link and
//! closes the ring through the sentinel again.

use crate::queue::{Node, Queue};
use std::ptr::NonNull;

pub(crate) fn merge_sort<F>(queue: &mut Queue, mut less: F)
where
    F: FnMut(&[u8], &[u8]) -> bool,
{
    let sentinel = queue.sentinel_node();
    let front = queue.front_node();
    // SAFETY: the chain functions below only follow `next` links between
    // `front` and the sentinel, all of which are live nodes of this ring,
    // and `restore_ring` re-establishes the ring invariant before any
    // other operation can observe the queue.
    unsafe {
        if front == sentinel || front.as_ref().next == sentinel {
            return;
        }
        let head = sort_chain(front, sentinel, &mut less);
        restore_ring(sentinel, head);
    }
}

/// Sort the non-empty chain `head..end`, returning its new head.
///
/// Only `next` links are read and written; `prev` links are left stale.
unsafe fn sort_chain<F>(head: NonNull<Node>, end: NonNull<Node>, less: &mut F) -> NonNull<Node>
where
    F: FnMut(&[u8], &[u8]) -> bool,
{
    if head.as_ref().next == end {
        return head;
    }
    let mid = split_chain(head, end);
    let left = sort_chain(head, end, less);
    let right = sort_chain(mid, end, less);
    merge_chains(left, right, end, less)
}

/// Split the chain `head..end` at its midpoint, found with a slow/fast
/// traversal: fast advances two links per step and slow one, until fast
/// runs out of chain. The left half is terminated with `end` and the head
/// of the right half is returned.
///
/// The chain must have at least two nodes, so neither half is empty.
unsafe fn split_chain(head: NonNull<Node>, end: NonNull<Node>) -> NonNull<Node> {
    let mut slow = head;
    let mut fast = head.as_ref().next;
    while fast != end && fast.as_ref().next != end {
        slow = slow.as_ref().next;
        fast = fast.as_ref().next.as_ref().next;
    }
    let mid = slow.as_ref().next;
    slow.as_mut().next = end;
    mid
}

/// Merge the sorted chains `left..end` and `right..end` into a single
/// sorted chain, returning its head.
///
/// A node is taken from `right` only when its payload is strictly smaller
/// than the current `left` payload, so payloads that compare equal keep
/// their left-then-right order and the sort stays stable. When either
/// chain runs out, the remainder of the other is appended as-is — an
/// explicit case split, relinking `next` pointers only.
///
/// Both chains must be non-empty.
unsafe fn merge_chains<F>(
    mut left: NonNull<Node>,
    mut right: NonNull<Node>,
    end: NonNull<Node>,
    less: &mut F,
) -> NonNull<Node>
where
    F: FnMut(&[u8], &[u8]) -> bool,
{
    let head;
    if less(&*right.as_ref().value, &*left.as_ref().value) {
        head = right;
        right = right.as_ref().next;
    } else {
        head = left;
        left = left.as_ref().next;
    }
    let mut tail = head;
    loop {
        if left == end {
            tail.as_mut().next = right;
            break;
        }
        if right == end {
            tail.as_mut().next = left;
            break;
        }
        if less(&*right.as_ref().value, &*left.as_ref().value) {
            tail.as_mut().next = right;
            tail = right;
            right = right.as_ref().next;
        } else {
            tail.as_mut().next = left;
            tail = left;
            left = left.as_ref().next;
        }
    }
    head
}

/// Walk the sorted chain once, re-establishing every `prev` link, and
/// close the ring by fixing the sentinel's links.
unsafe fn restore_ring(mut sentinel: NonNull<Node>, head: NonNull<Node>) {
    sentinel.as_mut().next = head;
    let mut prev = sentinel;
    let mut current = head;
    while current != sentinel {
        current.as_mut().prev = prev;
        prev = current;
        current = current.as_ref().next;
    }
    sentinel.as_mut().prev = prev;
}
