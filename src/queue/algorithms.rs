use crate::queue::{connect, Node, Queue};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ptr::NonNull;

mod sort;

impl PartialEq for Queue {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl Eq for Queue {}

impl PartialOrd for Queue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queue {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl Clone for Queue {
    fn clone(&self) -> Self {
        Self::from_iter(self.iter())
    }
}

impl Hash for Queue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for value in self {
            value.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl Queue {
    /// Returns `true` if the `Queue` contains a payload equal to the given
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let queue = Queue::from_iter(["a", "b"]);
    ///
    /// assert_eq!(queue.contains("a"), true);
    /// assert_eq!(queue.contains("z"), false);
    /// ```
    pub fn contains(&self, value: impl AsRef<[u8]>) -> bool {
        let value = value.as_ref();
        self.iter().any(|v| v == value)
    }

    /// Deletes the middle element of the queue, releasing it. Returns
    /// `false` if the queue is empty, and `true` otherwise.
    ///
    /// The middle of a queue with *n* elements is the ⌊*n*/2⌋-th element,
    /// 0-indexed from the front. It is found with a slow/fast traversal:
    /// slow starts at the first element and fast at the second; fast
    /// advances two links per step and slow one, until fast reaches the
    /// sentinel or the node just before it. The sentinel is never deleted.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["a", "b", "c", "d", "e", "f"]);
    ///
    /// assert!(queue.delete_middle());
    /// assert_eq!(queue, Queue::from_iter(["a", "b", "c", "e", "f"]));
    ///
    /// assert!(queue.delete_middle());
    /// assert_eq!(queue, Queue::from_iter(["a", "b", "e", "f"]));
    ///
    /// assert!(!Queue::new().delete_middle());
    /// ```
    pub fn delete_middle(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        let sentinel = self.sentinel_node();
        // SAFETY: the traversal only follows `next` links of a well-formed
        // non-empty ring, and stops before running past the sentinel, so
        // every node it touches is live. `slow` lands on an element node,
        // never the sentinel.
        unsafe {
            let back = self.back_node();
            let mut slow = self.front_node();
            let mut fast = slow.as_ref().next;
            while fast != sentinel && fast != back {
                slow = slow.as_ref().next;
                fast = fast.as_ref().next.as_ref().next;
            }
            // On an even length, fast stops one short of the sentinel and
            // the middle is one step further.
            if fast != sentinel {
                slow = slow.as_ref().next;
            }
            drop(self.detach_node(slow));
        }
        true
    }

    /// Deletes every element whose payload equals the payload of the last
    /// retained element before it, releasing the deleted elements. Returns
    /// the number of elements deleted.
    ///
    /// The queue must already be sorted ascending (byte-wise) for this to
    /// collapse every duplicate; this operation does not sort. It walks the
    /// ring once, so only *consecutive* equal runs collapse — the first
    /// occurrence of each run survives, and non-adjacent duplicates are
    /// left alone. Callers that may have re-introduced duplicates must
    /// sort again before deduplicating again.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["a", "b", "b", "b", "c"]);
    ///
    /// assert_eq!(queue.delete_duplicates(), 2);
    /// assert_eq!(queue, Queue::from_iter(["a", "b", "c"]));
    /// ```
    pub fn delete_duplicates(&mut self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let sentinel = self.sentinel_node();
        let mut deleted = 0;
        // SAFETY: `kept` always lags behind `current` and is never
        // deleted, and `next` is read before `current` can be detached,
        // so the traversal only dereferences live nodes.
        unsafe {
            let mut kept = self.front_node();
            let mut current = kept.as_ref().next;
            while current != sentinel {
                let next = current.as_ref().next;
                if current.as_ref().value == kept.as_ref().value {
                    drop(self.detach_node(current));
                    deleted += 1;
                } else {
                    kept = current;
                }
                current = next;
            }
        }
        deleted
    }

    /// Exchanges the order of every two adjacent elements, leaving an odd
    /// trailing element untouched. No-op on a queue with at most one
    /// element.
    ///
    /// The exchange is pure link surgery: the second node of each pair is
    /// unlinked and re-spliced immediately before the first. No payload is
    /// copied or touched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["a", "b", "c", "d", "e"]);
    ///
    /// queue.swap_pairs();
    /// assert_eq!(queue, Queue::from_iter(["b", "a", "d", "c", "e"]));
    /// ```
    pub fn swap_pairs(&mut self) {
        let sentinel = self.sentinel_node();
        // SAFETY: `first` and `second` are element nodes of the ring (the
        // loop condition rules the sentinel out), and `move_node` keeps
        // the ring well-formed, so every dereference is live.
        unsafe {
            let mut first = self.front_node();
            while first != sentinel && first.as_ref().next != sentinel {
                let second = first.as_ref().next;
                let next_pair = second.as_ref().next;
                move_node(second, first);
                first = next_pair;
            }
        }
    }

    /// Reverses the traversal order of the queue in place. No-op on a
    /// queue with at most one element.
    ///
    /// The first element stays put while the node following it is
    /// repeatedly detached and re-spliced immediately after the sentinel,
    /// until the ring is fully reversed. Nothing is allocated or released,
    /// and no payload is touched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["a", "b", "c"]);
    ///
    /// queue.reverse();
    /// assert_eq!(queue, Queue::from_iter(["c", "b", "a"]));
    /// ```
    pub fn reverse(&mut self) {
        let sentinel = self.sentinel_node();
        // SAFETY: `first` is a live element node pinned for the duration
        // of the loop; its `next` is re-read after every splice, and
        // `move_node` keeps the ring well-formed.
        unsafe {
            let first = self.front_node();
            if first == sentinel || first.as_ref().next == sentinel {
                return;
            }
            while first.as_ref().next != sentinel {
                let follower = first.as_ref().next;
                move_node(follower, sentinel.as_ref().next);
            }
        }
    }

    /// Sorts the queue ascending by byte-wise lexicographic payload
    /// comparison. No-op on a queue with at most one element.
    ///
    /// This sort is stable (i.e., does not reorder equal payloads), which
    /// keeps [`delete_duplicates`](Queue::delete_duplicates) predictable
    /// when the two are chained.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and
    /// *O*(log(*n*)) stack, with no payload copies.
    ///
    /// # Current Implementation
    ///
    /// A merge sort over the ring viewed as a sentinel-terminated chain of
    /// `next` links; see the module documentation of the sort internals.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["b", "a", "b"]);
    ///
    /// queue.sort();
    /// assert_eq!(queue, Queue::from_iter(["a", "b", "b"]));
    ///
    /// queue.delete_duplicates();
    /// assert_eq!(queue, Queue::from_iter(["a", "b"]));
    /// ```
    pub fn sort(&mut self) {
        sort::merge_sort(self, |a, b| a.lt(b));
    }

    /// Sorts the queue with a comparator function.
    ///
    /// This sort is stable (i.e., does not reorder payloads the comparator
    /// considers equal). The comparator must define a total ordering over
    /// byte slices.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["ccc", "a", "bb"]);
    ///
    /// // sort by payload length
    /// queue.sort_by(|a, b| a.len().cmp(&b.len()));
    /// assert_eq!(queue, Queue::from_iter(["a", "bb", "ccc"]));
    ///
    /// // reverse sorting
    /// queue.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(queue, Queue::from_iter(["ccc", "bb", "a"]));
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        sort::merge_sort(self, |a, b| compare(a, b) == Ordering::Less)
    }
}

/// Move the node `from` to the position immediately before `to`.
unsafe fn move_node(from: NonNull<Node>, to: NonNull<Node>) {
    move_nodes(from, from, to);
}

/// Move the sub-chain `from_front..=from_back` to the position
/// immediately before `to`.
unsafe fn move_nodes(
    from_front: NonNull<Node>,
    from_back: NonNull<Node>,
    to: NonNull<Node>,
) {
    connect(from_front.as_ref().prev, from_back.as_ref().next);
    connect(to.as_ref().prev, from_front);
    connect(from_back, to);
}

#[cfg(test)]
mod tests {
    use crate::queue::check_ring;
    use crate::Queue;
    use std::iter::FromIterator;

    fn queue_of(values: &[&str]) -> Queue {
        Queue::from_iter(values.iter())
    }

    fn assert_queue(queue: &Queue, expected: &[&str]) {
        check_ring(queue);
        assert_eq!(queue, &queue_of(expected));
    }

    #[test]
    fn delete_middle_picks_floor_half() {
        let mut queue = queue_of(&["a", "b", "c", "d", "e", "f"]);
        assert!(queue.delete_middle());
        assert_queue(&queue, &["a", "b", "c", "e", "f"]);

        let mut queue = queue_of(&["a", "b", "c", "d", "e"]);
        assert!(queue.delete_middle());
        assert_queue(&queue, &["a", "b", "d", "e"]);

        let mut queue = queue_of(&["a", "b"]);
        assert!(queue.delete_middle());
        assert_queue(&queue, &["a"]);

        assert!(queue.delete_middle());
        assert_queue(&queue, &[]);

        assert!(!queue.delete_middle());
    }

    #[test]
    fn delete_middle_down_to_empty() {
        let mut queue = queue_of(&["a", "b", "c", "d", "e", "f", "g"]);
        let mut len = queue.len();
        while len > 0 {
            assert!(queue.delete_middle());
            len -= 1;
            assert_eq!(queue.len(), len);
            check_ring(&queue);
        }
    }

    #[test]
    fn delete_duplicates_collapses_runs() {
        let mut queue = queue_of(&["a", "a", "b", "b", "b", "c"]);
        assert_eq!(queue.delete_duplicates(), 3);
        assert_queue(&queue, &["a", "b", "c"]);

        // Idempotent once the runs are gone.
        assert_eq!(queue.delete_duplicates(), 0);
        assert_queue(&queue, &["a", "b", "c"]);
    }

    #[test]
    fn delete_duplicates_keeps_first_of_run() {
        let mut queue = queue_of(&["x", "x", "x"]);
        assert_eq!(queue.delete_duplicates(), 2);
        assert_queue(&queue, &["x"]);
    }

    #[test]
    fn delete_duplicates_ignores_non_adjacent() {
        // Unsorted input is out of contract: only adjacent runs collapse.
        let mut queue = queue_of(&["b", "a", "b"]);
        assert_eq!(queue.delete_duplicates(), 0);
        assert_queue(&queue, &["b", "a", "b"]);
    }

    #[test]
    fn delete_duplicates_trivial_rings() {
        assert_eq!(Queue::new().delete_duplicates(), 0);
        let mut queue = queue_of(&["a"]);
        assert_eq!(queue.delete_duplicates(), 0);
        assert_queue(&queue, &["a"]);
    }

    #[test]
    fn swap_pairs_leaves_odd_tail() {
        let mut queue = queue_of(&["a", "b", "c", "d", "e"]);
        queue.swap_pairs();
        assert_queue(&queue, &["b", "a", "d", "c", "e"]);
    }

    #[test]
    fn swap_pairs_even_length() {
        let mut queue = queue_of(&["a", "b", "c", "d"]);
        queue.swap_pairs();
        assert_queue(&queue, &["b", "a", "d", "c"]);

        // Swapping twice restores the original order.
        queue.swap_pairs();
        assert_queue(&queue, &["a", "b", "c", "d"]);
    }

    #[test]
    fn swap_pairs_trivial_rings() {
        let mut queue = Queue::new();
        queue.swap_pairs();
        assert_queue(&queue, &[]);

        let mut queue = queue_of(&["a"]);
        queue.swap_pairs();
        assert_queue(&queue, &["a"]);
    }

    #[test]
    fn reverse_reverses() {
        let mut queue = queue_of(&["a", "b", "c"]);
        queue.reverse();
        assert_queue(&queue, &["c", "b", "a"]);

        let mut queue = queue_of(&["a", "b", "c", "d", "e", "f"]);
        queue.reverse();
        assert_queue(&queue, &["f", "e", "d", "c", "b", "a"]);

        queue.reverse();
        assert_queue(&queue, &["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn reverse_trivial_rings() {
        let mut queue = Queue::new();
        queue.reverse();
        assert_queue(&queue, &[]);

        let mut queue = queue_of(&["a"]);
        queue.reverse();
        assert_queue(&queue, &["a"]);

        let mut queue = queue_of(&["a", "b"]);
        queue.reverse();
        assert_queue(&queue, &["b", "a"]);
    }

    #[test]
    fn sort_orders_bytewise() {
        let mut queue = queue_of(&["pear", "apple", "fig", "banana"]);
        queue.sort();
        assert_queue(&queue, &["apple", "banana", "fig", "pear"]);

        // Byte-wise order: shorter prefixes sort first.
        let mut queue = queue_of(&["b", "ab", "a", "aa"]);
        queue.sort();
        assert_queue(&queue, &["a", "aa", "ab", "b"]);
    }

    #[test]
    fn sort_is_idempotent() {
        let mut queue = queue_of(&["d", "b", "a", "c", "b"]);
        queue.sort();
        let once = queue.clone();
        queue.sort();
        assert_eq!(queue, once);
        assert_queue(&queue, &["a", "b", "b", "c", "d"]);
    }

    #[test]
    fn sort_trivial_and_presorted_rings() {
        let mut queue = Queue::new();
        queue.sort();
        assert_queue(&queue, &[]);

        let mut queue = queue_of(&["a"]);
        queue.sort();
        assert_queue(&queue, &["a"]);

        let mut queue = queue_of(&["a", "b", "c", "d"]);
        queue.sort();
        assert_queue(&queue, &["a", "b", "c", "d"]);

        let mut queue = queue_of(&["d", "c", "b", "a"]);
        queue.sort();
        assert_queue(&queue, &["a", "b", "c", "d"]);
    }

    #[test]
    fn sort_then_dedup() {
        let mut queue = queue_of(&["b", "a", "b"]);
        queue.sort();
        assert_queue(&queue, &["a", "b", "b"]);
        assert_eq!(queue.delete_duplicates(), 1);
        assert_queue(&queue, &["a", "b"]);
    }

    #[test]
    fn sort_by_custom_order() {
        let mut queue = queue_of(&["ccc", "a", "bb", "dd"]);
        queue.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        assert_queue(&queue, &["a", "bb", "dd", "ccc"]);

        queue.sort_by(|a, b| b.cmp(a));
        assert_queue(&queue, &["dd", "ccc", "bb", "a"]);
    }

    #[test]
    fn sort_longer_queue() {
        let words = [
            "uniform", "kilo", "zulu", "alfa", "mike", "echo", "golf", "kilo", "bravo", "delta",
            "hotel", "india", "alfa", "yankee", "oscar", "papa", "victor", "sierra", "tango",
            "romeo", "quebec", "whiskey", "juliett", "lima", "november", "charlie", "foxtrot",
            "xray", "kilo", "echo",
        ];
        let mut queue = Queue::from_iter(words);
        queue.sort();
        check_ring(&queue);

        let mut sorted = words.to_vec();
        sorted.sort_unstable();
        assert_eq!(queue, Queue::from_iter(sorted));
    }
}
