//! A fully-safe rendition of the queue's ring.
//!
//! The main queue does its splicing through raw `NonNull` links. This
//! module explores how far the same end-insertion and end-removal
//! contract can be pushed with no `unsafe` at all: each node is owned by
//! exactly two half-references (`static_rc`), held by its neighbors'
//! links or the queue's end anchors, and every payload access threads a
//! `ghost_cell` token instead of dereferencing a pointer.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

pub struct SafeQueue<'id> {
    ends: [Option<NodePtr<'id>>; 2],
}

struct Node<'id> {
    links: [Option<NodePtr<'id>>; 2],
    value: Box<[u8]>,
}

type NodePtr<'id> = Half<GhostCell<'id, Node<'id>>>;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

impl<'id> Node<'id> {
    /// `links[NEXT]` points toward the tail; the index pairs up with
    /// `SafeQueue::HEAD` so both ends share one insertion and one removal
    /// path.
    const NEXT: usize = 0;

    fn new(value: &[u8]) -> Self {
        let links = [None, None];
        Self {
            links,
            value: value.into(),
        }
    }
}

impl<'id> Default for SafeQueue<'id> {
    fn default() -> Self {
        let ends = [None, None];
        Self { ends }
    }
}

impl<'id> SafeQueue<'id> {
    const HEAD: usize = 0;
    const TAIL: usize = 1;

    fn insert_at(&mut self, side: usize, value: &[u8], token: &mut GhostToken<'id>) {
        debug_assert!(side < 2);
        let other = 1 - side;
        let (inner, outer) = Full::split(Full::new(GhostCell::new(Node::new(value))));
        match self.ends[side].take() {
            Some(old_end) => {
                old_end.deref().borrow_mut(token).links[other] = Some(inner);
                outer.deref().borrow_mut(token).links[side] = Some(old_end);
            }
            None => self.ends[other] = Some(inner),
        }
        self.ends[side] = Some(outer);
    }

    fn remove_at(&mut self, side: usize, token: &mut GhostToken<'id>) -> Option<Box<[u8]>> {
        debug_assert!(side < 2);
        let other = 1 - side;
        let outer = self.ends[side].take()?;
        let inner = match outer.deref().borrow_mut(token).links[side].take() {
            Some(neighbor) => {
                let inner = neighbor.deref().borrow_mut(token).links[other].take().unwrap();
                self.ends[side] = Some(neighbor);
                inner
            }
            None => self.ends[other].take().unwrap(),
        };
        Some(Full::into_box(Full::join(inner, outer)).into_inner().value)
    }
}

impl<'id> SafeQueue<'id> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ends[Self::HEAD].is_none()
    }

    /// Walks the whole queue; like the raw-pointer ring, no count is
    /// cached.
    pub fn len(&self, token: &GhostToken<'id>) -> usize {
        let mut len = 0;
        let mut cursor = self.ends[Self::HEAD].as_ref();
        while let Some(node) = cursor {
            len += 1;
            cursor = node.deref().borrow(token).links[Node::NEXT].as_ref();
        }
        len
    }

    pub fn insert_head(&mut self, value: &[u8], token: &mut GhostToken<'id>) {
        self.insert_at(Self::HEAD, value, token);
    }

    pub fn insert_tail(&mut self, value: &[u8], token: &mut GhostToken<'id>) {
        self.insert_at(Self::TAIL, value, token);
    }

    pub fn remove_head(&mut self, token: &mut GhostToken<'id>) -> Option<Box<[u8]>> {
        self.remove_at(Self::HEAD, token)
    }

    pub fn remove_tail(&mut self, token: &mut GhostToken<'id>) -> Option<Box<[u8]>> {
        self.remove_at(Self::TAIL, token)
    }
}
