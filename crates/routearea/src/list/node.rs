/// Stable handle of a node inside one `OrderedList` arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(super) usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One payload plus its neighbours. Links are indices into the owning arena,
/// so a node never owns another node.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(super) payload: T,
    pub(super) next: Option<NodeId>,
    pub(super) prev: Option<NodeId>,
}

impl<T> Node<T> {
    #[inline]
    pub(super) fn new(payload: T, prev: Option<NodeId>) -> Self {
        Self {
            payload,
            next: None,
            prev,
        }
    }

    #[inline]
    pub fn payload(&self) -> &T {
        &self.payload
    }

    #[inline]
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    #[inline]
    pub fn prev(&self) -> Option<NodeId> {
        self.prev
    }
}
