use hashbrown::HashMap;

use crate::{
    graph::{Node, NodeId},
    sets::candidates::InternalNode,
};

/// Where a node stands with respect to the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// In the heap, at this index of `nodes`.
    Open(usize),
    /// Was inserted once and has since been extracted.
    Closed,
}

/// A binary min-heap over open nodes that supports decreasing a node's key in place.
///
/// The heap array is paired with a map from node identifier to array slot. Every
/// push, pop and swap updates both, so a node can be located in O(1) and its scores
/// changed in O(log n) without scanning the heap.
///
/// # Contract
/// - `extract_min` on an empty queue panics; check [`RelaxableQueue::is_empty`] first.
/// - `relax` on a node that was never inserted panics. Relaxing a node that has
///   already been extracted is a no-op.
///
/// # Time Complexity
/// - `insert`, `extract_min`, `relax`: O(log n)
/// - `exists`, `find`, `peek`: O(1)
///
/// # Examples
/// ```
/// use waypoint::{graph::NodeId, sets::candidates::RelaxableQueue};
///
/// let mut queue = RelaxableQueue::new();
/// queue.insert(NodeId::from(1), 0.0, 10.0);
/// queue.insert(NodeId::from(2), 0.0, 5.0);
/// queue.relax(NodeId::from(1), 0.0, 1.0);
///
/// assert_eq!(queue.extract_min().node, NodeId::from(1));
/// assert_eq!(queue.extract_min().node, NodeId::from(2));
/// assert!(queue.is_empty());
/// ```
#[derive(Debug)]
pub struct RelaxableQueue<N> {
    nodes: Vec<InternalNode<N>>,
    slots: HashMap<NodeId, Slot>,
}

impl<N: Node> RelaxableQueue<N> {
    pub fn new() -> Self {
        RelaxableQueue {
            nodes: Vec::new(),
            slots: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        RelaxableQueue {
            nodes: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
        }
    }

    /// Number of open nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds `node` to the open set with the given scores.
    ///
    /// # Returns
    /// `false` if the node is already open, in which case nothing changes. Use
    /// [`RelaxableQueue::relax`] to update an open node.
    pub fn insert(&mut self, node: N, gscore: f64, fscore: f64) -> bool {
        let id = node.id();
        if self.exists(id) {
            return false;
        }

        let index = self.nodes.len();
        self.nodes.push(InternalNode::new(node, gscore, fscore));
        self.slots.insert(id, Slot::Open(index));
        self.sift_up(index);
        true
    }

    /// Removes and returns the open node with the smallest f-score.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    pub fn extract_min(&mut self) -> InternalNode<N> {
        if self.nodes.is_empty() {
            panic!("extract_min called on an empty queue");
        }

        let last = self.nodes.len() - 1;
        self.swap(0, last);
        let Some(min) = self.nodes.pop() else {
            unreachable!("queue checked non-empty above")
        };
        self.slots.insert(min.id(), Slot::Closed);

        if !self.nodes.is_empty() {
            self.sift_down(0);
        }
        min
    }

    /// The open node `extract_min` would return, without removing it.
    pub fn peek(&self) -> Option<&InternalNode<N>> {
        self.nodes.first()
    }

    /// Whether `id` is currently open.
    pub fn exists(&self, id: NodeId) -> bool {
        matches!(self.slots.get(&id), Some(Slot::Open(_)))
    }

    /// The current scores of `id`, if it is open.
    pub fn find(&self, id: NodeId) -> Option<&InternalNode<N>> {
        match self.slots.get(&id) {
            Some(&Slot::Open(index)) => Some(&self.nodes[index]),
            _ => None,
        }
    }

    /// Overwrites the scores of the open node `id` and restores heap order from its slot.
    ///
    /// The new f-score may be lower (the usual case when a cheaper path is found) or
    /// higher; the node moves up or down accordingly.
    ///
    /// # Returns
    /// `true` if the node was open and has been updated, `false` if it had already been
    /// extracted.
    ///
    /// # Panics
    /// Panics if `id` was never inserted.
    pub fn relax(&mut self, id: NodeId, gscore: f64, fscore: f64) -> bool {
        match self.slots.get(&id) {
            Some(&Slot::Open(index)) => {
                let entry = &mut self.nodes[index];
                tracing::trace!(
                    node = %id,
                    old_fscore = entry.fscore,
                    new_fscore = fscore,
                    "relaxing open node"
                );
                entry.gscore = gscore;
                entry.fscore = fscore;
                self.fix(index);
                true
            }
            Some(Slot::Closed) => false,
            None => panic!("relax called on node {id} which was never inserted"),
        }
    }

    /// Forgets every node, open or closed.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.slots.clear();
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.nodes[i].priority() < self.nodes[j].priority()
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.nodes.swap(i, j);
        self.slots.insert(self.nodes[i].id(), Slot::Open(i));
        self.slots.insert(self.nodes[j].id(), Slot::Open(j));
    }

    /// Returns whether the entry moved.
    fn sift_up(&mut self, mut index: usize) -> bool {
        let start = index;
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.less(index, parent) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
        index != start
    }

    /// Returns whether the entry moved.
    fn sift_down(&mut self, mut index: usize) -> bool {
        let start = index;
        let len = self.nodes.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smallest = if right < len && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(smallest, index) {
                break;
            }
            self.swap(index, smallest);
            index = smallest;
        }
        index != start
    }

    fn fix(&mut self, index: usize) {
        if !self.sift_down(index) {
            self.sift_up(index);
        }
    }
}

impl<N: Node> Default for RelaxableQueue<N> {
    fn default() -> Self {
        RelaxableQueue::new()
    }
}
