use std::fmt::{Debug, Display};

/// Stable identifier of a graph node.
///
/// Identifiers are what the search kernel keys its maps on: the priority queue's
/// position index, predecessor maps and closed sets all store `NodeId`s rather than
/// the caller's node values.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash, Debug)]
pub struct NodeId {
    pub internal: usize,
}

impl From<usize> for NodeId {
    fn from(internal: usize) -> Self {
        NodeId { internal }
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.internal)
    }
}

/// A node as handed out by a graph.
///
/// The kernel never owns nodes; it clones them out of the caller's graph and only
/// relies on their identifier for bookkeeping.
pub trait Node: Clone + Debug {
    fn id(&self) -> NodeId;
}

impl Node for NodeId {
    fn id(&self) -> NodeId {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_is_its_own_node() {
        let id = NodeId::from(7);
        assert_eq!(id.id(), id);
        assert_eq!(id.internal, 7);
    }

    #[test]
    fn node_ids_order_by_internal_value() {
        assert!(NodeId::from(1) < NodeId::from(2));
        assert_eq!(format!("{}", NodeId::from(3)), "#3");
    }
}
