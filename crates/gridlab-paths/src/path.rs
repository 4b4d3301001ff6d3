use std::rc::Rc;

use gridlab_core::Point;

use crate::node::Node;

/// A route from the search start to the goal, both inclusive.
#[derive(Debug, Clone)]
pub struct Path {
    nodes: Vec<Rc<Node>>,
    length: f64,
}

impl Path {
    /// Rebuild the route ending at `goal` by following parent links.
    ///
    /// The length is the goal's cumulative cost as reported by the search
    /// routine; edge costs are not summed again. A goal without a parent
    /// yields a single-node path.
    pub fn reconstruct(goal: &Rc<Node>) -> Self {
        let length = goal.g;
        let mut nodes = Vec::new();
        let mut cur = Rc::clone(goal);
        while let Some(parent) = cur.parent.clone() {
            nodes.push(cur);
            cur = parent;
        }
        nodes.push(cur);
        nodes.reverse();
        Self { nodes, length }
    }

    /// Length reported by the goal node.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Nodes from start to goal.
    #[inline]
    pub fn nodes(&self) -> &[Rc<Node>] {
        &self.nodes
    }

    /// Cell positions from start to goal.
    pub fn positions(&self) -> Vec<Point> {
        self.nodes.iter().map(|n| n.pos).collect()
    }

    /// First node of the route.
    pub fn start(&self) -> Option<&Rc<Node>> {
        self.nodes.first()
    }

    /// Last node of the route.
    pub fn goal(&self) -> Option<&Rc<Node>> {
        self.nodes.last()
    }

    /// Number of nodes on the route.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
