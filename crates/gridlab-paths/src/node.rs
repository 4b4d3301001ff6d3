use std::rc::Rc;

use gridlab_core::Point;

/// A node of a search tree.
///
/// Parents are shared through [`Rc`] and never mutated after construction,
/// so every parent chain is acyclic and ends at a node without a parent
/// (the search start).
#[derive(Debug, Clone)]
pub struct Node {
    /// Cell this node stands on.
    pub pos: Point,
    /// Cumulative cost from the start.
    pub g: f64,
    /// Predecessor in the search tree, `None` for the start node.
    pub parent: Option<Rc<Node>>,
}

impl Node {
    /// Create a node.
    pub fn new(pos: Point, g: f64, parent: Option<Rc<Node>>) -> Self {
        Self { pos, g, parent }
    }

    /// Create a parentless start node with zero cost.
    pub fn root(pos: Point) -> Rc<Self> {
        Rc::new(Self::new(pos, 0.0, None))
    }

    /// Create a successor of `parent` at `pos` with cumulative cost `g`.
    pub fn child(parent: &Rc<Node>, pos: Point, g: f64) -> Rc<Self> {
        Rc::new(Self::new(pos, g, Some(Rc::clone(parent))))
    }

    /// Row of the node's cell.
    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.row()
    }

    /// Column of the node's cell.
    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.col()
    }

    /// Number of nodes from this one back to the start, inclusive.
    pub fn depth(&self) -> usize {
        let mut n = 1;
        let mut cur = self.parent.as_deref();
        while let Some(p) = cur {
            n += 1;
            cur = p.parent.as_deref();
        }
        n
    }
}

// Unlink the chain iteratively; the default recursive drop overflows the
// stack on very long chains.
impl Drop for Node {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(rc) = next {
            match Rc::try_unwrap(rc) {
                Ok(mut node) => next = node.parent.take(),
                Err(_) => break,
            }
        }
    }
}
