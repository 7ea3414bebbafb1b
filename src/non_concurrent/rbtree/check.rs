use std::fmt;

use crate::memory::{NodeId, Resource};

use super::node::{Color, Side, TreeNode};
use super::RbTree;


/// A broken tree invariant, as reported by [`RbTree::verify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    RedRoot,
    /// The sentinel isn't black, or one of its links doesn't point back at itself.
    Sentinel,
    /// `child`'s parent link doesn't point at the node that has it as a child.
    ParentLink { child: NodeId },
    /// A red node with a red child.
    RedRed { parent: NodeId, child: NodeId },
    /// The two subtrees of `node` have different black heights.
    BlackHeight { node: NodeId, left: usize, right: usize },
    /// In-order traversal isn't strictly increasing at `node`.
    Order { node: NodeId },
    /// `len()` doesn't match the number of reachable nodes.
    Size { expected: usize, found: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::RedRoot => f.write_str("root is red"),
            Violation::Sentinel => f.write_str("sentinel is red or not self-linked"),
            Violation::ParentLink { child } => write!(f, "node {child:?} has a bad parent link"),
            Violation::RedRed { parent, child } => write!(f, "red node {parent:?} has red child {child:?}"),
            Violation::BlackHeight { node, left, right } => {
                write!(f, "black height mismatch at {node:?} (left {left}, right {right})")
            }
            Violation::Order { node } => write!(f, "keys out of order at {node:?}"),
            Violation::Size { expected, found } => write!(f, "tree claims {expected} nodes but has {found}"),
        }
    }
}

impl std::error::Error for Violation {}

impl<N: TreeNode, R: Resource<N>> RbTree<N, R>
where
    N::Key: Ord,
{
    /// Checks every structural invariant of the tree, returning the first one found broken.
    ///
    /// Takes `O(n)` time. Meant for tests and debugging.
    pub fn verify(&self) -> Result<(), Violation> {
        if self.nil.color != Color::Black || !self.nil.parent.is_nil() || self.nil.children != [NodeId::NIL; 2] {
            return Err(Violation::Sentinel)
        }
        if self.color(self.root) == Color::Red {
            return Err(Violation::RedRoot)
        }
        if !self.root.is_nil() && !self.parent(self.root).is_nil() {
            return Err(Violation::ParentLink { child: self.root })
        }

        self.black_height(self.root)?;

        let mut found = 0;
        let mut previous: Option<&N::Key> = None;
        let mut current = self.extreme(self.root, Side::Left);
        while !current.is_nil() {
            let key = self.resource.get(current).key();
            if previous.is_some_and(|previous| previous >= key) {
                return Err(Violation::Order { node: current })
            }
            previous = Some(key);
            found += 1;
            // a broken tree could cycle forever, so bail once we've seen too many
            if found > self.len {
                break
            }
            current = self.step(current, Side::Right);
        }

        if found != self.len {
            return Err(Violation::Size { expected: self.len, found })
        }
        Ok(())
    }

    /// The black height of the subtree at `node` (counting the sentinel), checking the coloring rules
    /// and parent links on the way.
    fn black_height(&self, node: NodeId) -> Result<usize, Violation> {
        if node.is_nil() {
            return Ok(1)
        }

        let color = self.color(node);
        let [left, right] = self.link(node).children;
        for child in [left, right] {
            if child.is_nil() {
                continue
            }
            if self.parent(child) != node {
                return Err(Violation::ParentLink { child })
            }
            if color == Color::Red && self.color(child) == Color::Red {
                return Err(Violation::RedRed { parent: node, child })
            }
        }

        let left_height = self.black_height(left)?;
        let right_height = self.black_height(right)?;
        if left_height != right_height {
            return Err(Violation::BlackHeight { node, left: left_height, right: right_height })
        }

        Ok(left_height + (color == Color::Black) as usize)
    }
}
