use glam::Mat4;

/// A node of the scene hierarchy.
///
/// Nodes form a tree: each node owns its children outright, and traversal is
/// root-down only, so no parent back-references are kept. `mesh_count`
/// records how many mesh primitives the source node instanced (display
/// only; the primitives themselves live in the document's mesh list).
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: String,
    /// Local transform relative to the parent node.
    pub transform: Mat4,
    pub mesh_count: u32,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    #[must_use]
    pub fn new(name: impl Into<String>, transform: Mat4) -> Self {
        Self {
            name: name.into(),
            transform,
            mesh_count: 0,
            children: Vec::new(),
        }
    }

    /// Returns a read-only slice of this node's children.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    /// Lazy depth-first pre-order traversal of the subtree rooted here.
    ///
    /// Yields `(node, depth)` pairs where depth is the number of ancestors
    /// below `self` (so `self` comes first with depth 0). Children are
    /// visited in stored order. Depth lives on the iterator's own stack, so
    /// concurrent walks of the same tree do not interfere.
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(self, 0)],
        }
    }

    /// Number of nodes in the subtree rooted here, including `self`.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        self.walk().count()
    }
}

/// Iterator returned by [`SceneNode::walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<(&'a SceneNode, usize)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (&'a SceneNode, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        // Reversed push keeps the pop order equal to the stored child order.
        for child in node.children.iter().rev() {
            self.stack.push((child, depth + 1));
        }
        Some((node, depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str) -> SceneNode {
        SceneNode::new(name, Mat4::IDENTITY)
    }

    #[test]
    fn walk_single_node() {
        let root = leaf("Scene");
        let visited: Vec<_> = root.walk().map(|(n, d)| (n.name.as_str(), d)).collect();
        assert_eq!(visited, vec![("Scene", 0)]);
    }

    #[test]
    fn walk_preorder_with_depths() {
        let mut root = leaf("Scene");
        let mut a = leaf("A");
        a.children.push(leaf("A1"));
        root.children.push(a);
        root.children.push(leaf("B"));

        let visited: Vec<_> = root.walk().map(|(n, d)| (n.name.as_str(), d)).collect();
        assert_eq!(
            visited,
            vec![("Scene", 0), ("A", 1), ("A1", 2), ("B", 1)]
        );
    }

    #[test]
    fn subtree_len_counts_every_node() {
        let mut root = leaf("Scene");
        root.children.push(leaf("A"));
        root.children.push(leaf("B"));
        assert_eq!(root.subtree_len(), 3);
    }
}
