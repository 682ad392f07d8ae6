// Union-find forest over values stored in an arena.
//
// Elements are addressed by `ElementId`, which is only meaningful for the
// forest that issued it; passing a foreign id panics or refers to an
// unrelated element.

/// Handle to an element of a [`DisjointSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    /// Position of the element in insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Node<T> {
    parent: usize,
    /// Number of elements in the tree rooted here. Only kept up to date
    /// on roots.
    size: usize,
    value: T,
}

/// A forest of disjoint sets with union by size and path splitting.
#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    nodes: Vec<Node<T>>,
    set_count: usize,
}

impl<T> Default for DisjointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DisjointSet<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            set_count: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            set_count: 0,
        }
    }

    /// Add `value` as a new singleton set.
    pub fn make_set(&mut self, value: T) -> ElementId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            parent: id,
            size: 1,
            value,
        });
        self.set_count += 1;
        ElementId(id)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    pub fn value(&self, id: ElementId) -> &T {
        &self.nodes[id.0].value
    }

    /// Find the root of `id`'s set, re-pointing every node on the way to
    /// its grandparent.
    pub fn find(&mut self, id: ElementId) -> ElementId {
        let mut current = id.0;
        loop {
            let parent = self.nodes[current].parent;
            if parent == current {
                return ElementId(current);
            }
            self.nodes[current].parent = self.nodes[parent].parent;
            current = parent;
        }
    }

    /// Find the root of `id`'s set without modifying the forest.
    pub fn root(&self, id: ElementId) -> ElementId {
        let mut current = id.0;
        while self.nodes[current].parent != current {
            current = self.nodes[current].parent;
        }
        ElementId(current)
    }

    /// Merge the sets containing `x` and `y` and return the surviving root.
    ///
    /// The root of the larger set survives. On a tie, `x`'s root does.
    pub fn union(&mut self, x: ElementId, y: ElementId) -> ElementId {
        let mut x_root = self.find(x).0;
        let mut y_root = self.find(y).0;
        if x_root == y_root {
            return ElementId(x_root);
        }

        if self.nodes[x_root].size < self.nodes[y_root].size {
            std::mem::swap(&mut x_root, &mut y_root);
        }

        self.nodes[y_root].parent = x_root;
        self.nodes[x_root].size += self.nodes[y_root].size;
        self.set_count -= 1;
        ElementId(x_root)
    }

    pub fn same_set(&self, x: ElementId, y: ElementId) -> bool {
        self.root(x) == self.root(y)
    }

    /// Number of elements in `id`'s set.
    pub fn set_size(&self, id: ElementId) -> usize {
        self.nodes[self.root(id).0].size
    }

    /// All elements with their values, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &T)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (ElementId(i), &node.value))
    }
}
