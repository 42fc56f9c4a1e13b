//! Disjoint-set forest over `0..n` with union by rank, full path compression and per-group
//! sizes.
//!
//! `size` is only kept up to date for roots; everything that reports a size resolves the root
//! first.

#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    size: Vec<usize>,
    groups: usize,
}

impl DisjointSet {
    /// `n` singleton groups.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            size: vec![1; n],
            groups: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of distinct groups left.
    pub fn group_count(&self) -> usize {
        self.groups
    }

    /// Representative of the group containing `x`. Every node on the way is re-attached
    /// directly to the root.
    ///
    /// Panics if `x` is out of range.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merges the groups of `x` and `y`. Returns `false` if they were already joined.
    ///
    /// The lower-ranked root goes under the higher-ranked one; on a tie `y`'s root goes under
    /// `x`'s root.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        let (root, child) = match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => (root_y, root_x),
            std::cmp::Ordering::Greater => (root_x, root_y),
            std::cmp::Ordering::Equal => {
                self.rank[root_x] = self.rank[root_x].saturating_add(1);
                (root_x, root_y)
            }
        };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        self.groups -= 1;
        true
    }

    /// Size of the group containing `x`.
    pub fn group_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }
}
