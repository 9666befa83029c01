//! Disjoint-set (union-find) over vertices `0..n`.
//!
//! Path compression in `find` plus union by size in `union` gives
//! amortized O(α(n)) per operation. Stored as two parallel index arrays.

/// Disjoint-set forest with path compression and union by size.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Create `n` singleton components `{0}, {1}, ..., {n-1}`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the component containing `x`.
    ///
    /// Every node on the path to the root is re-pointed at the root.
    /// Union by size keeps the depth logarithmic, so the recursion is shallow.
    ///
    /// # Panics
    /// Panics if `x >= len()`.
    pub fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]); // Path compression
        }
        self.parent[x]
    }

    /// Merge the components containing `x` and `y`.
    ///
    /// The smaller component's root is attached under the larger one.
    /// Returns `true` if a merge happened, `false` if `x` and `y` were
    /// already in the same component.
    ///
    /// # Panics
    /// Panics if `x >= len()` or `y >= len()`.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let mut root_x = self.find(x);
        let mut root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        // Union by size
        if self.size[root_x] < self.size[root_y] {
            std::mem::swap(&mut root_x, &mut root_y);
        }
        self.parent[root_y] = root_x;
        self.size[root_x] += self.size[root_y];
        self.components -= 1;

        true
    }

    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of disjoint components.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Size of the component containing `x`.
    pub fn component_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn find_is_idempotent(
            n in 1_usize..30,
            ops in proptest::collection::vec((0_usize..30, 0_usize..30), 0..60),
        ) {
            let mut ds = DisjointSet::new(n);
            for &(x, y) in &ops {
                if x < n && y < n {
                    ds.union(x, y);
                }
            }
            for v in 0..n {
                let root = ds.find(v);
                prop_assert_eq!(ds.find(root), root);
            }
        }

        #[test]
        fn union_never_splits(
            n in 2_usize..20,
            ops in proptest::collection::vec((0_usize..20, 0_usize..20), 1..40),
        ) {
            let mut ds = DisjointSet::new(n);
            for &(a, b) in &ops {
                if a >= n || b >= n {
                    continue;
                }
                let before: Vec<bool> = (0..n).map(|c| ds.connected(c, a)).collect();
                ds.union(a, b);
                prop_assert!(ds.connected(a, b));
                for (c, was_joined) in before.into_iter().enumerate() {
                    if was_joined {
                        prop_assert!(ds.connected(c, a));
                    }
                }
            }
        }

        #[test]
        fn component_sizes_sum_to_n(
            n in 1_usize..25,
            ops in proptest::collection::vec((0_usize..25, 0_usize..25), 0..40),
        ) {
            let mut ds = DisjointSet::new(n);
            let mut expected = n;
            for &(x, y) in &ops {
                if x < n && y < n && ds.union(x, y) {
                    expected -= 1;
                }
            }
            prop_assert_eq!(ds.component_count(), expected);

            let total: usize = (0..n)
                .map(|v| if ds.find(v) == v { ds.component_size(v) } else { 0 })
                .sum();
            prop_assert_eq!(total, n);
        }
    }
}
