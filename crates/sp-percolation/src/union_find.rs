//! Disjoint sets over dense `u32` indices.
//!
//! Parents and subtree sizes live in two flat vectors indexed by element,
//! so `find` walks contiguous memory.  Union by size keeps trees shallow and
//! `find` halves the path it walks.

/// Weighted quick-union with path halving.
///
/// Indices outside `0..len` panic, like slice indexing.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent:     Vec<u32>,
    size:       Vec<u32>,
    components: usize,
}

impl UnionFind {
    /// `len` singleton sets.  `len` must not exceed `u32::MAX as usize + 1`.
    pub fn new(len: usize) -> Self {
        Self {
            parent:     (0..len).map(|i| i as u32).collect(),
            size:       vec![1; len],
            components: len,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Representative of the set holding `p`.
    pub fn find(&mut self, mut p: u32) -> u32 {
        while self.parent[p as usize] != p {
            let grandparent = self.parent[self.parent[p as usize] as usize];
            self.parent[p as usize] = grandparent;
            p = grandparent;
        }
        p
    }

    /// Merge the sets holding `p` and `q`.  Returns `false` if they were
    /// already one set.
    pub fn union(&mut self, p: u32, q: u32) -> bool {
        let (root_p, root_q) = (self.find(p), self.find(q));
        if root_p == root_q {
            return false;
        }
        let (small, large) = if self.size[root_p as usize] < self.size[root_q as usize] {
            (root_p, root_q)
        } else {
            (root_q, root_p)
        };
        self.parent[small as usize] = large;
        self.size[large as usize] += self.size[small as usize];
        self.components -= 1;
        true
    }

    pub fn connected(&mut self, p: u32, q: u32) -> bool {
        self.find(p) == self.find(q)
    }
}
