use crate::{
    disjoint::{DisjointSet, check_index, link_by_size, singletons},
    error::Error,
};

/// Quick-union that keeps its trees balanced by linking on size.
///
/// The size of every tree is tracked at its root, and the smaller tree is
/// always attached under the root of the larger one. A tree can only grow
/// taller when its size at least doubles, which bounds the height of every
/// tree to log2(n). Both `unite` and `connected` are O(log n).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedQuickUnion {
    parents: Vec<usize>,
    /// Only meaningful at roots.
    sizes: Vec<usize>,
    sets: usize,
}

impl WeightedQuickUnion {
    fn find(&self, mut p: usize) -> usize {
        while self.parents[p] != p {
            p = self.parents[p];
        }
        p
    }

    /// The root of the tree containing `p`.
    pub fn root(&self, p: usize) -> Result<usize, Error> {
        Ok(self.find(check_index(p, self.parents.len())?))
    }

    /// Number of elements in the set containing `p`.
    pub fn set_size(&self, p: usize) -> Result<usize, Error> {
        Ok(self.sizes[self.root(p)?])
    }
}

impl DisjointSet for WeightedQuickUnion {
    fn new(n: isize) -> Result<Self, Error> {
        let parents = singletons(n)?;
        let sets = parents.len();
        Ok(WeightedQuickUnion {
            sizes: vec![1; sets],
            parents,
            sets,
        })
    }

    fn unite(&mut self, p: usize, q: usize) -> Result<(), Error> {
        let i = self.root(p)?;
        let j = self.root(q)?;
        if i != j {
            link_by_size(&mut self.parents, &mut self.sizes, i, j);
            self.sets -= 1;
        }
        Ok(())
    }

    fn connected(&mut self, p: usize, q: usize) -> Result<bool, Error> {
        Ok(self.root(p)? == self.root(q)?)
    }

    fn len(&self) -> usize {
        self.parents.len()
    }

    fn num_sets(&self) -> usize {
        self.sets
    }
}
