use crate::{
    disjoint::{DisjointSet, check_index, link_by_size, singletons},
    error::Error,
};

/// Weighted quick-union that also flattens its trees during lookups.
///
/// While walking up to the root, every visited element is re-pointed at its
/// grandparent. This halves the length of the walked path each time, rather
/// than pointing everything straight at the root the way full path
/// compression does, but needs only a single pass and no extra memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCompression {
    parents: Vec<usize>,
    /// Only meaningful at roots.
    sizes: Vec<usize>,
    sets: usize,
}

impl PathCompression {
    fn find(&mut self, mut p: usize) -> usize {
        while self.parents[p] != p {
            self.parents[p] = self.parents[self.parents[p]];
            p = self.parents[p];
        }
        p
    }

    /// The root of the tree containing `p`. The path from `p` to the root is
    /// halved as a side effect.
    pub fn root(&mut self, p: usize) -> Result<usize, Error> {
        let p = check_index(p, self.parents.len())?;
        Ok(self.find(p))
    }

    /// Number of elements in the set containing `p`.
    pub fn set_size(&mut self, p: usize) -> Result<usize, Error> {
        let root = self.root(p)?;
        Ok(self.sizes[root])
    }
}

impl DisjointSet for PathCompression {
    fn new(n: isize) -> Result<Self, Error> {
        let parents = singletons(n)?;
        let sets = parents.len();
        Ok(PathCompression {
            sizes: vec![1; sets],
            parents,
            sets,
        })
    }

    fn unite(&mut self, p: usize, q: usize) -> Result<(), Error> {
        // Validate both before compressing anything.
        let len = self.parents.len();
        let (p, q) = (check_index(p, len)?, check_index(q, len)?);
        let i = self.find(p);
        let j = self.find(q);
        if i != j {
            link_by_size(&mut self.parents, &mut self.sizes, i, j);
            self.sets -= 1;
        }
        Ok(())
    }

    fn connected(&mut self, p: usize, q: usize) -> Result<bool, Error> {
        let len = self.parents.len();
        let (p, q) = (check_index(p, len)?, check_index(q, len)?);
        Ok(self.find(p) == self.find(q))
    }

    fn len(&self) -> usize {
        self.parents.len()
    }

    fn num_sets(&self) -> usize {
        self.sets
    }
}
