use crate::{
    disjoint::{DisjointSet, check_index, singletons},
    error::Error,
};

/// Disjoint set that stores each set as a tree of parent pointers.
///
/// `unite` always attaches the root of `p` under the root of `q`, without
/// looking at the shape of either tree. An unlucky order of unions can
/// therefore degrade a tree into a chain of length n, making both `unite` and
/// `connected` O(n) in the worst case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickUnion {
    parents: Vec<usize>,
    sets: usize,
}

impl QuickUnion {
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
}

impl DisjointSet for QuickUnion {
    fn new(n: isize) -> Result<Self, Error> {
        let parents = singletons(n)?;
        let sets = parents.len();
        Ok(QuickUnion { parents, sets })
    }

    fn unite(&mut self, p: usize, q: usize) -> Result<(), Error> {
        let proot = self.root(p)?;
        let qroot = self.root(q)?;
        if proot != qroot {
            self.parents[proot] = qroot;
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
