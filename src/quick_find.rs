use crate::{
    disjoint::{DisjointSet, check_index, singletons},
    error::Error,
};

/// Disjoint set that stores the label of each element's set directly.
///
/// Checking if two elements are connected is a single comparison, O(1). The
/// price is paid during `unite`, which scans the whole universe to relabel the
/// set of `p`, O(n), even when there is nothing to relabel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickFind {
    labels: Vec<usize>,
    sets: usize,
}

impl QuickFind {
    /// The label of the set containing `p`. Two elements are in the same set
    /// if and only if they have the same label.
    pub fn label(&self, p: usize) -> Result<usize, Error> {
        Ok(self.labels[check_index(p, self.labels.len())?])
    }
}

impl DisjointSet for QuickFind {
    fn new(n: isize) -> Result<Self, Error> {
        let labels = singletons(n)?;
        let sets = labels.len();
        Ok(QuickFind { labels, sets })
    }

    fn unite(&mut self, p: usize, q: usize) -> Result<(), Error> {
        let from = self.label(p)?;
        let to = self.label(q)?;
        for label in self.labels.iter_mut() {
            if *label == from {
                *label = to;
            }
        }
        if from != to {
            self.sets -= 1;
        }
        Ok(())
    }

    fn connected(&mut self, p: usize, q: usize) -> Result<bool, Error> {
        Ok(self.label(p)? == self.label(q)?)
    }

    fn len(&self) -> usize {
        self.labels.len()
    }

    fn num_sets(&self) -> usize {
        self.sets
    }
}
