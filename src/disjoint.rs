use crate::error::Error;

/// Common interface of all the disjoint set variants in this crate.
///
/// A disjoint set manages a fixed universe of elements with ids in `[0, n)`,
/// each of which starts out in its own singleton set. Sets can only ever be
/// merged, never split, so once two elements are connected they stay connected
/// for the lifetime of the structure.
///
/// Every operation that takes element ids validates all of them before
/// touching any state. A call that returns an error leaves the structure
/// exactly as it was.
pub trait DisjointSet {
    /// Create a disjoint set of `n` singleton sets. Returns
    /// `Error::InvalidSize` if `n` is negative.
    fn new(n: isize) -> Result<Self, Error>
    where
        Self: Sized;

    /// Merge the set containing `p` with the set containing `q`. Uniting two
    /// elements that are already connected has no observable effect.
    fn unite(&mut self, p: usize, q: usize) -> Result<(), Error>;

    /// Check if `p` and `q` belong to the same set. This takes `&mut self`
    /// because some variants restructure their trees during lookups.
    fn connected(&mut self, p: usize, q: usize) -> Result<bool, Error>;

    /// Number of elements in the universe.
    fn len(&self) -> usize;

    /// Number of disjoint sets the universe is currently split into.
    fn num_sets(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parent table where every element is its own parent, i.e. `n` singletons.
pub(crate) fn singletons(n: isize) -> Result<Vec<usize>, Error> {
    let n = usize::try_from(n).map_err(|_| Error::InvalidSize(n))?;
    Ok((0..n).collect())
}

/// Make sure `index` is within a universe of `len` elements.
pub(crate) fn check_index(index: usize, len: usize) -> Result<usize, Error> {
    if index < len {
        Ok(index)
    } else {
        Err(Error::IndexOutOfRange(index, len))
    }
}

/// Link the distinct roots `i` and `j` by size. The smaller tree is attached
/// under the larger one. On a tie, `j` goes under `i`. The size of the
/// surviving root is updated to the combined size.
pub(crate) fn link_by_size(parent: &mut [usize], size: &mut [usize], i: usize, j: usize) {
    debug_assert!(i != j && parent[i] == i && parent[j] == j);
    if size[i] < size[j] {
        parent[i] = j;
        size[j] += size[i];
    } else {
        parent[j] = i;
        size[i] += size[j];
    }
}
