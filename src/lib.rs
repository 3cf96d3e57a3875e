pub mod disjoint;
pub mod error;
pub mod path_compression;
pub mod quick_find;
pub mod quick_union;
pub mod weighted;

pub use disjoint::DisjointSet;
pub use error::Error;
pub use path_compression::PathCompression;
pub use quick_find::QuickFind;
pub use quick_union::QuickUnion;
pub use weighted::WeightedQuickUnion;
