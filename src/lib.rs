pub const IPV4_LEN: usize = 4;

const ROOT: usize = 0;

/// A byte-indexed tree mapping fixed-length addresses to labels, one level per octet.
///
/// Nodes live in an arena owned by the tree; edges refer to their child by index.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    count: usize,
    key_len: usize,
}

#[derive(Debug, Clone, PartialEq)]
struct Node {
    label: String,
    // sorted ascending by key, keys unique
    edges: Vec<Edge>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Edge {
    key: u8,
    child: usize,
}

mod edge;
mod error;
pub mod loader;
mod node;
#[cfg(test)]
mod proptests;
mod tree;

pub use error::{LoadError, NotFound};
