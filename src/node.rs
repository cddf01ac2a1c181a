use crate::{Edge, Node};

impl Node {
    pub(crate) fn new(label: &str) -> Self {
        Node {
            label: label.to_owned(),
            edges: Vec::new(),
        }
    }

    pub(crate) fn label(&self) -> &str {
        &self.label
    }

    #[cfg(test)]
    pub(crate) fn is_leaf(&self) -> bool {
        self.edges.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn keys(&self) -> Vec<u8> {
        self.edges.iter().map(|edge| edge.key).collect()
    }

    pub(crate) fn children(&self) -> impl DoubleEndedIterator<Item = (u8, usize)> + '_ {
        self.edges.iter().map(|edge| (edge.key, edge.child))
    }

    /// Exact match on the edge keyed by `key_char`.
    pub(crate) fn find_child(&self, key_char: u8) -> Option<usize> {
        self.edges
            .binary_search_by(|edge| edge.key.cmp(&key_char))
            .ok()
            .map(|idx| self.edges[idx].child)
    }

    /// Child reached through the greatest edge key not exceeding `key_char`.
    pub(crate) fn find_predecessor(&self, key_char: u8) -> Option<usize> {
        let idx = self.edges.partition_point(|edge| edge.key <= key_char);
        if idx == 0 {
            None
        } else {
            Some(self.edges[idx - 1].child)
        }
    }

    /// Inserts an edge keeping the keys sorted. The caller checks that `key_char` is new.
    pub(crate) fn add_child(&mut self, key_char: u8, child: usize) {
        let idx = self.edges.partition_point(|edge| edge.key < key_char);
        debug_assert!(self.edges.get(idx).map_or(true, |edge| edge.key != key_char));
        self.edges.insert(idx, Edge::new(key_char, child));
    }
}
