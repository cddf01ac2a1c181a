use crate::Edge;

impl Edge {
    pub(crate) fn new(key: u8, child: usize) -> Self {
        Edge { key, child }
    }
}
