use crate::{Node, NotFound, Tree, IPV4_LEN, ROOT};
use std::fmt::{self, Display, Formatter};
use std::net::Ipv4Addr;
use tracing::{debug, trace};

impl Tree {
    pub fn new() -> Self {
        Tree::with_key_len(IPV4_LEN)
    }

    /// Creates a tree whose exact matches complete after `key_len` octets.
    pub fn with_key_len(key_len: usize) -> Self {
        Tree {
            nodes: vec![Node::new("")],
            count: 0,
            key_len: key_len.max(1),
        }
    }

    pub fn key_len(&self) -> usize {
        self.key_len
    }

    /// Cumulative number of octets passed to `insert`, duplicates included.
    pub fn size(&self) -> usize {
        self.count
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of distinct prefixes stored, root excluded.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Walks the tree along `address`, creating missing nodes labeled with `label`.
    ///
    /// Nodes that already exist keep the label they were created with, so the
    /// first insertion along a path wins for every shared prefix.
    pub fn insert(&mut self, address: &[u8], label: &str) {
        let mut current = ROOT;
        let mut created = 0;

        for (depth, &key_char) in address.iter().enumerate() {
            current = match self.nodes[current].find_child(key_char) {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::new(label));
                    self.nodes[current].add_child(key_char, child);
                    trace!(depth, octet = key_char, child, "created node");
                    created += 1;
                    child
                }
            };
        }

        self.count += address.len();
        debug!(?address, label, created, size = self.count, "inserted");
    }

    /// Finds the label of the block `address` most plausibly belongs to.
    ///
    /// An exact match over `key_len` octets returns immediately. At the first
    /// octet without an exact edge the lookup falls back to the child behind the
    /// greatest edge key below that octet and stops there.
    pub fn lookup(&self, address: &[u8]) -> Result<&str, NotFound> {
        let mut current = &self.nodes[ROOT];

        for (depth, &key_char) in address.iter().enumerate() {
            match current.find_child(key_char) {
                Some(child) => {
                    current = &self.nodes[child];
                    if depth + 1 == self.key_len {
                        return Ok(current.label());
                    }
                }
                None => {
                    let fallback = current
                        .find_predecessor(key_char)
                        .map(|child| self.nodes[child].label());
                    debug!(
                        depth,
                        octet = key_char,
                        found = fallback.is_some(),
                        "no exact edge, using closest lower edge"
                    );
                    return fallback.ok_or(NotFound);
                }
            }
        }

        // ran out of octets before reaching key_len
        Err(NotFound)
    }

    pub fn insert_ip(&mut self, ip: Ipv4Addr, label: &str) {
        self.insert(&ip.octets(), label)
    }

    pub fn lookup_ip(&self, ip: Ipv4Addr) -> Result<&str, NotFound> {
        self.lookup(&ip.octets())
    }
}

impl Default for Tree {
    fn default() -> Self {
        Tree::new()
    }
}

impl Display for Tree {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut stack: Vec<(usize, u8, usize)> = self.nodes[ROOT]
            .children()
            .rev()
            .map(|(key_char, child)| (0, key_char, child))
            .collect();

        while let Some((depth, key_char, idx)) = stack.pop() {
            let node = &self.nodes[idx];
            writeln!(
                f,
                "{tag:>indent$}{key} {label:?}",
                tag = "",
                indent = depth * 4,
                key = key_char,
                label = node.label()
            )?;
            stack.extend(
                node.children()
                    .rev()
                    .map(|(key_char, child)| (depth + 1, key_char, child)),
            );
        }
        Ok(())
    }
}
