//! Builds a [`Tree`] from a plain-text table of blocks.
//!
//! Each line holds an IPv4 address followed by its label, separated by
//! whitespace. Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! # address        label
//! 223.252.161.0    USA
//! 223.252.161.64   Australia
//! ```

use crate::{LoadError, Tree};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::net::Ipv4Addr;
use std::path::Path;
use tracing::info;

pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Tree, LoadError> {
    let input = File::open(path.as_ref())?;
    load(BufReader::new(input))
}

pub fn load<R: BufRead>(reader: R) -> Result<Tree, LoadError> {
    let mut tree = Tree::new();
    let mut blocks = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (ip, label) = parse_line(line, index + 1)?;
        tree.insert_ip(ip, label);
        blocks += 1;
    }

    info!(
        blocks,
        size = tree.size(),
        nodes = tree.node_count(),
        "loaded table"
    );
    Ok(tree)
}

fn parse_line(line: &str, line_no: usize) -> Result<(Ipv4Addr, &str), LoadError> {
    let (address, rest) = match line.find(char::is_whitespace) {
        Some(idx) => line.split_at(idx),
        None => (line, ""),
    };

    let ip = address
        .parse::<Ipv4Addr>()
        .map_err(|_| LoadError::InvalidAddress {
            line: line_no,
            value: address.to_owned(),
        })?;

    let label = rest.trim();
    if label.is_empty() {
        return Err(LoadError::MissingLabel { line: line_no });
    }
    Ok((ip, label))
}
