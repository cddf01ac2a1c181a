use cidr_tree::{loader, Tree};
use clap::Parser;
use std::io::{stdin, BufRead};
use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::process::exit;
use tracing::{error, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[clap(version, about = "Classify IPv4 addresses against a table of known blocks", long_about = None)]
pub struct Args {
    /// Table of blocks, one `address label` pair per line
    #[clap(long, value_parser)]
    pub table: PathBuf,

    /// Print the tree before classifying
    #[clap(long)]
    pub dump: bool,

    /// Addresses to classify, read from stdin when empty
    #[clap(value_parser)]
    pub addresses: Vec<String>,
}

fn main() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let tree = match loader::load_file(&args.table) {
        Ok(tree) => tree,
        Err(err) => {
            error!(table = %args.table.display(), "{}", err);
            exit(1);
        }
    };

    if args.dump {
        print!("{}", tree);
    }

    if !args.addresses.is_empty() {
        for address in args.addresses.iter() {
            classify(&tree, address);
        }
        return;
    }

    for line in stdin().lock().lines() {
        match line {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => classify(&tree, line.trim()),
            Err(err) => {
                error!("could not read stdin: {}", err);
                exit(1);
            }
        }
    }
}

fn classify(tree: &Tree, address: &str) {
    let ip = match address.parse::<Ipv4Addr>() {
        Ok(ip) => ip,
        Err(err) => {
            warn!(address, "skipping: {}", err);
            return;
        }
    };
    match tree.lookup_ip(ip) {
        Ok(label) => println!("{}\t{}", ip, label),
        Err(err) => println!("{}\t{}", ip, err),
    }
}
