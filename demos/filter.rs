//! Example: a small keyword filter on top of the trie.
//!
//! Loads a keyword list, reads text from stdin and prints the keyword density
//! followed by the masked text.
//!
//! Run with: cargo run --example filter -- blocklist.txt [--symbolic] < input.txt
//! Set RUST_LOG=libtrie=debug to see what the trie does.

use std::error::Error;
use std::io::Read;

use libtrie::trie::{build_trie_from_file, Mode};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        return Err("usage: filter <keyword-file> [--symbolic]".into());
    };
    let mode = Mode::from_symbolic(args.any(|arg| arg == "--symbolic"));
    let trie = build_trie_from_file(mode, &path)?;

    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    if text.is_empty() {
        return Ok(());
    }

    let mut density: Vec<_> = trie.density(&text)?.into_iter().collect();
    density.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    println!("Keyword density:");
    for (keyword, count) in density {
        println!("  {keyword}: {count}");
    }

    println!("\nMasked text:");
    print!("{}", trie.mask(&text)?);
    Ok(())
}
