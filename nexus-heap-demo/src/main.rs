//! Fills a min-heap with letters and prints them back in priority order.
//!
//! Letter `i` (starting at `a`) gets priority `i`. Letters are inserted in a
//! scrambled order so the output shows the heap doing the sorting.

mod logger;

use anyhow::{Result, bail};
use log::{debug, info};
use nexus_minheap::MinHeap;
use structopt::StructOpt;

const MAX_LETTERS: usize = 26;

#[derive(Debug, StructOpt)]
#[structopt(name = "nexus-heap-demo", about = "Extracts letters from a min-heap in priority order.")]
struct Opt {
    /// Number of letters to insert (1-26).
    #[structopt(short, long, default_value = "10")]
    count: usize,

    /// Log capacity changes and other trace output to stderr.
    #[structopt(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    logger::install_logger(opt.verbose)?;

    let heap = fill(opt.count)?;
    info!("heap holds {} letters, capacity {}", heap.len(), heap.capacity());

    for (i, entry) in heap.into_sorted_vec().into_iter().enumerate() {
        println!(
            "characters[{i}] = {} (priority {})",
            entry.payload, entry.priority
        );
    }
    Ok(())
}

/// Rejects letter counts outside `1..=MAX_LETTERS`.
fn check_count(count: usize) -> Result<()> {
    if count == 0 || count > MAX_LETTERS {
        bail!("--count must be between 1 and {MAX_LETTERS}, got {count}");
    }
    Ok(())
}

/// Builds a heap holding the first `count` letters, inserted scrambled.
fn fill(count: usize) -> Result<MinHeap<char, u32>> {
    check_count(count)?;

    let mut heap = MinHeap::new();
    for offset in scrambled(count) {
        let letter = char::from(b'a' + offset as u8);
        if let Err(full) = heap.insert(letter, offset as u32) {
            bail!("heap rejected {:?}: {full}", full.0);
        }
        debug!("inserted {letter:?}, heap size {}", heap.len());
    }
    Ok(heap)
}

/// Offsets `0..count` in a deterministic non-sorted order.
fn scrambled(count: usize) -> impl Iterator<Item = usize> {
    // 7 is coprime with every count up to 26 except multiples of 7
    let step = if count % 7 == 0 { 5 } else { 7 };
    (0..count).map(move |i| (i * step + 3) % count)
}
