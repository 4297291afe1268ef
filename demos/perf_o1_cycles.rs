//! Cycle-accurate O(1) evidence using rdtscp.
//!
//! Builds lists of growing sizes and measures per-operation cycle counts for
//! get / prepend / insert_after / insert_before / remove at a fixed middle
//! position. If the operations are O(1), the distributions stay flat as the
//! list grows.
//!
//! Also prints predecessor-index access counts per call (via the counting
//! decorator), which are exact and machine-independent.
//!
//! Run with:
//!   cargo build --release --example perf_o1_cycles
//!   taskset -c 0 ./target/release/examples/perf_o1_cycles

use hdrhistogram::Histogram;
use std::hint::black_box;

use poslist::{CountingIndex, MapIndex, PosList, Position};

const SIZES: [usize; 4] = [1_000, 10_000, 100_000, 300_000];
const REPS: usize = 50_000;

#[inline(always)]
fn rdtscp() -> u64 {
    #[cfg(target_arch = "x86_64")]
    unsafe {
        let mut aux: u32 = 0;
        std::arch::x86_64::__rdtscp(&mut aux)
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        panic!("rdtscp only supported on x86_64");
    }
}

type CountedList = PosList<u64, CountingIndex<MapIndex>>;

fn build(n: usize) -> (CountedList, Vec<Position>) {
    let mut list: CountedList = PosList::with_index(CountingIndex::default());
    let handles = (0..n as u64).map(|i| list.append(i)).collect();
    (list, handles)
}

fn print_stats(name: &str, n: usize, hist: &Histogram<u64>) {
    println!(
        "  {name:<14} n={n:<8} p50: {:>5}  p99: {:>5}  p999: {:>6}  max: {:>7} cycles",
        hist.value_at_quantile(0.50),
        hist.value_at_quantile(0.99),
        hist.value_at_quantile(0.999),
        hist.max(),
    );
}

fn measure(name: &str, n: usize, mut op: impl FnMut() -> u64) {
    let mut hist = Histogram::<u64>::new(3).expect("histogram");
    for _ in 0..REPS {
        hist.record(op()).expect("record");
    }
    print_stats(name, n, &hist);
}

fn main() {
    println!("==============================");
    println!(" poslist O(1) evidence");
    println!(" position = stable node id");
    println!("==============================");

    println!("\n[A] Index accesses per call (exact, size-independent if O(1))\n");
    println!("{:>10} | {:>4} | {:>7} | {:>7} | {:>7} | {:>6}", "n", "get", "prepend", "ins_aft", "ins_bef", "remove");
    for n in SIZES {
        let (mut list, handles) = build(n);
        let mid = handles[n / 2];

        list.index_mut().reset();
        black_box(list.get(mid).unwrap());
        let get = list.index_mut().take_ops().total();

        let p_pre = list.prepend(0);
        let pre = list.index_mut().take_ops().total();

        let p_aft = list.insert_after(mid, 0).unwrap();
        let aft = list.index_mut().take_ops().total();

        let p_bef = list.insert_before(mid, 0).unwrap();
        let bef = list.index_mut().take_ops().total();

        list.remove(p_aft).unwrap();
        let rem = list.index_mut().take_ops().total();

        list.remove(p_bef).unwrap();
        list.remove(p_pre).unwrap();

        println!("{n:>10} | {get:>4} | {pre:>7} | {aft:>7} | {bef:>7} | {rem:>6}");
    }

    println!("\n[B] Per-operation cycles (flat across n if O(1))\n");
    for n in SIZES {
        let (mut list, handles) = build(n);
        let mid = handles[n / 2];

        measure("get", n, || {
            let t0 = rdtscp();
            black_box(list.get(black_box(mid)).unwrap());
            rdtscp() - t0
        });

        measure("prepend+rm", n, || {
            let t0 = rdtscp();
            let pos = list.prepend(0);
            black_box(list.remove(pos).unwrap());
            rdtscp() - t0
        });

        measure("ins_aft+rm", n, || {
            let t0 = rdtscp();
            let pos = list.insert_after(mid, 0).unwrap();
            black_box(list.remove(pos).unwrap());
            rdtscp() - t0
        });

        measure("ins_bef+rm", n, || {
            let t0 = rdtscp();
            let pos = list.insert_before(mid, 0).unwrap();
            black_box(list.remove(pos).unwrap());
            rdtscp() - t0
        });

        println!();
    }
}
