//! Benchmark workloads for the Strata container library.
//!
//! Provides deterministic operation mixes for benchmarking and examples:
//!
//! - [`append_heavy`]: mostly appends, occasional pops from the end
//! - [`churn`]: appends interleaved with pops at arbitrary positions
//! - [`run_workload`]: replays a workload against a [`GrowableArray`]

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strata_array::{DataLoss, GrowableArray};
use strata_core::Result;

/// One step of a benchmark workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Append the value.
    Append(i64),
    /// Pop at the index (negative counts from the end).
    Pop(isize),
    /// Resize to fit the live elements exactly.
    ShrinkToFit,
}

/// Build an append-heavy workload: ~90% appends, the rest `pop(-1)`.
pub fn append_heavy(seed: u64, len: usize) -> Vec<Op> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let roll = rng.next_u32() % 10;
            if roll == 0 {
                Op::Pop(-1)
            } else {
                Op::Append(rng.next_u64() as i64)
            }
        })
        .collect()
}

/// Build a churn workload: appends and pops at positions spread over
/// `[-(max_index), max_index)`, with an occasional shrink-to-fit.
pub fn churn(seed: u64, len: usize, max_index: usize) -> Vec<Op> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let span = (max_index.max(1) * 2) as u64;
    (0..len)
        .map(|_| match rng.next_u32() % 20 {
            0 => Op::ShrinkToFit,
            1..=8 => Op::Pop((rng.next_u64() % span) as isize - max_index.max(1) as isize),
            _ => Op::Append(rng.next_u64() as i64),
        })
        .collect()
}

/// Replay `ops` against `array`, returning how many pops succeeded.
///
/// Out-of-range pops are expected in random workloads and are skipped;
/// any other error is returned.
pub fn run_workload(array: &mut GrowableArray<i64>, ops: &[Op]) -> Result<usize> {
    let mut popped = 0;
    for op in ops {
        match *op {
            Op::Append(v) => array.append(v)?,
            Op::Pop(index) => {
                if array.pop(index).is_ok() {
                    popped += 1;
                }
            }
            Op::ShrinkToFit => array.resize(array.len(), DataLoss::Refuse)?,
        }
    }
    Ok(popped)
}
