//! Seeded `i32` input generators shared by the test suite and the benchmarks.
//!
//! Every generator draws from a `StdRng` seeded with [`random_init_seed`]. Within one process the
//! seed is fixed, so a failure can be replayed with `OVERRIDE_SEED=<seed>` using the seed the suite
//! printed. Benchmarks opt out of that with [`use_random_seed_each_time`].

use std::cmp::Reverse;
use std::env;
use std::mem;
use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::Lazy;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use zipf::ZipfDistribution;

/// Makes every call to a generator yield new values instead of the per-process ones.
///
/// Meant for benchmarks. Panics if `OVERRIDE_SEED` is set, the two contradict each other.
pub fn use_random_seed_each_time() {
    assert!(
        seed_override().is_none(),
        "use_random_seed_each_time conflicts with OVERRIDE_SEED"
    );

    FRESH_SEED_PER_CALL.store(true, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    static PROCESS_SEED: Lazy<u64> =
        Lazy::new(|| seed_override().unwrap_or_else(|| thread_rng().gen()));

    if FRESH_SEED_PER_CALL.load(Ordering::Acquire) {
        thread_rng().gen()
    } else {
        *PROCESS_SEED
    }
}

pub fn random(len: usize) -> Vec<i32> {
    let mut rng = rng();
    (0..len).map(|_| rng.gen()).collect()
}

/// Uniformly distributed values drawn from `range`.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist: Uniform<i32> = range.into();
    rng().sample_iter(dist).take(len).collect()
}

/// Values in `1..=len` following Zipf's law, small values dominate.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let dist = ZipfDistribution::new(len, exponent).unwrap();
    let mut rng = rng();

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// The leading `sorted_percent` of the values are already ascending, the rest is random.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    let sorted_len = ((len as f64) * sorted_percent / 100.0).round() as usize;

    let mut v = random(len);
    v[..sorted_len.min(len)].sort_unstable();
    v
}

/// `distinct` keys spread over a wide signed range.
pub fn random_sparse_keys(len: usize, distinct: usize) -> Vec<i32> {
    let keys = random_uniform(distinct.max(1), -1_000_000..=1_000_000);

    random_uniform(len, 0..keys.len() as i32)
        .into_iter()
        .map(|idx| keys[idx as usize])
        .collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// `saw_count` ascending runs of random values.
pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    saws(len, chunk_len(len, saw_count), |_| Saw::Up)
}

/// `saw_count` descending runs of random values.
pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    saws(len, chunk_len(len, saw_count), |_| Saw::Down)
}

/// `saw_count` runs of random values, each randomly ascending or descending.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    let directions = random_uniform(saw_count + 1, 0..=1);
    saws(len, chunk_len(len, saw_count), |i| {
        Saw::from_bit(directions[i % directions.len()])
    })
}

/// Like [`saw_mixed`], but every run has a random length in `run_lens`.
pub fn saw_mixed_range(len: usize, run_lens: Range<usize>) -> Vec<i32> {
    let shortest = run_lens.start.max(1);
    let longest = run_lens.end.max(shortest + 1);
    let lens = random_uniform(len / shortest + 1, shortest as i32..longest as i32);
    let directions = random_uniform(lens.len(), 0..=1);

    let mut v = random(len);
    let mut rest = v.as_mut_slice();
    for (run_len, bit) in lens.iter().zip(&directions) {
        if rest.is_empty() {
            break;
        }

        let split = (*run_len as usize).min(rest.len());
        let (run, tail) = mem::take(&mut rest).split_at_mut(split);
        Saw::from_bit(*bit).apply(run);
        rest = tail;
    }

    v
}

/// Ascending first half followed by a descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);

    let (rising, falling) = v.split_at_mut(len / 2);
    rising.sort_unstable();
    falling.sort_unstable_by_key(|&x| Reverse(x));

    v
}

// --- Private ---

static FRESH_SEED_PER_CALL: AtomicBool = AtomicBool::new(false);

fn seed_override() -> Option<u64> {
    let raw = env::var("OVERRIDE_SEED").ok()?;
    match raw.trim().parse() {
        Ok(seed) => Some(seed),
        Err(_) => panic!("OVERRIDE_SEED must be a u64, got: '{raw}'"),
    }
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn chunk_len(len: usize, saw_count: usize) -> usize {
    (len / saw_count.max(1)).max(1)
}

#[derive(Copy, Clone)]
enum Saw {
    Up,
    Down,
}

impl Saw {
    fn from_bit(bit: i32) -> Self {
        if bit == 0 {
            Saw::Up
        } else {
            Saw::Down
        }
    }

    fn apply(self, run: &mut [i32]) {
        match self {
            Saw::Up => run.sort_unstable(),
            Saw::Down => run.sort_unstable_by_key(|&x| Reverse(x)),
        }
    }
}

fn saws(len: usize, chunk_len: usize, direction_of: impl Fn(usize) -> Saw) -> Vec<i32> {
    let mut v = random(len);

    for (i, run) in v.chunks_mut(chunk_len).enumerate() {
        direction_of(i).apply(run);
    }

    v
}
