use std::path::PathBuf;

use rand::{rngs::StdRng, SeedableRng};

/// Constants for a harness run, there is no way to set them from outside.
#[derive(Clone, Debug)]
pub struct BenchConfig {
    /// `name, birth date` lines.
    pub customers_path: PathBuf,
    /// Orders generated for the initial timed run of the nested loop.
    pub warm_orders: usize,
    /// Orders generated for timing every strategy.
    pub timed_orders: usize,
    /// `None` draws a fresh seed from the OS on every run.
    pub seed: Option<u64>,
    /// Labels are left aligned and padded to this width in the report.
    pub label_width: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            customers_path: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/Customers.txt")),
            warm_orders: 10_000,
            timed_orders: 100_000,
            seed: None,
            label_width: 40,
        }
    }
}

impl BenchConfig {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
