//! ## Console timings
//! A quick single-shot comparison of the strategies, for the careful version
//! see the `queries` benchmark.
//!
//! Two runs, each on freshly loaded customers and generated orders:
//! 1. A warm up of the nested loop underage query, reported in milliseconds.
//! 2. Every in-memory strategy of every family, reported in ticks
//!    (nanoseconds of [`Instant`]).
//!
//! Results are discarded, they are not compared against each other.

use std::{
    fmt,
    hint::black_box,
    time::{Duration, Instant},
};

use chrono::{Local, NaiveDate};
use log::{debug, info};

use crate::{
    config::BenchConfig,
    error::{HarnessError, QueryError},
    loader::{generate_random_orders, read_customers},
    queries::{
        CustomersWithoutOrders, Dictionary, HashSetIndex, Lookup, NestedLoop,
        SpendingPerCustomer, UnderageOrders,
    },
    records::{Customer, Order},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timing {
    pub label: &'static str,
    pub ticks: u128,
}

#[derive(Clone, Debug)]
pub struct Report {
    pub warm_up: Duration,
    /// One section per query family.
    pub sections: Vec<Vec<Timing>>,
    pub label_width: usize,
}

pub fn run(config: &BenchConfig) -> Result<Report, HarnessError> {
    let mut rng = config.rng();
    let today = Local::now().date_naive();

    let customers = read_customers(&config.customers_path)?;
    let orders = generate_random_orders(&mut rng, &customers, config.warm_orders)?;
    info!(
        "warm up with {} customers and {} orders",
        customers.len(),
        orders.len()
    );
    let warm = warm_up(&customers, &orders, today)?;

    let customers = read_customers(&config.customers_path)?;
    let orders = generate_random_orders(&mut rng, &customers, config.timed_orders)?;
    info!(
        "timing with {} customers and {} orders",
        customers.len(),
        orders.len()
    );
    let sections = time_strategies(&customers, &orders, today)?;

    Ok(Report {
        warm_up: warm,
        sections,
        label_width: config.label_width,
    })
}

pub fn warm_up(
    customers: &[Customer],
    orders: &[Order],
    today: NaiveDate,
) -> Result<Duration, QueryError> {
    let start = Instant::now();
    let result = black_box(NestedLoop::orders_for_underage_customers(
        customers, orders, today,
    )?);
    let elapsed = start.elapsed();
    debug!("warm up found {} underage orders", result.len());
    Ok(elapsed)
}

fn time<T>(
    label: &'static str,
    query: impl FnOnce() -> Result<Vec<T>, QueryError>,
) -> Result<Timing, QueryError> {
    let start = Instant::now();
    let result = black_box(query()?);
    let ticks = start.elapsed().as_nanos();
    debug!("{label} returned {} rows", result.len());
    Ok(Timing { label, ticks })
}

/// Times each strategy in turn, restarting the clock for each.
pub fn time_strategies(
    customers: &[Customer],
    orders: &[Order],
    today: NaiveDate,
) -> Result<Vec<Vec<Timing>>, QueryError> {
    Ok(vec![
        vec![
            time("GetOrdersForUnderAgeCustomers", || {
                NestedLoop::orders_for_underage_customers(customers, orders, today)
            })?,
            time("GetOrdersForUnderAgeCustomersDictionary", || {
                Dictionary::orders_for_underage_customers(customers, orders, today)
            })?,
            time("GetOrdersForUnderAgeCustomersHashSet", || {
                HashSetIndex::orders_for_underage_customers(customers, orders, today)
            })?,
        ],
        vec![
            time("GetSpentAmountPerCustomer", || {
                NestedLoop::spent_amount_per_customer(customers, orders)
            })?,
            time("GetSpentAmountPerCustomerLookup", || {
                Lookup::spent_amount_per_customer(customers, orders)
            })?,
        ],
        vec![
            time("GetCustomersWithoutOrder", || {
                NestedLoop::customers_without_orders(customers, orders)
            })?,
            time("GetCustomersWithoutOrderHashSet", || {
                HashSetIndex::customers_without_orders(customers, orders)
            })?,
        ],
    ])
}

/// Milliseconds with three decimals (truncated to the microsecond) and a `,`
/// between each thousand.
pub fn format_millis(duration: Duration) -> String {
    let micros = duration.as_micros();
    let whole = (micros / 1000).to_string();
    let fraction = micros % 1000;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{grouped}.{fraction:03}")
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ms", format_millis(self.warm_up))?;
        writeln!(f)?;
        for section in &self.sections {
            for Timing { label, ticks } in section {
                writeln!(f, "{label:<width$}{ticks}", width = self.label_width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
