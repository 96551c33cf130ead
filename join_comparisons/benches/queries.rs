//! ## Naive versus indexed, per query family
//! Each family is benchmarked generically over its strategies, for a growing
//! number of orders against the shipped customers. The nested loops grow with
//! `customers × orders`, the indexed strategies with `customers + orders`.

use chrono::{Local, NaiveDate};
use divan::{black_box_drop, Bencher};
use join_comparisons::{
    config::BenchConfig,
    loader::{generate_random_orders, read_customers},
    queries::{
        CustomersWithoutOrders, Dictionary, HashSetIndex, Lookup, NestedLoop,
        SpendingPerCustomer, UnderageOrders,
    },
    records::{Customer, Order},
    sqlite_impl::Sqlite,
};
use rand::{rngs::StdRng, SeedableRng};

const ORDER_COUNTS: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];
const SEED: u64 = 0x5eed;

fn main() {
    divan::main()
}

fn dataset(orders: usize) -> (Vec<Customer>, Vec<Order>) {
    let customers = read_customers(BenchConfig::default().customers_path)
        .expect("shipped customers file parses");
    let orders = generate_random_orders(&mut StdRng::seed_from_u64(SEED), &customers, orders)
        .expect("customers file is not empty");
    (customers, orders)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[divan::bench(
    name = "orders_for_underage_customers",
    types = [NestedLoop, Dictionary, HashSetIndex, Sqlite],
    consts = ORDER_COUNTS,
    sample_size = 5,
    sample_count = 3,
)]
fn underage<S: UnderageOrders, const ORDERS: usize>(bencher: Bencher) {
    let today = today();
    bencher
        .with_inputs(|| dataset(ORDERS))
        .bench_local_refs(|(customers, orders)| {
            black_box_drop(S::orders_for_underage_customers(customers, orders, today))
        })
}

#[divan::bench(
    name = "spent_amount_per_customer",
    types = [NestedLoop, Lookup, Sqlite],
    consts = ORDER_COUNTS,
    sample_size = 5,
    sample_count = 3,
)]
fn spending<S: SpendingPerCustomer, const ORDERS: usize>(bencher: Bencher) {
    bencher
        .with_inputs(|| dataset(ORDERS))
        .bench_local_refs(|(customers, orders)| {
            black_box_drop(S::spent_amount_per_customer(customers, orders))
        })
}

#[divan::bench(
    name = "customers_without_orders",
    types = [NestedLoop, HashSetIndex, Sqlite],
    consts = ORDER_COUNTS,
    sample_size = 5,
    sample_count = 3,
)]
fn without_orders<S: CustomersWithoutOrders, const ORDERS: usize>(bencher: Bencher) {
    bencher
        .with_inputs(|| dataset(ORDERS))
        .bench_local_refs(|(customers, orders)| {
            black_box_drop(S::customers_without_orders(customers, orders))
        })
}
