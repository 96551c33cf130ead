//! # Naive versus indexed joins
//! Three join-style queries over a table of customers and a table of orders,
//! each answered by a naive nested loop and by strategies that build an index
//! first:
//! - Orders placed by underage customers (filter on the joined customer).
//! - Amount spent per customer (group and aggregate).
//! - Customers without orders (anti-join).
//!
//! Every family is a trait in [`queries`], implemented by strategy types, so
//! tests and benchmarks are written once and run against each strategy. The
//! [`harness`] times each strategy once for the console, `cargo bench` gives
//! the careful numbers.
//!
//! ## Complexity
//! With `n` customers and `m` orders, the nested loops are `O(n·m)`, hash based
//! strategies are `O(n+m)`.

pub mod config;
pub mod error;
pub mod harness;
pub mod loader;
pub mod lookup;
pub mod queries;
pub mod records;
pub mod sqlite_impl;
