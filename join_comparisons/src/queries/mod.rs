//! ## The three query families
//! Each family is a trait with one associated function, implemented by the
//! strategies that can answer it. Benchmarks and tests are written once,
//! generic over the trait.
//!
//! | Family                     | [`NestedLoop`] | [`Dictionary`] | [`HashSetIndex`] | [`Lookup`] | [`Sqlite`](crate::sqlite_impl::Sqlite) |
//! |----------------------------|----------------|----------------|------------------|------------|----------------------------------------|
//! | [`UnderageOrders`]         | O(n·m)         | O(n+m)         | O(n+m)           |            | yes                                    |
//! | [`SpendingPerCustomer`]    | O(n·m)         |                |                  | O(n+m)     | yes                                    |
//! | [`CustomersWithoutOrders`] | O(n·m)         |                | O(n+m)           |            | yes                                    |
//!
//! ## Missing and duplicated customers
//! The strategies differ on inputs that break the one-customer-per-name
//! assumption, see each implementation.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    error::QueryError,
    records::{Customer, CustomerName, Order},
};

mod spending;
mod underage;
mod without_orders;

/// Scan the other table once per row.
pub struct NestedLoop;

/// Build a unique name to customer index first.
pub struct Dictionary;

/// Build a set of names first.
pub struct HashSetIndex;

/// Group orders by customer name first.
pub struct Lookup;

/// Family A: orders placed by customers who are not adults on `today`.
pub trait UnderageOrders {
    fn orders_for_underage_customers<'a>(
        customers: &'a [Customer],
        orders: &'a [Order],
        today: NaiveDate,
    ) -> Result<Vec<&'a Order>, QueryError>;
}

/// Family B: total amount of each customer's orders, in customer order.
pub trait SpendingPerCustomer {
    fn spent_amount_per_customer<'a>(
        customers: &'a [Customer],
        orders: &'a [Order],
    ) -> Result<Vec<(&'a CustomerName, Decimal)>, QueryError>;
}

/// Family C: customers with no orders, in customer order.
pub trait CustomersWithoutOrders {
    fn customers_without_orders<'a>(
        customers: &'a [Customer],
        orders: &'a [Order],
    ) -> Result<Vec<&'a Customer>, QueryError>;
}
