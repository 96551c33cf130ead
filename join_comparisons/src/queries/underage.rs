use chrono::NaiveDate;
use log::debug;
use rustc_hash::FxHashSet;

use super::{Dictionary, HashSetIndex, NestedLoop, UnderageOrders};
use crate::{
    error::QueryError,
    lookup::{CustomerIndex, CustomerLookup, ScanLookup},
    records::{Customer, Order},
};

fn underage_via<'a>(
    lookup: &impl CustomerLookup<'a>,
    orders: &'a [Order],
    today: NaiveDate,
) -> Result<Vec<&'a Order>, QueryError> {
    let mut result = Vec::new();
    for order in orders {
        if !lookup.resolve(&order.customer_name)?.is_adult_on(today) {
            result.push(order);
        }
    }
    Ok(result)
}

/// Fails on the first order whose customer does not exist. Duplicated names
/// resolve to the first customer.
impl UnderageOrders for NestedLoop {
    fn orders_for_underage_customers<'a>(
        customers: &'a [Customer],
        orders: &'a [Order],
        today: NaiveDate,
    ) -> Result<Vec<&'a Order>, QueryError> {
        underage_via(&ScanLookup::new(customers), orders, today)
    }
}

/// Fails on duplicate customer names (building the index), and on the first
/// order whose customer does not exist.
impl UnderageOrders for Dictionary {
    fn orders_for_underage_customers<'a>(
        customers: &'a [Customer],
        orders: &'a [Order],
        today: NaiveDate,
    ) -> Result<Vec<&'a Order>, QueryError> {
        let index = CustomerIndex::build(customers)?;
        debug!("indexed {} customers", index.customer_count());
        underage_via(&index, orders, today)
    }
}

/// Never fails, orders for unknown customers are simply not underage.
impl UnderageOrders for HashSetIndex {
    fn orders_for_underage_customers<'a>(
        customers: &'a [Customer],
        orders: &'a [Order],
        today: NaiveDate,
    ) -> Result<Vec<&'a Order>, QueryError> {
        let underage = customers
            .iter()
            .filter(|customer| !customer.is_adult_on(today))
            .map(|customer| customer.name.as_str())
            .collect::<FxHashSet<_>>();
        Ok(orders
            .iter()
            .filter(|order| underage.contains(order.customer_name.as_str()))
            .collect())
    }
}
