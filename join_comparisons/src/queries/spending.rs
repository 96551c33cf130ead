use log::debug;
use rust_decimal::Decimal;

use super::{Lookup, NestedLoop, SpendingPerCustomer};
use crate::{
    error::QueryError,
    lookup::OrderLookup,
    records::{Customer, CustomerName, Order},
};

impl SpendingPerCustomer for NestedLoop {
    fn spent_amount_per_customer<'a>(
        customers: &'a [Customer],
        orders: &'a [Order],
    ) -> Result<Vec<(&'a CustomerName, Decimal)>, QueryError> {
        Ok(customers
            .iter()
            .map(|customer| {
                (
                    &customer.name,
                    orders
                        .iter()
                        .filter(|order| order.customer_name == customer.name)
                        .map(|order| order.amount)
                        .sum(),
                )
            })
            .collect())
    }
}

impl SpendingPerCustomer for Lookup {
    fn spent_amount_per_customer<'a>(
        customers: &'a [Customer],
        orders: &'a [Order],
    ) -> Result<Vec<(&'a CustomerName, Decimal)>, QueryError> {
        let by_customer = OrderLookup::build(orders);
        debug!("grouped orders for {} customers", by_customer.key_count());
        Ok(customers
            .iter()
            .map(|customer| {
                (
                    &customer.name,
                    by_customer
                        .get(&customer.name)
                        .iter()
                        .map(|order| order.amount)
                        .sum(),
                )
            })
            .collect())
    }
}
