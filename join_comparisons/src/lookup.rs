//! ## Resolving names to rows
//! - [`CustomerLookup`] resolves the [`CustomerName`] foreign key of an order
//!   to its customer, either by scanning ([`ScanLookup`]) or through a hash
//!   index built once ([`CustomerIndex`]).
//! - [`OrderLookup`] is the one-to-many direction, grouping orders by customer.

use rustc_hash::FxHashMap;

use crate::{
    error::QueryError,
    records::{Customer, CustomerName, Order},
};

pub trait CustomerLookup<'a> {
    fn resolve(&self, name: &CustomerName) -> Result<&'a Customer, QueryError>;
}

/// Linear scan, the first customer with a matching name wins.
pub struct ScanLookup<'a> {
    customers: &'a [Customer],
}

impl<'a> ScanLookup<'a> {
    pub fn new(customers: &'a [Customer]) -> Self {
        Self { customers }
    }
}

impl<'a> CustomerLookup<'a> for ScanLookup<'a> {
    fn resolve(&self, name: &CustomerName) -> Result<&'a Customer, QueryError> {
        self.customers
            .iter()
            .find(|customer| customer.name == *name)
            .ok_or_else(|| QueryError::UnknownCustomer(name.clone()))
    }
}

/// A unique name to customer index.
pub struct CustomerIndex<'a> {
    by_name: FxHashMap<&'a str, &'a Customer>,
}

impl<'a> CustomerIndex<'a> {
    /// Fails on the first name that appears twice.
    pub fn build(customers: &'a [Customer]) -> Result<Self, QueryError> {
        let mut by_name =
            FxHashMap::with_capacity_and_hasher(customers.len(), Default::default());
        for customer in customers {
            if by_name.insert(customer.name.as_str(), customer).is_some() {
                return Err(QueryError::DuplicateCustomer(customer.name.clone()));
            }
        }
        Ok(Self { by_name })
    }

    pub fn customer_count(&self) -> usize {
        self.by_name.len()
    }
}

impl<'a> CustomerLookup<'a> for CustomerIndex<'a> {
    fn resolve(&self, name: &CustomerName) -> Result<&'a Customer, QueryError> {
        self.by_name
            .get(name.as_str())
            .copied()
            .ok_or_else(|| QueryError::UnknownCustomer(name.clone()))
    }
}

/// Orders grouped by the customer they reference, groups keep the input order.
pub struct OrderLookup<'a> {
    groups: FxHashMap<&'a str, Vec<&'a Order>>,
}

impl<'a> OrderLookup<'a> {
    pub fn build(orders: &'a [Order]) -> Self {
        let mut groups: FxHashMap<&'a str, Vec<&'a Order>> = FxHashMap::default();
        for order in orders {
            groups
                .entry(order.customer_name.as_str())
                .or_default()
                .push(order);
        }
        Self { groups }
    }

    /// All orders for `name`, empty when there are none.
    pub fn get(&self, name: &CustomerName) -> &[&'a Order] {
        self.groups
            .get(name.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct customer names referenced.
    pub fn key_count(&self) -> usize {
        self.groups.len()
    }
}
