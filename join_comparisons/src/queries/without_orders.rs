use rustc_hash::FxHashSet;

use super::{CustomersWithoutOrders, HashSetIndex, NestedLoop};
use crate::{
    error::QueryError,
    records::{Customer, Order},
};

impl CustomersWithoutOrders for NestedLoop {
    fn customers_without_orders<'a>(
        customers: &'a [Customer],
        orders: &'a [Order],
    ) -> Result<Vec<&'a Customer>, QueryError> {
        Ok(customers
            .iter()
            .filter(|customer| {
                !orders
                    .iter()
                    .any(|order| order.customer_name == customer.name)
            })
            .collect())
    }
}

impl CustomersWithoutOrders for HashSetIndex {
    fn customers_without_orders<'a>(
        customers: &'a [Customer],
        orders: &'a [Order],
    ) -> Result<Vec<&'a Customer>, QueryError> {
        let ordered = orders
            .iter()
            .map(|order| order.customer_name.as_str())
            .collect::<FxHashSet<_>>();
        Ok(customers
            .iter()
            .filter(|customer| !ordered.contains(customer.name.as_str()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn keeps_customer_order() {
        let born = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let customers = vec![
            Customer::new("Dan", born),
            Customer::new("Alice", born),
            Customer::new("Carol", born),
        ];
        let orders = vec![Order::new(0, "Alice", Decimal::ONE)];

        for result in [
            NestedLoop::customers_without_orders(&customers, &orders).unwrap(),
            HashSetIndex::customers_without_orders(&customers, &orders).unwrap(),
        ] {
            let names: Vec<&str> = result.iter().map(|c| c.name.as_str()).collect();
            assert_eq!(names, vec!["Dan", "Carol"]);
        }
    }

    #[test]
    fn no_orders_means_everyone() {
        let born = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let customers = vec![Customer::new("Alice", born)];
        assert_eq!(
            HashSetIndex::customers_without_orders(&customers, &[]).unwrap(),
            vec![&customers[0]]
        );
    }
}
