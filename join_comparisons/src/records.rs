//! ## The two tables being joined
//! Neither table stores references to the other, orders name their customer
//! through a [`CustomerName`], and every join resolves that name at query time.

use std::{borrow::Borrow, fmt};

use chrono::{Local, Months, NaiveDate};
use rust_decimal::Decimal;

/// Years after birth at which a customer stops being underage.
pub const ADULT_AGE_YEARS: u32 = 18;

/// The foreign key from an [`Order`] to a [`Customer`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomerName(String);

impl CustomerName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CustomerName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CustomerName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Customer {
    pub name: CustomerName,
    pub birth_date: NaiveDate,
}

impl Customer {
    pub fn new(name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            name: CustomerName::new(name),
            birth_date,
        }
    }

    /// The 18th birthday, taken as 28 February in non-leap years for those
    /// born on 29 February. `None` when past the end of the calendar.
    pub fn adult_on(&self) -> Option<NaiveDate> {
        self.birth_date
            .checked_add_months(Months::new(ADULT_AGE_YEARS * 12))
    }

    /// Adult once the 18th birthday is on or before `today`. A customer
    /// without an [`adult_on`](Customer::adult_on) date is never adult.
    pub fn is_adult_on(&self, today: NaiveDate) -> bool {
        self.adult_on().is_some_and(|eighteenth| eighteenth <= today)
    }

    /// [`Customer::is_adult_on`] for the local date.
    pub fn is_adult(&self) -> bool {
        self.is_adult_on(Local::now().date_naive())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    pub id: usize,
    pub customer_name: CustomerName,
    pub amount: Decimal,
}

impl Order {
    pub fn new(id: usize, customer_name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id,
            customer_name: CustomerName::new(customer_name),
            amount,
        }
    }
}
