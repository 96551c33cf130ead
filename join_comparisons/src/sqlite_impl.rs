//! ## An embedded SQL engine as another strategy
//! Each query copies both tables into a fresh in-memory SQLite database (with
//! an index on the join columns) and answers the query in SQL. The copy is
//! part of the query cost, the same as building a hash index is for the other
//! indexed strategies.
//!
//! Rows are stored with their position in the input slices, so results are
//! returned as references into the caller's data in input order.
//!
//! Like [`HashSetIndex`](crate::queries::HashSetIndex), orders for unknown
//! customers are excluded rather than failing, and duplicate customer names
//! are tolerated.

use chrono::{Datelike, NaiveDate};
use rusqlite::{params, Connection};
use rust_decimal::{prelude::ToPrimitive, Decimal};

use crate::{
    error::QueryError,
    queries::{CustomersWithoutOrders, SpendingPerCustomer, UnderageOrders},
    records::{Customer, CustomerName, Order},
};

pub struct Sqlite;

/// Amounts are stored as hundredths.
const AMOUNT_SCALE: u32 = 2;

struct Tables {
    conn: Connection,
}

impl Tables {
    fn load(
        customers: &[Customer],
        orders: &[Order],
        with_amounts: bool,
    ) -> Result<Self, QueryError> {
        let mut conn = Connection::open_in_memory()?;
        conn.execute_batch(
            "
            CREATE TABLE customers (
                pos INTEGER PRIMARY KEY,
                name VARCHAR NOT NULL,
                adult_on INTEGER -- days from CE, NULL when never adult
            );
            CREATE TABLE orders (
                pos INTEGER PRIMARY KEY,
                customer_name VARCHAR NOT NULL,
                amount INTEGER -- hundredths, NULL when not loaded
            );
            CREATE INDEX customers_by_name ON customers (name);
            CREATE INDEX orders_by_customer ON orders (customer_name);
        ",
        )?;

        let tx = conn.transaction()?;
        {
            let mut insert =
                tx.prepare("INSERT INTO customers (pos, name, adult_on) VALUES (?, ?, ?)")?;
            for (pos, customer) in customers.iter().enumerate() {
                insert.execute(params![
                    pos,
                    customer.name.as_str(),
                    customer.adult_on().map(|date| date.num_days_from_ce())
                ])?;
            }

            let mut insert =
                tx.prepare("INSERT INTO orders (pos, customer_name, amount) VALUES (?, ?, ?)")?;
            for (pos, order) in orders.iter().enumerate() {
                let amount = if with_amounts {
                    Some(to_hundredths(order.amount)?)
                } else {
                    None
                };
                insert.execute(params![pos, order.customer_name.as_str(), amount])?;
            }
        }
        tx.commit()?;
        Ok(Self { conn })
    }

    fn positions(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<usize>, QueryError> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params, |row| row.get::<_, usize>(0))?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

fn to_hundredths(amount: Decimal) -> Result<i64, QueryError> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .filter(|scaled| scaled.fract().is_zero())
        .and_then(|scaled| scaled.to_i64())
        .ok_or(QueryError::Amount(amount))
}

impl UnderageOrders for Sqlite {
    fn orders_for_underage_customers<'a>(
        customers: &'a [Customer],
        orders: &'a [Order],
        today: NaiveDate,
    ) -> Result<Vec<&'a Order>, QueryError> {
        let tables = Tables::load(customers, orders, false)?;
        let positions = tables.positions(
            "
            SELECT o.pos FROM orders o
            WHERE EXISTS (
                SELECT 1 FROM customers c
                WHERE c.name = o.customer_name
                  AND (c.adult_on IS NULL OR c.adult_on > ?)
            )
            ORDER BY o.pos
        ",
            params![today.num_days_from_ce()],
        )?;
        Ok(positions.into_iter().map(|pos| &orders[pos]).collect())
    }
}

impl SpendingPerCustomer for Sqlite {
    fn spent_amount_per_customer<'a>(
        customers: &'a [Customer],
        orders: &'a [Order],
    ) -> Result<Vec<(&'a CustomerName, Decimal)>, QueryError> {
        let tables = Tables::load(customers, orders, true)?;
        let mut stmt = tables.conn.prepare(
            "
            SELECT c.pos, COALESCE(SUM(o.amount), 0) FROM customers c
            LEFT JOIN orders o ON o.customer_name = c.name
            GROUP BY c.pos
            ORDER BY c.pos
        ",
        )?;
        let rows = stmt.query_map(params![], |row| {
            Ok((row.get::<_, usize>(0)?, row.get::<_, i64>(1)?))
        })?;
        let spent = rows
            .map(|row| -> Result<_, QueryError> {
                let (pos, hundredths) = row?;
                Ok((
                    &customers[pos].name,
                    Decimal::new(hundredths, AMOUNT_SCALE).normalize(),
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(spent)
    }
}

impl CustomersWithoutOrders for Sqlite {
    fn customers_without_orders<'a>(
        customers: &'a [Customer],
        orders: &'a [Order],
    ) -> Result<Vec<&'a Customer>, QueryError> {
        let tables = Tables::load(customers, orders, false)?;
        let positions = tables.positions(
            "
            SELECT c.pos FROM customers c
            WHERE NOT EXISTS (
                SELECT 1 FROM orders o WHERE o.customer_name = c.name
            )
            ORDER BY c.pos
        ",
            params![],
        )?;
        Ok(positions.into_iter().map(|pos| &customers[pos]).collect())
    }
}
