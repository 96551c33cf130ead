//! ## Loading the customers and generating orders
//! Customers come from a flat text file of `name, birth date` lines, orders are
//! synthesized from them using a caller provided random source (so tests and
//! benchmarks can seed it).

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use chrono::NaiveDate;
use log::debug;
use rand::Rng;
use rust_decimal::Decimal;

use crate::{
    error::LoadError,
    records::{Customer, Order},
};

/// Tried in order, the first to parse the whole field wins.
const DATE_FORMATS: [&str; 3] = ["%m/%d/%Y", "%Y-%m-%d", "%d-%m-%Y"];

/// Generated amounts are whole units in `AMOUNT_RANGE`.
pub const AMOUNT_RANGE: std::ops::Range<u32> = 1..200;

pub fn read_customers(path: impl AsRef<Path>) -> Result<Vec<Customer>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let customers = parse_customers(BufReader::new(file))?;
    debug!("read {} customers from {}", customers.len(), path.display());
    Ok(customers)
}

/// Parse every line as a customer, the first bad line fails the whole load.
pub fn parse_customers(reader: impl BufRead) -> Result<Vec<Customer>, LoadError> {
    reader
        .lines()
        .enumerate()
        .map(|(index, line)| {
            let line_no = index + 1;
            let line = line.map_err(|source| LoadError::Read {
                line: line_no,
                source,
            })?;
            parse_customer(&line, line_no)
        })
        .collect()
}

fn parse_customer(line: &str, line_no: usize) -> Result<Customer, LoadError> {
    let mut fields = line.split(',');
    let (Some(name), Some(birth)) = (fields.next(), fields.next()) else {
        return Err(LoadError::MissingField { line: line_no });
    };
    let birth_date = parse_date(birth.trim()).ok_or_else(|| LoadError::InvalidDate {
        line: line_no,
        value: birth.trim().to_owned(),
    })?;
    Ok(Customer::new(name.trim(), birth_date))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// Generate `count` orders with ids `0..count`, each for a random customer and
/// with a random amount from [`AMOUNT_RANGE`].
///
/// Customers are drawn from all but the last customer (when there is more than
/// one), so the last customer never has any orders.
pub fn generate_random_orders(
    rng: &mut impl Rng,
    customers: &[Customer],
    count: usize,
) -> Result<Vec<Order>, LoadError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if customers.is_empty() {
        return Err(LoadError::NoCustomers);
    }
    let sampled = (customers.len() - 1).max(1);
    Ok((0..count)
        .map(|id| Order {
            id,
            customer_name: customers[rng.gen_range(0..sampled)].name.clone(),
            amount: Decimal::from(rng.gen_range(AMOUNT_RANGE)),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_all_date_formats() {
        let input = "Alice, 2000-01-01\n  Bob ,1/2/2010\nCarol, 31-12-1999, ignored\n";
        let customers = parse_customers(input.as_bytes()).unwrap();
        assert_eq!(
            customers,
            vec![
                Customer::new("Alice", date(2000, 1, 1)),
                Customer::new("Bob", date(2010, 1, 2)),
                Customer::new("Carol", date(1999, 12, 31)),
            ]
        );
    }

    #[test]
    fn missing_field_names_the_line() {
        let err = parse_customers("Alice, 2000-01-01\nBob\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingField { line: 2 }));
    }

    #[test]
    fn bad_date_names_the_line() {
        let err = parse_customers("Alice, yesterday\n".as_bytes()).unwrap_err();
        match err {
            LoadError::InvalidDate { line, value } => {
                assert_eq!(line, 1);
                assert_eq!(value, "yesterday");
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_customers("/definitely/not/here/Customers.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let customers = parse_customers("A, 2000-01-01\nB, 2000-01-01\nC, 2000-01-01".as_bytes())
            .unwrap();
        let first = generate_random_orders(&mut StdRng::seed_from_u64(7), &customers, 500).unwrap();
        let second =
            generate_random_orders(&mut StdRng::seed_from_u64(7), &customers, 500).unwrap();
        assert_eq!(first, second);
        assert!(first.iter().enumerate().all(|(i, o)| o.id == i));
        assert!(first
            .iter()
            .all(|o| o.amount >= Decimal::ONE && o.amount < Decimal::from(200)));
        assert!(first.iter().all(|o| o.customer_name.as_str() != "C"));
    }

    #[test]
    fn single_customer_gets_every_order() {
        let customers = vec![Customer::new("Solo", date(1990, 1, 1))];
        let orders = generate_random_orders(&mut StdRng::seed_from_u64(1), &customers, 10).unwrap();
        assert!(orders.iter().all(|o| o.customer_name.as_str() == "Solo"));
    }

    #[test]
    fn orders_need_customers() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            generate_random_orders(&mut rng, &[], 3),
            Err(LoadError::NoCustomers)
        ));
        assert!(generate_random_orders(&mut rng, &[], 0).unwrap().is_empty());
    }
}
