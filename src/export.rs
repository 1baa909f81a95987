use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

use crate::core::errors::Result;
use crate::models::OrderRecord;

/// Writes orders as CSV with an `identifier,amount,timestamp` header row.
pub fn write_orders<W, I>(writer: W, orders: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = OrderRecord>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    let mut written = 0usize;
    for order in orders {
        csv_writer.serialize(&order)?;
        written += 1;
    }
    csv_writer.flush()?;
    Ok(written)
}

pub fn read_orders<R: Read>(reader: R) -> Result<Vec<OrderRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut orders = Vec::new();
    for row in csv_reader.deserialize() {
        let order: OrderRecord = row?;
        orders.push(order);
    }
    Ok(orders)
}

pub fn save_orders<I>(path: impl AsRef<Path>, orders: I) -> Result<usize>
where
    I: IntoIterator<Item = OrderRecord>,
{
    let path = path.as_ref();
    let written = write_orders(File::create(path)?, orders)?;
    debug!(path = %path.display(), written, "Saved orders");
    Ok(written)
}

pub fn load_orders(path: impl AsRef<Path>) -> Result<Vec<OrderRecord>> {
    read_orders(File::open(path.as_ref())?)
}
