use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;
use serde::Serialize;

use base::entities::Order;
use base::helpers::DATE_INPUT_FORMAT;

#[derive(Serialize, Debug)]
struct OrderRow<'a> {
    id: u64,
    vendor: &'a str,
    item: &'a str,
    received: bool,
    returned: bool,
    returned_via: &'a str,
    date_returned: String,
    refund_received: bool,
    date_added: String,
}

impl<'a> From<&'a Order> for OrderRow<'a> {
    fn from(order: &'a Order) -> Self {
        let fields = &order.props.fields;

        OrderRow {
            id: order.id,
            vendor: &fields.vendor,
            item: &fields.item,
            received: fields.received,
            returned: fields.returned,
            returned_via: &fields.returned_via,
            date_returned: fields
                .date_returned
                .map(|date| date.format(DATE_INPUT_FORMAT).to_string())
                .unwrap_or_default(),
            refund_received: fields.refund_received,
            date_added: order.props.date_added.to_rfc3339(),
        }
    }
}

pub fn write_orders_csv<W: Write>(orders: &[Order], out: W) -> Result<()> {
    let mut writer = Writer::from_writer(out);

    for order in orders {
        writer
            .serialize(OrderRow::from(order))
            .context(format!("an error on serializing an order {}", order.id))?;
    }

    writer.flush()?;
    Ok(())
}

pub fn export_orders_csv<P: AsRef<Path>>(orders: &[Order], path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = fs::File::create(path)
        .context(format!("an error occurred on creating the file {:?}", path))?;

    write_orders_csv(orders, file)
}
