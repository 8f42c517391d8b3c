use std::fmt::{Display, Formatter};
use std::io::Write;

use anyhow::{Context, Result};

use base::entities::{Order, OrderId, VendorCategory};
use base::helpers::{format_date, Clock};
use base::stores::order_store::BasicOrderStore;

use crate::repository::OrderRepository;

pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";
pub const EMPTY_STATE_PLACEHOLDER: &str = "No orders yet. Add your first order above!";
pub const NOT_SPECIFIED: &str = "Not specified";

pub const RECEIVED_LABEL: &str = "Received";
pub const RETURNED_LABEL: &str = "Returned";
pub const DATE_RETURNED_LABEL: &str = "Date Returned";
pub const RETURNED_VIA_LABEL: &str = "Returned Via";
pub const REFUND_RECEIVED_LABEL: &str = "Refund Received";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StatusRow {
    pub label: &'static str,
    pub value: String,
    /// `Some` for yes/no badges.
    pub badge: Option<bool>,
}

impl StatusRow {
    fn badge(label: &'static str, value: bool) -> Self {
        StatusRow {
            label,
            value: String::from(if value { "Yes" } else { "No" }),
            badge: Some(value),
        }
    }

    fn text(label: &'static str, value: String) -> Self {
        StatusRow {
            label,
            value,
            badge: None,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OrderTile {
    pub id: OrderId,
    pub vendor_label: String,
    pub vendor_color: &'static str,
    pub item: String,
    pub rows: Vec<StatusRow>,
}

impl OrderTile {
    pub fn from_order(order: &Order, date_format: &str) -> Self {
        let fields = &order.props.fields;

        let mut rows = vec![
            StatusRow::badge(RECEIVED_LABEL, fields.received),
            StatusRow::badge(RETURNED_LABEL, fields.returned),
        ];

        if fields.returned {
            let date_returned = match fields.date_returned {
                Some(date) => format_date(date, date_format),
                None => String::from(NOT_SPECIFIED),
            };

            rows.push(StatusRow::text(DATE_RETURNED_LABEL, date_returned));
            rows.push(StatusRow::text(
                RETURNED_VIA_LABEL,
                fields.returned_via.to_uppercase(),
            ));
            rows.push(StatusRow::badge(
                REFUND_RECEIVED_LABEL,
                fields.refund_received,
            ));
        }

        OrderTile {
            id: order.id,
            vendor_label: fields.vendor.to_uppercase(),
            vendor_color: VendorCategory::from_tag(&fields.vendor).color(),
            item: fields.item.clone(),
            rows,
        }
    }

    pub fn row(&self, label: &str) -> Option<&StatusRow> {
        self.rows.iter().find(|row| row.label == label)
    }
}

impl Display for OrderTile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "#{} [{}] ({})",
            self.id, self.vendor_label, self.vendor_color
        )?;
        writeln!(f, "  {}", self.item)?;

        for row in self.rows.iter() {
            writeln!(f, "  {}: {}", row.label, row.value)?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum OrderListView {
    Empty,
    Tiles(Vec<OrderTile>),
}

impl OrderListView {
    pub fn tiles(&self) -> &[OrderTile] {
        match self {
            OrderListView::Empty => &[],
            OrderListView::Tiles(tiles) => tiles.as_slice(),
        }
    }
}

impl Display for OrderListView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderListView::Empty => writeln!(f, "{}", EMPTY_STATE_PLACEHOLDER),
            OrderListView::Tiles(tiles) => {
                for (i, tile) in tiles.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", tile)?;
                }

                Ok(())
            }
        }
    }
}

pub fn render(orders: &[Order], date_format: &str) -> OrderListView {
    if orders.is_empty() {
        return OrderListView::Empty;
    }

    OrderListView::Tiles(
        orders
            .iter()
            .map(|order| OrderTile::from_order(order, date_format))
            .collect(),
    )
}

/// Keeps the displayed list in step with the store by re-fetching and
/// repainting everything after each mutation.
#[derive(Debug)]
pub struct ViewSync {
    date_format: String,
    current: OrderListView,
}

impl ViewSync {
    pub fn new(date_format: &str) -> Self {
        ViewSync {
            date_format: String::from(date_format),
            current: OrderListView::Empty,
        }
    }

    pub fn current(&self) -> &OrderListView {
        &self.current
    }

    pub fn refresh<S, C, W>(
        &mut self,
        repository: &OrderRepository<S, C>,
        out: &mut W,
    ) -> Result<&OrderListView>
    where
        S: BasicOrderStore,
        C: Clock,
        W: Write,
    {
        let orders = repository
            .fetch_all()
            .context("an error occurred on fetching orders to display")?;

        self.current = render(&orders, &self.date_format);

        write!(out, "{}", self.current).context("an error occurred on painting orders")?;
        out.flush()?;

        Ok(&self.current)
    }
}

impl Default for ViewSync {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}
