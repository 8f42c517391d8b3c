use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Item;

pub type OrderId = u64;

pub type Order = Item<OrderId, OrderProperties>;

pub const RETURNED_VIA_NONE: &str = "none";

#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum VendorCategory {
    Amazon,
    Temu,
    Alibaba,
    Shein,
    #[default]
    Other,
}

impl VendorCategory {
    pub const ALL: [VendorCategory; 5] = [
        VendorCategory::Amazon,
        VendorCategory::Temu,
        VendorCategory::Alibaba,
        VendorCategory::Shein,
        VendorCategory::Other,
    ];

    /// Unrecognized tags are displayed as [`VendorCategory::Other`].
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }

    pub fn color(&self) -> &'static str {
        match self {
            VendorCategory::Amazon => "#14b8a6",
            VendorCategory::Temu => "#ff8c00",
            VendorCategory::Alibaba => "#dc2626",
            VendorCategory::Shein => "#1f2937",
            VendorCategory::Other => "#16a34a",
        }
    }
}

impl FromStr for VendorCategory {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "amazon" => Ok(Self::Amazon),
            "temu" => Ok(Self::Temu),
            "alibaba" => Ok(Self::Alibaba),
            "shein" => Ok(Self::Shein),
            "other" => Ok(Self::Other),
            _ => anyhow::bail!("Invalid vendor: {}", input),
        }
    }
}

impl Display for VendorCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            VendorCategory::Amazon => write!(f, "amazon"),
            VendorCategory::Temu => write!(f, "temu"),
            VendorCategory::Alibaba => write!(f, "alibaba"),
            VendorCategory::Shein => write!(f, "shein"),
            VendorCategory::Other => write!(f, "other"),
        }
    }
}

/// Everything the order form edits. Identity and the creation timestamp are
/// owned by the store and the repository.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFields {
    pub vendor: String,
    pub item: String,
    pub received: bool,
    pub returned: bool,
    pub returned_via: String,
    pub date_returned: Option<NaiveDate>,
    pub refund_received: bool,
}

impl Default for OrderFields {
    fn default() -> Self {
        OrderFields {
            vendor: VendorCategory::Amazon.to_string(),
            item: String::new(),
            received: false,
            returned: false,
            returned_via: String::from(RETURNED_VIA_NONE),
            date_returned: None,
            refund_received: false,
        }
    }
}

impl OrderFields {
    /// Return details only mean something for returned orders.
    pub fn normalized(mut self) -> Self {
        if !self.returned {
            self.clear_return_details();
        }

        self
    }

    pub fn clear_return_details(&mut self) {
        self.returned_via = String::from(RETURNED_VIA_NONE);
        self.date_returned = None;
        self.refund_received = false;
    }

    pub fn vendor_category(&self) -> VendorCategory {
        VendorCategory::from_tag(&self.vendor)
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderProperties {
    #[serde(flatten)]
    pub fields: OrderFields,
    pub date_added: DateTime<Utc>,
}
