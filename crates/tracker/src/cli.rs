use anyhow::Result;
use clap::{ArgAction, Args};

use base::entities::VendorCategory;
use base::helpers::parse_date_input;

use crate::form::OrderForm;

/// Form fields given on the command line. Omitted flags leave the form as it
/// is, so an edit keeps the stored values it does not mention.
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct OrderArgs {
    #[arg(long)]
    pub vendor: Option<VendorCategory>,

    #[arg(long)]
    pub item: Option<String>,

    #[arg(long, action = ArgAction::Set)]
    pub received: Option<bool>,

    #[arg(long, action = ArgAction::Set)]
    pub returned: Option<bool>,

    #[arg(long)]
    pub returned_via: Option<String>,

    /// YYYY-MM-DD, empty to clear
    #[arg(long)]
    pub date_returned: Option<String>,

    #[arg(long, action = ArgAction::Set)]
    pub refund_received: Option<bool>,
}

impl OrderArgs {
    /// `returned` is applied last, so `--returned false` clears the return
    /// details given in the same call.
    pub fn apply(self, form: &mut OrderForm) -> Result<()> {
        if let Some(vendor) = self.vendor {
            form.set_vendor(&vendor.to_string());
        }
        if let Some(item) = self.item {
            form.set_item(&item);
        }
        if let Some(received) = self.received {
            form.set_received(received);
        }
        if let Some(returned_via) = self.returned_via {
            form.set_returned_via(&returned_via);
        }
        if let Some(date_returned) = self.date_returned {
            form.set_date_returned(parse_date_input(&date_returned)?);
        }
        if let Some(refund_received) = self.refund_received {
            form.set_refund_received(refund_received);
        }
        if let Some(returned) = self.returned {
            form.set_returned(returned);
        }

        Ok(())
    }
}
