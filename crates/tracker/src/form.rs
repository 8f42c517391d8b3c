use anyhow::{bail, Result};
use chrono::NaiveDate;

use base::entities::order::RETURNED_VIA_NONE;
use base::entities::{Order, OrderFields};

/// The order form. Holds what the user has entered so far.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct OrderForm {
    fields: OrderFields,
}

impl OrderForm {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn fields(&self) -> &OrderFields {
        &self.fields
    }

    pub fn fill_from(&mut self, order: &Order) {
        let stored = &order.props.fields;

        self.fields = OrderFields {
            vendor: stored.vendor.clone(),
            item: stored.item.clone(),
            received: stored.received,
            returned: stored.returned,
            returned_via: if stored.returned_via.is_empty() {
                String::from(RETURNED_VIA_NONE)
            } else {
                stored.returned_via.clone()
            },
            date_returned: stored.date_returned,
            refund_received: stored.refund_received,
        };
    }

    /// What the form submits. An order needs a non-blank item.
    pub fn submission(&self) -> Result<OrderFields> {
        if self.fields.item.trim().is_empty() {
            bail!("an item is required");
        }

        Ok(self.fields.clone())
    }

    pub fn reset(&mut self) {
        self.fields = Default::default();
    }

    pub fn set_vendor(&mut self, vendor: &str) {
        self.fields.vendor = String::from(vendor);
    }

    pub fn set_item(&mut self, item: &str) {
        self.fields.item = String::from(item);
    }

    pub fn set_received(&mut self, received: bool) {
        self.fields.received = received;
    }

    /// Unchecking "returned" clears the fields that depend on it.
    pub fn set_returned(&mut self, returned: bool) {
        self.fields.returned = returned;

        if !returned {
            self.fields.clear_return_details();
        }
    }

    pub fn set_returned_via(&mut self, returned_via: &str) {
        self.fields.returned_via = String::from(returned_via);
    }

    pub fn set_date_returned(&mut self, date_returned: Option<NaiveDate>) {
        self.fields.date_returned = date_returned;
    }

    pub fn set_refund_received(&mut self, refund_received: bool) {
        self.fields.refund_received = refund_received;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base::entities::OrderProperties;
    use chrono::Utc;

    #[test]
    fn should_clear_return_details_when_returned_is_unchecked() {
        let mut form = OrderForm::new();
        form.set_item("cable");
        form.set_returned(true);
        form.set_returned_via("amazon");
        form.set_date_returned(NaiveDate::from_ymd_opt(2024, 1, 5));
        form.set_refund_received(true);

        form.set_returned(false);

        let fields = form.fields();
        assert!(!fields.returned);
        assert_eq!(fields.returned_via, RETURNED_VIA_NONE);
        assert_eq!(fields.date_returned, None);
        assert!(!fields.refund_received);
        assert_eq!(fields.item, "cable");
    }

    #[test]
    fn should_keep_return_details_when_returned_is_checked() {
        let mut form = OrderForm::new();
        form.set_returned_via("amazon");
        form.set_refund_received(true);

        form.set_returned(true);

        assert_eq!(form.fields().returned_via, "amazon");
        assert!(form.fields().refund_received);
    }

    #[test]
    fn should_fill_missing_returned_via_with_none() {
        let order = Order {
            id: 1,
            props: OrderProperties {
                fields: OrderFields {
                    item: String::from("cable"),
                    returned_via: String::new(),
                    ..Default::default()
                },
                date_added: Utc::now(),
            },
        };

        let mut form = OrderForm::new();
        form.fill_from(&order);

        assert_eq!(form.fields().returned_via, RETURNED_VIA_NONE);
        assert_eq!(form.fields().item, "cable");
    }

    #[test]
    fn should_refuse_to_submit_blank_item() {
        let mut form = OrderForm::new();
        assert!(form.submission().is_err());

        form.set_item("   ");
        assert!(form.submission().is_err());

        form.set_item("cable");
        assert_eq!(form.submission().unwrap().item, "cable");
    }

    #[test]
    fn should_restore_defaults_on_reset() {
        let mut form = OrderForm::new();
        form.set_vendor("temu");
        form.set_item("lamp");
        form.set_received(true);

        form.reset();

        assert_eq!(form, OrderForm::new());
    }
}
