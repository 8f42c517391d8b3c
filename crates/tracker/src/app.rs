use std::io::Write;

use anyhow::{Context, Result};

use base::entities::OrderId;
use base::errors::{StoreError, StoreResult};
use base::helpers::{Clock, SystemClock};
use base::notifier::Notifier;
use base::stores::order_store::BasicOrderStore;

use crate::edit_session::EditSession;
use crate::form::OrderForm;
use crate::repository::OrderRepository;
use crate::view::{OrderListView, ViewSync};

pub const STORE_UNAVAILABLE_MESSAGE: &str =
    "Error initializing database. Please restart the tracker.";
pub const ORDER_NOT_FOUND_MESSAGE: &str = "Order not found";
pub const LOAD_ERROR_MESSAGE: &str = "Error loading order. Please try again.";
pub const DELETE_ERROR_MESSAGE: &str = "Error deleting order. Please try again.";
pub const SAVE_ERROR_MESSAGE: &str = "Error saving order. Please try again.";

/// Everything a tracker session needs: the repository over the opened store,
/// the single edit slot, the form, and the displayed list.
pub struct OrderTracker<S: BasicOrderStore, N: Notifier, C: Clock = SystemClock> {
    repository: OrderRepository<S, C>,
    session: EditSession,
    form: OrderForm,
    view: ViewSync,
    notifier: N,
}

impl<S: BasicOrderStore, N: Notifier> OrderTracker<S, N> {
    /// Opens the store. A failure is reported once and ends the session.
    pub fn init<F>(open_store: F, notifier: N, date_format: &str) -> Result<Self>
    where
        F: FnOnce() -> StoreResult<S>,
    {
        match open_store() {
            Ok(store) => Ok(Self::new(OrderRepository::new(store), notifier, date_format)),
            Err(e) => {
                log::error!("an error occurred on initializing the order store: {:?}", e);
                notify(&notifier, STORE_UNAVAILABLE_MESSAGE);
                Err(e).context("the order store is unavailable")
            }
        }
    }
}

impl<S: BasicOrderStore, N: Notifier, C: Clock> OrderTracker<S, N, C> {
    pub fn new(repository: OrderRepository<S, C>, notifier: N, date_format: &str) -> Self {
        OrderTracker {
            repository,
            session: Default::default(),
            form: OrderForm::new(),
            view: ViewSync::new(date_format),
            notifier,
        }
    }

    pub fn repository(&self) -> &OrderRepository<S, C> {
        &self.repository
    }

    pub fn session(&self) -> EditSession {
        self.session
    }

    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut OrderForm {
        &mut self.form
    }

    pub fn view(&self) -> &OrderListView {
        self.view.current()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// "Add Order" while idle, "Update Order" while editing.
    pub fn submit_label(&self) -> &'static str {
        self.session.submit_label()
    }

    /// Fetches every order and repaints the whole list.
    pub fn display_orders<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if let Err(e) = self.view.refresh(&self.repository, out) {
            log::error!("an error occurred on displaying orders: {:?}", e);
            return Err(e);
        }

        Ok(())
    }

    /// Pre-fills the form from a stored order and switches to update mode.
    pub fn edit_order(&mut self, id: OrderId) -> Result<()> {
        let order = match self.repository.fetch_one(id) {
            Ok(Some(order)) => order,
            Ok(None) => {
                notify(&self.notifier, ORDER_NOT_FOUND_MESSAGE);
                return Err(StoreError::NotFound(id).into());
            }
            Err(e) => {
                log::error!("an error occurred on loading an order {} for edit: {:?}", id, e);
                notify(&self.notifier, LOAD_ERROR_MESSAGE);
                return Err(e).context(format!("an order {} can't be loaded", id));
            }
        };

        self.form.fill_from(&order);
        self.session.begin(id);

        log::debug!("editing an order {}", id);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.session.finish();
        self.form.reset();
    }

    pub fn remove_order<W: Write>(&mut self, id: OrderId, out: &mut W) -> Result<()> {
        if let Err(e) = self.repository.remove(id) {
            log::error!("an error occurred on deleting an order {}: {:?}", id, e);
            notify(&self.notifier, DELETE_ERROR_MESSAGE);
            return Err(e).context(format!("an order {} can't be deleted", id));
        }

        self.repaint(out);
        Ok(())
    }

    /// Creates a new order when idle, otherwise updates the edited one and
    /// leaves update mode. Returns the id of the saved order.
    pub fn submit<W: Write>(&mut self, out: &mut W) -> Result<OrderId> {
        let fields = match self.form.submission() {
            Ok(fields) => fields,
            Err(e) => {
                log::warn!("an order form can't be submitted: {:?}", e);
                return Err(e);
            }
        };

        let saved = match self.session {
            EditSession::Editing(id) => self.repository.update(id, fields).map(|_| id),
            EditSession::Idle => self.repository.create(fields),
        };

        let id = match saved {
            Ok(id) => id,
            Err(e) => {
                log::error!("an error occurred on saving an order: {:?}", e);
                notify(&self.notifier, SAVE_ERROR_MESSAGE);
                return Err(e).context("an order can't be saved");
            }
        };

        if self.session.is_editing() {
            self.cancel_edit();
        } else {
            self.form.reset();
        }

        self.repaint(out);
        Ok(id)
    }

    /// Repaints after a committed change. A failed repaint is logged by
    /// `display_orders` and leaves the change in place.
    fn repaint<W: Write>(&mut self, out: &mut W) {
        if self.display_orders(out).is_err() {
            log::warn!("the order list is out of date until the next repaint");
        }
    }
}

fn notify<N: Notifier>(notifier: &N, message: &str) {
    if let Err(e) = notifier.send_message(message) {
        log::error!("an error occurred on notifying a user: {:?}", e);
    }
}
