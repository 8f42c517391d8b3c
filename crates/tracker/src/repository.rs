use base::entities::{Order, OrderFields, OrderId, OrderProperties};
use base::errors::{StoreError, StoreResult};
use base::helpers::{Clock, SystemClock};
use base::stores::order_store::BasicOrderStore;

/// Maps form fields onto store requests. Owns creation timestamps.
pub struct OrderRepository<S: BasicOrderStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
}

impl<S: BasicOrderStore> OrderRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: BasicOrderStore, C: Clock> OrderRepository<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        OrderRepository { store, clock }
    }

    pub fn create(&mut self, fields: OrderFields) -> StoreResult<OrderId> {
        let id = self.store.add_order(OrderProperties {
            fields: fields.normalized(),
            date_added: self.clock.now(),
        })?;

        log::debug!("created an order {}", id);
        Ok(id)
    }

    /// Replaces every field of the order except its id and `date_added`.
    pub fn update(&mut self, id: OrderId, fields: OrderFields) -> StoreResult<()> {
        let date_added = self
            .store
            .get_order_by_id(id)?
            .ok_or(StoreError::NotFound(id))?
            .props
            .date_added;

        self.store.put_order(
            id,
            OrderProperties {
                fields: fields.normalized(),
                date_added,
            },
        )?;

        log::debug!("updated an order {}", id);
        Ok(())
    }

    pub fn remove(&mut self, id: OrderId) -> StoreResult<()> {
        self.store.delete_order(id)?;

        log::debug!("removed an order {}", id);
        Ok(())
    }

    pub fn fetch_all(&self) -> StoreResult<Vec<Order>> {
        self.store.get_all_orders()
    }

    pub fn fetch_one(&self, id: OrderId) -> StoreResult<Option<Order>> {
        self.store.get_order_by_id(id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
