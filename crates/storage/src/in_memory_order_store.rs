use anyhow::Result;

use base::entities::{Order, OrderId, OrderProperties};
use base::errors::{StoreOperation, StoreResult};
use base::stores::order_store::BasicOrderStore;

use crate::schema::{orders_table, IndexName, Table};
use crate::transaction::{read_only, read_write, TransactionalTable};

/// Volatile order store with the same key and index semantics as the file
/// backed one.
#[derive(Debug, Clone)]
pub struct InMemoryOrderStore {
    orders: Table,
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        InMemoryOrderStore {
            orders: orders_table(),
        }
    }
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn get_order_ids_by_index(&self, index: IndexName, value: &str) -> StoreResult<Vec<OrderId>> {
        read_only(self, StoreOperation::IndexLookup, |table| {
            table.get_ids_by_index(index, value)
        })
    }
}

impl TransactionalTable for InMemoryOrderStore {
    fn table(&self) -> &Table {
        &self.orders
    }

    fn commit(&mut self, staged: Table) -> Result<()> {
        self.orders = staged;
        Ok(())
    }
}

impl BasicOrderStore for InMemoryOrderStore {
    fn add_order(&mut self, properties: OrderProperties) -> StoreResult<OrderId> {
        read_write(self, StoreOperation::Add, |table| table.add(properties))
    }

    fn get_order_by_id(&self, id: OrderId) -> StoreResult<Option<Order>> {
        read_only(self, StoreOperation::Get, |table| Ok(table.get(id)))
    }

    fn get_all_orders(&self) -> StoreResult<Vec<Order>> {
        read_only(self, StoreOperation::GetAll, |table| Ok(table.get_all()))
    }

    fn put_order(&mut self, id: OrderId, properties: OrderProperties) -> StoreResult<OrderId> {
        read_write(self, StoreOperation::Put, |table| table.put(id, properties))
    }

    fn delete_order(&mut self, id: OrderId) -> StoreResult<()> {
        read_write(self, StoreOperation::Delete, |table| {
            table.delete(id);
            Ok(())
        })
    }
}
