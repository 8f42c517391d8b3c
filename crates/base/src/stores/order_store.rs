use crate::entities::order::{Order, OrderId, OrderProperties};
use crate::errors::StoreResult;

/// One table of orders keyed by an auto-incrementing id. Every method is a
/// single request with its own transaction.
pub trait BasicOrderStore {
    fn add_order(&mut self, properties: OrderProperties) -> StoreResult<OrderId>;
    fn get_order_by_id(&self, id: OrderId) -> StoreResult<Option<Order>>;
    fn get_all_orders(&self) -> StoreResult<Vec<Order>>;

    /// Replaces the record stored under `id`, inserting it when the key is
    /// missing.
    fn put_order(&mut self, id: OrderId, properties: OrderProperties) -> StoreResult<OrderId>;

    /// Deleting a missing id is not an error.
    fn delete_order(&mut self, id: OrderId) -> StoreResult<()>;
}
