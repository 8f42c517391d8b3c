pub mod in_memory_order_store;
pub mod json_file_order_store;
pub mod schema;
pub mod transaction;

pub use in_memory_order_store::InMemoryOrderStore;
pub use json_file_order_store::JsonFileOrderStore;
