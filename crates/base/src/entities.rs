pub mod order;

use serde::{Deserialize, Serialize};

pub use order::{Order, OrderFields, OrderId, OrderProperties, VendorCategory};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Item<I, P> {
    pub id: I,
    #[serde(flatten)]
    pub props: P,
}
