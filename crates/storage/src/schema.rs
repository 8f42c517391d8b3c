use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use base::entities::{Order, OrderId, OrderProperties};

pub const DATABASE_NAME: &str = "OrderTracker";
pub const SCHEMA_VERSION: SchemaVersion = 1;
pub const ORDERS_TABLE: &str = "orders";
pub const ORDERS_KEY_PATH: &str = "id";

const FIRST_KEY: OrderId = 1;

pub type SchemaVersion = u32;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum IndexName {
    Vendor,
    Item,
}

impl FromStr for IndexName {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "vendor" => Ok(Self::Vendor),
            "item" => Ok(Self::Item),
            _ => bail!("Invalid index: {}", input),
        }
    }
}

impl Display for IndexName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            IndexName::Vendor => write!(f, "vendor"),
            IndexName::Item => write!(f, "item"),
        }
    }
}

impl IndexName {
    fn key_of<'a>(&self, properties: &'a OrderProperties) -> &'a str {
        match self {
            IndexName::Vendor => &properties.fields.vendor,
            IndexName::Item => &properties.fields.item,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDefinition {
    pub key_path: String,
    pub unique: bool,
}

/// An object store: records keyed by an auto-incrementing integer plus
/// secondary index definitions.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub key_path: String,
    pub auto_increment: bool,
    pub next_key: OrderId,
    pub indexes: BTreeMap<String, IndexDefinition>,
    pub records: BTreeMap<OrderId, OrderProperties>,
}

impl Table {
    pub fn new(key_path: &str) -> Self {
        Table {
            key_path: String::from(key_path),
            auto_increment: true,
            next_key: FIRST_KEY,
            indexes: BTreeMap::new(),
            records: BTreeMap::new(),
        }
    }

    pub fn create_index(&mut self, name: IndexName, unique: bool) {
        self.indexes.insert(
            name.to_string(),
            IndexDefinition {
                key_path: name.to_string(),
                unique,
            },
        );
    }

    pub fn add(&mut self, properties: OrderProperties) -> Result<OrderId> {
        let id = self.next_key;

        if self.records.contains_key(&id) {
            bail!("a record with a key {} already exists", id);
        }

        self.records.insert(id, properties);
        self.next_key = id.checked_add(1).context("the key generator is exhausted")?;

        Ok(id)
    }

    pub fn get(&self, id: OrderId) -> Option<Order> {
        self.records.get(&id).cloned().map(|props| Order { id, props })
    }

    pub fn get_all(&self) -> Vec<Order> {
        self.records
            .iter()
            .map(|(id, props)| Order {
                id: *id,
                props: props.clone(),
            })
            .collect()
    }

    pub fn put(&mut self, id: OrderId, properties: OrderProperties) -> Result<OrderId> {
        self.records.insert(id, properties);

        if id >= self.next_key {
            self.next_key = id.checked_add(1).context("the key generator is exhausted")?;
        }

        Ok(id)
    }

    pub fn delete(&mut self, id: OrderId) {
        self.records.remove(&id);
    }

    pub fn get_ids_by_index(&self, index: IndexName, value: &str) -> Result<Vec<OrderId>> {
        if !self.indexes.contains_key(&index.to_string()) {
            bail!("the index {} is not found on the table", index);
        }

        Ok(self
            .records
            .iter()
            .filter(|(_, props)| index.key_of(props) == value)
            .map(|(id, _)| *id)
            .collect())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub name: String,
    pub version: SchemaVersion,
    pub tables: BTreeMap<String, Table>,
}

impl Database {
    pub fn new(name: &str) -> Self {
        Database {
            name: String::from(name),
            version: 0,
            tables: BTreeMap::new(),
        }
    }

    pub fn orders(&self) -> Result<&Table> {
        self.tables
            .get(ORDERS_TABLE)
            .context(format!("the table {} doesn't exist", ORDERS_TABLE))
    }

    /// Brings the database up to [`SCHEMA_VERSION`]. Returns whether anything
    /// changed.
    pub fn upgrade(&mut self) -> Result<bool> {
        if self.version > SCHEMA_VERSION {
            bail!(
                "the stored version {} is newer than the supported version {}",
                self.version,
                SCHEMA_VERSION
            );
        }

        if self.version == SCHEMA_VERSION && self.tables.contains_key(ORDERS_TABLE) {
            return Ok(false);
        }

        log::info!(
            "upgrading the {} database from version {} to {}",
            self.name,
            self.version,
            SCHEMA_VERSION
        );

        if !self.tables.contains_key(ORDERS_TABLE) {
            self.tables
                .insert(String::from(ORDERS_TABLE), orders_table());
        }

        self.version = SCHEMA_VERSION;
        Ok(true)
    }
}

pub fn orders_table() -> Table {
    let mut table = Table::new(ORDERS_KEY_PATH);
    table.create_index(IndexName::Vendor, false);
    table.create_index(IndexName::Item, false);
    table
}
