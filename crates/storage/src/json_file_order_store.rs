use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tempfile::NamedTempFile;

use base::entities::{Order, OrderId, OrderProperties};
use base::errors::{StoreError, StoreOperation, StoreResult};
use base::stores::order_store::BasicOrderStore;

use crate::schema::{Database, IndexName, SchemaVersion, Table, DATABASE_NAME, ORDERS_TABLE};
use crate::transaction::{read_only, read_write, TransactionalTable};

/// The persisted local store: one JSON document per database. Every write
/// replaces the document atomically.
#[derive(Debug)]
pub struct JsonFileOrderStore {
    path: PathBuf,
    database: Database,
    orders: Table,
}

impl JsonFileOrderStore {
    /// Opens the database at `path`, creating or upgrading it when needed.
    pub fn open<P: Into<PathBuf>>(path: P) -> StoreResult<Self> {
        let path = path.into();

        let database =
            Self::load_or_initialize(&path).map_err(|e| StoreError::unavailable(&path, e))?;

        let orders = database
            .orders()
            .map_err(|e| StoreError::unavailable(&path, e))?
            .clone();

        log::debug!(
            "opened the {} database at {:?}, version {}, {} orders",
            database.name,
            path,
            database.version,
            orders.records.len()
        );

        Ok(JsonFileOrderStore {
            path,
            database,
            orders,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn version(&self) -> SchemaVersion {
        self.database.version
    }

    pub fn get_order_ids_by_index(&self, index: IndexName, value: &str) -> StoreResult<Vec<OrderId>> {
        read_only(self, StoreOperation::IndexLookup, |table| {
            table.get_ids_by_index(index, value)
        })
    }

    fn load_or_initialize(path: &Path) -> Result<Database> {
        let mut database = if path.exists() {
            let file = File::open(path).context("an error occurred on opening the store file")?;
            let database: Database = serde_json::from_reader(BufReader::new(file))
                .context("an error occurred on reading the store file")?;

            if database.name != DATABASE_NAME {
                bail!(
                    "the store file holds the {} database instead of {}",
                    database.name,
                    DATABASE_NAME
                );
            }

            database
        } else {
            Database::new(DATABASE_NAME)
        };

        if database.upgrade()? {
            write_atomically(path, &database)?;
        }

        Ok(database)
    }
}

impl TransactionalTable for JsonFileOrderStore {
    fn table(&self) -> &Table {
        &self.orders
    }

    fn commit(&mut self, staged: Table) -> Result<()> {
        let mut database = self.database.clone();
        database.tables.insert(String::from(ORDERS_TABLE), staged.clone());

        write_atomically(&self.path, &database)?;

        self.database = database;
        self.orders = staged;
        Ok(())
    }
}

impl BasicOrderStore for JsonFileOrderStore {
    fn add_order(&mut self, properties: OrderProperties) -> StoreResult<OrderId> {
        let id = read_write(self, StoreOperation::Add, |table| table.add(properties))?;
        log::debug!("added an order {} to {:?}", id, self.path);
        Ok(id)
    }

    fn get_order_by_id(&self, id: OrderId) -> StoreResult<Option<Order>> {
        read_only(self, StoreOperation::Get, |table| Ok(table.get(id)))
    }

    fn get_all_orders(&self) -> StoreResult<Vec<Order>> {
        read_only(self, StoreOperation::GetAll, |table| Ok(table.get_all()))
    }

    fn put_order(&mut self, id: OrderId, properties: OrderProperties) -> StoreResult<OrderId> {
        read_write(self, StoreOperation::Put, |table| table.put(id, properties))?;
        log::debug!("put an order {} to {:?}", id, self.path);
        Ok(id)
    }

    fn delete_order(&mut self, id: OrderId) -> StoreResult<()> {
        read_write(self, StoreOperation::Delete, |table| {
            table.delete(id);
            Ok(())
        })?;
        log::debug!("deleted an order {} from {:?}", id, self.path);
        Ok(())
    }
}

fn write_atomically(path: &Path, database: &Database) -> Result<()> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(directory)
        .context(format!("an error occurred on creating the directory {:?}", directory))?;

    let mut file = NamedTempFile::new_in(directory)
        .context("an error occurred on creating a temporary store file")?;

    {
        let mut writer = BufWriter::new(file.as_file_mut());
        serde_json::to_writer_pretty(&mut writer, database)
            .context("an error occurred on serializing the database")?;
        writer.flush()?;
    }

    file.as_file().sync_all()?;
    file.persist(path)
        .map_err(|e| e.error)
        .context(format!("an error occurred on replacing the store file {:?}", path))?;

    Ok(())
}
