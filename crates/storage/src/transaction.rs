use anyhow::Result;

use base::errors::{StoreError, StoreOperation, StoreResult};

use crate::schema::Table;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TransactionMode {
    ReadOnly,
    ReadWrite,
}

/// A store holding the orders table that knows how to make a staged copy of
/// it durable.
pub trait TransactionalTable {
    fn table(&self) -> &Table;
    fn commit(&mut self, staged: Table) -> Result<()>;
}

pub fn read_only<S, T, F>(store: &S, operation: StoreOperation, request: F) -> StoreResult<T>
where
    S: TransactionalTable + ?Sized,
    F: FnOnce(&Table) -> Result<T>,
{
    log::debug!(
        "{:?} transaction for a {} request",
        TransactionMode::ReadOnly,
        operation
    );

    request(store.table()).map_err(|e| StoreError::operation(operation, e))
}

/// Runs `request` against a staged copy of the table. The copy replaces the
/// live table only after it is committed, so a failed request or commit
/// leaves the store untouched.
pub fn read_write<S, T, F>(store: &mut S, operation: StoreOperation, request: F) -> StoreResult<T>
where
    S: TransactionalTable + ?Sized,
    F: FnOnce(&mut Table) -> Result<T>,
{
    log::debug!(
        "{:?} transaction for a {} request",
        TransactionMode::ReadWrite,
        operation
    );

    let mut staged = store.table().clone();

    request(&mut staged)
        .and_then(|value| {
            store.commit(staged)?;
            Ok(value)
        })
        .map_err(|e| StoreError::operation(operation, e))
}
