use base::entities::order::RETURNED_VIA_NONE;
use base::entities::{OrderFields, OrderProperties};
use base::errors::StoreError;
use base::helpers::FixedClock;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use storage::{InMemoryOrderStore, JsonFileOrderStore};
use tempfile::TempDir;
use tracker::repository::OrderRepository;

fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 8, 0, 0).unwrap()
}

fn repository() -> OrderRepository<InMemoryOrderStore, FixedClock> {
    OrderRepository::with_clock(InMemoryOrderStore::new(), FixedClock(created_at()))
}

fn cable() -> OrderFields {
    OrderFields {
        vendor: String::from("amazon"),
        item: String::from("cable"),
        received: false,
        returned: false,
        ..Default::default()
    }
}

#[test]
fn should_read_back_created_order_with_id_and_date_added() {
    let mut repository = repository();

    let id = repository.create(cable()).unwrap();

    let order = repository.fetch_one(id).unwrap().unwrap();
    assert_eq!(order.id, id);
    assert_eq!(
        order.props,
        OrderProperties {
            fields: cable(),
            date_added: created_at(),
        }
    );
}

#[test]
fn should_keep_id_and_date_added_on_update() {
    let mut repository = repository();
    let id = repository.create(cable()).unwrap();

    let mut later_repository = OrderRepository::with_clock(
        repository.store().clone(),
        FixedClock(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()),
    );

    let fields = OrderFields {
        received: true,
        returned: true,
        returned_via: String::from("amazon"),
        date_returned: NaiveDate::from_ymd_opt(2024, 1, 5),
        refund_received: true,
        ..cable()
    };

    later_repository.update(id, fields.clone()).unwrap();

    let order = later_repository.fetch_one(id).unwrap().unwrap();
    assert_eq!(order.id, id);
    assert_eq!(order.props.fields, fields);
    assert_eq!(order.props.date_added, created_at());
    assert_eq!(later_repository.fetch_all().unwrap().len(), 1);
}

#[test]
fn should_clear_stale_return_details_when_saving_not_returned_order() {
    let mut repository = repository();

    let id = repository
        .create(OrderFields {
            returned: false,
            returned_via: String::from("ups"),
            date_returned: NaiveDate::from_ymd_opt(2024, 1, 5),
            refund_received: true,
            ..cable()
        })
        .unwrap();

    let fields = repository.fetch_one(id).unwrap().unwrap().props.fields;
    assert_eq!(fields.returned_via, RETURNED_VIA_NONE);
    assert_eq!(fields.date_returned, None);
    assert!(!fields.refund_received);
}

#[test]
fn should_return_not_found_on_updating_missing_order() {
    let mut repository = repository();

    assert!(matches!(
        repository.update(7, cable()),
        Err(StoreError::NotFound(7))
    ));
    assert!(repository.fetch_all().unwrap().is_empty());
}

#[test]
fn should_remove_order_idempotently() {
    let mut repository = repository();
    let id = repository.create(cable()).unwrap();

    assert!(repository.remove(id).is_ok());
    assert!(repository.remove(id).is_ok());
    assert!(repository.fetch_one(id).unwrap().is_none());
}

#[test]
fn should_signal_missing_order_on_fetch_one() {
    let repository = repository();

    assert!(repository.fetch_one(1).unwrap().is_none());
}

#[test]
fn should_persist_orders_through_file_store() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("orders.json");

    let id = {
        let mut repository = OrderRepository::with_clock(
            JsonFileOrderStore::open(&path).unwrap(),
            FixedClock(created_at()),
        );
        repository.create(cable()).unwrap()
    };

    let repository = OrderRepository::new(JsonFileOrderStore::open(&path).unwrap());
    let order = repository.fetch_one(id).unwrap().unwrap();

    assert_eq!(order.props.fields, cable());
    assert_eq!(order.props.date_added, created_at());
}
