use base::entities::{OrderFields, OrderProperties};
use base::errors::StoreError;
use base::stores::order_store::BasicOrderStore;
use chrono::{TimeZone, Utc};
use std::fs;
use storage::schema::{IndexName, DATABASE_NAME, SCHEMA_VERSION};
use storage::JsonFileOrderStore;
use tempfile::TempDir;

fn properties(vendor: &str, item: &str) -> OrderProperties {
    OrderProperties {
        fields: OrderFields {
            vendor: String::from(vendor),
            item: String::from(item),
            ..Default::default()
        },
        date_added: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
    }
}

#[test]
fn should_create_store_file_with_current_schema_on_first_open() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("orders.json");

    let store = JsonFileOrderStore::open(&path).unwrap();

    assert!(path.exists());
    assert_eq!(store.version(), SCHEMA_VERSION);
    assert!(store.get_all_orders().unwrap().is_empty());

    let document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(document["name"], DATABASE_NAME);
    assert_eq!(document["version"], SCHEMA_VERSION);
    assert_eq!(document["tables"]["orders"]["keyPath"], "id");
    assert_eq!(document["tables"]["orders"]["autoIncrement"], true);
    assert_eq!(
        document["tables"]["orders"]["indexes"]["vendor"]["unique"],
        false
    );
    assert_eq!(document["tables"]["orders"]["indexes"]["item"]["unique"], false);
}

#[test]
fn should_keep_orders_and_key_generator_after_reopening() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("orders.json");

    {
        let mut store = JsonFileOrderStore::open(&path).unwrap();
        assert_eq!(store.add_order(properties("amazon", "cable")).unwrap(), 1);
        assert_eq!(store.add_order(properties("temu", "lamp")).unwrap(), 2);
        store.delete_order(2).unwrap();
    }

    let mut store = JsonFileOrderStore::open(&path).unwrap();

    let orders = store.get_all_orders().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, 1);
    assert_eq!(orders[0].props, properties("amazon", "cable"));

    assert_eq!(store.add_order(properties("shein", "dress")).unwrap(), 3);
}

#[test]
fn should_overwrite_record_in_place_on_put_with_matching_key() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("orders.json");

    let mut store = JsonFileOrderStore::open(&path).unwrap();
    let id = store.add_order(properties("amazon", "cable")).unwrap();

    store.put_order(id, properties("amazon", "usb cable")).unwrap();

    let reopened = JsonFileOrderStore::open(&path).unwrap();
    let orders = reopened.get_all_orders().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].props.fields.item, "usb cable");
}

#[test]
fn should_treat_deleting_missing_order_as_success() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = JsonFileOrderStore::open(temp_dir.path().join("orders.json")).unwrap();

    assert!(store.delete_order(42).is_ok());
    assert!(store.delete_order(42).is_ok());
}

#[test]
fn should_return_none_for_missing_order() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileOrderStore::open(temp_dir.path().join("orders.json")).unwrap();

    assert!(store.get_order_by_id(1).unwrap().is_none());
}

#[test]
fn should_look_up_orders_by_vendor_and_item_indexes() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = JsonFileOrderStore::open(temp_dir.path().join("orders.json")).unwrap();

    store.add_order(properties("amazon", "cable")).unwrap();
    store.add_order(properties("temu", "cable")).unwrap();
    store.add_order(properties("amazon", "lamp")).unwrap();
    store.put_order(3, properties("temu", "lamp")).unwrap();

    assert_eq!(
        store
            .get_order_ids_by_index(IndexName::Vendor, "amazon")
            .unwrap(),
        vec![1]
    );
    assert_eq!(
        store.get_order_ids_by_index(IndexName::Vendor, "temu").unwrap(),
        vec![2, 3]
    );
    assert_eq!(
        store.get_order_ids_by_index(IndexName::Item, "cable").unwrap(),
        vec![1, 2]
    );
}

#[test]
fn should_be_unavailable_when_stored_version_is_newer() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("orders.json");

    JsonFileOrderStore::open(&path).unwrap();

    let mut document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    document["version"] = serde_json::json!(SCHEMA_VERSION + 1);
    fs::write(&path, document.to_string()).unwrap();

    assert!(matches!(
        JsonFileOrderStore::open(&path),
        Err(StoreError::Unavailable { .. })
    ));
}

#[test]
fn should_be_unavailable_when_store_file_is_corrupt() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("orders.json");

    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        JsonFileOrderStore::open(&path),
        Err(StoreError::Unavailable { .. })
    ));
}

#[test]
fn should_upgrade_version_zero_database_and_create_orders_table() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("orders.json");

    fs::write(
        &path,
        serde_json::json!({ "name": DATABASE_NAME, "version": 0, "tables": {} }).to_string(),
    )
    .unwrap();

    let mut store = JsonFileOrderStore::open(&path).unwrap();

    assert_eq!(store.version(), SCHEMA_VERSION);
    assert_eq!(store.add_order(properties("amazon", "cable")).unwrap(), 1);
}
