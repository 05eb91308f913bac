use serde_json::json;

use super::*;

fn store(id: &str, state: &str, city: &str) -> Value {
    json!({
        "dealerId": id,
        "name": format!("Store {id}"),
        "address": "Main Road",
        "pincode": "110001",
        "latitude": "28.61",
        "longitude": "77.20",
        "phoneNumber": "011-5550100",
        "dealerOperationHours": {},
        "state": state,
        "city": city
    })
}

fn flat_dataset() -> Value {
    json!({
        "Maharashtra": {
            "Pune": [store("C", "Maharashtra", "Pune")],
            "Mumbai": [store("B", "Maharashtra", "Mumbai")]
        },
        "Delhi": {
            "New Delhi": [store("A", "Delhi", "New Delhi")]
        }
    })
}

#[test]
fn parse_flat_dataset_orders_by_key() {
    let tree = parse_dataset(&flat_dataset()).unwrap();
    let states: Vec<&str> = tree.keys().map(String::as_str).collect();
    assert_eq!(states, ["Delhi", "Maharashtra"]);
    let cities: Vec<&str> = tree["Maharashtra"].keys().map(String::as_str).collect();
    assert_eq!(cities, ["Mumbai", "Pune"]);
}

#[test]
fn parse_wrapped_dataset_matches_flat() {
    let wrapped = json!({ "cityStateMap": flat_dataset() });
    assert_eq!(
        parse_dataset(&wrapped).unwrap(),
        parse_dataset(&flat_dataset()).unwrap()
    );
}

#[test]
fn bucket_order_is_insertion_order() {
    let raw = json!({
        "Delhi": {
            "New Delhi": [
                store("Z", "Delhi", "New Delhi"),
                store("A", "Delhi", "New Delhi"),
                store("M", "Delhi", "New Delhi")
            ]
        }
    });
    let tree = parse_dataset(&raw).unwrap();
    let ids: Vec<&str> = tree["Delhi"]["New Delhi"]
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(ids, ["Z", "A", "M"]);
}

#[test]
fn root_array_is_malformed() {
    let err = parse_dataset(&json!([1, 2])).unwrap_err();
    assert!(matches!(
        err,
        MalformedDatasetError::RootNotObject { found: "an array" }
    ));
}

#[test]
fn wrapped_non_object_is_malformed() {
    let err = parse_dataset(&json!({ "cityStateMap": "nope" })).unwrap_err();
    assert!(matches!(err, MalformedDatasetError::RootNotObject { .. }));
}

#[test]
fn state_value_must_be_object() {
    let err = parse_dataset(&json!({ "Delhi": [] })).unwrap_err();
    assert!(
        matches!(err, MalformedDatasetError::StateNotObject { ref state, .. } if state == "Delhi"),
        "got {err:?}"
    );
}

#[test]
fn city_value_must_be_array() {
    let err = parse_dataset(&json!({ "Delhi": { "New Delhi": {} } })).unwrap_err();
    assert!(
        matches!(err, MalformedDatasetError::CityNotArray { ref city, .. } if city == "New Delhi"),
        "got {err:?}"
    );
}

#[test]
fn undecodable_store_reports_position() {
    let raw = json!({
        "Delhi": { "New Delhi": [store("A", "Delhi", "New Delhi"), { "name": "broken" }] }
    });
    let err = parse_dataset(&raw).unwrap_err();
    assert!(
        matches!(err, MalformedDatasetError::InvalidStore { position: 1, .. }),
        "got {err:?}"
    );
}

#[test]
fn store_inherits_bucket_keys_when_blank() {
    let raw = json!({ "Delhi": { "New Delhi": [store("A", "", "")] } });
    let tree = parse_dataset(&raw).unwrap();
    let stored = &tree["Delhi"]["New Delhi"][0];
    assert_eq!(stored.state, "Delhi");
    assert_eq!(stored.city, "New Delhi");
}

#[test]
fn null_optional_fields_do_not_reject_dataset() {
    let mut sparse = store("A", "Delhi", "New Delhi");
    for key in ["services", "type", "storePageUrl", "area", "additionalPhones", "averageRating"] {
        sparse[key] = Value::Null;
    }
    let mut numeric_type = store("B", "Delhi", "New Delhi");
    numeric_type["type"] = json!(3);
    let raw = json!({ "Delhi": { "New Delhi": [sparse, numeric_type] } });

    let tree = parse_dataset(&raw).unwrap();
    let bucket = &tree["Delhi"]["New Delhi"];
    assert_eq!(bucket.len(), 2);
    assert!(bucket[0].services.is_empty());
    assert!(bucket[0].store_type.is_none());
    assert_eq!(bucket[1].store_type.as_deref(), Some("3"));
}

#[test]
fn store_in_wrong_bucket_is_malformed() {
    let raw = json!({ "Delhi": { "New Delhi": [store("B", "Maharashtra", "Mumbai")] } });
    let err = parse_dataset(&raw).unwrap_err();
    assert!(
        matches!(err, MalformedDatasetError::BucketMismatch { ref store_id, .. } if store_id == "B"),
        "got {err:?}"
    );
}

#[test]
fn parse_dataset_str_rejects_invalid_json() {
    let err = parse_dataset_str("{ not json").unwrap_err();
    assert!(matches!(err, DatasetError::Json(_)), "got {err:?}");
}

#[test]
fn load_dataset_missing_file_is_io_error() {
    let err = load_dataset(Path::new("/nonexistent/storefinder/data.json")).unwrap_err();
    assert!(
        matches!(err, DatasetError::Io { ref path, .. } if path.ends_with("data.json")),
        "got {err:?}"
    );
}

#[test]
fn empty_dataset_is_valid() {
    let tree = parse_dataset(&json!({})).unwrap();
    assert!(tree.is_empty());
}
