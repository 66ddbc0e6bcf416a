use super::*;
use crate::net::client::Method;

#[test]
fn create_request_skips_unset_fields() {
    let req = create_request(&NewAppliance { name: "Microwave".to_owned(), category: None, base_price: Some(299.0) });
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.body, Some(serde_json::json!({ "name": "Microwave", "basePrice": 299.0 })));
}

#[test]
fn delete_request_targets_appliance() {
    let req = delete_request("a1");
    assert_eq!(req.method, Method::Delete);
    assert_eq!(req.path, "/appliances/a1");
}

#[test]
fn appliance_list_parses_catalogue() {
    let body: ApplianceList = serde_json::from_value(serde_json::json!({
        "appliances": [
            { "_id": "a1", "name": "Air Conditioner", "category": "Cooling" },
            { "_id": "a2", "name": "Geyser" }
        ]
    }))
    .unwrap();
    assert_eq!(body.appliances.len(), 2);
    assert_eq!(body.appliances[1].category, None);
    assert_eq!(list_request(), ApiRequest::get("/appliances"));
}
