use super::*;
use crate::net::client::Method;
use crate::net::types::SubscriptionStatus;

#[test]
fn subscribe_request_posts_plan_id() {
    let req = subscribe_request("p-gold");
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/subscriptions");
    assert_eq!(req.body, Some(serde_json::json!({ "planId": "p-gold" })));
}

#[test]
fn envelope_allows_missing_subscription() {
    let body: SubscriptionEnvelope = serde_json::from_value(serde_json::json!({ "subscription": null })).unwrap();
    assert!(body.subscription.is_none());
}

#[test]
fn envelope_parses_active_subscription() {
    let body: SubscriptionEnvelope = serde_json::from_value(serde_json::json!({
        "subscription": {
            "_id": "s1",
            "status": "active",
            "plan": { "_id": "p1", "name": "Gold", "price": 999.0, "durationDays": 365 }
        }
    }))
    .unwrap();
    let sub = body.subscription.expect("subscription");
    assert_eq!(sub.status, SubscriptionStatus::Active);
    assert_eq!(sub.plan.duration_days, 365);
}

#[test]
fn cancel_and_list_requests() {
    assert_eq!(cancel_request(), ApiRequest::put("/subscriptions/cancel"));
    assert_eq!(plans_request(), ApiRequest::get("/subscriptions/plans"));
    assert_eq!(mine_request(), ApiRequest::get("/subscriptions/my"));
}
