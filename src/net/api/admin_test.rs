use super::*;
use crate::net::client::Method;

#[test]
fn set_user_blocked_request_sends_closed_payload() {
    let req = set_user_blocked_request("u1", true);
    assert_eq!(req.method, Method::Put);
    assert_eq!(req.path, "/admin/users/u1/status");
    assert_eq!(req.body, Some(serde_json::json!({ "isBlocked": true })));
}

#[test]
fn approve_technician_request_is_bodiless_put() {
    let req = approve_technician_request("t1");
    assert_eq!(req.method, Method::Put);
    assert_eq!(req.path, "/admin/technicians/t1/approve");
    assert!(req.body.is_none());
}

#[test]
fn delete_feedback_request_uses_delete() {
    let req = delete_feedback_request("f1");
    assert_eq!(req.method, Method::Delete);
    assert_eq!(req.path, "/admin/feedback/f1");
}

#[test]
fn listing_requests_are_gets() {
    assert_eq!(stats_request(), ApiRequest::get("/admin/stats"));
    assert_eq!(users_request(), ApiRequest::get("/admin/users"));
    assert_eq!(technicians_request(), ApiRequest::get("/admin/technicians"));
    assert_eq!(all_requests_request(), ApiRequest::get("/admin/requests"));
}

#[test]
fn stats_envelope_parses_counters() {
    let body: StatsEnvelope = serde_json::from_value(serde_json::json!({
        "stats": {
            "totalUsers": 40,
            "totalTechnicians": 9,
            "pendingTechnicians": 2,
            "totalRequests": 120,
            "completedRequests": 97,
            "totalRevenue": 56000.5
        }
    }))
    .unwrap();
    assert_eq!(body.stats.total_users, 40);
    assert_eq!(body.stats.pending_technicians, 2);
}
