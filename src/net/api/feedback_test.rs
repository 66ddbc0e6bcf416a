use super::*;
use crate::net::client::Method;

#[test]
fn submit_request_posts_rating_and_comment() {
    let req = submit_request(&NewFeedback {
        request_id: "r1".to_owned(),
        rating: 4,
        comment: "Quick fix".to_owned(),
    });
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/feedback");
    assert_eq!(
        req.body,
        Some(serde_json::json!({ "requestId": "r1", "rating": 4, "comment": "Quick fix" }))
    );
}

#[test]
fn listing_requests_are_gets() {
    assert_eq!(for_technician_request("t1"), ApiRequest::get("/feedback/technician/t1"));
    assert_eq!(all_request(), ApiRequest::get("/feedback"));
}
