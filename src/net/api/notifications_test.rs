use super::*;
use crate::net::client::Method;

fn list(value: serde_json::Value) -> NotificationFeed {
    serde_json::from_value::<NotificationList>(value).unwrap().into()
}

#[test]
fn feed_prefers_server_unread_count() {
    let feed = list(serde_json::json!({
        "notifications": [{ "_id": "n1", "title": "t", "message": "m", "isRead": false }],
        "unreadCount": 7
    }));
    assert_eq!(feed.unread, 7);
    assert_eq!(feed.items.len(), 1);
}

#[test]
fn feed_counts_unread_when_server_omits_counter() {
    let feed = list(serde_json::json!({
        "notifications": [
            { "_id": "n1", "title": "t", "message": "m", "isRead": false },
            { "_id": "n2", "title": "t", "message": "m", "isRead": true },
            { "_id": "n3", "title": "t", "message": "m" }
        ]
    }));
    assert_eq!(feed.unread, 2);
}

#[test]
fn mark_requests_are_bodiless_puts() {
    let one = mark_read_request("n1");
    assert_eq!(one.method, Method::Put);
    assert_eq!(one.path, "/notifications/n1/read");
    assert!(one.body.is_none());
    assert_eq!(mark_all_read_request().path, "/notifications/read-all");
}
