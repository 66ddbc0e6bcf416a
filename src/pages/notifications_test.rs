use super::*;

fn note(id: &str, is_read: bool) -> Notification {
    Notification {
        id: id.to_owned(),
        title: "Job accepted".to_owned(),
        message: "Ravi is on the way".to_owned(),
        kind: None,
        is_read,
        link: None,
        created_at: None,
    }
}

#[test]
fn marking_one_read_decrements_unread_once() {
    let mut feed = NotificationFeed { items: vec![note("a", false), note("b", false)], unread: 2 };
    mark_local(&mut feed, "a");
    mark_local(&mut feed, "a");
    assert_eq!(feed.unread, 1);
    assert!(feed.items[0].is_read);
    assert!(!feed.items[1].is_read);
}

#[test]
fn unknown_id_changes_nothing() {
    let mut feed = NotificationFeed { items: vec![note("a", false)], unread: 1 };
    mark_local(&mut feed, "zzz");
    assert_eq!(feed.unread, 1);
}

#[test]
fn mark_all_clears_counter() {
    let mut feed = NotificationFeed { items: vec![note("a", false), note("b", true)], unread: 1 };
    mark_all_local(&mut feed);
    assert_eq!(feed.unread, 0);
    assert!(feed.items.iter().all(|n| n.is_read));
}
