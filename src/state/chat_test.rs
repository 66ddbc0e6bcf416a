use super::*;
use crate::net::types::Role;

fn msg(id: &str, content: &str) -> ChatMessage {
    ChatMessage {
        id: id.to_owned(),
        sender_id: "u1".to_owned(),
        sender_role: Role::User,
        content: content.to_owned(),
        timestamp: "2026-10-01T10:00:00Z".to_owned(),
    }
}

fn ids(state: &ChatState) -> Vec<&str> {
    state.messages.iter().map(|m| m.id.as_str()).collect()
}

#[test]
fn new_room_is_disconnected_and_empty() {
    let state = ChatState::new("r1");
    assert_eq!(state.request_id, "r1");
    assert_eq!(state.status, ChannelStatus::Disconnected);
    assert!(state.messages.is_empty());
    assert!(!state.history_loaded);
}

#[test]
fn pushed_message_is_appended_once() {
    let mut state = ChatState::new("r1");
    assert!(state.merge_pushed(msg("m1", "hi")));
    assert!(!state.merge_pushed(msg("m1", "hi")));
    assert_eq!(ids(&state), ["m1"]);
}

#[test]
fn history_then_duplicate_push_shows_message_once() {
    let mut state = ChatState::new("r1");
    state.merge_history(vec![msg("m1", "a"), msg("m2", "b")]);
    assert!(!state.merge_pushed(msg("m2", "b")));
    assert!(state.merge_pushed(msg("m3", "c")));
    assert_eq!(ids(&state), ["m1", "m2", "m3"]);
    assert!(state.history_loaded);
}

#[test]
fn push_before_history_keeps_history_order_first() {
    let mut state = ChatState::new("r1");
    state.merge_pushed(msg("m3", "late push"));
    state.merge_pushed(msg("m2", "already in history"));
    state.merge_history(vec![msg("m1", "a"), msg("m2", "already in history")]);
    assert_eq!(ids(&state), ["m1", "m2", "m3"]);
}

#[test]
fn history_refetch_after_reconnect_does_not_duplicate() {
    let mut state = ChatState::new("r1");
    state.merge_history(vec![msg("m1", "a")]);
    state.merge_pushed(msg("m2", "b"));
    state.merge_history(vec![msg("m1", "a"), msg("m2", "b"), msg("m3", "missed while offline")]);
    assert_eq!(ids(&state), ["m1", "m2", "m3"]);
}

#[test]
fn history_with_repeated_ids_collapses() {
    let mut state = ChatState::new("r1");
    state.merge_history(vec![msg("m1", "a"), msg("m1", "a")]);
    assert_eq!(ids(&state), ["m1"]);
}

#[test]
fn channel_status_labels() {
    assert_eq!(ChannelStatus::Connected.label(), "live");
    assert_eq!(ChannelStatus::default().label(), "offline");
}
