use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_parses_known_values() {
    assert_eq!("user".parse::<Role>(), Ok(Role::User));
    assert_eq!("technician".parse::<Role>(), Ok(Role::Technician));
    assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
}

#[test]
fn role_rejects_unknown_and_differently_cased_values() {
    assert_eq!("superuser".parse::<Role>(), Err(UnknownRole("superuser".to_owned())));
    assert!("Admin".parse::<Role>().is_err());
    assert!("".parse::<Role>().is_err());
}

#[test]
fn role_dashboard_paths_are_fixed() {
    assert_eq!(Role::User.dashboard_path(), "/user/dashboard");
    assert_eq!(Role::Technician.dashboard_path(), "/technician/dashboard");
    assert_eq!(Role::Admin.dashboard_path(), "/admin/dashboard");
}

#[test]
fn role_display_matches_wire_value() {
    for role in Role::ALL {
        assert_eq!(serde_json::to_value(role).unwrap(), role.to_string());
    }
}

// =============================================================
// ServiceStatus
// =============================================================

#[test]
fn service_status_serde_uses_snake_case() {
    for status in ServiceStatus::ALL {
        let json = serde_json::to_value(status).unwrap();
        assert_eq!(json, serde_json::Value::String(status.as_str().to_owned()));
    }
    let parsed: ServiceStatus = serde_json::from_str("\"awaiting_approval\"").unwrap();
    assert_eq!(parsed, ServiceStatus::AwaitingApproval);
}

#[test]
fn service_status_cancel_window_closes_once_en_route() {
    assert!(ServiceStatus::Pending.user_can_cancel());
    assert!(ServiceStatus::Broadcasted.user_can_cancel());
    assert!(ServiceStatus::Accepted.user_can_cancel());
    assert!(!ServiceStatus::OnTheWay.user_can_cancel());
    assert!(!ServiceStatus::Completed.user_can_cancel());
}

#[test]
fn service_status_chat_requires_assigned_unfinished_job() {
    assert!(!ServiceStatus::Broadcasted.chat_open());
    assert!(ServiceStatus::Accepted.chat_open());
    assert!(ServiceStatus::InProgress.chat_open());
    assert!(!ServiceStatus::Completed.chat_open());
    assert!(!ServiceStatus::Cancelled.chat_open());
}

#[test]
fn service_status_technician_progression() {
    assert_eq!(ServiceStatus::Accepted.technician_next(), Some(ServiceStatus::OnTheWay));
    assert_eq!(ServiceStatus::Approved.technician_next(), Some(ServiceStatus::InProgress));
    assert_eq!(ServiceStatus::OnTheWay.technician_next(), None);
    assert_eq!(ServiceStatus::Completed.technician_next(), None);
}

// =============================================================
// Records
// =============================================================

#[test]
fn account_accepts_underscore_id_and_defaults_optional_fields() {
    let account: Account = serde_json::from_value(serde_json::json!({
        "_id": "u1",
        "name": "Asha",
        "email": "asha@example.com"
    }))
    .unwrap();
    assert_eq!(account.id, "u1");
    assert!(!account.is_verified);
    assert!(account.skills.is_empty());
    assert_eq!(account.phone, None);
}

#[test]
fn account_serializes_plain_id() {
    let account = Account { id: "u1".to_owned(), name: "A".to_owned(), email: "a@b.co".to_owned(), ..Account::default() };
    let json = serde_json::to_value(&account).unwrap();
    assert_eq!(json["id"], "u1");
    assert!(json.get("_id").is_none());
    assert_eq!(json["isVerified"], false);
}

#[test]
fn chat_message_accepts_created_at_alias() {
    let msg: ChatMessage = serde_json::from_value(serde_json::json!({
        "_id": "m1",
        "senderId": "t1",
        "senderRole": "technician",
        "content": "On my way",
        "createdAt": "2026-10-01T10:00:00Z"
    }))
    .unwrap();
    assert_eq!(msg.id, "m1");
    assert_eq!(msg.sender_role, Role::Technician);
    assert_eq!(msg.timestamp, "2026-10-01T10:00:00Z");
}

#[test]
fn records_carrying_both_id_keys_prefer_plain_id() {
    let account: Account = serde_json::from_value(serde_json::json!({
        "_id": "mongo-u1",
        "id": "u1",
        "name": "Asha",
        "email": "asha@example.com"
    }))
    .unwrap();
    assert_eq!(account.id, "u1");

    let req: ServiceRequest = serde_json::from_value(serde_json::json!({
        "_id": "r1",
        "id": "r1",
        "applianceType": "Fridge",
        "description": "Not cooling",
        "address": "12 Lake Rd",
        "status": "accepted",
        "technician": { "_id": "t1", "id": "t1", "name": "Ravi" }
    }))
    .unwrap();
    assert_eq!(req.id, "r1");
    assert_eq!(req.technician.unwrap().id, "t1");
}

#[test]
fn chat_message_with_both_ids_and_both_times_decodes() {
    let msg: ChatMessage = serde_json::from_str(
        r#"{"_id":"m1","id":"m1","senderId":"u1","senderRole":"user","content":"Hi",
            "timestamp":"2026-10-01T10:00:00Z","createdAt":"2026-10-01T09:59:59Z"}"#,
    )
    .unwrap();
    assert_eq!(msg.id, "m1");
    assert_eq!(msg.timestamp, "2026-10-01T10:00:00Z");

    let json = serde_json::to_value(&msg).unwrap();
    assert_eq!(json["id"], "m1");
    assert_eq!(json["timestamp"], "2026-10-01T10:00:00Z");
    assert!(json.get("_id").is_none());
    assert!(json.get("createdAt").is_none());
}

#[test]
fn record_without_any_id_is_rejected() {
    let err = serde_json::from_value::<Appliance>(serde_json::json!({ "name": "Fridge" })).unwrap_err();
    assert!(err.to_string().contains("missing field `id`"));
}

#[test]
fn service_request_parses_populated_technician() {
    let req: ServiceRequest = serde_json::from_value(serde_json::json!({
        "_id": "r1",
        "applianceType": "Washing Machine",
        "description": "Drum not spinning",
        "address": "12 Lake Rd",
        "status": "on_the_way",
        "technician": { "_id": "t1", "name": "Ravi", "rating": 4.5 },
        "estimatedCost": 1200.0
    }))
    .unwrap();
    assert_eq!(req.status, ServiceStatus::OnTheWay);
    assert_eq!(req.technician.unwrap().name, "Ravi");
    assert_eq!(req.estimated_cost, Some(1200.0));
    assert_eq!(req.final_cost, None);
}

#[test]
fn notification_reads_type_field_as_kind() {
    let n: Notification = serde_json::from_value(serde_json::json!({
        "_id": "n1",
        "title": "Request accepted",
        "message": "Ravi accepted your request",
        "type": "request_update"
    }))
    .unwrap();
    assert_eq!(n.kind.as_deref(), Some("request_update"));
    assert!(!n.is_read);
}
