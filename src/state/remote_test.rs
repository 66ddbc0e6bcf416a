use super::*;

#[test]
fn default_is_loading() {
    let remote: Remote<Vec<u8>> = Remote::default();
    assert!(remote.is_loading());
    assert_eq!(remote.ready(), None);
}

#[test]
fn from_result_keeps_value_or_message() {
    let ok: Remote<u8> = Remote::from_result(Ok(3));
    assert_eq!(ok.ready(), Some(&3));
    let failed: Remote<u8> = Remote::from_result(Err(ApiError::from_response(404, r#"{"message":"Request not found"}"#)));
    assert_eq!(failed.error(), Some("Request not found"));
    assert!(!failed.is_loading());
}

#[test]
fn update_ready_only_touches_loaded_data() {
    let mut remote = Remote::Ready(vec![1, 2]);
    remote.update_ready(|v| v.push(3));
    assert_eq!(remote, Remote::Ready(vec![1, 2, 3]));

    let mut loading: Remote<Vec<u8>> = Remote::Loading;
    loading.update_ready(|v| v.push(1));
    assert!(loading.is_loading());
}
