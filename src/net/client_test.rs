use super::*;

fn client() -> ApiClient {
    ApiClient::new(&ApiConfig::from_api_url("http://localhost:5000/api"))
}

#[test]
fn url_joins_base_and_path() {
    assert_eq!(client().url("/auth/login"), "http://localhost:5000/api/auth/login");
    assert_eq!(client().url("notifications"), "http://localhost:5000/api/notifications");
}

#[test]
fn anonymous_client_has_no_authorization() {
    assert_eq!(client().authorization(), None);
}

#[test]
fn with_token_sets_bearer_header() {
    let c = client().with_token(Some("abc".to_owned()));
    assert_eq!(c.token(), Some("abc"));
    assert_eq!(c.authorization().as_deref(), Some("Bearer abc"));
}

#[test]
fn with_token_ignores_empty_token() {
    let c = client().with_token(Some(String::new()));
    assert_eq!(c.authorization(), None);
}

#[test]
fn json_attaches_serialized_body() {
    #[derive(serde::Serialize)]
    struct Body {
        name: &'static str,
    }
    let req = ApiRequest::post("/appliances").json(&Body { name: "Fridge" });
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.body, Some(serde_json::json!({ "name": "Fridge" })));
}

#[test]
fn builders_set_method_without_body() {
    assert_eq!(ApiRequest::get("/a").method, Method::Get);
    assert_eq!(ApiRequest::put("/a").method, Method::Put);
    assert_eq!(ApiRequest::delete("/a").method, Method::Delete);
    assert!(ApiRequest::delete("/a").body.is_none());
}
