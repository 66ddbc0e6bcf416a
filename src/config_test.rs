use super::*;

#[test]
fn socket_base_strips_api_suffix() {
    assert_eq!(socket_base_from_api("https://api.electrocare.app/api"), "https://api.electrocare.app");
}

#[test]
fn socket_base_tolerates_trailing_slash() {
    assert_eq!(socket_base_from_api("http://localhost:5000/api/"), "http://localhost:5000");
}

#[test]
fn socket_base_keeps_urls_without_suffix() {
    assert_eq!(socket_base_from_api("http://localhost:5000/v2"), "http://localhost:5000/v2");
}

#[test]
fn from_api_url_normalizes_trailing_slash() {
    let config = ApiConfig::from_api_url(" http://localhost:5000/api/ ");
    assert_eq!(config.api_base, "http://localhost:5000/api");
    assert_eq!(config.socket_base, "http://localhost:5000");
}

#[test]
fn default_api_url_derives_local_socket_base() {
    let config = ApiConfig::from_api_url(DEFAULT_API_URL);
    assert_eq!(config.socket_base, "http://localhost:5000");
}
