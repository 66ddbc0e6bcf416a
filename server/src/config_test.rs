use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn overrides_are_applied() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", " 8080 "), ("HOST", "127.0.0.1"), ("RUST_LOG", "debug")])).unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
    assert_eq!(cfg.log_filter, "debug");
}

#[test]
fn blank_port_falls_back_to_default() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn bad_port_is_rejected() {
    for bad in ["abc", "0", "70000"] {
        assert_eq!(ServerConfig::from_lookup(lookup(&[("PORT", bad)])), Err(ConfigError::InvalidPort(bad.to_owned())));
    }
}
