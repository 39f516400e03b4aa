use std::ffi::OsString;

use super::*;

#[test]
fn default_config_points_at_local_server() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(
        cfg.timeouts,
        Timeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn base_url_defaults_when_unset() {
    assert_eq!(parse_base_url(None).unwrap(), DEFAULT_API_BASE_URL);
}

#[test]
fn base_url_trims_trailing_slashes() {
    assert_eq!(parse_base_url(Some("https://boards.example.com//")).unwrap(), "https://boards.example.com");
}

#[test]
fn base_url_rejects_blank_value() {
    assert_eq!(parse_base_url(Some("  ")), Err(ConfigError::Empty { var: "BOARDS_API_BASE_URL" }));
}

#[test]
fn secs_default_when_unset() {
    assert_eq!(parse_secs("X", None, 42).unwrap(), 42);
}

#[test]
fn secs_parse_trimmed_value() {
    assert_eq!(parse_secs("X", Some(" 5 "), 42).unwrap(), 5);
}

#[test]
fn secs_reject_garbage() {
    let err = parse_secs("BOARDS_REQUEST_TIMEOUT_SECS", Some("soon"), 30).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidNumber { var: "BOARDS_REQUEST_TIMEOUT_SECS", value: "soon".into() }
    );
    assert_eq!(err.to_string(), "BOARDS_REQUEST_TIMEOUT_SECS must be a non-negative integer, got 'soon'");
}

#[test]
fn env_value_unset_is_none() {
    assert_eq!(env_value("BOARDS_API_BASE_URL", Err(VarError::NotPresent)), Ok(None));
}

#[test]
fn env_value_passes_value_through() {
    assert_eq!(
        env_value("BOARDS_API_BASE_URL", Ok("http://boards.test".into())),
        Ok(Some("http://boards.test".to_owned()))
    );
}

#[test]
fn env_value_rejects_non_unicode() {
    let err = env_value("BOARDS_API_BASE_URL", Err(VarError::NotUnicode(OsString::from("x")))).unwrap_err();
    assert_eq!(err, ConfigError::NotUnicode { var: "BOARDS_API_BASE_URL" });
    assert_eq!(err.to_string(), "BOARDS_API_BASE_URL is not valid unicode");
}
