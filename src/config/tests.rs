use super::*;

#[test]
fn empty_config_uses_defaults() {
    let conf = parse("").unwrap();

    assert_eq!(conf.rawg.base_url, DEFAULT_BASE_URL);
    assert_eq!(conf.api_key(), None);
}

#[test]
fn rawg_table_without_base_url() {
    let conf = parse("[rawg]\napi_key = \"abc123\"\n").unwrap();

    assert_eq!(conf.api_key(), Some("abc123"));
    assert_eq!(conf.rawg.base_url, DEFAULT_BASE_URL);
}

#[test]
fn base_url_override() {
    let conf = parse("[rawg]\nbase_url = \"http://localhost:8080/api\"\n").unwrap();

    assert_eq!(conf.rawg.base_url, "http://localhost:8080/api");
    assert_eq!(conf.api_key(), None);
}

#[test]
fn blank_key_counts_as_missing() {
    let conf = parse("[rawg]\napi_key = \"  \"\n").unwrap();

    assert_eq!(conf.api_key(), None);
}

#[test]
fn bad_toml_is_an_error() {
    assert!(matches!(parse("[rawg\napi_key = 1"), Err(ConfigError::Parse(_))));
}

#[test]
fn env_key_overrides_file() {
    let mut conf = parse("[rawg]\napi_key = \"from-file\"\n").unwrap();

    conf.apply_env_key(Some("from-env".to_string()));

    assert_eq!(conf.api_key(), Some("from-env"));
}

#[test]
fn blank_env_key_is_ignored() {
    let mut conf = parse("[rawg]\napi_key = \"from-file\"\n").unwrap();

    conf.apply_env_key(Some("".to_string()));
    conf.apply_env_key(None);

    assert_eq!(conf.api_key(), Some("from-file"));
}

#[test]
fn missing_file_uses_defaults() {
    let conf = read_file(Path::new("test/does-not-exist.toml")).unwrap();

    assert_eq!(conf.rawg.base_url, DEFAULT_BASE_URL);
}

#[test]
fn read_test_config() {
    let conf = read_file(Path::new("test/test-config.toml")).unwrap();

    assert_eq!(conf.rawg.base_url, "http://127.0.0.1:1/api");
    assert_eq!(conf.api_key(), Some("TEST API KEY"));
}
