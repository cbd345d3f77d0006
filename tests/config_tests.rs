//! Configuration loading against real files.

use std::io::Write;

use gatewarden::config::Config;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn full_config_loads() {
    let file = write_config(
        r#"
        [identity]
        endpoint = "https://api.mojang.com"
        timeout_secs = 5

        [console]
        host = "mc.example.org"
        port = 25566
        timeout_secs = 5

        [store]
        endpoint = "https://cloud.appwrite.io/v1"
        project_id = "proj"
        database_id = "db"
        collection_id = "applications"

        [logging]
        level = "debug"
        format = "json"
        "#,
    );

    let config = Config::load(file.path()).expect("config should load");
    assert_eq!(config.console.port, 25566);
    assert_eq!(config.identity.timeout_secs, 5);
    assert_eq!(config.logging.format, "json");
}

#[test]
fn missing_store_section_fails() {
    let file = write_config(
        r#"
        [console]
        host = "mc.example.org"
        "#,
    );

    assert!(Config::load(file.path()).is_err());
}

#[test]
fn invalid_endpoint_url_fails() {
    let file = write_config(
        r#"
        [console]
        host = "mc.example.org"

        [store]
        endpoint = "not a url"
        project_id = "proj"
        database_id = "db"
        collection_id = "applications"
        "#,
    );

    assert!(Config::load(file.path()).is_err());
}

#[test]
fn missing_file_fails() {
    assert!(Config::load("/definitely/not/here.toml").is_err());
}
