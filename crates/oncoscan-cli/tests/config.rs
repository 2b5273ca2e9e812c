use oncoscan_cli::commands;
use oncoscan_cli::config::{self, OncoscanConfig};

#[test]
fn missing_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    assert!(!config::has_config(dir.path()));

    let config = config::load_or_default(dir.path()).unwrap();
    assert_eq!(
        config.endpoint,
        "https://tech-frontier-2-3vgy.onrender.com/prediction/cases/add"
    );
    assert!(!config.is_authenticated());
    assert_eq!(config.client_config().timeout, None);
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let config = OncoscanConfig {
        endpoint: "http://localhost:9000/prediction/cases/add".to_string(),
        request_timeout_secs: Some(30),
        session_token: Some("tok_0123456789".to_string()),
        ..OncoscanConfig::default()
    };

    config::save_config(dir.path(), &config).unwrap();
    let loaded = config::load_config(dir.path()).unwrap();
    assert_eq!(loaded, config);
    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(entries, ["config.json"]);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(dir.path().join("config.json"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

#[test]
fn optional_keys_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{
            "endpoint": "http://localhost:9000/add",
            "session_token": "abc",
            "updated_at": "2025-01-01T00:00:00Z"
        }"#,
    )
    .unwrap();

    let config = config::load_config(dir.path()).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.request_timeout_secs, None);
    assert!(config.is_authenticated());
}

#[test]
fn newer_config_version_is_refused() {
    // 4294967296 does not fit in a u32 and must not wrap around to 0.
    for version in ["2", "99", "4294967296", "18446744073709551615"] {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.json"),
            format!(
                r#"{{"config_version": {version}, "endpoint": "x", "updated_at": "2025-01-01T00:00:00Z"}}"#
            ),
        )
        .unwrap();

        let err = config::load_config(dir.path()).unwrap_err();
        assert!(
            err.to_string().contains("newer than this build supports"),
            "version {version}: {err}"
        );
    }
}

#[test]
fn deleting_missing_config_is_fine() {
    let dir = tempfile::tempdir().unwrap();
    config::delete_config(dir.path()).unwrap();
    assert!(!config::has_config(dir.path()));
}

#[test]
fn config_info_redacts_session_token() {
    let long = OncoscanConfig {
        session_token: Some("abcd1234efgh5678".to_string()),
        ..OncoscanConfig::default()
    };
    let info = config::config_info(&long);
    assert!(info.signed_in);
    assert_eq!(info.session_hint.as_deref(), Some("abcd...5678"));

    let short = OncoscanConfig {
        session_token: Some("abc".to_string()),
        ..OncoscanConfig::default()
    };
    assert_eq!(
        config::config_info(&short).session_hint.as_deref(),
        Some("****")
    );
}

#[test]
fn login_and_logout_toggle_session() {
    let dir = tempfile::tempdir().unwrap();

    commands::login(dir.path(), "  session-token-value ".to_string()).unwrap();
    let config = config::load_config(dir.path()).unwrap();
    assert_eq!(config.session_token.as_deref(), Some("session-token-value"));

    commands::logout(dir.path()).unwrap();
    assert!(!config::load_config(dir.path()).unwrap().is_authenticated());

    assert!(commands::login(dir.path(), "   ".to_string()).is_err());
}

#[test]
fn set_config_validates_endpoint_and_timeout() {
    let dir = tempfile::tempdir().unwrap();

    let config = commands::set_config(
        dir.path(),
        Some("http://localhost:9000/prediction/cases/add".to_string()),
        Some(45),
    )
    .unwrap();
    assert_eq!(config.request_timeout_secs, Some(45));

    let cleared = commands::set_config(dir.path(), None, Some(0)).unwrap();
    assert_eq!(cleared.request_timeout_secs, None);
    assert_eq!(cleared.endpoint, "http://localhost:9000/prediction/cases/add");

    assert!(commands::set_config(dir.path(), Some("not a url".to_string()), None).is_err());

    commands::reset_config(dir.path()).unwrap();
    assert!(!config::has_config(dir.path()));
}
