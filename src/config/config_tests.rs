use super::*;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use tempfile::TempDir;

fn jwt(claims: &str) -> String {
    format!(
        "eyJhbGciOiJSUzI1NiJ9.{}.c2lnbmF0dXJl",
        URL_SAFE_NO_PAD.encode(claims)
    )
}

fn write_config(contents: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, contents).unwrap();
    (path, temp_dir)
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = CliConfig::load_from(&temp_dir.path().join("config.toml")).unwrap();

    assert_eq!(config, CliConfig::default());
    assert!(config.target().is_empty());
    assert!(!config.has_targeted_organization());
    assert!(!config.has_targeted_space());
    assert_eq!(config.binary_name(), "cf");
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
}

#[test]
fn test_load_targeted_session() {
    let (path, _temp) = write_config(
        r#"
target = "https://api.example.com"
access_token = "bearer some-token"
refresh_token = "some-refresh-token"
request_timeout = 10

[organization_fields]
guid = "some-org-guid"
name = "some-org"

[space_fields]
guid = "some-space-guid"
name = "some-space"
"#,
    );

    let config = CliConfig::load_from(&path).unwrap().with_binary_name("faceman");

    assert_eq!(config.target(), "https://api.example.com");
    assert_eq!(config.access_token(), "bearer some-token");
    assert_eq!(config.refresh_token(), "some-refresh-token");
    assert_eq!(config.request_timeout(), Duration::from_secs(10));
    assert_eq!(config.targeted_organization().name, "some-org");
    assert_eq!(config.targeted_space().guid, "some-space-guid");
    assert!(config.has_targeted_organization());
    assert!(config.has_targeted_space());
    assert_eq!(config.binary_name(), "faceman");
}

#[test]
fn test_org_without_space() {
    let (path, _temp) = write_config(
        r#"
target = "https://api.example.com"
access_token = "bearer some-token"

[organization_fields]
guid = "some-org-guid"
name = "some-org"
"#,
    );

    let config = CliConfig::load_from(&path).unwrap();

    assert!(config.has_targeted_organization());
    assert!(!config.has_targeted_space());
}

#[test]
fn test_malformed_file_names_path() {
    let (path, _temp) = write_config("target = [unterminated");

    let err = CliConfig::load_from(&path).unwrap_err();

    assert!(err.to_string().contains("Failed to parse config file"));
    assert!(err.to_string().contains(&path.display().to_string()));
}

#[test]
fn test_current_user_from_user_token() {
    let config = CliConfig {
        access_token: format!("bearer {}", jwt(r#"{"user_name":"some-user","user_id":"abc"}"#)),
        ..Default::default()
    };

    let user = config.current_user().unwrap();
    assert_eq!(user.name, "some-user");
}

#[test]
fn test_current_user_from_client_credentials_token() {
    let user = user_from_access_token(&jwt(r#"{"client_id":"some-client"}"#)).unwrap();
    assert_eq!(user.name, "some-client");
}

#[test]
fn test_current_user_prefers_user_name() {
    let user =
        user_from_access_token(&jwt(r#"{"user_name":"some-user","client_id":"cf"}"#)).unwrap();
    assert_eq!(user.name, "some-user");
}

#[test]
fn test_current_user_rejects_garbage() {
    assert!(user_from_access_token("").is_err());
    assert!(user_from_access_token("bearer not-a-jwt").is_err());
    assert!(user_from_access_token(&jwt(r#"{"scope":["openid"]}"#)).is_err());
}
