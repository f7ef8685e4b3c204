use super::*;
use serial_test::serial;

#[test]
#[serial]
fn test_get_existing_var() {
    std::env::set_var("NOTECAT_TEST_ENV_VAR", "catalog.toml");
    assert_eq!(
        EnvVar::get("NOTECAT_TEST_ENV_VAR"),
        Some("catalog.toml".to_string())
    );
    assert!(EnvVar::is_set("NOTECAT_TEST_ENV_VAR"));
    std::env::remove_var("NOTECAT_TEST_ENV_VAR");
}

#[test]
#[serial]
fn test_get_blank_var() {
    std::env::set_var("NOTECAT_TEST_BLANK_VAR", "  ");
    assert_eq!(EnvVar::get("NOTECAT_TEST_BLANK_VAR"), None);
    std::env::remove_var("NOTECAT_TEST_BLANK_VAR");
}

#[test]
fn test_get_nonexistent_var() {
    assert_eq!(EnvVar::get("NOTECAT_NONEXISTENT_VAR_12345"), None);
    assert!(!EnvVar::is_set("NOTECAT_NONEXISTENT_VAR_12345"));
}
