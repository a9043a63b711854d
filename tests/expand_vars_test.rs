//! Tests for environment variable expansion of the root directory

use filegen::domain::expand_env_vars;

#[test]
fn given_root_with_dollar_var_when_expanding_then_substitutes() {
    // Arrange
    std::env::set_var("FILEGEN_TEST_OUT", "/srv/out");

    // Act
    let result = expand_env_vars("$FILEGEN_TEST_OUT/p02");

    // Assert
    assert_eq!(result, "/srv/out/p02");

    // Cleanup
    std::env::remove_var("FILEGEN_TEST_OUT");
}

#[test]
fn given_root_with_braced_var_when_expanding_then_substitutes() {
    std::env::set_var("FILEGEN_TEST_DATA", "/var/data");

    let result = expand_env_vars("${FILEGEN_TEST_DATA}/generated");

    assert_eq!(result, "/var/data/generated");

    std::env::remove_var("FILEGEN_TEST_DATA");
}

#[test]
fn given_root_with_tilde_when_expanding_then_uses_home() {
    let home = std::env::var("HOME").expect("HOME should be set");

    let result = expand_env_vars("~/generated");

    assert_eq!(result, format!("{home}/generated"));
}

#[test]
fn given_plain_root_when_expanding_then_unchanged() {
    assert_eq!(expand_env_vars("./out"), "./out");
}
