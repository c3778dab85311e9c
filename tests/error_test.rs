//! Tests for error types

use fluent_user::Error;

#[test]
fn test_builder_reused_error() {
    let error = Error::BuilderReused { operation: "with_name" };
    let error_str = format!("{error}");
    assert!(error_str.contains("builder already finalized"));
    assert!(error_str.contains("with_name()"));
    assert!(error_str.contains("Create a new UserFluentInterface"));
}

#[test]
fn test_config_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = json_error.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("Config error"));
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let error: Error = io_error.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("IO error"));
    assert!(error_str.contains("pipe closed"));
}

#[test]
fn test_error_debug() {
    let error = Error::BuilderReused { operation: "build" };
    let debug_str = format!("{error:?}");
    assert!(debug_str.contains("BuilderReused"));
    assert!(debug_str.contains("build"));
}

#[test]
fn test_result_type_alias_error() {
    fn returns_error() -> fluent_user::Result<i32> {
        Err(Error::BuilderReused { operation: "build" })
    }

    let result = returns_error();
    assert!(result.is_err());
}
