//! Unit tests for error.rs

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_invalid_config_display() {
    let err = Error::InvalidConfig("hex_radius must be positive".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid configuration"));
    assert!(display.contains("hex_radius must be positive"));
}

#[test]
fn test_degenerate_frustum_display() {
    let err = Error::DegenerateFrustum("left plane".to_string());
    assert_eq!(format!("{}", err), "Degenerate frustum: left plane");
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::InvalidConfig("x".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug_and_clone() {
    let err = Error::DegenerateFrustum("far plane".to_string());
    let copy = err.clone();
    assert!(format!("{:?}", copy).contains("DegenerateFrustum"));
    assert_eq!(format!("{}", err), format!("{}", copy));
}

#[test]
fn test_result_question_mark_propagation() {
    fn inner() -> Result<u32> {
        Err(Error::InvalidConfig("level_count".to_string()))
    }

    fn outer() -> Result<u32> {
        let value = inner()?;
        Ok(value + 1)
    }

    assert!(matches!(outer(), Err(Error::InvalidConfig(_))));
}
