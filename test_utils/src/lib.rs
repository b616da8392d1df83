//! Utility helpers for tests.
//!
//! Fixtures for agents in the canonical scenario and float assertions that
//! report both vectors on failure.
pub mod fixtures;

use glam::DVec2;

/// Tolerance used by the vector assertions.
pub const TOLERANCE: f64 = 1e-9;

/// Assert that two vectors agree component-wise within [`TOLERANCE`].
///
/// # Panics
/// Panics with both vectors in the message when they differ.
pub fn assert_vec_close(actual: DVec2, expected: DVec2) {
    assert!(
        (actual - expected).abs().max_element() < TOLERANCE,
        "expected {expected:?}, got {actual:?}"
    );
}

/// Assert that `velocity` has length `speed` and points along `direction`.
///
/// # Panics
/// Panics when the magnitude or the direction differ beyond [`TOLERANCE`].
pub fn assert_heading(velocity: DVec2, direction: DVec2, speed: f64) {
    assert!(
        (velocity.length() - speed).abs() < TOLERANCE,
        "expected speed {speed}, got {} ({velocity:?})",
        velocity.length()
    );
    assert_vec_close(velocity.normalize(), direction.normalize());
}
