//! Constant values shared by catalog fixtures.

/// Creation timestamp used by fixtures unless a test sets its own.
pub static TEST_CREATED: &str = "2014-12-10T15:36:25.724000Z";

