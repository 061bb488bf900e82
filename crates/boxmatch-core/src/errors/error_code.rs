//! ErrorCode trait for the reporting boundary.

/// Every error enum implements this to give the reporting layer a stable
/// machine-readable code alongside the human message.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "INVALID_TITLE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted coded string: `[ERROR_CODE] message`.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_TITLE: &str = "INVALID_TITLE";
pub const INDEX_BUILD_ERROR: &str = "INDEX_BUILD_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
