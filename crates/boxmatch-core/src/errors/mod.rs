//! Error handling for boxmatch.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod index_error;
pub mod match_error;
pub mod title_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use index_error::IndexError;
pub use match_error::MatchError;
pub use title_error::TitleError;
