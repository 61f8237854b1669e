//! Command implementations.

pub mod classify;
pub mod config;
pub mod convert;
pub mod gradient;

pub use self::classify::execute_classify;
pub use self::config::execute_config;
pub use self::convert::execute_convert;
pub use self::gradient::execute_gradient;
