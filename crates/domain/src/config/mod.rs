//! Configuration module for rootwalk
//!
//! - `root`: Main configuration and CLI overrides
//! - `resolver`: Root servers, port, timeout and depth bound
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::{ResolverConfig, DEFAULT_ROOT_SERVERS};
pub use root::{CliOverrides, Config};
