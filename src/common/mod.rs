/// Shared modules: configuration, constants, errors, logging and startup ordering
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod setup;
