// Library root — exposes internals for integration tests.
// The binary entry point is src/main.rs.

pub mod bootstrap;
pub mod core;
pub mod gateway;
pub mod llm;
pub mod prompt;
pub mod server;

pub use crate::core::{config, error};
pub use bootstrap::logger;
