// Frameworks layer: CLI configuration and server bootstrap.

pub mod config;
pub mod server;
