// MCP (Model Context Protocol) server for Rocketlane.
// Every catalog operation of rocketlane-sdk is exposed as a tool over stdio.

pub mod config;
pub mod protocol;
pub mod server;
pub mod tools;

pub use config::McpConfig;
pub use server::McpServer;
