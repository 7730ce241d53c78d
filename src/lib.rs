//! Freelancehunt MCP Server Library
//!
//! Exposes the Freelancehunt REST API (v2) as Model Context Protocol tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **freelancehunt**: typed API client with request pacing
//!   - **tools**: MCP tool definitions and the dispatch registry
//!
//! # Example
//!
//! ```rust,no_run
//! use freelancehunt_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     config.validate()?;
//!     let transport = TransportService::new(config.transport.clone());
//!     transport.run(McpServer::new(config)).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
