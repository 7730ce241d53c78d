//! Tools domain module.
//!
//! Tools are the operations MCP clients can call. Each one wraps a single
//! Freelancehunt API endpoint.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handlers.rs` - The `ApiTool` trait and the shared decode/render path
//! - `registry.rs` - Central tool registry and name-based dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add a client accessor in `domains::freelancehunt::client`
//! 2. Create a file in `definitions/` with a params struct and an `ApiTool` impl
//! 3. Export it from `definitions/mod.rs`
//! 4. List it in `ToolRegistry::get_all_tools` and the `call_tool` match

pub mod definitions;
mod error;
mod handlers;
mod registry;

pub use error::{ToolError, error_result};
pub use handlers::{ApiTool, decode_params, invoke};
pub use registry::ToolRegistry;
