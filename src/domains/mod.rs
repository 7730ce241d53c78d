//! Domains module containing business logic organized by bounded contexts.
//!
//! - **freelancehunt**: typed client for the Freelancehunt REST API
//! - **tools**: MCP tools exposing the client operations to MCP clients

pub mod freelancehunt;
pub mod tools;
