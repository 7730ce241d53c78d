//! Tool-specific error types.

use rmcp::model::{CallToolResult, Content};
use thiserror::Error;

use crate::domains::freelancehunt::ApiError;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A required argument was absent or null.
    #[error("{0} is required")]
    MissingArgument(String),

    /// Arguments did not match the tool's parameter schema.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The Freelancehunt API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The result could not be rendered as JSON.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a new "missing argument" error.
    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgument(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Text shown to the MCP client for this error.
    pub fn payload(&self) -> String {
        match self {
            Self::MissingArgument(_) | Self::InvalidArguments(_) => format!("Error: {self}"),
            Self::Api(err) => format!("FreelanceHunt API Error: {err}"),
            Self::Serialization(err) => format!("Unexpected error: {err}"),
        }
    }

    /// Render as an error tool result.
    pub fn into_result(self) -> CallToolResult {
        CallToolResult::error(vec![Content::text(self.payload())])
    }
}

/// Error tool result carrying `Error: <message>`.
pub fn error_result(message: impl std::fmt::Display) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {message}"))])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument_payload() {
        let err = ToolError::missing_argument("project_id");
        assert_eq!(err.payload(), "Error: project_id is required");
    }

    #[test]
    fn test_invalid_arguments_payload() {
        let err = ToolError::invalid_arguments("unknown field `foo`");
        assert_eq!(err.payload(), "Error: Invalid arguments: unknown field `foo`");
    }

    #[test]
    fn test_api_error_payload() {
        let err = ToolError::from(ApiError::NotFound);
        assert_eq!(err.payload(), "FreelanceHunt API Error: Resource not found.");
    }

    #[test]
    fn test_error_result_is_flagged() {
        let result = ToolError::from(ApiError::RateLimited).into_result();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result.content.len(), 1);
    }
}
