//! Tool handler trait and the shared invocation path.
//!
//! Every Freelancehunt tool implements [`ApiTool`]: a name, a description, a
//! typed parameter struct and one async `execute` that calls the client and
//! reshapes its answer. [`invoke`] is the single place where raw MCP arguments
//! are decoded and results (or errors) are rendered into a text payload.

use async_trait::async_trait;
use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use super::error::ToolError;
use crate::domains::freelancehunt::FreelancehuntClient;

/// A tool backed by one Freelancehunt API call.
#[async_trait]
pub trait ApiTool {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Typed arguments; their JSON schema is advertised to clients.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Reject argument values the schema rules out but serde accepts.
    fn validate(_params: &Self::Params) -> Result<(), ToolError> {
        Ok(())
    }

    /// Run the tool and return the JSON value to show to the client.
    async fn execute(
        client: &FreelancehuntClient,
        params: Self::Params,
    ) -> Result<Value, ToolError>;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// Decode raw arguments into `T::Params`, run the tool and render the result.
pub async fn invoke<T: ApiTool>(
    client: &FreelancehuntClient,
    arguments: Option<JsonObject>,
) -> CallToolResult {
    info!("Calling tool: {}", T::NAME);

    match run::<T>(client, arguments).await {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(err) => {
            warn!("Tool {} failed: {}", T::NAME, err);
            err.into_result()
        }
    }
}

async fn run<T: ApiTool>(
    client: &FreelancehuntClient,
    arguments: Option<JsonObject>,
) -> Result<String, ToolError> {
    let params = decode_params::<T::Params>(arguments)?;
    T::validate(&params)?;
    let value = T::execute(client, params).await?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Decode tool arguments. `null` values are treated as absent.
pub fn decode_params<P: DeserializeOwned>(arguments: Option<JsonObject>) -> Result<P, ToolError> {
    let mut arguments = arguments.unwrap_or_default();
    arguments.retain(|_, value| !value.is_null());

    serde_json::from_value(Value::Object(arguments)).map_err(|e| {
        let message = e.to_string();
        match missing_field(&message) {
            Some(field) => ToolError::missing_argument(field),
            None => ToolError::invalid_arguments(message),
        }
    })
}

fn missing_field(message: &str) -> Option<&str> {
    message.strip_prefix("missing field `")?.split('`').next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Sample {
        id: u64,
        #[serde(default)]
        flag: Option<bool>,
    }

    fn args(value: Value) -> Option<JsonObject> {
        value.as_object().cloned()
    }

    #[test]
    fn test_decode_params() {
        let params: Sample = decode_params(args(json!({ "id": 7, "flag": true }))).unwrap();
        assert_eq!(params.id, 7);
        assert_eq!(params.flag, Some(true));
    }

    #[test]
    fn test_null_counts_as_absent() {
        let params: Sample = decode_params(args(json!({ "id": 7, "flag": null }))).unwrap();
        assert_eq!(params.flag, None);

        let err = decode_params::<Sample>(args(json!({ "id": null }))).unwrap_err();
        assert!(matches!(err, ToolError::MissingArgument(ref f) if f == "id"));
    }

    #[test]
    fn test_missing_arguments_object() {
        let err = decode_params::<Sample>(None).unwrap_err();
        assert_eq!(err.payload(), "Error: id is required");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = decode_params::<Sample>(args(json!({ "id": 1, "extra": 2 }))).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(err.payload().starts_with("Error: Invalid arguments:"));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let err = decode_params::<Sample>(args(json!({ "id": "seven" }))).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_missing_field_parsing() {
        assert_eq!(missing_field("missing field `project_id`"), Some("project_id"));
        assert_eq!(missing_field("invalid type: string"), None);
    }
}
